//! Field recovery for FedEx-format invoice text dumps.
//!
//! Input is the concatenated text of all pages of one invoice, produced
//! by direct extraction or OCR upstream. The engine segments the blob
//! into per-shipment blocks, isolates each block's charges table, and
//! resolves the named charge fields through a layered strategy chain.

mod parser;
pub mod rules;
mod sections;

pub use parser::FedexInvoiceParser;
pub use sections::{charges_section, tender_subtotal};
