//! Core library for carrier invoice recovery.
//!
//! This crate provides:
//! - PDF embedded-text extraction (the engine's input boundary)
//! - FedEx invoice field recovery (block segmentation, charges-section
//!   isolation, layered amount resolution)
//! - Shipment record models and reference lookups
//! - A stub for the UPS invoice format

pub mod error;
pub mod fedex;
pub mod models;
pub mod pdf;
pub mod ups;

pub use error::{LookupError, PdfError, Result, ShiprecError};
pub use fedex::FedexInvoiceParser;
pub use models::record::{Charges, ShipmentRecord, find_by_reference, references};
pub use pdf::{PdfExtractor, PdfProcessor, PdfType};
pub use ups::UpsInvoiceParser;
