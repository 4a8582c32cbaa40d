//! Data models for recovered invoice records.

pub mod record;

pub use record::{Charges, ShipmentRecord, find_by_reference, references};
