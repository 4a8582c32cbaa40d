//! Shipment record model.
//!
//! All monetary fields are kept as strings exactly as they appear in the
//! source document, preserving thousands separators. Converting to a
//! numeric type happens only where a comparison is needed, never in the
//! output.

use serde::{Deserialize, Serialize};

/// One shipment recovered from an invoice text dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// Shipment id from the header line.
    pub shipment: String,

    /// Ship date (DD/MM/YYYY), verbatim.
    pub ship_date: String,

    /// Service description.
    pub service: String,

    /// Piece count.
    pub pieces: String,

    /// Weight including the unit (e.g. "5.50 kg").
    pub weight: String,

    /// Customer reference code.
    pub reference: String,

    /// Freight amount from the header.
    pub freight: String,

    /// Other-charges amount from the header.
    pub other_charges: String,

    /// Total amount from the header.
    pub total: String,

    /// Package dimensions (e.g. "30x20x10 cm").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dims: Option<String>,

    /// Billed weight including the unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_weight: Option<String>,

    /// Itemized charges recovered from the charges table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<Charges>,

    /// Top-level copy of the transportation charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportation_charge: Option<String>,

    /// Top-level copy of the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    /// Top-level copy of the fuel surcharge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_surcharge: Option<String>,

    /// Tender date (DD/MM/YYYY), verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tendered_date: Option<String>,

    /// INR subtotal printed next to the tender date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_inr: Option<String>,
}

impl ShipmentRecord {
    /// Create a record from the nine required header fields.
    pub fn from_header(
        shipment: impl Into<String>,
        ship_date: impl Into<String>,
        service: impl Into<String>,
        pieces: impl Into<String>,
        weight: impl Into<String>,
        reference: impl Into<String>,
        freight: impl Into<String>,
        other_charges: impl Into<String>,
        total: impl Into<String>,
    ) -> Self {
        Self {
            shipment: shipment.into(),
            ship_date: ship_date.into(),
            service: service.into(),
            pieces: pieces.into(),
            weight: weight.into(),
            reference: reference.into(),
            freight: freight.into(),
            other_charges: other_charges.into(),
            total: total.into(),
            dims: None,
            billed_weight: None,
            charges: None,
            transportation_charge: None,
            discount: None,
            fuel_surcharge: None,
            tendered_date: None,
            subtotal_inr: None,
        }
    }
}

/// Itemized charges from the charges table of one shipment block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportation_charge: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_surcharge: Option<String>,
}

impl Charges {
    /// True when no charge was recovered at all.
    pub fn is_empty(&self) -> bool {
        self.transportation_charge.is_none()
            && self.discount.is_none()
            && self.fuel_surcharge.is_none()
    }
}

/// List the distinct reference codes across records, sorted.
pub fn references(records: &[ShipmentRecord]) -> Vec<String> {
    let mut refs: Vec<String> = records.iter().map(|r| r.reference.clone()).collect();
    refs.sort();
    refs.dedup();
    refs
}

/// Return every record whose reference code equals `reference`.
///
/// Duplicate references are a real condition in the source documents, so
/// all matches are returned rather than collapsing to the first.
pub fn find_by_reference<'a>(
    records: &'a [ShipmentRecord],
    reference: &str,
) -> Vec<&'a ShipmentRecord> {
    records.iter().filter(|r| r.reference == reference).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(shipment: &str, reference: &str) -> ShipmentRecord {
        ShipmentRecord::from_header(
            shipment, "01/03/2024", "Priority", "1", "2.00 kg", reference, "100.00", "10.00",
            "110.00",
        )
    }

    #[test]
    fn test_references_sorted_distinct() {
        let records = vec![
            record("1003", "REF9"),
            record("1001", "REF1"),
            record("1002", "REF9"),
        ];
        assert_eq!(references(&records), vec!["REF1", "REF9"]);
    }

    #[test]
    fn test_find_by_reference_surfaces_duplicates() {
        let records = vec![
            record("1001", "REF1"),
            record("1002", "REF9"),
            record("1003", "REF9"),
        ];
        let matches = find_by_reference(&records, "REF9");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].shipment, "1002");
        assert_eq!(matches[1].shipment, "1003");

        assert!(find_by_reference(&records, "MISSING").is_empty());
    }

    #[test]
    fn test_optional_fields_absent_from_json() {
        let json = serde_json::to_string(&record("1001", "REF1")).unwrap();
        assert!(!json.contains("dims"));
        assert!(!json.contains("charges"));
        assert!(!json.contains("tendered_date"));
    }
}
