//! Fixed regex patterns for FedEx invoice dumps.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Shipment header line: id, ship date, service, pieces, weight,
    // reference, then freight / other charges / total in fixed order.
    pub static ref HEADER: Regex = Regex::new(
        r"(?m)^(?P<shipment>\d+)\s+(?P<ship_date>\d{2}/\d{2}/\d{4})\s+(?P<service>.+?)\s+(?P<pieces>\d+)\s+(?P<weight>\d+(?:\.\d+)?\s*kg)\s+(?P<reference>\S+)\s+(?P<freight>[\d,]+\.\d+)\s+(?P<other_charges>[\d,]+\.\d+)\s+(?P<total>[\d,]+\.\d+)"
    ).unwrap();

    pub static ref DIMS_LINE: Regex = Regex::new(
        r"Dims:\s*(?P<dims>.+?)\s+Billed Weight:\s*(?P<billed_weight>[\d.]+\s*kg)"
    ).unwrap();

    // Settlement footer: tender date and INR subtotal, one contiguous
    // match that may span line breaks.
    pub static ref TENDER_SUBTOTAL: Regex = Regex::new(
        r"(?s)Tendered Date:\s*(?P<tendered_date>\d{2}/\d{2}/\d{4}).*?Subtotal INR\s*(?P<subtotal>[\d,]+\.\d+)"
    ).unwrap();

    /// A currency-looking token: signed, optional thousands separators,
    /// mandatory fractional part.
    pub static ref AMOUNT: Regex = Regex::new(r"-?[\d,]+\.\d+").unwrap();

    /// An amount as the first thing on a line (leading whitespace allowed).
    pub static ref LEADING_AMOUNT: Regex = Regex::new(r"^\s*(-?[\d,]+\.\d+)").unwrap();

    // Single-line label rules. The amount pattern here is looser than
    // AMOUNT: the fractional part is optional.
    pub static ref TRANSPORT_AFTER: Regex = Regex::new(
        r"(?i)Transportation\s+Charge[^\d\n]*(-?[\d,]+(?:\.\d+)?)"
    ).unwrap();
    pub static ref TRANSPORT_BEFORE: Regex = Regex::new(
        r"(?i)(-?[\d,]+(?:\.\d+)?)[^\n]*Transportation\s+Charge"
    ).unwrap();
    pub static ref DISCOUNT_AFTER: Regex = Regex::new(
        r"(?i)Discount[^\d\n]*(-?[\d,]+(?:\.\d+)?)"
    ).unwrap();
    pub static ref DISCOUNT_BEFORE: Regex = Regex::new(
        r"(?i)(-?[\d,]+(?:\.\d+)?)[^\n]*Discount"
    ).unwrap();
    pub static ref FUEL_AFTER: Regex = Regex::new(
        r"(?i)Fuel\s+Surcharge[^\d\n]*(-?[\d,]+(?:\.\d+)?)"
    ).unwrap();
    pub static ref FUEL_BEFORE: Regex = Regex::new(
        r"(?i)(-?[\d,]+(?:\.\d+)?)[^\n]*Fuel\s+Surcharge"
    ).unwrap();
}

/// Single-line (after, before) rules for a known charge label.
pub fn line_rules(label: &str) -> Option<(&'static Regex, &'static Regex)> {
    match label.to_lowercase().as_str() {
        "transportation charge" => Some((&TRANSPORT_AFTER, &TRANSPORT_BEFORE)),
        "discount" => Some((&DISCOUNT_AFTER, &DISCOUNT_BEFORE)),
        "fuel surcharge" => Some((&FUEL_AFTER, &FUEL_BEFORE)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_matches_fixed_field_order() {
        let line = "1001 01/03/2024 Priority 2 5.50 kg REF123 17,853.00 210.00 18,063.00";
        let caps = HEADER.captures(line).unwrap();
        assert_eq!(&caps["shipment"], "1001");
        assert_eq!(&caps["ship_date"], "01/03/2024");
        assert_eq!(&caps["service"], "Priority");
        assert_eq!(&caps["pieces"], "2");
        assert_eq!(&caps["weight"], "5.50 kg");
        assert_eq!(&caps["reference"], "REF123");
        assert_eq!(&caps["freight"], "17,853.00");
        assert_eq!(&caps["other_charges"], "210.00");
        assert_eq!(&caps["total"], "18,063.00");
    }

    #[test]
    fn test_header_requires_line_start() {
        let text = "prefix 1001 01/03/2024 Priority 2 5.50 kg REF123 1.00 2.00 3.00";
        assert!(HEADER.captures(text).is_none());
    }

    #[test]
    fn test_dims_line() {
        let caps = DIMS_LINE
            .captures("Dims: 30x20x10 cm  Billed Weight: 6.00 kg")
            .unwrap();
        assert_eq!(&caps["dims"], "30x20x10 cm");
        assert_eq!(&caps["billed_weight"], "6.00 kg");
    }

    #[test]
    fn test_tender_subtotal_spans_lines() {
        let caps = TENDER_SUBTOTAL
            .captures("Tendered Date: 05/03/2024\nsome trailing text\nSubtotal INR 18,063.00")
            .unwrap();
        assert_eq!(&caps["tendered_date"], "05/03/2024");
        assert_eq!(&caps["subtotal"], "18,063.00");
    }

    #[test]
    fn test_line_rules_known_labels() {
        assert!(line_rules("Transportation Charge").is_some());
        assert!(line_rules("fuel surcharge").is_some());
        assert!(line_rules("Handling Fee").is_none());
    }
}
