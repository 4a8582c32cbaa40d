//! Second-carrier (UPS) invoice parsing.
//!
//! Not implemented. The UPS layout differs enough from the FedEx one
//! that none of the recovery rules carry over; until a real parser
//! exists this stub returns empty results and explicit unsupported
//! errors so callers can surface the condition.

use serde_json::Value;

use crate::error::LookupError;

const CARRIER: &str = "UPS";

/// Placeholder parser for UPS-format invoice dumps.
pub struct UpsInvoiceParser;

impl UpsInvoiceParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse shipment records. Always empty.
    pub fn parse(&self, _text: &str) -> Vec<Value> {
        Vec::new()
    }

    /// Parse the invoice summary. Always empty.
    pub fn summary(&self, _text: &str) -> Value {
        Value::Object(Default::default())
    }

    /// Look up a shipment by tracking number.
    pub fn by_tracking(&self, _text: &str, _tracking: &str) -> Result<Value, LookupError> {
        Err(LookupError::CarrierUnsupported(CARRIER))
    }

    /// Look up a shipment by reference pair.
    pub fn by_reference(
        &self,
        _text: &str,
        _ref2: &str,
        _ref1: Option<&str>,
    ) -> Result<Value, LookupError> {
        Err(LookupError::CarrierUnsupported(CARRIER))
    }
}

impl Default for UpsInvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_returns_empty_results() {
        let parser = UpsInvoiceParser::new();
        assert!(parser.parse("any text").is_empty());
        assert_eq!(parser.summary("any text"), serde_json::json!({}));
    }

    #[test]
    fn test_lookups_are_unsupported() {
        let parser = UpsInvoiceParser::new();
        assert!(matches!(
            parser.by_tracking("", "1Z999"),
            Err(LookupError::CarrierUnsupported("UPS"))
        ));
        assert!(matches!(
            parser.by_reference("", "R2", None),
            Err(LookupError::CarrierUnsupported("UPS"))
        ));
    }
}
