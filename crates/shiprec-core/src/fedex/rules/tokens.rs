//! Numeric token scanning with contextual exclusion.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{AMOUNT, LEADING_AMOUNT};

/// Characters of context inspected on each side of a token.
pub const EXCLUSION_WINDOW: usize = 3;

/// A currency-looking substring with its position in the source span.
///
/// Positions are byte offsets into the span the token was scanned from,
/// kept for proximity reasoning and tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericToken {
    /// The matched text, formatting preserved.
    pub text: String,
    /// Start offset within the source span.
    pub start: usize,
    /// End offset within the source span.
    pub end: usize,
}

impl NumericToken {
    /// Numeric interpretation of the token (separators stripped).
    pub fn value(&self) -> Option<Decimal> {
        Decimal::from_str(&self.text.replace(',', "")).ok()
    }

    /// Absolute numeric value, used by the windowed tie-break.
    pub fn abs_value(&self) -> Option<Decimal> {
        self.value().map(|v| v.abs())
    }
}

/// Scan a span for amount tokens, dropping any in a disqualifying context.
///
/// A token is excluded when the 3 characters before or after it contain a
/// percent sign (a rate, not an amount) or the substring "kg" in any case
/// (a weight, not an amount). No magnitude filtering happens here.
pub fn scan_amounts(span: &str) -> Vec<NumericToken> {
    AMOUNT
        .find_iter(span)
        .filter(|m| !disqualified(span, m.start(), m.end()))
        .map(|m| NumericToken {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// The leading amount of a line, if the line starts with one.
///
/// Stricter variant of the scan: only a token preceded by nothing but
/// whitespace qualifies. The same contextual exclusion applies.
pub fn leading_amount(line: &str) -> Option<NumericToken> {
    let caps = LEADING_AMOUNT.captures(line)?;
    let m = caps.get(1)?;
    if disqualified(line, m.start(), m.end()) {
        return None;
    }
    Some(NumericToken {
        text: m.as_str().to_string(),
        start: m.start(),
        end: m.end(),
    })
}

/// Whether the token at `start..end` sits in a disqualifying context.
pub fn disqualified(span: &str, start: usize, end: usize) -> bool {
    let head: String = span[..start]
        .chars()
        .rev()
        .take(EXCLUSION_WINDOW)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let tail: String = span[end..].chars().take(EXCLUSION_WINDOW).collect();

    head.contains('%')
        || tail.contains('%')
        || head.to_lowercase().contains("kg")
        || tail.to_lowercase().contains("kg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_collects_positions() {
        let tokens = scan_amounts("100.00 and 17,853.00");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "100.00");
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[1].text, "17,853.00");
        assert_eq!(&"100.00 and 17,853.00"[tokens[1].start..tokens[1].end], "17,853.00");
    }

    #[test]
    fn test_percent_context_excluded() {
        assert!(scan_amounts("rate 16.5% applied").is_empty());
        assert!(scan_amounts("rate 16.5 % applied").is_empty());
        // Percent further than 3 chars away does not disqualify
        assert_eq!(scan_amounts("16.50 tax %").len(), 1);
    }

    #[test]
    fn test_weight_context_excluded() {
        assert!(scan_amounts("weight 5.50 kg total").is_empty());
        assert!(scan_amounts("weight 5.50KG total").is_empty());
        assert_eq!(scan_amounts("5.50 package").len(), 1);
    }

    #[test]
    fn test_value_strips_separators() {
        let tokens = scan_amounts("-17,853.00");
        assert_eq!(
            tokens[0].value(),
            Some(Decimal::from_str("-17853.00").unwrap())
        );
        assert_eq!(
            tokens[0].abs_value(),
            Some(Decimal::from_str("17853.00").unwrap())
        );
    }

    #[test]
    fn test_leading_amount() {
        assert_eq!(leading_amount("  210.00 Fuel Surcharge").unwrap().text, "210.00");
        assert!(leading_amount("Fuel Surcharge 210.00").is_none());
        // Exclusion applies to the strict variant too
        assert!(leading_amount("  16.5% of base").is_none());
        assert!(leading_amount("  5.50 kg billed").is_none());
    }
}
