//! Sub-span isolation within one shipment block.

use super::rules::patterns::TENDER_SUBTOTAL;

/// End markers for the charges table, lowercase.
const SECTION_END_MARKERS: [&str; 3] = ["signed", "tendered date", "subtotal inr"];

/// Isolate the sub-span of a block likely to contain the charges table.
///
/// Runs from the first occurrence of "Charges" to the earliest of
/// "Signed", "Tendered Date" or "Subtotal INR"; the end-marker search
/// starts just past the matched word so "Charges" cannot terminate its
/// own section. Degrades gracefully: no "Charges" returns the whole
/// block, no end marker extends the section to the block end.
pub fn charges_section(block: &str) -> &str {
    let lower = block.to_lowercase();
    let Some(start) = lower.find("charges") else {
        return block;
    };

    let end = SECTION_END_MARKERS
        .iter()
        .filter_map(|marker| lower[start + "charges".len()..].find(marker))
        .min()
        .map(|rel| rel + start + "charges".len());

    match end {
        Some(end) if end > start => block.get(start..end).unwrap_or(block),
        _ => block.get(start..).unwrap_or(block),
    }
}

/// Tender date and INR subtotal from a settlement footer, if present.
pub fn tender_subtotal(block: &str) -> Option<(String, String)> {
    let caps = TENDER_SUBTOTAL.captures(block)?;
    Some((
        caps["tendered_date"].to_string(),
        caps["subtotal"].to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_ends_at_signed() {
        let block = "header\nCharges\nTransportation Charge 100.00\nSigned: X\n999.00";
        let section = charges_section(block);
        assert_eq!(section, "Charges\nTransportation Charge 100.00\n");
    }

    #[test]
    fn test_section_ends_at_earliest_marker() {
        let block = "Charges\n100.00\nTendered Date: 05/03/2024\nSigned: X";
        assert_eq!(charges_section(block), "Charges\n100.00\n");
    }

    #[test]
    fn test_section_without_end_marker_runs_to_block_end() {
        let block = "intro\nCharges\n100.00\n200.00";
        assert_eq!(charges_section(block), "Charges\n100.00\n200.00");
    }

    #[test]
    fn test_missing_charges_returns_whole_block() {
        let block = "nothing interesting\n100.00";
        assert_eq!(charges_section(block), block);
    }

    #[test]
    fn test_section_starts_at_the_marker_word_itself() {
        // The section begins at "Charges" even mid-phrase, and its own
        // matched text does not terminate it.
        let block = "Other Charges\n210.00\nSubtotal INR 18,063.00";
        assert_eq!(charges_section(block), "Charges\n210.00\n");
    }

    #[test]
    fn test_tender_subtotal_multiline() {
        let block = "Charges 100.00\nTendered Date: 05/03/2024 Signed\nmore\nSubtotal INR 18,063.00";
        let (date, subtotal) = tender_subtotal(block).unwrap();
        assert_eq!(date, "05/03/2024");
        assert_eq!(subtotal, "18,063.00");
    }

    #[test]
    fn test_tender_subtotal_absent() {
        assert!(tender_subtotal("Charges 100.00").is_none());
    }
}
