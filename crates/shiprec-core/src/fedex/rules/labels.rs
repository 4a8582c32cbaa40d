//! Label-anchored candidate finding.
//!
//! Each strategy anchors on the first line containing the label
//! (case-insensitive substring match) and collects amount tokens from a
//! different neighborhood. Later occurrences of the label are ignored.

use super::tokens::{NumericToken, leading_amount, scan_amounts};

/// Lines inspected on each side of the label line by the windowed search.
pub const NEAR_WINDOW: usize = 3;

/// First line containing the label, with the label's offset in that line.
fn label_position(lines: &[&str], label: &str) -> Option<(usize, usize)> {
    let needle = label.to_lowercase();
    for (idx, line) in lines.iter().enumerate() {
        if let Some(pos) = line.to_lowercase().find(&needle) {
            return Some((idx, pos));
        }
    }
    None
}

/// Nearest token strictly before the label on the label's own line.
///
/// Right-aligned tables print the amount column left of the label, so
/// among several preceding tokens the one immediately before the label
/// wins.
pub fn same_line_before(span: &str, label: &str) -> Option<NumericToken> {
    let lines: Vec<&str> = span.lines().collect();
    let (idx, pos) = label_position(&lines, label)?;
    scan_amounts(lines[idx])
        .into_iter()
        .filter(|t| t.start < pos)
        .max_by_key(|t| t.start)
}

/// First token after the label on the label's own line.
pub fn same_line_after(span: &str, label: &str) -> Option<NumericToken> {
    let lines: Vec<&str> = span.lines().collect();
    let (idx, pos) = label_position(&lines, label)?;
    let label_end = pos + label.len();
    scan_amounts(lines[idx])
        .into_iter()
        .find(|t| t.start >= label_end)
}

/// Largest-|value| token on the label line or within `window` lines of it.
///
/// Heuristic: when the table layout places amounts on a separate line,
/// smaller numbers near the label (rates, counts) are more likely to be
/// spurious than the charge amount itself, so ties go to magnitude. Among
/// equal magnitudes the earliest candidate wins (same line first, then
/// following lines, then preceding lines).
pub fn windowed_near(span: &str, label: &str, window: usize) -> Option<NumericToken> {
    let lines: Vec<&str> = span.lines().collect();
    let (idx, _) = label_position(&lines, label)?;

    let mut candidates = scan_amounts(lines[idx]);
    for j in 1..=window {
        if let Some(line) = lines.get(idx + j) {
            candidates.extend(scan_amounts(line));
        }
    }
    for j in 1..=window {
        if idx >= j {
            candidates.extend(scan_amounts(lines[idx - j]));
        }
    }

    let mut best: Option<NumericToken> = None;
    for token in candidates {
        let Some(abs) = token.abs_value() else { continue };
        match &best {
            Some(b) if b.abs_value().is_some_and(|ba| ba >= abs) => {}
            _ => best = Some(token),
        }
    }
    best
}

/// Nearest line starting with an amount, searching previous lines first
/// (closest first), then following lines.
///
/// Narrower windowed variant: a token counts only when it is the first
/// thing on its line, which avoids incidental numbers embedded mid-line.
pub fn nearest_leading(span: &str, label: &str, window: usize) -> Option<NumericToken> {
    let lines: Vec<&str> = span.lines().collect();
    let (idx, _) = label_position(&lines, label)?;

    for j in 1..=window {
        if idx >= j {
            if let Some(token) = leading_amount(lines[idx - j]) {
                return Some(token);
            }
        }
    }
    for j in 1..=window {
        if let Some(line) = lines.get(idx + j) {
            if let Some(token) = leading_amount(line) {
                return Some(token);
            }
        }
    }
    None
}
