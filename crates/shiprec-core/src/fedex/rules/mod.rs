//! Rule-based amount resolution for charge fields.

pub mod labels;
pub mod patterns;
pub mod tokens;

pub use labels::{NEAR_WINDOW, nearest_leading, same_line_after, same_line_before, windowed_near};
pub use tokens::{EXCLUSION_WINDOW, NumericToken, leading_amount, scan_amounts};

/// One strategy for resolving a named charge to an amount token.
///
/// Strategies share a single signature so the field resolver can try them
/// as an ordered chain, stopping at the first success. `None` is a normal
/// outcome, not an error: the document may simply not print that charge.
pub trait AmountResolver: Send + Sync {
    fn resolve(&self, span: &str, label: &str) -> Option<String>;
}

/// Same-line resolution: last token before the label, else first after it.
pub struct LabelLineResolver;

impl AmountResolver for LabelLineResolver {
    fn resolve(&self, span: &str, label: &str) -> Option<String> {
        labels::same_line_before(span, label)
            .or_else(|| labels::same_line_after(span, label))
            .map(|t| t.text)
    }
}

/// Single-line `<label> ... <amount>` / `<amount> ... <label>` rules.
///
/// Matches independently of the line-oriented finder, with a looser amount
/// shape. Candidates in a disqualifying context are skipped, not selected.
pub struct PatternResolver;

impl AmountResolver for PatternResolver {
    fn resolve(&self, span: &str, label: &str) -> Option<String> {
        let (after, before) = patterns::line_rules(label)?;
        for rule in [after, before] {
            for caps in rule.captures_iter(span) {
                let Some(m) = caps.get(1) else { continue };
                if !tokens::disqualified(span, m.start(), m.end()) {
                    return Some(m.as_str().to_string());
                }
            }
        }
        None
    }
}

/// Windowed fallback: any token within a few lines of the label, largest
/// absolute value wins.
pub struct WindowedResolver {
    window: usize,
}

impl WindowedResolver {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Default for WindowedResolver {
    fn default() -> Self {
        Self::new(NEAR_WINDOW)
    }
}

impl AmountResolver for WindowedResolver {
    fn resolve(&self, span: &str, label: &str) -> Option<String> {
        labels::windowed_near(span, label, self.window).map(|t| t.text)
    }
}

/// The fixed strategy order for charge fields.
pub fn default_resolvers() -> Vec<Box<dyn AmountResolver>> {
    vec![
        Box::new(LabelLineResolver),
        Box::new(PatternResolver),
        Box::new(WindowedResolver::default()),
    ]
}

/// Resolve one field by trying each strategy in order.
pub fn resolve_amount(
    resolvers: &[Box<dyn AmountResolver>],
    span: &str,
    label: &str,
) -> Option<String> {
    resolvers.iter().find_map(|r| r.resolve(span, label))
}
