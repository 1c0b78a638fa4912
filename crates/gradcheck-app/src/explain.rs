//! The `explain` use case: look up satisfaction strategy documentation.

use gradcheck_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the known strategy IDs.
    NotFound {
        identifier: String,
        available_strategies: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_strategies: explain::all_strategy_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Example requirement\n");
    out.push_str("-------------------\n\n");
    out.push_str("```json\n");
    out.push_str(exp.requirement);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("Recorded as: ");
    out.push_str(exp.recorded_as);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, strategies: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown strategy: {}\n\n", identifier));
    out.push_str("Available strategies:\n");
    for id in strategies {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_strategy() {
        let output = run_explain("prefix_match");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown() {
        match run_explain("not_a_real_thing") {
            ExplainOutput::NotFound {
                identifier,
                available_strategies,
            } => {
                assert_eq!(identifier, "not_a_real_thing");
                assert_eq!(available_strategies.len(), 4);
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_explanation_output() {
        let ExplainOutput::Found(exp) = run_explain("explicit_options") else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with("Explicit Options\n================\n"));
        assert!(formatted.contains("```json"));
        assert!(formatted.contains("Recorded as: First-Year Writing I"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["explicit_options", "prefix_match"]);
        assert!(formatted.contains("Unknown strategy: missing"));
        assert!(formatted.contains("  - explicit_options\n"));
        assert!(formatted.contains("  - prefix_match\n"));
    }
}
