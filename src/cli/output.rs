/// Result rendering for the command line
use crate::core::search::SearchOutcome;
use colored::*;
use std::fmt::Write;

/// Plain-text report; the first line is always `Smallest value of k: <k>`.
pub fn render_text(outcome: &SearchOutcome) -> String {
    let mut out = format!("Smallest value of k: {}\n", outcome.k);

    for (i, step) in outcome.steps.iter().enumerate() {
        let prefix = if i + 1 == outcome.steps.len() { "└─" } else { "├─" };
        let _ = writeln!(
            out,
            "{} k={}: {} k-mers, {} successors, {} ambiguous",
            prefix.dimmed(),
            step.k,
            step.kmers,
            step.pairs,
            step.ambiguous
        );
    }

    out
}

pub fn render_json(outcome: &SearchOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::SearchStep;

    fn outcome(steps: Vec<SearchStep>, degenerate: bool) -> SearchOutcome {
        SearchOutcome {
            source: "reads.txt".to_string(),
            k: 2,
            degenerate,
            steps,
        }
    }

    #[test]
    fn test_text_is_single_line_by_default() {
        let text = render_text(&outcome(Vec::new(), false));
        assert_eq!(text, "Smallest value of k: 2\n");
    }

    #[test]
    fn test_text_lists_steps() {
        let steps = vec![
            SearchStep { k: 1, kmers: 4, pairs: 10, ambiguous: 3 },
            SearchStep { k: 2, kmers: 5, pairs: 7, ambiguous: 0 },
        ];
        let text = render_text(&outcome(steps, false));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("k=1: 4 k-mers, 10 successors, 3 ambiguous"));
        assert!(lines[2].ends_with("k=2: 5 k-mers, 7 successors, 0 ambiguous"));
    }

    #[test]
    fn test_degenerate_text_is_result_line_only() {
        let text = render_text(&outcome(Vec::new(), true));
        assert_eq!(text, "Smallest value of k: 2\n");
    }

    #[test]
    fn test_json_keeps_degenerate_flag() {
        let json = render_json(&outcome(Vec::new(), true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["degenerate"], true);
    }

    #[test]
    fn test_json_omits_empty_trace() {
        let json = render_json(&outcome(Vec::new(), false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["k"], 2);
        assert_eq!(value["degenerate"], false);
        assert_eq!(value["source"], "reads.txt");
        assert!(value.get("steps").is_none());
    }
}
