use crate::fill::report::{FillOutcome, FillReport};

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

const MAX_VALUE_WIDTH: usize = 48;

/// Format a fill report for terminal output.
///
/// Produces output like:
/// ```text
/// === Flash Fill: 3 fields ===
///
/// ✓ email          rule/email            jane.doe42@gmail.com
/// ✓ gender         radio                 checked #4
/// ✗ country        rule/country          control #7 not found on page
///
/// === Results: 2 filled, 0 skipped, 1 failed (3 total) ===
/// ```
pub fn format_console_report(report: &FillReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Flash Fill: {} fields ===\n\n", report.total));

    for entry in &report.entries {
        let marker = match entry.outcome {
            FillOutcome::Filled => "\u{2713}",
            FillOutcome::Skipped(_) => "-",
            FillOutcome::Failed(_) => "\u{2717}",
        };

        let route = match (&entry.route, &entry.category) {
            (Some(route), Some(category)) => format!("{}/{}", route, category),
            (Some(route), None) => route.to_string(),
            _ => String::new(),
        };

        let detail = match &entry.outcome {
            FillOutcome::Filled => entry
                .value
                .as_deref()
                .map(printable)
                .unwrap_or_default(),
            FillOutcome::Skipped(reason) | FillOutcome::Failed(reason) => reason.clone(),
        };

        out.push_str(&format!(
            "{} {:<24} {:<28} {}\n",
            marker, entry.key, route, detail
        ));
    }

    out.push_str(&format!(
        "\n=== Results: {} filled, {} skipped, {} failed ({} total) ===\n",
        report.filled, report.skipped, report.failed, report.total
    ));

    out
}

/// Single-line, width-limited rendering of a value.
fn printable(value: &str) -> String {
    let flat = value.replace('\n', " ");
    if flat.chars().count() > MAX_VALUE_WIDTH {
        let cut: String = flat.chars().take(MAX_VALUE_WIDTH - 3).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}
