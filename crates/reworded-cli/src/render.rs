// Report renderers for terminal output.

use reworded_core::report::{
    AllCombinationsReport, ReportRenderer, Reports, ValidWordsReport, View,
};
use serde::Serialize;

/// Placeholder shown in the all-combinations view before any input.
pub const ALL_PLACEHOLDER: &str = "Waiting for input...";

/// Placeholder shown in the valid-words view before any input.
pub const VALID_PLACEHOLDER: &str = "Enter letters to see valid words...";

/// Heading printed above the all-combinations report when both are shown.
pub const ALL_HEADING: &str = "All Possible Combinations";

/// Heading printed above the valid-words report when both are shown.
pub const VALID_HEADING: &str = "Valid Dictionary Words";

/// Human-readable layout:
///
/// ```text
/// (Total 6 unique strings)
///
/// act, atc, cat, cta, tac, tca
/// ```
///
/// and for valid words one labeled block per length.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    type Output = String;

    fn render_all(&self, report: &AllCombinationsReport) -> String {
        let mut out = format!("(Total {} unique strings)\n\n", report.total);
        out.push_str(&report.items.join(", "));
        out
    }

    fn render_valid(&self, report: &ValidWordsReport) -> String {
        let mut out = format!("(Total {} valid words)\n\n", report.total);
        for group in &report.groups {
            out.push_str(&format!("{}-Letter Words:\n", group.length));
            out.push_str(&group.words.join(", "));
            out.push_str("\n\n");
        }
        out
    }

    fn render_placeholder(&self, view: View) -> String {
        match view {
            View::All => ALL_PLACEHOLDER.to_string(),
            View::Valid => VALID_PLACEHOLDER.to_string(),
        }
    }
}

impl TextRenderer {
    /// Both reports, each under its heading, all-combinations first.
    pub fn render_both(&self, reports: &Reports) -> String {
        format!(
            "{ALL_HEADING}\n{}\n\n{VALID_HEADING}\n{}",
            self.render_all(&reports.all),
            self.render_valid(&reports.valid)
        )
    }
}

/// Machine-readable layout: the report structures serialized as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

#[derive(Serialize)]
struct Placeholder<'a> {
    view: View,
    message: &'a str,
}

impl JsonRenderer {
    fn to_json<T: Serialize>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }

    pub fn render_both(&self, reports: &Reports) -> serde_json::Result<String> {
        self.to_json(reports)
    }
}

impl ReportRenderer for JsonRenderer {
    type Output = serde_json::Result<String>;

    fn render_all(&self, report: &AllCombinationsReport) -> Self::Output {
        self.to_json(report)
    }

    fn render_valid(&self, report: &ValidWordsReport) -> Self::Output {
        self.to_json(report)
    }

    fn render_placeholder(&self, view: View) -> Self::Output {
        let message = TextRenderer.render_placeholder(view);
        self.to_json(&Placeholder {
            view,
            message: &message,
        })
    }
}
