// Report shapes consumed by the presentation layer.
//
// These are plain data. Building them is the engine's job; turning them
// into text or widgets is the job of a ReportRenderer.

/// Every distinct generated string, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AllCombinationsReport {
    pub total: usize,
    pub items: Vec<String>,
}

/// Valid words of one length, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LengthGroup {
    pub length: usize,
    pub words: Vec<String>,
}

/// Dictionary-valid strings grouped by length, groups in ascending length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidWordsReport {
    pub total: usize,
    pub groups: Vec<LengthGroup>,
}

impl AllCombinationsReport {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl ValidWordsReport {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All words across groups, shortest group first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.words.iter().map(String::as_str))
    }

    /// The group for words of exactly `length` letters, if any.
    pub fn group(&self, length: usize) -> Option<&LengthGroup> {
        self.groups.iter().find(|g| g.length == length)
    }
}

/// Both reports produced by one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reports {
    pub all: AllCombinationsReport,
    pub valid: ValidWordsReport,
}

/// Which report a front end is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum View {
    #[default]
    Valid,
    All,
}

/// Rendering seam implemented by front ends.
///
/// The engine never formats output itself; a host picks a renderer (text,
/// JSON, a widget tree) and feeds it the reports.
pub trait ReportRenderer {
    type Output;

    fn render_all(&self, report: &AllCombinationsReport) -> Self::Output;

    fn render_valid(&self, report: &ValidWordsReport) -> Self::Output;

    /// Output shown for a view before any word has been submitted, or
    /// after the inputs were cleared.
    fn render_placeholder(&self, view: View) -> Self::Output;

    fn render(&self, reports: &Reports, view: View) -> Self::Output {
        match view {
            View::Valid => self.render_valid(&reports.valid),
            View::All => self.render_all(&reports.all),
        }
    }
}
