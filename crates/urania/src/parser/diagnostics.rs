use serde::Serialize;

/// An input line that was set aside, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineNote {
    pub line: usize,
    pub text: String,
}

/// A line whose grammar matched but whose sign token is unknown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignError {
    pub line: usize,
    pub text: String,
    pub token: String,
}

/// Lines the placement parser did not turn into placements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlacementDiagnostics {
    /// Recognized chart noise such as lunar phase annotations
    pub noise_ignored: Vec<LineNote>,
    /// Lines no grammar accepted
    pub format_ignored: Vec<LineNote>,
    pub sign_errors: Vec<SignError>,
}

impl PlacementDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.format_ignored.is_empty() && self.sign_errors.is_empty()
    }
}
