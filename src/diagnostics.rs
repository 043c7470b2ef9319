use crate::matcher::MalformedRule;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

pub const ANNOTATION_LOG_FILE: &str = "annotations.log";

/// Non-fatal condition reported to the host while annotating. Nothing in
/// the engine aborts on these; the affected item simply shows less.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A rule was skipped during a match pass because its match text could
    /// not be interpreted for its kind.
    MalformedRule { index: usize, detail: MalformedRule },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MalformedRule { index, detail } => {
                write!(f, "rule #{} skipped: {detail}", index + 1)
            }
        }
    }
}

/// Append one line to the on-disk diagnostic log. Failures to write are
/// ignored; the log is an aid, not a dependency.
pub fn append_annotation_log(msg: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(ANNOTATION_LOG_FILE)
    {
        let _ = writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg);
    }
}
