//! Timestamp marker formatting for rendered output.
//!
//! Transcripts often carry inline `[HH:MM]` markers. Two small transforms
//! live here, both pure text operations applied *after* segmentation, never
//! part of the break decision:
//!
//! - [`format_timestamp`] renders a seconds offset as a marker.
//! - [`isolate_time_markers`] sets every marker off with blank lines, so a
//!   marker never sits glued to the surrounding prose.

use std::sync::LazyLock;

use regex::Regex;

static TIME_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\[\d{2}:\d{2}\])").expect("valid time marker pattern"));

/// Convert a seconds offset into an `[HH:MM]` marker string.
///
/// ```rust
/// assert_eq!(graf::format_timestamp(300.0), "[00:05]");
/// assert_eq!(graf::format_timestamp(3720.0), "[01:02]");
/// ```
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    let total_minutes = (seconds / 60.0) as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("[{hours:02}:{minutes:02}]")
}

/// Surround every `[HH:MM]` marker with a blank line before and after.
///
/// ```rust
/// let out = graf::isolate_time_markers("Intro. [00:05] Next topic.");
/// assert_eq!(out, "Intro. \n\n[00:05]\n\n Next topic.");
/// ```
#[must_use]
pub fn isolate_time_markers(text: &str) -> String {
    TIME_MARKER.replace_all(text, "\n\n$1\n\n").into_owned()
}
