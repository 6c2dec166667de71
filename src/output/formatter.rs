// src/output/formatter.rs

//! Renders a verdict together with the checklist.

use crate::checklist::checklist_items;
use crate::core_types::DetectionVerdict;
use serde::Serialize;
use std::io;

/// Heading of the Markdown checklist block.
pub const CHECKLIST_HEADING: &str = "### New component checklist";

#[derive(Serialize)]
struct Report<'a> {
    matched: bool,
    component_file: Option<&'a str>,
    checklist: &'static [&'static str],
}

/// Renders the JSON report. The checklist is always included; consumers
/// decide whether to show it based on `matched`.
///
/// # Examples
/// ```
/// use component_checklist::core_types::DetectionVerdict;
/// use component_checklist::output::formatter::render_json;
///
/// let json = render_json(&DetectionVerdict::matched_in("src/Card.tsx")).unwrap();
/// let value: serde_json::Value = serde_json::from_str(&json).unwrap();
/// assert_eq!(value["matched"], true);
/// assert_eq!(value["component_file"], "src/Card.tsx");
/// assert!(value["checklist"].as_array().unwrap().len() > 0);
/// ```
pub fn render_json(verdict: &DetectionVerdict) -> io::Result<String> {
    let report = Report {
        matched: verdict.matched,
        component_file: verdict.component_file.as_deref(),
        checklist: checklist_items(),
    };
    let mut json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    json.push('\n');
    Ok(json)
}

/// Renders the checklist as Markdown task items, or an empty string when no
/// component was detected.
pub fn render_markdown(verdict: &DetectionVerdict) -> String {
    if !verdict.matched {
        return String::new();
    }
    let mut out = String::new();
    out.push_str(CHECKLIST_HEADING);
    out.push_str("\n\n");
    if let Some(path) = &verdict.component_file {
        out.push_str(&format!("A new component was detected in `{}`.\n\n", path));
    }
    for item in checklist_items() {
        out.push_str("- [ ] ");
        out.push_str(item);
        out.push('\n');
    }
    out
}
