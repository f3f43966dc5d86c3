use std::path::Path;

use strum::IntoEnumIterator;

use crate::services::config::{ENV_ACCESS_TOKEN, ENV_GITHUB_LOGIN};
use crate::types::{Category, InvolvementReport};

use super::{DisplayLine, WARNING_COLOR, pull_request_lines, sanitize};

/// Renders the full report.
///
/// Layout: one `<caption> #<count>` header per category, a separator, then
/// the detail blocks of every category in [`Category`] order. Header counts
/// are the total match counts and may exceed the number of detail blocks.
pub fn render_report(report: &InvolvementReport, wip_label: Option<&str>) -> Vec<DisplayLine> {
    let mut lines: Vec<DisplayLine> = Category::iter()
        .map(|category| {
            DisplayLine::new(format!(
                "{} #{}",
                category.header_caption(),
                report.get(category).issue_count
            ))
        })
        .collect();

    lines.push(DisplayLine::separator());

    for category in Category::iter() {
        for pr in &report.get(category).pull_requests {
            lines.extend(pull_request_lines(pr, category, wip_label));
        }
    }

    lines
}

/// Panel shown instead of the report when the token or login is not configured
pub fn render_missing_config(config_path: Option<&Path>) -> Vec<DisplayLine> {
    let location = match config_path {
        Some(path) => format!(", or edit {}", path.display()),
        None => String::new(),
    };

    vec![
        DisplayLine::new("⚠ Github review requests").color(WARNING_COLOR),
        DisplayLine::separator(),
        DisplayLine::new("ACCESS_TOKEN and GITHUB_LOGIN cannot be empty"),
        DisplayLine::new(sanitize(&format!(
            "Set {} and {}{}",
            ENV_ACCESS_TOKEN, ENV_GITHUB_LOGIN, location
        ))),
    ]
}
