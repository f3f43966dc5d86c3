//! Status-bar output formatting
//!
//! Converts search results into the line protocol understood by xbar/SwiftBar
//! style hosts: one item per line, optionally followed by `|` and
//! space-separated `key=value` display attributes.

pub mod line;
pub mod pull_request;
pub mod report;

use chrono::{DateTime, Utc};

use crate::types::Category;

pub use line::*;
pub use pull_request::*;
pub use report::*;

pub const TITLE_FONT_SIZE: u32 = 16;
pub const SUBTITLE_FONT_SIZE: u32 = 12;

/// Color for pull requests awaiting the viewer's review
pub const REQUESTED_REVIEW_COLOR: &str = "#339933";
pub const OWNED_COLOR: &str = "#1974D2";
pub const REVIEWED_BY_COLOR: &str = "#F8ED62";
pub const SUBTITLE_COLOR: &str = "#586069";
/// Muted color replacing the category color for pull requests carrying the WIP label
pub const WIP_COLOR: &str = "#959DA5";
pub const WARNING_COLOR: &str = "red";

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::RequestedReview => REQUESTED_REVIEW_COLOR,
        Category::Owned => OWNED_COLOR,
        Category::ReviewedBy => REVIEWED_BY_COLOR,
    }
}

/// Replaces `|` with `_`, since the host treats `|` as the attribute delimiter
pub fn sanitize(text: &str) -> String {
    text.replace('|', "_")
}

/// Formats a timestamp as `January 05, 2024`. No timezone conversion is applied.
pub fn format_created_date(dt: DateTime<Utc>) -> String {
    dt.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_created_date() {
        let dt: DateTime<Utc> = "2024-01-05T10:00:00Z".parse().unwrap();
        assert_eq!(format_created_date(dt), "January 05, 2024");

        let dt: DateTime<Utc> = "2023-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_created_date(dt), "December 31, 2023");
    }

    #[test]
    fn test_sanitize_only_replaces_pipes() {
        assert_eq!(sanitize("a|b||c"), "a_b__c");
        assert_eq!(sanitize("fix: x -> y (#12) ✓"), "fix: x -> y (#12) ✓");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_category_colors_are_distinct() {
        assert_ne!(category_color(Category::RequestedReview), WIP_COLOR);
        assert_ne!(category_color(Category::Owned), WIP_COLOR);
        assert_ne!(category_color(Category::ReviewedBy), WIP_COLOR);
        assert_ne!(
            category_color(Category::Owned),
            category_color(Category::ReviewedBy)
        );
    }
}
