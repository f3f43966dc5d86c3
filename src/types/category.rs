//! The relation a pull request has to the viewer

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One of the three relations a pull request can have to the viewer (`@me`).
///
/// Variant order is the order in which categories appear in the report,
/// so iterating with [`strum::IntoEnumIterator`] yields the display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The viewer was asked to review and has not authored the pull request
    RequestedReview,
    /// The viewer authored the pull request
    Owned,
    /// The viewer already reviewed someone else's pull request
    ReviewedBy,
}

impl Category {
    /// Caption used in the summary header line for this category
    pub fn header_caption(&self) -> &'static str {
        match self {
            Category::RequestedReview => "Requested",
            Category::Owned => "Opened",
            Category::ReviewedBy => "Reviewed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iteration_follows_display_order() {
        let categories: Vec<Category> = Category::iter().collect();
        assert_eq!(
            categories,
            vec![
                Category::RequestedReview,
                Category::Owned,
                Category::ReviewedBy
            ]
        );
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Category::RequestedReview.to_string(), "requested_review");
        assert_eq!(
            "reviewed_by".parse::<Category>().unwrap(),
            Category::ReviewedBy
        );
    }
}
