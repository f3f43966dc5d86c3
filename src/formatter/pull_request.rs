use crate::types::{Category, PullRequest};

use super::{
    DisplayLine, SUBTITLE_COLOR, SUBTITLE_FONT_SIZE, TITLE_FONT_SIZE, WIP_COLOR, category_color,
    format_created_date, sanitize,
};

/// Color of the title line: the WIP color when the pull request carries the
/// WIP label, the category color otherwise
pub fn title_color(pr: &PullRequest, category: Category, wip_label: Option<&str>) -> &'static str {
    match wip_label {
        Some(label) if pr.has_label(label) => WIP_COLOR,
        _ => category_color(category),
    }
}

/// Renders one pull request as a clickable title, a subtitle and a separator
pub fn pull_request_lines(
    pr: &PullRequest,
    category: Category,
    wip_label: Option<&str>,
) -> [DisplayLine; 3] {
    let title = format!("{} - {}", pr.repository_name, pr.title);
    let subtitle = format!(
        "#{} opened on {} by @{}",
        pr.number,
        format_created_date(pr.created_at),
        pr.author
    );

    [
        DisplayLine::new(sanitize(&title))
            .size(TITLE_FONT_SIZE)
            .color(title_color(pr, category, wip_label))
            .href(pr.url.as_str()),
        DisplayLine::new(sanitize(&subtitle))
            .size(SUBTITLE_FONT_SIZE)
            .color(SUBTITLE_COLOR),
        DisplayLine::separator(),
    ]
}
