use analyzer_core::{AppViewModel, AvailabilityStatus, Block, ErrorKind, FormattedOutline, Item};

use super::constants::*;
use crate::platform::config::FooterLink;

/// Header line with the title on the left and the server status on the right.
pub fn render_header(view: &AppViewModel) -> Vec<String> {
    let marker = match view.status.status {
        AvailabilityStatus::Live => "●",
        AvailabilityStatus::Waking => "◐",
        AvailabilityStatus::Offline => "○",
        AvailabilityStatus::Checking => "…",
    };
    let status = format!("{marker} {}", view.status.label);
    let gap = RULE_WIDTH.saturating_sub(APP_TITLE.chars().count() + status.chars().count());
    vec![
        format!("{APP_TITLE}{}{status}", " ".repeat(gap.max(1))),
        APP_TAGLINE.to_string(),
        "─".repeat(RULE_WIDTH),
    ]
}

/// One-line summary of the form, printed whenever the state changes.
pub fn render_progress(view: &AppViewModel) -> String {
    let file = view.file_name.as_deref().unwrap_or("no file");
    let button = if view.submit.enabled {
        format!("[{}]", view.submit.label)
    } else {
        format!("({})", view.submit.label)
    };
    format!(
        "{} | {} | {} characters | {}",
        view.status.label, file, view.job_description_chars, button
    )
}

pub fn render_report(
    view: &AppViewModel,
    raw: bool,
    links: &[FooterLink],
    year: i32,
) -> Vec<String> {
    let mut lines = render_header(view);

    if let Some(notice) = &view.notice {
        lines.push(format!("! {notice}"));
    }
    lines.push(format!(
        "Resume: {}",
        view.file_name.as_deref().unwrap_or("(none)")
    ));
    lines.push(format!(
        "Job description: {} characters",
        view.job_description_chars
    ));
    lines.push(String::new());

    if let Some(error) = &view.error {
        lines.push(render_error(error.kind, &error.message));
    } else if raw {
        if let Some(text) = &view.result_text {
            lines.extend(text.lines().map(str::to_string));
        }
    } else if let Some(outline) = &view.outline {
        lines.push("Analysis Results".to_string());
        lines.push(String::new());
        lines.extend(render_outline(outline));
    }

    lines.push(String::new());
    lines.extend(render_footer(links, year));
    lines
}

fn render_error(kind: ErrorKind, message: &str) -> String {
    let marker = match kind {
        ErrorKind::RateLimited => "⚠",
        ErrorKind::Validation | ErrorKind::ServerError | ErrorKind::NetworkError => "✗",
    };
    format!("{marker} {message}")
}

pub fn render_outline(outline: &FormattedOutline) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, block) in outline.blocks.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        match block {
            Block::MainSection { title, items } => {
                lines.push(title.clone());
                lines.push("=".repeat(title.chars().count()));
                for item in items {
                    render_item(item, ITEM_INDENT, &mut lines);
                }
            }
            Block::StandaloneBlock { items } => {
                for item in items {
                    render_item(item, "", &mut lines);
                }
            }
        }
    }
    lines
}

fn render_item(item: &Item, indent: &str, lines: &mut Vec<String>) {
    match item {
        Item::SubHeading { heading, body } => {
            lines.push(format!("{indent}{heading}"));
            if let Some(body) = body {
                lines.push(format!("{indent}{BODY_INDENT}{body}"));
            }
        }
        Item::NumberedItem { index, body } => lines.push(format!("{indent}{index}. {body}")),
        Item::BulletItem { body } => lines.push(format!("{indent}• {body}")),
        Item::Paragraph { body } => lines.push(format!("{indent}{body}")),
    }
}

pub fn render_footer(links: &[FooterLink], year: i32) -> Vec<String> {
    let mut lines = vec!["─".repeat(RULE_WIDTH)];
    lines.extend(
        links
            .iter()
            .map(|link| format!("{}: {}", link.label, link.url)),
    );
    lines.push(format!(
        "© {year} {COPYRIGHT_OWNER}. All rights reserved."
    ));
    lines
}

#[cfg(test)]
mod tests {
    use analyzer_core::{format_result, update, AppState, Msg, SubmissionError};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn outline_renders_every_item_kind() {
        let outline = format_result(
            "Recommendations\nFormat: Use one column\n1. Add metrics\n- Cut the summary\nKeep it short\n\nGood luck!",
        );

        assert_eq!(
            render_outline(&outline),
            vec![
                "Recommendations",
                "===============",
                "  Format",
                "        Use one column",
                "  1. Add metrics",
                "  • Cut the summary",
                "  Keep it short",
                "",
                "Good luck!",
            ]
        );
    }

    #[test]
    fn header_shows_status_label() {
        let state = update(
            AppState::new(),
            Msg::AvailabilityChanged(AvailabilityStatus::Offline),
        )
        .0;
        let header = render_header(&state.view());
        assert!(header[0].starts_with(APP_TITLE));
        assert!(header[0].ends_with("○ Server Offline"));
    }

    #[test]
    fn progress_marks_disabled_button() {
        let state = update(
            AppState::new(),
            Msg::AvailabilityChanged(AvailabilityStatus::Waking),
        )
        .0;
        assert_eq!(
            render_progress(&state.view()),
            "Server Waking | no file | 0 characters | (Server Waking Up...)"
        );
    }

    #[test]
    fn report_shows_error_instead_of_result() {
        let view = AppViewModel {
            error: Some(SubmissionError {
                kind: ErrorKind::RateLimited,
                message: "Rate limit exceeded.".to_string(),
            }),
            ..AppViewModel::default()
        };
        let links = [FooterLink {
            label: "Docs".to_string(),
            url: "https://example.com".to_string(),
        }];

        let report = render_report(&view, false, &links, 2025);

        assert!(report.contains(&"⚠ Rate limit exceeded.".to_string()));
        assert!(report.contains(&"Docs: https://example.com".to_string()));
        assert_eq!(
            report.last().map(String::as_str),
            Some("© 2025 ResumeAI Analyzer Pro. All rights reserved.")
        );
    }

    #[test]
    fn raw_report_prints_text_verbatim() {
        let view = AppViewModel {
            result_text: Some("**Summary**\nfine".to_string()),
            ..AppViewModel::default()
        };
        let report = render_report(&view, true, &[], 2025);
        assert!(report.contains(&"**Summary**".to_string()));
    }
}
