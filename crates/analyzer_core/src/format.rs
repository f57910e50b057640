//! Turns the free-text feedback returned by the analysis endpoint into a
//! renderable outline.
//!
//! The classification is purely lexical. A line is matched against
//! [`LINE_RULES`] top to bottom and the first rule that accepts it decides
//! the [`Item`] variant. Short lines containing a colon always become
//! sub-headings, even when they are ordinary sentences.

use std::sync::LazyLock;

use regex::Regex;

/// First-line keywords that promote a section to a [`Block::MainSection`].
pub const SECTION_KEYWORDS: [&str; 12] = [
    "Analysis",
    "Summary",
    "Recommendations",
    "Skills",
    "Experience",
    "Education",
    "Improvements",
    "Match",
    "Score",
    "Feedback",
    "Strengths",
    "Weaknesses",
];

/// Lines at or above this many UTF-16 code units are never sub-headings.
const SUBHEADING_MAX_CHARS: usize = 100;

static SECTION_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid section break pattern"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.?\s+(.+)$").expect("valid numbered pattern"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•·]\s+(.+)$").expect("valid bullet pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedOutline {
    pub blocks: Vec<Block>,
}

impl FormattedOutline {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    MainSection { title: String, items: Vec<Item> },
    StandaloneBlock { items: Vec<Item> },
}

impl Block {
    pub fn items(&self) -> &[Item] {
        match self {
            Block::MainSection { items, .. } | Block::StandaloneBlock { items } => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    SubHeading { heading: String, body: Option<String> },
    /// `index` is the label as written; numbering is not checked.
    NumberedItem { index: String, body: String },
    BulletItem { body: String },
    Paragraph { body: String },
}

/// One step of the line classifier.
#[derive(Clone, Copy)]
pub struct LineRule {
    pub name: &'static str,
    pub classify: fn(&str) -> Option<Item>,
}

/// Line classifiers in precedence order. The last rule accepts every line.
pub static LINE_RULES: [LineRule; 4] = [
    LineRule {
        name: "sub-heading",
        classify: sub_heading,
    },
    LineRule {
        name: "numbered",
        classify: numbered,
    },
    LineRule {
        name: "bullet",
        classify: bullet,
    },
    LineRule {
        name: "paragraph",
        classify: paragraph,
    },
];

/// Formats raw feedback text. Same input, same outline.
pub fn format_result(text: &str) -> FormattedOutline {
    let cleaned = text.replace('*', "");
    let blocks = SECTION_BREAK
        .split(&cleaned)
        .filter_map(format_section)
        .collect();
    FormattedOutline { blocks }
}

fn format_section(section: &str) -> Option<Block> {
    let mut lines = section.lines().map(str::trim).filter(|line| !line.is_empty());
    let first = lines.next()?;

    if is_section_title(first) {
        Some(Block::MainSection {
            title: first.to_string(),
            items: lines.map(classify_line).collect(),
        })
    } else {
        Some(Block::StandaloneBlock {
            items: std::iter::once(first).chain(lines).map(classify_line).collect(),
        })
    }
}

fn is_section_title(line: &str) -> bool {
    SECTION_KEYWORDS.iter().any(|keyword| line.contains(keyword))
}

/// Classifies an already trimmed, non-empty line.
pub fn classify_line(line: &str) -> Item {
    LINE_RULES
        .iter()
        .find_map(|rule| (rule.classify)(line))
        .unwrap_or_else(|| Item::Paragraph {
            body: line.to_string(),
        })
}

fn sub_heading(line: &str) -> Option<Item> {
    if line.encode_utf16().count() >= SUBHEADING_MAX_CHARS {
        return None;
    }
    let (heading, rest) = line.split_once(':')?;
    let body = rest.trim();
    Some(Item::SubHeading {
        heading: heading.trim().to_string(),
        body: (!body.is_empty()).then(|| body.to_string()),
    })
}

fn numbered(line: &str) -> Option<Item> {
    let caps = NUMBERED.captures(line)?;
    Some(Item::NumberedItem {
        index: caps[1].to_string(),
        body: caps[2].trim().to_string(),
    })
}

fn bullet(line: &str) -> Option<Item> {
    let caps = BULLET.captures(line)?;
    Some(Item::BulletItem {
        body: caps[1].trim().to_string(),
    })
}

fn paragraph(line: &str) -> Option<Item> {
    Some(Item::Paragraph {
        body: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_ordered_most_specific_first() {
        let names: Vec<_> = LINE_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(names, ["sub-heading", "numbered", "bullet", "paragraph"]);
    }

    #[test]
    fn colon_wins_over_numbering() {
        assert_eq!(
            classify_line("1. Tools: Docker"),
            Item::SubHeading {
                heading: "1. Tools".to_string(),
                body: Some("Docker".to_string()),
            }
        );
    }

    #[test]
    fn long_colon_line_falls_through() {
        let line = format!("- {}: {}", "a".repeat(60), "b".repeat(60));
        assert!(matches!(classify_line(&line), Item::BulletItem { .. }));
    }

    #[test]
    fn number_without_space_is_a_paragraph() {
        assert_eq!(
            classify_line("3.Add numbers"),
            Item::Paragraph {
                body: "3.Add numbers".to_string()
            }
        );
    }

    #[test]
    fn only_ascii_digits_number_a_line() {
        for line in ["٣ Add metrics", "３. Add metrics"] {
            assert_eq!(
                classify_line(line),
                Item::Paragraph {
                    body: line.to_string()
                }
            );
        }
    }

    #[test]
    fn emoji_count_twice_toward_the_heading_limit() {
        // 48 emoji are 96 code units, so this line is exactly 100.
        let line = format!("{}a:bc", "🚀".repeat(48));
        assert!(matches!(classify_line(&line), Item::Paragraph { .. }));
        let line = format!("{}a:bc", "🚀".repeat(47));
        assert!(matches!(classify_line(&line), Item::SubHeading { .. }));
    }

    #[test]
    fn number_without_period_is_numbered() {
        assert_eq!(
            classify_line("12 Lead with impact"),
            Item::NumberedItem {
                index: "12".to_string(),
                body: "Lead with impact".to_string(),
            }
        );
    }

    #[test]
    fn bullet_markers_are_recognised() {
        for line in ["- one", "• one", "· one"] {
            assert_eq!(
                classify_line(line),
                Item::BulletItem {
                    body: "one".to_string()
                },
                "{line}"
            );
        }
    }

    #[test]
    fn section_title_keyword_is_case_sensitive() {
        assert!(is_section_title("Skills Gap"));
        assert!(!is_section_title("skills gap"));
    }
}
