//! Parser for event-definition chat messages.
//!
//! A message looks like this:
//!
//! ```text
//! 活動標題：社區清潔日
//! 活動說明：請攜帶手套
//! 歡迎全家參加
//! 自訂預設題目：
//! 身份別：志工類型：社會大眾,環保志工
//! 自訂題目：
//! 簡答：手機號碼
//! 單選：場次：上午,下午
//! ```
//!
//! Every line is trimmed and classified once against the label table in
//! [`labels`]. The first line carries the title, the description runs from
//! the description label to the next section line, and the two optional
//! sections hold default-field overrides and custom questions. Malformed data
//! lines are skipped; only a missing or empty title fails the parse.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::models::{CustomQuestion, DefaultField, DefaultQuestionOverride, EventDefinition};

/// Literal labels of the message grammar.
pub mod labels {
    pub const TITLE: &str = "活動標題：";
    pub const DESCRIPTION: &str = "活動說明：";
    /// Standalone line opening the default-field overrides.
    pub const DEFAULTS_SECTION: &str = "自訂預設題目：";
    /// Standalone line opening the custom questions.
    pub const CUSTOM_SECTION: &str = "自訂題目：";

    pub const NAME: &str = "姓名：";
    pub const IDENTITY: &str = "身份別：";
    pub const HEADCOUNT: &str = "人數：";

    pub const SHORT_ANSWER: &str = "簡答：";
    pub const SINGLE_CHOICE: &str = "單選：";
    pub const MULTI_CHOICE: &str = "多選：";

    /// Removes a default field from the generated form.
    pub const DISABLE_KEYWORD: &str = "不需要";
    /// Splits `subtitle：choice,choice` on choice-bearing lines.
    pub const SECONDARY_SEPARATOR: char = '：';
    pub const CHOICE_DELIMITERS: &[char] = &[',', '，'];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("first line must start with {}", labels::TITLE)]
    MissingTitle,

    #[error("title after {} is empty", labels::TITLE)]
    EmptyTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Title,
    Description,
    DefaultsSection,
    CustomSection,
    Name,
    Identity,
    Headcount,
    ShortAnswer,
    SingleChoice,
    MultiChoice,
    Other,
}

const PREFIXED_LABELS: [(&str, LineKind); 8] = [
    (labels::TITLE, LineKind::Title),
    (labels::DESCRIPTION, LineKind::Description),
    (labels::NAME, LineKind::Name),
    (labels::IDENTITY, LineKind::Identity),
    (labels::HEADCOUNT, LineKind::Headcount),
    (labels::SHORT_ANSWER, LineKind::ShortAnswer),
    (labels::SINGLE_CHOICE, LineKind::SingleChoice),
    (labels::MULTI_CHOICE, LineKind::MultiChoice),
];

/// Classifies a line and returns the trimmed text following its label.
fn classify(line: &str) -> (LineKind, &str) {
    let line = line.trim();

    // Section labels only count as whole lines.
    if line == labels::DEFAULTS_SECTION {
        return (LineKind::DefaultsSection, "");
    }
    if line == labels::CUSTOM_SECTION {
        return (LineKind::CustomSection, "");
    }

    PREFIXED_LABELS
        .iter()
        .find_map(|(label, kind)| line.strip_prefix(label).map(|rest| (*kind, rest.trim())))
        .unwrap_or((LineKind::Other, line))
}

/// Whether `text` is meant as an event definition, i.e. mentions both the
/// title and the description label.
#[must_use]
pub fn is_event_definition(text: &str) -> bool {
    text.contains(labels::TITLE) && text.contains(labels::DESCRIPTION)
}

/// Parses a chat message into an [`EventDefinition`].
///
/// `image_url` is copied into the result untouched; it comes from the image
/// cache, not from the text.
///
/// # Errors
///
/// Returns [`ParseError::MissingTitle`] if the first line does not start with
/// the title label and [`ParseError::EmptyTitle`] if nothing follows it.
pub fn parse_event_definition(text: &str, image_url: &str) -> Result<EventDefinition, ParseError> {
    let mut lines = text.lines();

    let title = match lines.next().map(classify) {
        Some((LineKind::Title, title)) => title,
        _ => return Err(ParseError::MissingTitle),
    };
    if title.is_empty() {
        return Err(ParseError::EmptyTitle);
    }

    let mut description: Vec<&str> = Vec::new();
    let mut description_started = false;
    let mut in_description = false;
    let mut in_defaults = false;
    let mut in_custom = false;

    let mut default_questions = BTreeMap::new();
    let mut custom_questions = Vec::new();

    for line in lines {
        let (kind, rest) = classify(line);
        match kind {
            LineKind::DefaultsSection => {
                in_description = false;
                in_defaults = true;
                continue;
            }
            LineKind::CustomSection => {
                in_description = false;
                in_defaults = false;
                in_custom = true;
                continue;
            }
            _ => {}
        }

        // The label may sit behind decoration such as an emoji.
        if !description_started {
            if let Some((_, rest)) = line.split_once(labels::DESCRIPTION) {
                description_started = true;
                in_description = true;
                description.push(rest.trim());
                continue;
            }
        }

        if in_description {
            description.push(line.trim());
        }
        if in_defaults {
            apply_default_line(kind, rest, &mut default_questions);
        }
        if in_custom {
            apply_custom_line(kind, rest, &mut custom_questions);
        }
    }

    Ok(EventDefinition {
        title: title.to_string(),
        description: join_description(&description),
        image_url: image_url.to_string(),
        default_questions,
        custom_questions,
    })
}

/// Joins description lines, dropping blank lines at either end.
fn join_description(lines: &[&str]) -> String {
    let start = lines
        .iter()
        .position(|l| !l.is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}

fn apply_default_line(
    kind: LineKind,
    rest: &str,
    overrides: &mut BTreeMap<DefaultField, DefaultQuestionOverride>,
) {
    let (field, entry) = match kind {
        LineKind::Name => (DefaultField::Name, retitle(rest)),
        LineKind::Headcount => (DefaultField::Headcount, retitle(rest)),
        LineKind::Identity => (DefaultField::Identity, retitle_with_choices(rest)),
        _ => return,
    };

    if let Some(entry) = entry {
        overrides.insert(field, entry);
    }
}

fn retitle(rest: &str) -> Option<DefaultQuestionOverride> {
    if rest == labels::DISABLE_KEYWORD {
        Some(DefaultQuestionOverride::Disabled)
    } else if rest.is_empty() {
        None
    } else {
        Some(DefaultQuestionOverride::Retitled(rest.to_string()))
    }
}

fn retitle_with_choices(rest: &str) -> Option<DefaultQuestionOverride> {
    // The keyword wins even though the line has no separator.
    if rest == labels::DISABLE_KEYWORD {
        return Some(DefaultQuestionOverride::Disabled);
    }
    let (title, choices) = split_choices(rest)?;
    Some(DefaultQuestionOverride::RetitledWithChoices(title, choices))
}

fn apply_custom_line(kind: LineKind, rest: &str, questions: &mut Vec<CustomQuestion>) {
    let question = match kind {
        LineKind::ShortAnswer if !rest.is_empty() => CustomQuestion::ShortAnswer {
            title: rest.to_string(),
        },
        LineKind::SingleChoice => {
            let Some((title, choices)) = split_choices(rest) else {
                return;
            };
            CustomQuestion::SingleChoice { title, choices }
        }
        LineKind::MultiChoice => {
            let Some((title, choices)) = split_choices(rest) else {
                return;
            };
            CustomQuestion::MultiChoice { title, choices }
        }
        _ => return,
    };

    questions.push(question);
}

/// Splits `subtitle：a, b` into the subtitle and its trimmed choices.
///
/// Returns `None` without a separator, with an empty subtitle, or when no
/// non-empty choice remains.
fn split_choices(rest: &str) -> Option<(String, Vec<String>)> {
    let (title, list) = rest.split_once(labels::SECONDARY_SEPARATOR)?;
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    let choices: Vec<String> = list
        .split(labels::CHOICE_DELIMITERS)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToString::to_string)
        .collect();
    if choices.is_empty() {
        return None;
    }

    Some((title.to_string(), choices))
}
