use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event_parser::labels;

/// Built-in form fields whose question the operator may retitle or disable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultField {
    Name,
    Identity,
    Headcount,
}

impl DefaultField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DefaultField::Name => labels::NAME,
            DefaultField::Identity => labels::IDENTITY,
            DefaultField::Headcount => labels::HEADCOUNT,
        }
    }
}

/// Operator override for one built-in field. A field with no override keeps
/// the form builder's default question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "DefaultQuestionPayload")]
pub enum DefaultQuestionOverride {
    Disabled,
    Retitled(String),
    RetitledWithChoices(String, Vec<String>),
}

#[derive(Debug, Serialize)]
struct DefaultQuestionPayload {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<Vec<String>>,
}

impl From<DefaultQuestionOverride> for DefaultQuestionPayload {
    fn from(value: DefaultQuestionOverride) -> Self {
        match value {
            DefaultQuestionOverride::Disabled => Self {
                disabled: true,
                title: None,
                choices: None,
            },
            DefaultQuestionOverride::Retitled(title) => Self {
                disabled: false,
                title: Some(title),
                choices: None,
            },
            DefaultQuestionOverride::RetitledWithChoices(title, choices) => Self {
                disabled: false,
                title: Some(title),
                choices: Some(choices),
            },
        }
    }
}

/// Extra question appended to the generated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomQuestion {
    ShortAnswer { title: String },
    SingleChoice { title: String, choices: Vec<String> },
    MultiChoice { title: String, choices: Vec<String> },
}

impl CustomQuestion {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            CustomQuestion::ShortAnswer { title }
            | CustomQuestion::SingleChoice { title, .. }
            | CustomQuestion::MultiChoice { title, .. } => title,
        }
    }
}

/// Everything the form builder needs to create one sign-up form.
///
/// Serializes to the JSON body the form builder expects:
/// `{title, description, imageUrl, defaultQuestions, questions}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub default_questions: BTreeMap<DefaultField, DefaultQuestionOverride>,
    #[serde(rename = "questions")]
    pub custom_questions: Vec<CustomQuestion>,
}

impl EventDefinition {
    /// Renders the definition back into chat-message form.
    ///
    /// Parsing the result yields an equal definition (apart from
    /// `image_url`, which never travels in the text).
    #[must_use]
    pub fn to_message_text(&self) -> String {
        let mut lines = vec![
            format!("{}{}", labels::TITLE, self.title),
            format!("{}{}", labels::DESCRIPTION, self.description),
        ];

        if !self.default_questions.is_empty() {
            lines.push(labels::DEFAULTS_SECTION.to_string());
            for (field, entry) in &self.default_questions {
                let body = match entry {
                    DefaultQuestionOverride::Disabled => labels::DISABLE_KEYWORD.to_string(),
                    DefaultQuestionOverride::Retitled(title) => title.clone(),
                    DefaultQuestionOverride::RetitledWithChoices(title, choices) => {
                        render_choice_line(title, choices)
                    }
                };
                lines.push(format!("{}{}", field.label(), body));
            }
        }

        if !self.custom_questions.is_empty() {
            lines.push(labels::CUSTOM_SECTION.to_string());
            for question in &self.custom_questions {
                let line = match question {
                    CustomQuestion::ShortAnswer { title } => {
                        format!("{}{}", labels::SHORT_ANSWER, title)
                    }
                    CustomQuestion::SingleChoice { title, choices } => {
                        format!("{}{}", labels::SINGLE_CHOICE, render_choice_line(title, choices))
                    }
                    CustomQuestion::MultiChoice { title, choices } => {
                        format!("{}{}", labels::MULTI_CHOICE, render_choice_line(title, choices))
                    }
                };
                lines.push(line);
            }
        }

        lines.join("\n")
    }
}

fn render_choice_line(title: &str, choices: &[String]) -> String {
    format!("{}{}{}", title, labels::SECONDARY_SEPARATOR, choices.join(","))
}
