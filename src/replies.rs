//! User-facing reply texts.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::clients::FormLinks;
use crate::core::models::{CustomQuestion, DefaultField, DefaultQuestionOverride, EventDefinition};
use crate::event_parser::labels;

/// Sent after an image was uploaded and cached.
pub const IMAGE_UPLOADED: &str = "✅ 圖片已上傳，請輸入活動資訊：\n活動標題：XXX\n活動說明：YYY";

/// Placeholder for a form link the builder did not return.
pub const MISSING_FORM_URL: &str = "未取得表單連結";
/// Placeholder for a results link the builder did not return.
pub const MISSING_SUMMARY_URL: &str = "未取得統計連結";

/// Prefix of the participant query command.
pub const QUERY_COMMAND: &str = "查詢活動：";

#[must_use]
pub fn upload_failed(cause: &impl Display) -> String {
    format!("❌ 圖片上傳失敗：{cause}")
}

#[must_use]
pub fn form_created(links: &FormLinks) -> String {
    let form_url = links.form_url.as_deref().unwrap_or(MISSING_FORM_URL);
    let summary_url = links.summary_url.as_deref().unwrap_or(MISSING_SUMMARY_URL);
    format!("📋 表單建立成功：\n{form_url}\n\n📊 回覆統計頁：\n{summary_url}")
}

#[must_use]
pub fn form_failed(cause: &impl Display) -> String {
    format!("❌ 建立表單失敗：{cause}")
}

#[must_use]
pub fn participant_list(title: &str, names: &[String]) -> String {
    let mut reply = format!("📊 活動：{title}\n參加者（{}人）：", names.len());
    for name in names {
        reply.push_str("\n- ");
        reply.push_str(name);
    }
    reply
}

#[must_use]
pub fn query_failed(cause: &impl Display) -> String {
    format!("❌ 查詢失敗：{cause}")
}

/// Usage instructions, including a sample message that exercises every
/// part of the grammar.
#[must_use]
pub fn usage() -> String {
    let sample = EventDefinition {
        title: "XXX".to_string(),
        description: "YYY".to_string(),
        image_url: String::new(),
        default_questions: BTreeMap::from([
            (
                DefaultField::Name,
                DefaultQuestionOverride::Retitled("聯絡人姓名".to_string()),
            ),
            (
                DefaultField::Identity,
                DefaultQuestionOverride::RetitledWithChoices(
                    "身份".to_string(),
                    vec!["學生".to_string(), "社會人士".to_string()],
                ),
            ),
            (DefaultField::Headcount, DefaultQuestionOverride::Disabled),
        ]),
        custom_questions: vec![
            CustomQuestion::ShortAnswer {
                title: "手機號碼".to_string(),
            },
            CustomQuestion::SingleChoice {
                title: "場次".to_string(),
                choices: vec!["上午".to_string(), "下午".to_string()],
            },
            CustomQuestion::MultiChoice {
                title: "餐點".to_string(),
                choices: vec!["葷".to_string(), "素".to_string()],
            },
        ],
    };

    format!(
        "請使用以下格式輸入：\n{}\n\n（「{}」以下與「{}」以下皆可省略，填「{}」可移除預設題目）\n查詢報名者：{}活動名稱",
        sample.to_message_text(),
        labels::DEFAULTS_SECTION,
        labels::CUSTOM_SECTION,
        labels::DISABLE_KEYWORD,
        QUERY_COMMAND,
    )
}
