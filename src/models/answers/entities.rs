//! 答案模型
//!
//! 每个题目变体各有一个答案变体，二者通过相同的 type 标签配对。
//! 答案没有独立生命周期，始终内嵌在提交中。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::questions::entities::QuestionData;

/// 答案变体，承载作答者输入
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export, export_to = "../frontend/src/types/generated/answer.ts")]
pub enum AnswerData {
    MultipleChoice {
        value: Option<String>,
    },
    MultipleResponse {
        #[serde(default)]
        values: Vec<String>,
    },
    Scale {
        value: Option<i32>,
    },
    ShortResponse {
        value: Option<String>,
    },
    LongResponse {
        value: Option<String>,
    },
    Date {
        date: Option<chrono::NaiveDate>,
        // 仅区间日期题使用
        #[serde(default)]
        end_date: Option<chrono::NaiveDate>,
    },
    Number {
        value: Option<f64>,
    },
    NusnetId {
        value: Option<String>,
    },
    NusnetEmail {
        value: Option<String>,
    },
    TeamMemberSelection {
        #[serde(default)]
        user_ids: Vec<i64>,
    },
    Undecided,
}

impl AnswerData {
    /// 变体名称，用于错误信息与日志
    pub fn type_name(&self) -> &'static str {
        match self {
            AnswerData::MultipleChoice { .. } => "MultipleChoice",
            AnswerData::MultipleResponse { .. } => "MultipleResponse",
            AnswerData::Scale { .. } => "Scale",
            AnswerData::ShortResponse { .. } => "ShortResponse",
            AnswerData::LongResponse { .. } => "LongResponse",
            AnswerData::Date { .. } => "Date",
            AnswerData::Number { .. } => "Number",
            AnswerData::NusnetId { .. } => "NusnetId",
            AnswerData::NusnetEmail { .. } => "NusnetEmail",
            AnswerData::TeamMemberSelection { .. } => "TeamMemberSelection",
            AnswerData::Undecided => "Undecided",
        }
    }

    /// 答案变体是否与题目变体匹配
    pub fn matches(&self, question: &QuestionData) -> bool {
        matches!(
            (self, question),
            (AnswerData::MultipleChoice { .. }, QuestionData::MultipleChoice { .. })
                | (
                    AnswerData::MultipleResponse { .. },
                    QuestionData::MultipleResponse { .. }
                )
                | (AnswerData::Scale { .. }, QuestionData::Scale { .. })
                | (
                    AnswerData::ShortResponse { .. },
                    QuestionData::ShortResponse { .. }
                )
                | (
                    AnswerData::LongResponse { .. },
                    QuestionData::LongResponse { .. }
                )
                | (AnswerData::Date { .. }, QuestionData::Date { .. })
                | (AnswerData::Number { .. }, QuestionData::Number { .. })
                | (AnswerData::NusnetId { .. }, QuestionData::NusnetId)
                | (AnswerData::NusnetEmail { .. }, QuestionData::NusnetEmail)
                | (
                    AnswerData::TeamMemberSelection { .. },
                    QuestionData::TeamMemberSelection
                )
                | (AnswerData::Undecided, QuestionData::Undecided)
        )
    }

    /// 按变体定义的空值判定，供必答校验使用
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerData::MultipleChoice { value } => {
                value.as_deref().is_none_or(|v| v.trim().is_empty())
            }
            AnswerData::MultipleResponse { values } => values.is_empty(),
            AnswerData::Scale { value } => value.is_none(),
            AnswerData::ShortResponse { value } | AnswerData::LongResponse { value } => {
                value.as_deref().is_none_or(|v| v.trim().is_empty())
            }
            AnswerData::Date { date, .. } => date.is_none(),
            AnswerData::Number { value } => value.is_none(),
            AnswerData::NusnetId { value } | AnswerData::NusnetEmail { value } => {
                value.as_deref().is_none_or(|v| v.trim().is_empty())
            }
            AnswerData::TeamMemberSelection { user_ids } => user_ids.is_empty(),
            // Undecided 题无法作答，视为空
            AnswerData::Undecided => true,
        }
    }
}

/// 答案：对某个题目的一次作答，内嵌于提交的 answers 数组
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/answer.ts")]
pub struct Answer {
    pub question_id: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub data: AnswerData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let q = QuestionData::MultipleChoice {
            options: vec![],
            is_scored: false,
        };
        assert!(
            AnswerData::MultipleChoice {
                value: Some("Yes".to_string())
            }
            .matches(&q)
        );
        assert!(!AnswerData::Number { value: Some(1.0) }.matches(&q));
        assert!(
            AnswerData::TeamMemberSelection { user_ids: vec![1] }
                .matches(&QuestionData::TeamMemberSelection)
        );
    }

    #[test]
    fn test_is_empty_strings() {
        assert!(
            AnswerData::ShortResponse {
                value: Some("   ".to_string())
            }
            .is_empty()
        );
        assert!(AnswerData::ShortResponse { value: None }.is_empty());
        assert!(
            !AnswerData::ShortResponse {
                value: Some("ok".to_string())
            }
            .is_empty()
        );
    }

    #[test]
    fn test_is_empty_lists_and_numbers() {
        assert!(AnswerData::MultipleResponse { values: vec![] }.is_empty());
        assert!(AnswerData::TeamMemberSelection { user_ids: vec![] }.is_empty());
        assert!(AnswerData::Number { value: None }.is_empty());
        assert!(!AnswerData::Number { value: Some(0.0) }.is_empty());
        assert!(AnswerData::Date {
            date: None,
            end_date: None
        }
        .is_empty());
    }

    #[test]
    fn test_answer_json_shape() {
        let answer = Answer {
            question_id: 7,
            data: AnswerData::Scale { value: Some(3) },
        };
        let json = serde_json::to_string(&answer).unwrap();
        assert!(json.contains("\"question_id\":7"));
        assert!(json.contains("\"type\":\"Scale\""));
        let back: Answer = serde_json::from_str(&json).unwrap();
        assert_eq!(back.question_id, 7);
    }
}
