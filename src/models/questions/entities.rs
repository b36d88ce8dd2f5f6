//! 题目模型
//!
//! 题目是一个封闭的变体集合：公共字段放在 Question 上，
//! 变体专属的计分配置收敛到 QuestionData 标签枚举，
//! 由编译期穷举替代运行时类型猜测。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{EngineError, Result};

/// 选择题选项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct ChoiceOption {
    pub text: String,
    // 未计分时默认为 0
    #[serde(default)]
    pub points: f64,
}

/// 量表刻度标签
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct ScaleLabel {
    pub value: i32,
    pub label: String,
    #[serde(default)]
    pub points: f64,
}

/// 数字题区间计分段，区间两端均为闭区间
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct ScoreRange {
    pub min_value: f64,
    pub max_value: f64,
    pub points: f64,
}

/// 数字题计分方式
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "method", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub enum NumberScoring {
    None,
    Direct { max_points: f64 },
    Range { ranges: Vec<ScoreRange> },
}

impl Default for NumberScoring {
    fn default() -> Self {
        NumberScoring::None
    }
}

/// 题目变体及其计分配置
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub enum QuestionData {
    MultipleChoice {
        options: Vec<ChoiceOption>,
        #[serde(default)]
        is_scored: bool,
    },
    MultipleResponse {
        options: Vec<ChoiceOption>,
        #[serde(default)]
        is_scored: bool,
        // 为 true 时，选中负分选项将扣分
        #[serde(default)]
        allow_negative: bool,
    },
    Scale {
        scale_max: i32,
        labels: Vec<ScaleLabel>,
        #[serde(default)]
        is_scored: bool,
    },
    ShortResponse {
        #[serde(default)]
        placeholder: Option<String>,
    },
    LongResponse {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Date {
        #[serde(default)]
        is_range: bool,
        #[serde(default)]
        min_date: Option<chrono::NaiveDate>,
        #[serde(default)]
        max_date: Option<chrono::NaiveDate>,
    },
    Number {
        max_number: f64,
        #[serde(default)]
        is_scored: bool,
        #[serde(default)]
        scoring: NumberScoring,
    },
    NusnetId,
    NusnetEmail,
    TeamMemberSelection,
    Undecided,
}

impl QuestionData {
    /// 变体名称，用于错误信息与日志
    pub fn type_name(&self) -> &'static str {
        match self {
            QuestionData::MultipleChoice { .. } => "MultipleChoice",
            QuestionData::MultipleResponse { .. } => "MultipleResponse",
            QuestionData::Scale { .. } => "Scale",
            QuestionData::ShortResponse { .. } => "ShortResponse",
            QuestionData::LongResponse { .. } => "LongResponse",
            QuestionData::Date { .. } => "Date",
            QuestionData::Number { .. } => "Number",
            QuestionData::NusnetId => "NusnetId",
            QuestionData::NusnetEmail => "NusnetEmail",
            QuestionData::TeamMemberSelection => "TeamMemberSelection",
            QuestionData::Undecided => "Undecided",
        }
    }

    /// 系统保留变体：创建时强制 is_locked = true、is_required = true
    pub fn is_system_reserved(&self) -> bool {
        matches!(
            self,
            QuestionData::NusnetId | QuestionData::NusnetEmail | QuestionData::TeamMemberSelection
        )
    }

    /// 该变体是否参与计分
    pub fn is_scored(&self) -> bool {
        match self {
            QuestionData::MultipleChoice { is_scored, .. }
            | QuestionData::MultipleResponse { is_scored, .. }
            | QuestionData::Scale { is_scored, .. }
            | QuestionData::Number { is_scored, .. } => *is_scored,
            _ => false,
        }
    }

    /// 校验计分配置，返回首条被违反的规则
    pub fn validate(&self) -> Result<()> {
        match self {
            QuestionData::Scale {
                scale_max,
                labels,
                is_scored,
            } => Self::validate_scale(*scale_max, labels, *is_scored),
            QuestionData::Number {
                max_number,
                scoring,
                ..
            } => Self::validate_number(*max_number, scoring),
            QuestionData::Date {
                min_date, max_date, ..
            } => {
                if let (Some(min), Some(max)) = (min_date, max_date)
                    && min > max
                {
                    return Err(EngineError::validation(format!(
                        "日期下界 {min} 晚于上界 {max}"
                    )));
                }
                Ok(())
            }
            // 选项题允许空文本（不推荐但不拒绝），其余变体无计分配置
            _ => Ok(()),
        }
    }

    fn validate_scale(scale_max: i32, labels: &[ScaleLabel], is_scored: bool) -> Result<()> {
        if scale_max < 2 {
            return Err(EngineError::validation(format!(
                "量表最大值必须 >= 2，当前为 {scale_max}"
            )));
        }
        if labels.len() < 2 {
            return Err(EngineError::validation(format!(
                "量表标签不得少于 2 个，当前为 {} 个",
                labels.len()
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for label in labels {
            if label.value < 1 || label.value > scale_max {
                return Err(EngineError::validation(format!(
                    "量表标签值 {} 超出范围 [1, {scale_max}]",
                    label.value
                )));
            }
            if !seen.insert(label.value) {
                return Err(EngineError::validation(format!(
                    "量表标签值 {} 重复",
                    label.value
                )));
            }
        }

        // 两个端点必须有标签
        if !seen.contains(&1) || !seen.contains(&scale_max) {
            return Err(EngineError::validation(format!(
                "量表标签必须覆盖端点 1 和 {scale_max}"
            )));
        }

        if is_scored {
            let mut sorted: Vec<&ScaleLabel> = labels.iter().collect();
            sorted.sort_by_key(|l| l.value);
            for pair in sorted.windows(2) {
                if pair[1].points < pair[0].points {
                    return Err(EngineError::validation(format!(
                        "量表计分必须随标签值非递减：值 {} 的分数 {} 低于值 {} 的分数 {}",
                        pair[1].value, pair[1].points, pair[0].value, pair[0].points
                    )));
                }
            }
        }

        Ok(())
    }

    fn validate_number(max_number: f64, scoring: &NumberScoring) -> Result<()> {
        if max_number < 0.0 {
            return Err(EngineError::validation(format!(
                "数字题最大值不得为负，当前为 {max_number}"
            )));
        }

        if let NumberScoring::Range { ranges } = scoring {
            if ranges.is_empty() {
                return Err(EngineError::validation("区间计分至少需要一个区间"));
            }
            for range in ranges {
                if range.min_value > range.max_value {
                    return Err(EngineError::validation(format!(
                        "区间下界 {} 大于上界 {}",
                        range.min_value, range.max_value
                    )));
                }
            }
            let mut sorted: Vec<&ScoreRange> = ranges.iter().collect();
            sorted.sort_by(|a, b| a.min_value.total_cmp(&b.min_value));
            for pair in sorted.windows(2) {
                // 两端均为闭区间，相等即重叠
                if pair[1].min_value <= pair[0].max_value {
                    return Err(EngineError::validation(format!(
                        "计分区间 [{}, {}] 与 [{}, {}] 重叠",
                        pair[0].min_value, pair[0].max_value, pair[1].min_value, pair[1].max_value
                    )));
                }
                if pair[1].points < pair[0].points {
                    return Err(EngineError::validation(format!(
                        "区间分数必须随区间递增非递减：[{}, {}] 的分数 {} 低于前一区间的 {}",
                        pair[1].min_value, pair[1].max_value, pair[1].points, pair[0].points
                    )));
                }
            }
        }

        Ok(())
    }
}

/// 题目业务实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct Question {
    pub id: i64,
    pub assessment_id: i64,
    pub ordinal: i32,
    pub prompt: String,
    pub is_required: bool,
    pub is_locked: bool,
    pub custom_instruction: Option<String>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub data: QuestionData,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(value: i32, points: f64) -> ScaleLabel {
        ScaleLabel {
            value,
            label: format!("level-{value}"),
            points,
        }
    }

    #[test]
    fn test_scale_valid() {
        let q = QuestionData::Scale {
            scale_max: 5,
            labels: vec![label(1, 0.0), label(3, 2.0), label(5, 4.0)],
            is_scored: true,
        };
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_scale_too_few_labels() {
        let q = QuestionData::Scale {
            scale_max: 5,
            labels: vec![label(1, 0.0)],
            is_scored: false,
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_scale_duplicate_value() {
        let q = QuestionData::Scale {
            scale_max: 5,
            labels: vec![label(1, 0.0), label(1, 1.0), label(5, 2.0)],
            is_scored: false,
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_scale_label_out_of_range() {
        let q = QuestionData::Scale {
            scale_max: 5,
            labels: vec![label(1, 0.0), label(6, 1.0)],
            is_scored: false,
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_scale_missing_endpoint() {
        let q = QuestionData::Scale {
            scale_max: 5,
            labels: vec![label(1, 0.0), label(3, 1.0)],
            is_scored: false,
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_scale_points_must_not_decrease() {
        let q = QuestionData::Scale {
            scale_max: 5,
            labels: vec![label(1, 3.0), label(5, 1.0)],
            is_scored: true,
        };
        assert!(q.validate().is_err());

        // 未计分时不检查分数单调性
        let q = QuestionData::Scale {
            scale_max: 5,
            labels: vec![label(1, 3.0), label(5, 1.0)],
            is_scored: false,
        };
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_number_range_overlap() {
        let q = QuestionData::Number {
            max_number: 100.0,
            is_scored: true,
            scoring: NumberScoring::Range {
                ranges: vec![
                    ScoreRange {
                        min_value: 0.0,
                        max_value: 50.0,
                        points: 5.0,
                    },
                    ScoreRange {
                        min_value: 50.0,
                        max_value: 100.0,
                        points: 10.0,
                    },
                ],
            },
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_number_range_points_must_not_decrease() {
        let q = QuestionData::Number {
            max_number: 100.0,
            is_scored: true,
            scoring: NumberScoring::Range {
                ranges: vec![
                    ScoreRange {
                        min_value: 0.0,
                        max_value: 50.0,
                        points: 10.0,
                    },
                    ScoreRange {
                        min_value: 51.0,
                        max_value: 100.0,
                        points: 5.0,
                    },
                ],
            },
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_number_range_valid() {
        let q = QuestionData::Number {
            max_number: 100.0,
            is_scored: true,
            scoring: NumberScoring::Range {
                ranges: vec![
                    ScoreRange {
                        min_value: 0.0,
                        max_value: 50.0,
                        points: 5.0,
                    },
                    ScoreRange {
                        min_value: 51.0,
                        max_value: 100.0,
                        points: 10.0,
                    },
                ],
            },
        };
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_empty_option_text_permitted() {
        let q = QuestionData::MultipleChoice {
            options: vec![ChoiceOption {
                text: String::new(),
                points: 0.0,
            }],
            is_scored: true,
        };
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_system_reserved_variants() {
        assert!(QuestionData::NusnetId.is_system_reserved());
        assert!(QuestionData::NusnetEmail.is_system_reserved());
        assert!(QuestionData::TeamMemberSelection.is_system_reserved());
        assert!(!QuestionData::Undecided.is_system_reserved());
    }

    #[test]
    fn test_config_roundtrip() {
        let q = QuestionData::MultipleChoice {
            options: vec![ChoiceOption {
                text: "Yes".to_string(),
                points: 10.0,
            }],
            is_scored: true,
        };
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"type\":\"MultipleChoice\""));
        let back: QuestionData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.type_name(), "MultipleChoice");
    }
}
