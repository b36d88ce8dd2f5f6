//! 计分引擎
//!
//! 对单个 (题目, 答案) 对的纯函数计分，无副作用、确定性；
//! 唯一的错误来源是题目与答案变体不匹配。

use std::collections::HashSet;

use crate::errors::{EngineError, Result};
use crate::models::answers::entities::{Answer, AnswerData};
use crate::models::questions::entities::{NumberScoring, Question, QuestionData};

/// 计算单个 (题目, 答案) 对的分数
///
/// 不计分变体恒为 0；计分变体按各自配置取分，取不到时为 0。
pub fn score_answer(question: &QuestionData, answer: &AnswerData) -> Result<f64> {
    if !answer.matches(question) {
        return Err(EngineError::type_mismatch(format!(
            "答案变体 {} 与题目变体 {} 不匹配",
            answer.type_name(),
            question.type_name()
        )));
    }

    let score = match (question, answer) {
        (
            QuestionData::MultipleChoice { options, is_scored },
            AnswerData::MultipleChoice { value },
        ) => {
            if !is_scored {
                0.0
            } else {
                value
                    .as_deref()
                    .and_then(|v| options.iter().find(|o| o.text == v))
                    .map(|o| o.points)
                    .unwrap_or(0.0)
            }
        }
        (
            QuestionData::MultipleResponse {
                options,
                is_scored,
                allow_negative,
            },
            AnswerData::MultipleResponse { values },
        ) => {
            if !is_scored {
                0.0
            } else {
                options
                    .iter()
                    .filter(|o| values.iter().any(|v| *v == o.text))
                    .map(|o| {
                        // 负分选项只在 allow_negative 时扣分
                        if o.points < 0.0 && !allow_negative {
                            0.0
                        } else {
                            o.points
                        }
                    })
                    .sum()
            }
        }
        (
            QuestionData::Scale {
                labels, is_scored, ..
            },
            AnswerData::Scale { value },
        ) => {
            if !is_scored {
                0.0
            } else {
                // 仅精确命中标签值计分，不做插值
                value
                    .and_then(|v| labels.iter().find(|l| l.value == v))
                    .map(|l| l.points)
                    .unwrap_or(0.0)
            }
        }
        (
            QuestionData::Number {
                max_number,
                is_scored,
                scoring,
            },
            AnswerData::Number { value },
        ) => {
            if !is_scored {
                0.0
            } else {
                match (scoring, value) {
                    (NumberScoring::Direct { max_points }, Some(v)) => {
                        if *v <= *max_number {
                            *max_points
                        } else {
                            0.0
                        }
                    }
                    (NumberScoring::Range { ranges }, Some(v)) => ranges
                        .iter()
                        .find(|r| r.min_value <= *v && *v <= r.max_value)
                        .map(|r| r.points)
                        .unwrap_or(0.0),
                    _ => 0.0,
                }
            }
        }
        // 其余变体不参与计分
        _ => 0.0,
    };

    Ok(score)
}

/// 累计一份提交的总分
///
/// 每题至多记一个答案（取首个），指向未知题目的答案忽略。
pub fn score_submission(questions: &[Question], answers: &[Answer]) -> Result<f64> {
    let mut seen: HashSet<i64> = HashSet::new();
    let mut total = 0.0;

    for answer in answers {
        if !seen.insert(answer.question_id) {
            continue;
        }
        if let Some(question) = questions.iter().find(|q| q.id == answer.question_id) {
            total += score_answer(&question.data, &answer.data)?;
        }
    }

    Ok(total)
}

/// 必答校验：返回缺少非空答案的必答题 ID（按题目顺序）
pub fn missing_required(questions: &[Question], answers: &[Answer]) -> Vec<i64> {
    questions
        .iter()
        .filter(|q| q.is_required)
        .filter(|q| {
            !answers
                .iter()
                .any(|a| a.question_id == q.id && a.data.matches(&q.data) && !a.data.is_empty())
        })
        .map(|q| q.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questions::entities::{ChoiceOption, ScaleLabel, ScoreRange};

    fn option(text: &str, points: f64) -> ChoiceOption {
        ChoiceOption {
            text: text.to_string(),
            points,
        }
    }

    fn question(id: i64, is_required: bool, data: QuestionData) -> Question {
        Question {
            id,
            assessment_id: 1,
            ordinal: id as i32,
            prompt: format!("question {id}"),
            is_required,
            is_locked: false,
            custom_instruction: None,
            data,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_multiple_choice_exact_match() {
        let q = QuestionData::MultipleChoice {
            options: vec![option("Yes", 10.0), option("No", 0.0)],
            is_scored: true,
        };
        let yes = AnswerData::MultipleChoice {
            value: Some("Yes".to_string()),
        };
        let maybe = AnswerData::MultipleChoice {
            value: Some("Maybe".to_string()),
        };
        assert_eq!(score_answer(&q, &yes).unwrap(), 10.0);
        // 无匹配选项得 0
        assert_eq!(score_answer(&q, &maybe).unwrap(), 0.0);
    }

    #[test]
    fn test_multiple_choice_unscored() {
        let q = QuestionData::MultipleChoice {
            options: vec![option("Yes", 10.0)],
            is_scored: false,
        };
        let a = AnswerData::MultipleChoice {
            value: Some("Yes".to_string()),
        };
        assert_eq!(score_answer(&q, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_multiple_response_negative_points() {
        let options = vec![option("right", 5.0), option("wrong", -3.0)];
        let a = AnswerData::MultipleResponse {
            values: vec!["right".to_string(), "wrong".to_string()],
        };

        let allowed = QuestionData::MultipleResponse {
            options: options.clone(),
            is_scored: true,
            allow_negative: true,
        };
        assert_eq!(score_answer(&allowed, &a).unwrap(), 2.0);

        let not_allowed = QuestionData::MultipleResponse {
            options,
            is_scored: true,
            allow_negative: false,
        };
        assert_eq!(score_answer(&not_allowed, &a).unwrap(), 5.0);
    }

    #[test]
    fn test_scale_exact_match_only() {
        let q = QuestionData::Scale {
            scale_max: 5,
            labels: vec![
                ScaleLabel {
                    value: 1,
                    label: "poor".to_string(),
                    points: 0.0,
                },
                ScaleLabel {
                    value: 5,
                    label: "great".to_string(),
                    points: 4.0,
                },
            ],
            is_scored: true,
        };
        assert_eq!(score_answer(&q, &AnswerData::Scale { value: Some(5) }).unwrap(), 4.0);
        // 范围内但无标签的值不插值，得 0
        assert_eq!(score_answer(&q, &AnswerData::Scale { value: Some(3) }).unwrap(), 0.0);
        assert_eq!(score_answer(&q, &AnswerData::Scale { value: None }).unwrap(), 0.0);
    }

    #[test]
    fn test_number_direct() {
        let q = QuestionData::Number {
            max_number: 100.0,
            is_scored: true,
            scoring: NumberScoring::Direct { max_points: 7.0 },
        };
        assert_eq!(score_answer(&q, &AnswerData::Number { value: Some(42.0) }).unwrap(), 7.0);
        assert_eq!(score_answer(&q, &AnswerData::Number { value: Some(101.0) }).unwrap(), 0.0);
    }

    #[test]
    fn test_number_range_inclusive_bounds() {
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
        assert_eq!(score_answer(&q, &AnswerData::Number { value: Some(75.0) }).unwrap(), 10.0);
        // 边界值落在低区间
        assert_eq!(score_answer(&q, &AnswerData::Number { value: Some(50.0) }).unwrap(), 5.0);
        assert_eq!(score_answer(&q, &AnswerData::Number { value: Some(51.0) }).unwrap(), 10.0);
    }

    #[test]
    fn test_unscored_variants_return_zero() {
        let q = QuestionData::LongResponse { placeholder: None };
        let a = AnswerData::LongResponse {
            value: Some("feedback".to_string()),
        };
        assert_eq!(score_answer(&q, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_type_mismatch_is_error() {
        let q = QuestionData::MultipleChoice {
            options: vec![],
            is_scored: true,
        };
        let a = AnswerData::Number { value: Some(1.0) };
        assert!(score_answer(&q, &a).is_err());
    }

    #[test]
    fn test_score_submission_sums_and_dedupes() {
        let questions = vec![
            question(
                1,
                false,
                QuestionData::MultipleChoice {
                    options: vec![option("Yes", 10.0)],
                    is_scored: true,
                },
            ),
            question(
                2,
                false,
                QuestionData::Number {
                    max_number: 10.0,
                    is_scored: true,
                    scoring: NumberScoring::Direct { max_points: 3.0 },
                },
            ),
        ];
        let answers = vec![
            Answer {
                question_id: 1,
                data: AnswerData::MultipleChoice {
                    value: Some("Yes".to_string()),
                },
            },
            // 同题的第二个答案被忽略
            Answer {
                question_id: 1,
                data: AnswerData::MultipleChoice { value: None },
            },
            Answer {
                question_id: 2,
                data: AnswerData::Number { value: Some(5.0) },
            },
            // 未知题目的答案被忽略
            Answer {
                question_id: 99,
                data: AnswerData::Number { value: Some(5.0) },
            },
        ];
        assert_eq!(score_submission(&questions, &answers).unwrap(), 13.0);
    }

    #[test]
    fn test_missing_required() {
        let questions = vec![
            question(1, true, QuestionData::ShortResponse { placeholder: None }),
            question(2, true, QuestionData::Scale {
                scale_max: 5,
                labels: vec![],
                is_scored: false,
            }),
            question(3, false, QuestionData::ShortResponse { placeholder: None }),
        ];
        let answers = vec![
            // 空白答案不满足必答
            Answer {
                question_id: 1,
                data: AnswerData::ShortResponse {
                    value: Some("  ".to_string()),
                },
            },
        ];
        assert_eq!(missing_required(&questions, &answers), vec![1, 2]);

        let answers = vec![
            Answer {
                question_id: 1,
                data: AnswerData::ShortResponse {
                    value: Some("done".to_string()),
                },
            },
            Answer {
                question_id: 2,
                data: AnswerData::Scale { value: Some(4) },
            },
        ];
        assert!(missing_required(&questions, &answers).is_empty());
    }
}
