use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::errors::EngineError;
use crate::models::answers::entities::AnswerData;
use crate::models::submissions::requests::SaveSubmissionRequest;
use crate::models::submissions::responses::{MissingRequiredResponse, SubmissionResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::scoring;
use crate::services::results::recompute;
use crate::utils::validate;

/// 保存提交
///
/// 不存在则创建，存在且为草稿则整体覆盖（答案全量替换、分数重算），
/// 已定稿则拒绝。定稿前做必答校验，失败时返回缺失题目清单。
pub async fn save_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    grader_id: i64,
    req: SaveSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取考核信息（同时拿到当前发布纪元）
    let assessment = match storage.get_assessment_by_id(req.assessment_id).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssessmentNotFound,
                "考核不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考核失败: {e}"),
                )),
            );
        }
    };

    let questions = match storage.list_questions(req.assessment_id).await {
        Ok(qs) => qs,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    // 逐题校验答案变体与题型一致
    for answer in &req.answers {
        if let Some(question) = questions.iter().find(|q| q.id == answer.question_id)
            && !answer.data.matches(&question.data)
        {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::AnswerTypeMismatch,
                format!(
                    "题目 {} 期望 {} 类型的答案",
                    question.id,
                    question.data.type_name()
                ),
            )));
        }
    }

    // NUSNET 学号/邮箱答案的格式校验
    for answer in &req.answers {
        if let Some(msg) = nusnet_format_error(&answer.data) {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!("题目 {}: {msg}", answer.question_id),
            )));
        }
    }

    // 定稿前的必答校验
    if !req.is_draft {
        let missing = scoring::missing_required(&questions, &req.answers);
        if !missing.is_empty() {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error(
                ErrorCode::MissingRequiredAnswers,
                MissingRequiredResponse {
                    missing_question_ids: missing,
                },
                "存在未作答的必答题",
            )));
        }
    }

    // 从零重算总分，不沿用旧草稿的分数
    let score = match scoring::score_submission(&questions, &req.answers) {
        Ok(s) => s,
        Err(e) => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::AnswerTypeMismatch,
                e.message(),
            )));
        }
    };

    let assessment_id = req.assessment_id;
    let target_id = req.target_id;

    match storage
        .save_submission(grader_id, req, score, assessment.current_release_number)
        .await
    {
        Ok(submission) => {
            // 保存成功后重算目标成员的结果
            if let Err(e) = recompute::recompute_for_target(&storage, assessment_id, target_id).await
            {
                tracing::warn!("Result recompute after save failed: {}", e);
            }
            let is_outdated = submission.is_outdated(assessment.current_release_number);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse {
                    submission,
                    is_outdated,
                },
                "保存成功",
            )))
        }
        Err(EngineError::AlreadyFinalized(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::AlreadyFinalized, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("保存提交失败: {e}"),
            )),
        ),
    }
}

// NUSNET 学号/邮箱答案的格式错误（留空交由必答校验处理）
fn nusnet_format_error(data: &AnswerData) -> Option<&'static str> {
    let check = match data {
        AnswerData::NusnetId { value: Some(v) } if !v.trim().is_empty() => {
            validate::validate_nusnet_id(v.trim())
        }
        AnswerData::NusnetEmail { value: Some(v) } if !v.trim().is_empty() => {
            validate::validate_nusnet_email(v.trim())
        }
        _ => Ok(()),
    };
    check.err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nusnet_format_check_on_answers() {
        let bad_id = AnswerData::NusnetId {
            value: Some("a0123456".to_string()),
        };
        assert!(nusnet_format_error(&bad_id).is_some());

        let good_id = AnswerData::NusnetId {
            value: Some("e0123456".to_string()),
        };
        assert!(nusnet_format_error(&good_id).is_none());

        let bad_email = AnswerData::NusnetEmail {
            value: Some("someone@gmail.com".to_string()),
        };
        assert!(nusnet_format_error(&bad_email).is_some());
    }

    #[test]
    fn test_blank_nusnet_answers_skip_format_check() {
        // None 与空白串都不触发格式错误，由必答校验兜底
        assert!(nusnet_format_error(&AnswerData::NusnetId { value: None }).is_none());
        assert!(
            nusnet_format_error(&AnswerData::NusnetEmail {
                value: Some("   ".to_string())
            })
            .is_none()
        );
    }
}
