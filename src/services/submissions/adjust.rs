use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::errors::EngineError;
use crate::models::submissions::requests::AdjustScoreRequest;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::results::recompute;

/// 设置修正分
///
/// 旁路通道：对草稿与定稿均有效，不改变提交状态。
pub async fn adjust_score(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: AdjustScoreRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .adjust_submission_score(submission_id, req.adjusted_score)
        .await
    {
        Ok(submission) => {
            if let Err(e) = recompute::recompute_for_target(
                &storage,
                submission.assessment_id,
                submission.target_id,
            )
            .await
            {
                tracing::warn!("Result recompute after adjust failed: {}", e);
            }
            let is_outdated = match storage
                .get_assessment_by_id(submission.assessment_id)
                .await
            {
                Ok(Some(assessment)) => {
                    submission.is_outdated(assessment.current_release_number)
                }
                _ => false,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse {
                    submission,
                    is_outdated,
                },
                "修正分已更新",
            )))
        }
        Err(EngineError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::SubmissionNotFound, "提交不存在"),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新修正分失败: {e}"),
            )),
        ),
    }
}
