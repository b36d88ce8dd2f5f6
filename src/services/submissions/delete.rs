use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::errors::EngineError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::results::recompute;

/// 删除提交
///
/// 仅草稿可删；定稿提交不可通过此路径移除。
pub async fn delete_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_submission(submission_id).await {
        Ok(deleted) => {
            // 草稿也可能出现在 MarkEntry 里，删除后同步结果
            if let Err(e) = recompute::recompute_for_target(
                &storage,
                deleted.assessment_id,
                deleted.target_id,
            )
            .await
            {
                tracing::warn!("Result recompute after delete failed: {}", e);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功")))
        }
        Err(EngineError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::SubmissionNotFound, "提交不存在"),
        )),
        Err(EngineError::InvalidState(msg)) => Ok(
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::InvalidState, msg)),
        ),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除提交失败: {e}"),
            )),
        ),
    }
}
