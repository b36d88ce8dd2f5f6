use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::errors::EngineError;
use crate::models::assessments::responses::ReleaseStateResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 发布考核
///
/// 置位 is_released、递增发布纪元并锁定全部题目（存储层单事务完成）。
/// 没有任何题目的考核不可发布。
pub async fn release_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    assessment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.release_assessment(assessment_id).await {
        Ok(assessment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReleaseStateResponse {
                is_released: assessment.is_released,
                current_release_number: assessment.current_release_number,
            },
            "发布成功",
        ))),
        Err(EngineError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::AssessmentNotFound, "考核不存在"),
        )),
        Err(EngineError::InvalidState(msg)) => Ok(
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::InvalidState, msg)),
        ),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("发布考核失败: {e}"),
            )),
        ),
    }
}

/// 撤回考核
///
/// 仅清除 is_released；已锁定的题目保持锁定，发布纪元不回退。
pub async fn recall_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    assessment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.recall_assessment(assessment_id).await {
        Ok(assessment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReleaseStateResponse {
                is_released: assessment.is_released,
                current_release_number: assessment.current_release_number,
            },
            "撤回成功",
        ))),
        Err(EngineError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::AssessmentNotFound, "考核不存在"),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("撤回考核失败: {e}"),
            )),
        ),
    }
}
