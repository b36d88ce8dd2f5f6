use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(sub)) => sub,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    // 对照考核当前发布纪元标记过期提交
    let is_outdated = match storage.get_assessment_by_id(submission.assessment_id).await {
        Ok(Some(assessment)) => submission.is_outdated(assessment.current_release_number),
        _ => false,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SubmissionResponse {
            submission,
            is_outdated,
        },
        "查询成功",
    )))
}
