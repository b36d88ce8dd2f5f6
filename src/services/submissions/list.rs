use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::responses::{SubmissionListResponse, SubmissionResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 列出当前评分人在某考核下的全部提交（含草稿）
pub async fn list_my_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    assessment_id: i64,
    grader_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assessment = match storage.get_assessment_by_id(assessment_id).await {
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

    match storage
        .list_submissions_by_grader(assessment_id, grader_id)
        .await
    {
        Ok(submissions) => {
            let items = submissions
                .into_iter()
                .map(|submission| {
                    let is_outdated =
                        submission.is_outdated(assessment.current_release_number);
                    SubmissionResponse {
                        submission,
                        is_outdated,
                    }
                })
                .collect();
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(SubmissionListResponse { items }, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交失败: {e}"),
            )),
        ),
    }
}
