use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::responses::AssignmentSetResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_assignment_set(
    service: &AssignmentService,
    request: &HttpRequest,
    assessment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assessment_by_id(assessment_id).await {
        Ok(Some(_)) => {}
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
    }

    match storage.get_assignment_set(assessment_id).await {
        Ok(set) => {
            let uncovered_target_ids = set
                .entries
                .iter()
                .filter(|e| e.grader_ids.is_empty())
                .map(|e| e.target_id)
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignmentSetResponse {
                    assessment_id: set.assessment_id,
                    entries: set.entries,
                    uncovered_target_ids,
                },
                "查询成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询分配集失败: {e}"),
            )),
        ),
    }
}
