use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    assessment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assessment_by_id(assessment_id).await {
        Ok(Some(assessment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(assessment, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssessmentNotFound,
            "考核不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考核失败: {e}"),
            )),
        ),
    }
}
