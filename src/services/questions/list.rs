use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::questions::responses::QuestionListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_questions(
    service: &QuestionService,
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

    match storage.list_questions(assessment_id).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(QuestionListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询题目失败: {e}"),
            )),
        ),
    }
}
