use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::common::PaginationQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_results(
    service: &ResultService,
    request: &HttpRequest,
    assessment_id: i64,
    query: PaginationQuery,
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

    match storage
        .list_results_with_pagination(assessment_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询结果失败: {e}"),
            )),
        ),
    }
}
