use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::models::assessments::requests::CreateAssessmentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    req: CreateAssessmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "考核标题不能为空",
        )));
    }

    match storage.create_assessment(req).await {
        Ok(assessment) => Ok(HttpResponse::Ok().json(ApiResponse::success(assessment, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建考核失败: {e}"),
            )),
        ),
    }
}
