use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

// JSON 请求体解析失败时返回统一响应结构
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("无效的JSON请求体: {err}");
    let response = HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
        ErrorCode::InvalidJsonBody,
        message,
    ));
    error::InternalError::from_response(err, response).into()
}

// 查询参数解析失败时返回统一响应结构
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("无效的查询参数: {err}");
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidQueryParams,
        message,
    ));
    error::InternalError::from_response(err, response).into()
}
