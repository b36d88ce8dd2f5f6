use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let question = match storage.get_question_by_id(question_id).await {
        Ok(Some(q)) => q,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    if question.is_locked {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::QuestionLocked,
            "题目已锁定，不可删除",
        )));
    }

    match storage.delete_question(question_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除题目失败: {e}"),
            )),
        ),
    }
}
