use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::questions::requests::UpdateQuestionRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: i64,
    req: UpdateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 锁定检查：发布过的题目结构不可再改
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
            "题目已锁定，不可修改",
        )));
    }

    // 替换题型配置时整体校验
    if let Some(data) = &req.data
        && let Err(e) = data.validate()
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            e.message(),
        )));
    }

    match storage.update_question(question_id, req).await {
        Ok(Some(updated)) => Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新题目失败: {e}"),
            )),
        ),
    }
}
