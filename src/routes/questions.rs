use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::questions::requests::UpdateQuestionRequest;
use crate::services::QuestionService;

// 懒加载的全局 QuestionService 实例
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

// 更新题目
pub async fn update_question(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .update_question(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除题目
pub async fn delete_question(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .delete_question(&req, path.into_inner())
        .await
}

// 配置路由
pub fn configure_questions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/questions")
            .wrap(middlewares::RequireIdentity)
            .route("/{id}", web::patch().to(update_question))
            .route("/{id}", web::delete().to(delete_question)),
    );
}
