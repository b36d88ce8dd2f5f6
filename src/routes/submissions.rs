use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireIdentity};
use crate::models::submissions::requests::{AdjustScoreRequest, SaveSubmissionRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 保存提交（创建或覆盖草稿）
pub async fn save_submission(
    req: HttpRequest,
    body: web::Json<SaveSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let grader_id = match RequireIdentity::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    SUBMISSION_SERVICE
        .save_submission(&req, grader_id, body.into_inner())
        .await
}

// 获取提交详情
pub async fn get_submission(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&req, path.into_inner())
        .await
}

// 删除草稿提交
pub async fn delete_submission(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .delete_submission(&req, path.into_inner())
        .await
}

// 设置修正分
pub async fn adjust_score(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<AdjustScoreRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .adjust_score(&req, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireIdentity)
            .route("", web::post().to(save_submission))
            .route("/{id}", web::get().to(get_submission))
            .route("/{id}", web::delete().to(delete_submission))
            .route("/{id}/adjust-score", web::post().to(adjust_score)),
    );
}
