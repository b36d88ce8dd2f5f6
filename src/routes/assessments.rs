use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireIdentity};
use crate::models::assessments::requests::CreateAssessmentRequest;
use crate::models::assignments::requests::GenerateAssignmentSetRequest;
use crate::models::questions::requests::CreateQuestionRequest;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::services::{
    AssessmentService, AssignmentService, QuestionService, ResultService, SubmissionService,
};

// 懒加载的全局服务实例
static ASSESSMENT_SERVICE: Lazy<AssessmentService> = Lazy::new(AssessmentService::new_lazy);
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 创建考核
pub async fn create_assessment(
    req: HttpRequest,
    body: web::Json<CreateAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .create_assessment(&req, body.into_inner())
        .await
}

// 获取考核详情
pub async fn get_assessment(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .get_assessment(&req, path.into_inner())
        .await
}

// 发布考核
pub async fn release_assessment(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .release_assessment(&req, path.into_inner())
        .await
}

// 撤回考核
pub async fn recall_assessment(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .recall_assessment(&req, path.into_inner())
        .await
}

// 创建题目
pub async fn create_question(
    req: HttpRequest,
    path: web::Path<i64>, // assessment_id
    body: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .create_question(&req, path.into_inner(), body.into_inner())
        .await
}

// 列出考核的全部题目
pub async fn list_questions(
    req: HttpRequest,
    path: web::Path<i64>, // assessment_id
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .list_questions(&req, path.into_inner())
        .await
}

// 生成（替换）分配集
pub async fn generate_assignment_set(
    req: HttpRequest,
    path: web::Path<i64>, // assessment_id
    body: web::Json<GenerateAssignmentSetRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .generate_assignment_set(&req, path.into_inner(), body.into_inner())
        .await
}

// 获取分配集
pub async fn get_assignment_set(
    req: HttpRequest,
    path: web::Path<i64>, // assessment_id
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_assignment_set(&req, path.into_inner())
        .await
}

// 列出考核的结果（分页）
pub async fn list_results(
    req: HttpRequest,
    path: web::Path<i64>, // assessment_id
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .list_results(&req, path.into_inner(), query.into_inner())
        .await
}

// 列出我的提交
pub async fn list_my_submissions(
    req: HttpRequest,
    path: web::Path<i64>, // assessment_id
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
        .list_my_submissions(&req, path.into_inner(), grader_id)
        .await
}

// 配置路由
pub fn configure_assessments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assessments")
            .wrap(middlewares::RequireIdentity)
            .route("", web::post().to(create_assessment))
            .route("/{id}", web::get().to(get_assessment))
            .route("/{id}/release", web::post().to(release_assessment))
            .route("/{id}/recall", web::post().to(recall_assessment))
            .route("/{id}/questions", web::post().to(create_question))
            .route("/{id}/questions", web::get().to(list_questions))
            .route(
                "/{id}/assignment-set",
                web::post().to(generate_assignment_set),
            )
            .route("/{id}/assignment-set", web::get().to(get_assignment_set))
            .route("/{id}/results", web::get().to(list_results))
            .route("/{id}/submissions/my", web::get().to(list_my_submissions)),
    );
}
