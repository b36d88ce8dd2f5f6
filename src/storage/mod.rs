use std::sync::Arc;

use crate::models::{
    assessments::{entities::Assessment, requests::CreateAssessmentRequest},
    assignments::entities::{AssessmentAssignmentSet, AssignmentEntry},
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, UpdateQuestionRequest},
    },
    common::PaginationQuery,
    results::{
        entities::{AssessmentResult, MarkEntry},
        responses::ResultListResponse,
    },
    submissions::{entities::Submission, requests::SaveSubmissionRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 考核管理方法
    // 创建考核
    async fn create_assessment(&self, req: CreateAssessmentRequest) -> Result<Assessment>;
    // 通过ID获取考核
    async fn get_assessment_by_id(&self, id: i64) -> Result<Option<Assessment>>;
    // 发布考核：置位 is_released、递增发布纪元并锁定全部题目（单事务）
    async fn release_assessment(&self, id: i64) -> Result<Assessment>;
    // 撤回考核：仅清除 is_released，已锁定的题目保持锁定
    async fn recall_assessment(&self, id: i64) -> Result<Assessment>;

    /// 题目管理方法
    // 创建题目，ordinal 缺省时追加到末尾
    async fn create_question(
        &self,
        assessment_id: i64,
        req: CreateQuestionRequest,
        force_locked: bool,
        force_required: bool,
    ) -> Result<Question>;
    // 通过ID获取题目
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    // 更新题目（调用方负责锁定检查）
    async fn update_question(&self, id: i64, update: UpdateQuestionRequest)
    -> Result<Option<Question>>;
    // 删除题目
    async fn delete_question(&self, id: i64) -> Result<bool>;
    // 列出考核的全部题目（按 ordinal）
    async fn list_questions(&self, assessment_id: i64) -> Result<Vec<Question>>;

    /// 提交管理方法
    // 保存提交：不存在则创建，存在且为草稿则整体覆盖，
    // 已定稿则返回 AlreadyFinalized（单事务读改写）
    async fn save_submission(
        &self,
        grader_id: i64,
        req: SaveSubmissionRequest,
        score: f64,
        release_number: i32,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 查找某评分人对某对象的提交
    async fn find_submission(
        &self,
        assessment_id: i64,
        grader_id: i64,
        target_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出某评分人在某考核下的全部提交
    async fn list_submissions_by_grader(
        &self,
        assessment_id: i64,
        grader_id: i64,
    ) -> Result<Vec<Submission>>;
    // 删除提交：仅草稿可删，定稿返回 InvalidState
    async fn delete_submission(&self, id: i64) -> Result<Submission>;
    // 设置修正分（对定稿提交同样有效）
    async fn adjust_submission_score(&self, id: i64, adjusted_score: f64) -> Result<Submission>;

    /// 评分分配管理方法
    // 整体替换分配集（全有或全无）
    async fn replace_assignment_set(
        &self,
        assessment_id: i64,
        entries: Vec<AssignmentEntry>,
    ) -> Result<AssessmentAssignmentSet>;
    // 获取分配集（不存在时条目为空）
    async fn get_assignment_set(&self, assessment_id: i64) -> Result<AssessmentAssignmentSet>;

    /// 考核结果管理方法
    // 写入或更新某学生的结果（每个学生唯一一条）
    async fn upsert_result(
        &self,
        assessment_id: i64,
        student_id: i64,
        entries: Vec<MarkEntry>,
        average_score: f64,
    ) -> Result<AssessmentResult>;
    // 列出考核的结果（分页）
    async fn list_results_with_pagination(
        &self,
        assessment_id: i64,
        query: PaginationQuery,
    ) -> Result<ResultListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
