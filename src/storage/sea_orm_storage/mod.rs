//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assessments;
mod assignments;
mod questions;
mod results;
mod submissions;

use crate::config::AppConfig;
use crate::errors::{EngineError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EngineError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EngineError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EngineError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EngineError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EngineError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 考核模块
    async fn create_assessment(&self, req: CreateAssessmentRequest) -> Result<Assessment> {
        self.create_assessment_impl(req).await
    }

    async fn get_assessment_by_id(&self, id: i64) -> Result<Option<Assessment>> {
        self.get_assessment_by_id_impl(id).await
    }

    async fn release_assessment(&self, id: i64) -> Result<Assessment> {
        self.release_assessment_impl(id).await
    }

    async fn recall_assessment(&self, id: i64) -> Result<Assessment> {
        self.recall_assessment_impl(id).await
    }

    // 题目模块
    async fn create_question(
        &self,
        assessment_id: i64,
        req: CreateQuestionRequest,
        force_locked: bool,
        force_required: bool,
    ) -> Result<Question> {
        self.create_question_impl(assessment_id, req, force_locked, force_required)
            .await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    async fn list_questions(&self, assessment_id: i64) -> Result<Vec<Question>> {
        self.list_questions_impl(assessment_id).await
    }

    // 提交模块
    async fn save_submission(
        &self,
        grader_id: i64,
        req: SaveSubmissionRequest,
        score: f64,
        release_number: i32,
    ) -> Result<Submission> {
        self.save_submission_impl(grader_id, req, score, release_number)
            .await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn find_submission(
        &self,
        assessment_id: i64,
        grader_id: i64,
        target_id: i64,
    ) -> Result<Option<Submission>> {
        self.find_submission_impl(assessment_id, grader_id, target_id)
            .await
    }

    async fn list_submissions_by_grader(
        &self,
        assessment_id: i64,
        grader_id: i64,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_by_grader_impl(assessment_id, grader_id)
            .await
    }

    async fn delete_submission(&self, id: i64) -> Result<Submission> {
        self.delete_submission_impl(id).await
    }

    async fn adjust_submission_score(&self, id: i64, adjusted_score: f64) -> Result<Submission> {
        self.adjust_submission_score_impl(id, adjusted_score).await
    }

    // 评分分配模块
    async fn replace_assignment_set(
        &self,
        assessment_id: i64,
        entries: Vec<AssignmentEntry>,
    ) -> Result<AssessmentAssignmentSet> {
        self.replace_assignment_set_impl(assessment_id, entries)
            .await
    }

    async fn get_assignment_set(&self, assessment_id: i64) -> Result<AssessmentAssignmentSet> {
        self.get_assignment_set_impl(assessment_id).await
    }

    // 结果模块
    async fn upsert_result(
        &self,
        assessment_id: i64,
        student_id: i64,
        entries: Vec<MarkEntry>,
        average_score: f64,
    ) -> Result<AssessmentResult> {
        self.upsert_result_impl(assessment_id, student_id, entries, average_score)
            .await
    }

    async fn list_results_with_pagination(
        &self,
        assessment_id: i64,
        query: PaginationQuery,
    ) -> Result<ResultListResponse> {
        self.list_results_with_pagination_impl(assessment_id, query)
            .await
    }
}
