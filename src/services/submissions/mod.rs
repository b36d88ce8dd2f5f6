pub mod adjust;
pub mod delete;
pub mod detail;
pub mod list;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{AdjustScoreRequest, SaveSubmissionRequest};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 保存提交（创建或覆盖草稿，可定稿）
    pub async fn save_submission(
        &self,
        request: &HttpRequest,
        grader_id: i64,
        req: SaveSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_submission(self, request, grader_id, req).await
    }

    /// 获取提交详情
    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission(self, request, submission_id).await
    }

    /// 列出当前评分人在某考核下的提交
    pub async fn list_my_submissions(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
        grader_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_my_submissions(self, request, assessment_id, grader_id).await
    }

    /// 删除草稿提交
    pub async fn delete_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_submission(self, request, submission_id).await
    }

    /// 设置修正分
    pub async fn adjust_score(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: AdjustScoreRequest,
    ) -> ActixResult<HttpResponse> {
        adjust::adjust_score(self, request, submission_id, req).await
    }
}
