pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::questions::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::storage::Storage;

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
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

    /// 创建题目
    pub async fn create_question(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
        req: CreateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_question(self, request, assessment_id, req).await
    }

    /// 列出考核的全部题目
    pub async fn list_questions(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_questions(self, request, assessment_id).await
    }

    /// 更新题目
    pub async fn update_question(
        &self,
        request: &HttpRequest,
        question_id: i64,
        req: UpdateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_question(self, request, question_id, req).await
    }

    /// 删除题目
    pub async fn delete_question(
        &self,
        request: &HttpRequest,
        question_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, request, question_id).await
    }
}
