pub mod create;
pub mod detail;
pub mod release;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assessments::requests::CreateAssessmentRequest;
use crate::storage::Storage;

pub struct AssessmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssessmentService {
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

    /// 创建考核
    pub async fn create_assessment(
        &self,
        request: &HttpRequest,
        req: CreateAssessmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assessment(self, request, req).await
    }

    /// 获取考核详情
    pub async fn get_assessment(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_assessment(self, request, assessment_id).await
    }

    /// 发布考核
    pub async fn release_assessment(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
    ) -> ActixResult<HttpResponse> {
        release::release_assessment(self, request, assessment_id).await
    }

    /// 撤回考核
    pub async fn recall_assessment(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
    ) -> ActixResult<HttpResponse> {
        release::recall_assessment(self, request, assessment_id).await
    }
}
