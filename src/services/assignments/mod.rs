pub mod builder;
pub mod generate;
pub mod get;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::GenerateAssignmentSetRequest;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    /// 生成并整体替换分配集
    pub async fn generate_assignment_set(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
        req: GenerateAssignmentSetRequest,
    ) -> ActixResult<HttpResponse> {
        generate::generate_assignment_set(self, request, assessment_id, req).await
    }

    /// 获取分配集
    pub async fn get_assignment_set(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment_set(self, request, assessment_id).await
    }
}
