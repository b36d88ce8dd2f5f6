pub mod list;
pub mod recompute;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::PaginationQuery;
use crate::storage::Storage;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
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

    /// 列出考核的结果（分页）
    pub async fn list_results(
        &self,
        request: &HttpRequest,
        assessment_id: i64,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_results(self, request, assessment_id, query).await
    }
}
