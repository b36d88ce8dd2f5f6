use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentService, builder};
use crate::models::assignments::requests::GenerateAssignmentSetRequest;
use crate::models::assignments::responses::AssignmentSetResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::results::recompute;

/// 生成（替换）分配集
///
/// 旧分配集整体作废，新分配集一次性落库（全有或全无）。
/// 替换后重算全部成员的结果：换了评分人的对象，其结果来源已变化。
pub async fn generate_assignment_set(
    service: &AssignmentService,
    request: &HttpRequest,
    assessment_id: i64,
    req: GenerateAssignmentSetRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assessment_by_id(assessment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssessmentNotFound,
                "考核不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考核失败: {e}"),
                )),
            );
        }
    }

    if req.targets.is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "对象名册不能为空",
        )));
    }

    // 重复对象交由请求校验拒绝，而不是落库时撞唯一索引
    if let Some(dup) = builder::duplicate_target_id(&req.targets) {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("对象 {dup} 在名册中重复"),
        )));
    }

    let per_target = req.graders_per_target.unwrap_or(1);
    let entries = builder::build_assignment_entries(req.targets, req.grader_ids, per_target);

    let set = match storage.replace_assignment_set(assessment_id, entries).await {
        Ok(set) => set,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("替换分配集失败: {e}"),
                )),
            );
        }
    };

    // 新分配生效后刷新每个成员的结果
    for entry in &set.entries {
        if let Err(e) =
            recompute::recompute_for_target(&storage, assessment_id, entry.target_id).await
        {
            tracing::warn!("Result recompute after assignment replace failed: {}", e);
        }
    }

    let uncovered_target_ids = set
        .entries
        .iter()
        .filter(|e| e.grader_ids.is_empty())
        .map(|e| e.target_id)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentSetResponse {
            assessment_id: set.assessment_id,
            entries: set.entries,
            uncovered_target_ids,
        },
        "分配集已生成",
    )))
}
