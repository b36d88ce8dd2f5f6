use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::assessments::entities::Assessment;
use crate::models::questions::requests::CreateQuestionRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_question(
    service: &QuestionService,
    request: &HttpRequest,
    assessment_id: i64,
    req: CreateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验考核存在
    let assessment = match storage.get_assessment_by_id(assessment_id).await {
        Ok(Some(assessment)) => assessment,
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
    };

    // 已发布的考核不接收新题目，撤回后才可继续编辑
    if creation_blocked(&assessment) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::InvalidState,
            "考核已发布，不能新增题目",
        )));
    }

    // 校验题型配置
    if let Err(e) = req.data.validate() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            e.message(),
        )));
    }

    // 系统保留题型（NUSNET 学号/邮箱、队员选择）创建即锁定且必答
    let reserved = req.data.is_system_reserved();

    match storage
        .create_question(assessment_id, req, reserved, reserved)
        .await
    {
        Ok(question) => Ok(HttpResponse::Ok().json(ApiResponse::success(question, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建题目失败: {e}"),
            )),
        ),
    }
}

// 仅在发布中阻止建题，撤回（is_released 复位）后允许继续
fn creation_blocked(assessment: &Assessment) -> bool {
    assessment.is_released
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessments::entities::Granularity;

    fn assessment(is_released: bool, current_release_number: i32) -> Assessment {
        Assessment {
            id: 1,
            course_id: 1,
            title: "期中互评".to_string(),
            description: None,
            granularity: Granularity::Team,
            is_released,
            current_release_number,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_released_assessment_blocks_new_questions() {
        assert!(creation_blocked(&assessment(true, 1)));
    }

    #[test]
    fn test_draft_and_recalled_assessments_accept_new_questions() {
        assert!(!creation_blocked(&assessment(false, 0)));
        // 撤回后 is_released 复位但纪元保留
        assert!(!creation_blocked(&assessment(false, 2)));
    }
}
