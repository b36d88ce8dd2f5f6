use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::EngineError;

/// 业务错误码
///
/// 前两位沿用 HTTP 状态语义，后三位为业务内细分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求格式错误
    BadRequest = 40000,
    InvalidQueryParams = 40001,
    InvalidJsonBody = 40002,

    // 401xx 身份缺失
    Unauthorized = 40100,

    // 404xx 资源不存在
    NotFound = 40400,
    AssessmentNotFound = 40401,
    QuestionNotFound = 40402,
    SubmissionNotFound = 40403,
    AssignmentSetNotFound = 40404,

    // 409xx 状态冲突
    Conflict = 40900,
    AlreadyFinalized = 40901,
    InvalidState = 40902,
    QuestionLocked = 40903,

    // 422xx 业务校验失败
    ValidationFailed = 42200,
    AnswerTypeMismatch = 42201,
    MissingRequiredAnswers = 42202,

    // 500xx 服务端错误
    InternalServerError = 50000,
}

impl ErrorCode {
    /// 将引擎错误映射为业务错误码
    pub fn from_engine_error(err: &EngineError) -> Self {
        match err {
            EngineError::Validation(_) => ErrorCode::ValidationFailed,
            EngineError::TypeMismatch(_) => ErrorCode::AnswerTypeMismatch,
            EngineError::AlreadyFinalized(_) => ErrorCode::AlreadyFinalized,
            EngineError::InvalidState(_) => ErrorCode::InvalidState,
            EngineError::Locked(_) => ErrorCode::QuestionLocked,
            EngineError::NotFound(_) => ErrorCode::NotFound,
            _ => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_mapping() {
        assert_eq!(
            ErrorCode::from_engine_error(&EngineError::validation("bad scale")),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ErrorCode::from_engine_error(&EngineError::already_finalized("no overwrite")),
            ErrorCode::AlreadyFinalized
        );
        assert_eq!(
            ErrorCode::from_engine_error(&EngineError::locked("released")),
            ErrorCode::QuestionLocked
        );
        assert_eq!(
            ErrorCode::from_engine_error(&EngineError::database_operation("boom")),
            ErrorCode::InternalServerError
        );
    }

    #[test]
    fn test_discriminants() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::AlreadyFinalized as i32, 40901);
        assert_eq!(ErrorCode::AnswerTypeMismatch as i32, 42201);
    }
}
