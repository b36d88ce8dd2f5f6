//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_engine_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EngineError {
            $($variant(String),)*
        }

        impl EngineError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EngineError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EngineError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EngineError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EngineError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EngineError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_engine_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Serialization("E004", "Serialization Error"),
    DateParse("E005", "Date Parse Error"),
    Validation("E006", "Validation Error"),
    TypeMismatch("E007", "Answer Type Mismatch"),
    AlreadyFinalized("E008", "Submission Already Finalized"),
    InvalidState("E009", "Invalid State"),
    Locked("E010", "Question Locked"),
    NotFound("E011", "Resource Not Found"),
}

impl EngineError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EngineError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EngineError {
    fn from(err: sea_orm::DbErr) -> Self {
        EngineError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EngineError {
    fn from(err: chrono::ParseError) -> Self {
        EngineError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EngineError::database_config("test").code(), "E001");
        assert_eq!(EngineError::validation("test").code(), "E006");
        assert_eq!(EngineError::type_mismatch("test").code(), "E007");
        assert_eq!(EngineError::already_finalized("test").code(), "E008");
        assert_eq!(EngineError::locked("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EngineError::already_finalized("test").error_type(),
            "Submission Already Finalized"
        );
        assert_eq!(
            EngineError::type_mismatch("test").error_type(),
            "Answer Type Mismatch"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EngineError::invalid_state("Submission is not a draft");
        assert_eq!(err.message(), "Submission is not a draft");
    }

    #[test]
    fn test_format_simple() {
        let err = EngineError::locked("Question 3 is locked");
        let formatted = err.format_simple();
        assert!(formatted.contains("Question Locked"));
        assert!(formatted.contains("Question 3 is locked"));
    }
}
