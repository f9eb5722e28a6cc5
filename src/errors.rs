//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 后端返回的非 2xx 响应单独作为 `Api` 变体，携带原始 HTTP 状态码。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义（外加固定的 `Api { status, message }` 变体）
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_trackademy_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum TrackademyError {
            $($variant(String),)*
            /// 后端返回的错误响应
            Api { status: u16, message: String },
        }

        impl TrackademyError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TrackademyError::$variant(_) => $code,)*
                    TrackademyError::Api { .. } => "E100",
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TrackademyError::$variant(_) => $type_name,)*
                    TrackademyError::Api { .. } => "API Error",
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TrackademyError::$variant(msg) => msg,)*
                    TrackademyError::Api { message, .. } => message,
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TrackademyError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TrackademyError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_trackademy_errors! {
    Configuration("E001", "Configuration Error"),
    Session("E002", "Session Storage Error"),
    Network("E003", "Network Error"),
    Serialization("E004", "Serialization Error"),
    Validation("E005", "Validation Error"),
    Authentication("E006", "Authentication Error"),
    Authorization("E007", "Authorization Error"),
    NotFound("E008", "Resource Not Found"),
    FileOperation("E009", "File Operation Error"),
    DateParse("E010", "Date Parse Error"),
}

impl TrackademyError {
    /// 构造后端错误
    pub fn api<T: Into<String>>(status: u16, msg: T) -> Self {
        TrackademyError::Api {
            status,
            message: msg.into(),
        }
    }

    /// HTTP 状态码（仅后端错误携带）
    pub fn status(&self) -> Option<u16> {
        match self {
            TrackademyError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

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
        match self.status() {
            Some(status) => format!("{} ({}): {}", self.error_type(), status, self.message()),
            None => format!("{}: {}", self.error_type(), self.message()),
        }
    }
}

impl fmt::Display for TrackademyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TrackademyError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for TrackademyError {
    fn from(err: std::io::Error) -> Self {
        TrackademyError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TrackademyError {
    fn from(err: serde_json::Error) -> Self {
        TrackademyError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TrackademyError {
    fn from(err: chrono::ParseError) -> Self {
        TrackademyError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for TrackademyError {
    fn from(err: config::ConfigError) -> Self {
        TrackademyError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackademyError>;
