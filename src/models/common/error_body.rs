//! 后端错误响应体
//!
//! 后端存在多种错误格式：
//! - `{"error": "..."}`
//! - `{"errors": {"field": ["..."]}}` 或 `{"errors": ["..."]}`（校验错误）
//! - `{"title": "..."}`（ProblemDetails）
//! - `{"message": "..."}`

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub errors: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ApiErrorBody {
    /// 按 error → errors → title → message 的顺序提取第一条可用消息
    pub fn extract_message(&self) -> Option<String> {
        if let Some(msg) = self.error.as_ref().and_then(non_empty_str) {
            return Some(msg);
        }
        if let Some(msg) = self.errors.as_ref().and_then(validation_messages) {
            return Some(msg);
        }
        if let Some(msg) = self.title.as_ref().and_then(non_empty_str) {
            return Some(msg);
        }
        self.message.as_ref().and_then(non_empty_str)
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// 校验错误：对象中每个字段可能是字符串或字符串数组
fn validation_messages(value: &Value) -> Option<String> {
    let mut messages = Vec::new();
    match value {
        Value::Object(map) => {
            for field_value in map.values() {
                collect_strings(field_value, &mut messages);
            }
        }
        other => collect_strings(other, &mut messages),
    }

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_strings(item, out);
            }
        }
        other => {
            if let Some(msg) = non_empty_str(other) {
                out.push(msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ApiErrorBody {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_error_field_wins() {
        let body = parse(r#"{"error":"Группа не найдена","title":"Not Found"}"#);
        assert_eq!(body.extract_message().as_deref(), Some("Группа не найдена"));
    }

    #[test]
    fn test_validation_map() {
        let body = parse(
            r#"{"title":"One or more validation errors occurred.","errors":{"name":["required"]}}"#,
        );
        assert_eq!(body.extract_message().as_deref(), Some("required"));
    }

    #[test]
    fn test_validation_map_joins_fields() {
        let body = parse(r#"{"errors":{"login":["taken"],"phone":["invalid","too short"]}}"#);
        assert_eq!(
            body.extract_message().as_deref(),
            Some("taken; invalid; too short")
        );
    }

    #[test]
    fn test_title_then_message() {
        assert_eq!(
            parse(r#"{"title":"Bad Request","message":"ignored"}"#)
                .extract_message()
                .as_deref(),
            Some("Bad Request")
        );
        assert_eq!(
            parse(r#"{"message":"Ошибка"}"#).extract_message().as_deref(),
            Some("Ошибка")
        );
    }

    #[test]
    fn test_unknown_shape() {
        assert_eq!(parse(r#"{"detail":"x","errors":{}}"#).extract_message(), None);
    }
}
