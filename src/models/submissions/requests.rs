use serde::Serialize;

use super::entities::SubmissionStatus;
use crate::models::ListQuery;

// 评分请求
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSubmissionRequest {
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_comment: Option<String>,
}

// 退回修改请求
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnSubmissionRequest {
    pub teacher_comment: String,
}

// 提交列表查询参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListQuery {
    #[serde(flatten)]
    pub list: ListQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubmissionStatus>,
}
