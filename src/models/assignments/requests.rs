use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::Assignment;
use crate::models::{FormRecord, ListQuery};

// 作业表单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentFormData {
    #[serde(skip)]
    pub id: Option<i64>,
    pub description: String,
    pub group_id: Option<i64>,
    pub assigned_date: Option<DateTime<Utc>>, // ISO 8601 格式
    pub due_date: Option<DateTime<Utc>>,
}

impl FormRecord for AssignmentFormData {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

impl From<&Assignment> for AssignmentFormData {
    fn from(assignment: &Assignment) -> Self {
        Self {
            id: Some(assignment.id),
            description: assignment.description.clone(),
            group_id: Some(assignment.group_id),
            assigned_date: assignment.assigned_date,
            due_date: assignment.due_date,
        }
    }
}

// 作业列表查询参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentListQuery {
    #[serde(flatten)]
    pub list: ListQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
}
