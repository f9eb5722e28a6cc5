use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::groups::entities::SubjectRef;

// 作业所属小组（精简）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentGroup {
    pub id: i64,
    pub name: String,
}

// 作业：绑定到单个小组
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub description: String,
    pub group_id: i64,
    pub assigned_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub group: AssignmentGroup,
    #[serde(default)]
    pub subject: SubjectRef,
}

impl Assignment {
    /// 截止时间已过
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now)
    }
}
