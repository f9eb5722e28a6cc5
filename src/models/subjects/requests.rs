use serde::{Deserialize, Serialize};

use super::entities::Subject;
use crate::models::FormRecord;

// 科目表单，价格在实体中可选，但表单提交时必填
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectFormData {
    #[serde(skip)]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub organization_id: i64,
}

impl FormRecord for SubjectFormData {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

impl From<&Subject> for SubjectFormData {
    fn from(subject: &Subject) -> Self {
        Self {
            id: Some(subject.id),
            name: subject.name.clone(),
            description: subject.description.clone(),
            price: subject.price,
            organization_id: subject.organization_id,
        }
    }
}
