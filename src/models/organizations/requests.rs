use serde::{Deserialize, Serialize};

use super::entities::Organization;
use crate::models::FormRecord;

// 机构表单（创建/编辑共用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationFormData {
    #[serde(skip)]
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl FormRecord for OrganizationFormData {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

impl From<&Organization> for OrganizationFormData {
    fn from(org: &Organization) -> Self {
        Self {
            id: Some(org.id),
            name: org.name.clone(),
            phone: crate::utils::phone::format_phone_display(&org.phone),
            address: org.address.clone(),
        }
    }
}

impl OrganizationFormData {
    /// 提交前规范化电话号码
    pub fn to_request(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            phone: crate::utils::phone::format_phone_for_api(&self.phone),
            address: self.address.trim().to_string(),
        }
    }
}
