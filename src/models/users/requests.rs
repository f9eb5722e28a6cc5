use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entities::{User, UserRole};
use crate::models::{FormRecord, ListQuery};
use crate::utils::phone::{format_phone_display, format_phone_for_api};

// 用户表单（创建时需要密码，编辑时密码可选）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFormData {
    #[serde(skip)]
    pub id: Option<i64>,
    pub login: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: UserRole,
    pub organization_id: i64,
    pub is_trial: bool,
}

impl FormRecord for UserFormData {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

impl From<&User> for UserFormData {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            login: user.login.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: format_phone_display(&user.phone),
            parent_phone: user.parent_phone.as_deref().map(format_phone_display),
            birthday: user.birthday,
            password: None,
            role: user.role,
            organization_id: user.organization_id,
            is_trial: user.is_trial,
        }
    }
}

impl UserFormData {
    /// 生成请求体：电话号码转换为 API 格式，空值字段去掉
    pub fn to_request(&self) -> Self {
        let parent_phone = self
            .parent_phone
            .as_deref()
            .map(format_phone_for_api)
            .filter(|p| !p.is_empty());
        let password = self.password.clone().filter(|p| !p.is_empty());

        Self {
            id: self.id,
            login: self.login.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: format_phone_for_api(&self.phone),
            parent_phone,
            birthday: self.birthday,
            password,
            role: self.role,
            organization_id: self.organization_id,
            is_trial: self.is_trial,
        }
    }
}

// 用户列表查询参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[serde(flatten)]
    pub list: ListQuery,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_normalizes_phones() {
        let form = UserFormData {
            login: " student01 ".into(),
            name: "Алия".into(),
            phone: "+7 (777) 123-45-67".into(),
            parent_phone: Some("8 701 000 11 22".into()),
            password: Some(String::new()),
            ..Default::default()
        };

        let request = form.to_request();
        assert_eq!(request.login, "student01");
        assert_eq!(request.phone, "+77771234567");
        assert_eq!(request.parent_phone.as_deref(), Some("+77010001122"));
        assert_eq!(request.password, None);

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["role"], 1);
    }

    #[test]
    fn test_form_from_user_formats_phone_for_display() {
        let user = User {
            id: 5,
            login: "teacher".into(),
            name: "Ержан".into(),
            phone: "+77051112233".into(),
            role: UserRole::Teacher,
            ..Default::default()
        };
        let form = UserFormData::from(&user);
        assert_eq!(form.phone, "+7 (705) 111-22-33");
        assert_eq!(form.record_id(), Some(5));
        assert_eq!(form.password, None);
    }
}
