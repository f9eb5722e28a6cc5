use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

define_int_enum! {
    /// 用户角色
    UserRole {
        Student = 1 => "Студент",
        Administrator = 2 => "Администратор",
        Teacher = 3 => "Преподаватель",
        Owner = 4 => "Владелец",
    }
}

impl UserRole {
    /// 是否拥有机构管理权限
    pub fn is_staff(self) -> bool {
        matches!(self, UserRole::Administrator | UserRole::Owner)
    }

    pub fn can_grade(self) -> bool {
        !matches!(self, UserRole::Student)
    }
}

// 用户实体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub login: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub parent_phone: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    pub role: UserRole,
    #[serde(default)]
    pub organization_id: i64,
    #[serde(default)]
    pub is_trial: bool,
}
