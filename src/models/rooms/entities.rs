use serde::{Deserialize, Serialize};

// 教室
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub capacity: i32,
    pub organization_id: i64,
}
