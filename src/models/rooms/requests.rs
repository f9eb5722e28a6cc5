use serde::{Deserialize, Serialize};

use super::entities::Room;
use crate::models::FormRecord;

// 教室表单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomFormData {
    #[serde(skip)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capacity: i32,
    pub organization_id: i64,
}

impl FormRecord for RoomFormData {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

impl From<&Room> for RoomFormData {
    fn from(room: &Room) -> Self {
        Self {
            id: Some(room.id),
            name: room.name.clone(),
            description: room.description.clone(),
            capacity: room.capacity,
            organization_id: room.organization_id,
        }
    }
}
