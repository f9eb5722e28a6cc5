use tracing::info;

use super::scoped_query;
use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::rooms::{entities::Room, requests::RoomFormData};
use crate::models::{ListQuery, PaginatedResponse};

pub struct RoomService {
    client: ApiClient,
}

impl RoomService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // 获取教室列表（分页）
    pub async fn list_rooms(&self, query: ListQuery) -> Result<PaginatedResponse<Room>> {
        let query = scoped_query(&self.client, query);
        self.client.post("Room/GetAllRooms", &query).await
    }

    pub async fn get_room(&self, id: i64) -> Result<Room> {
        self.client.get(&format!("Room/{id}")).await
    }

    pub async fn create_room(&self, form: &RoomFormData) -> Result<Room> {
        let created: Room = self.client.post("Room/create", form).await?;
        info!("Room created: {}", created.id);
        Ok(created)
    }

    pub async fn update_room(&self, id: i64, form: &RoomFormData) -> Result<Room> {
        self.client.put(&format!("Room/{id}"), form).await
    }

    pub async fn delete_room(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("Room/{id}")).await?;
        info!("Room deleted: {}", id);
        Ok(())
    }
}
