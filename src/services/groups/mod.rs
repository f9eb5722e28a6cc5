use tracing::info;

use super::scoped_query;
use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::groups::{
    entities::Group,
    requests::{GroupFormData, GroupStudentRequest},
};
use crate::models::{ListQuery, PaginatedResponse};

pub struct GroupService {
    client: ApiClient,
}

impl GroupService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // 获取小组列表（分页，含成员名单）
    pub async fn list_groups(&self, query: ListQuery) -> Result<PaginatedResponse<Group>> {
        let query = scoped_query(&self.client, query);
        self.client.post("Group/get-groups", &query).await
    }

    pub async fn get_group(&self, id: i64) -> Result<Group> {
        self.client.get(&format!("Group/{id}")).await
    }

    pub async fn create_group(&self, form: &GroupFormData) -> Result<Group> {
        let created: Group = self.client.post("Group/create", form).await?;
        info!("Group created: {} ({})", created.id, created.name);
        Ok(created)
    }

    pub async fn update_group(&self, id: i64, form: &GroupFormData) -> Result<Group> {
        self.client.put(&format!("Group/{id}"), form).await
    }

    pub async fn delete_group(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("Group/{id}")).await
    }

    // 添加学生到小组
    pub async fn add_student(&self, group_id: i64, student_id: i64) -> Result<()> {
        let body = serde_json::to_value(GroupStudentRequest {
            group_id,
            student_id,
        })?;
        self.client
            .request_unit(
                crate::client::HttpMethod::Post,
                "Group/add-student",
                Some(body),
            )
            .await
    }

    // 从小组移除学生
    pub async fn remove_student(&self, group_id: i64, student_id: i64) -> Result<()> {
        let body = serde_json::to_value(GroupStudentRequest {
            group_id,
            student_id,
        })?;
        self.client
            .request_unit(
                crate::client::HttpMethod::Post,
                "Group/remove-student",
                Some(body),
            )
            .await
    }
}
