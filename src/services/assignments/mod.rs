use tracing::info;

use super::scoped_query;
use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::PaginatedResponse;
use crate::models::assignments::{
    entities::Assignment,
    requests::{AssignmentFormData, AssignmentListQuery},
};

pub struct AssignmentService {
    client: ApiClient,
}

impl AssignmentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // 获取作业列表
    pub async fn list_assignments(
        &self,
        mut query: AssignmentListQuery,
    ) -> Result<PaginatedResponse<Assignment>> {
        query.list = scoped_query(&self.client, query.list);
        self.client.post("Assignment/get-assignments", &query).await
    }

    pub async fn get_assignment(&self, id: i64) -> Result<Assignment> {
        self.client.get(&format!("Assignment/{id}")).await
    }

    pub async fn create_assignment(&self, form: &AssignmentFormData) -> Result<Assignment> {
        let created: Assignment = self.client.post("Assignment/create", form).await?;
        info!(
            "Assignment created: {} for group {}",
            created.id, created.group_id
        );
        Ok(created)
    }

    pub async fn update_assignment(
        &self,
        id: i64,
        form: &AssignmentFormData,
    ) -> Result<Assignment> {
        self.client.put(&format!("Assignment/{id}"), form).await
    }

    pub async fn delete_assignment(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("Assignment/{id}")).await
    }
}
