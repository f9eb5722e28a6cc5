use tracing::info;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::organizations::{entities::Organization, requests::OrganizationFormData};

pub struct OrganizationService {
    client: ApiClient,
}

impl OrganizationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // 获取机构列表
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.client.get("Organization").await
    }

    pub async fn get_organization(&self, id: i64) -> Result<Organization> {
        self.client.get(&format!("Organization/{id}")).await
    }

    // 创建机构
    pub async fn create_organization(&self, form: &OrganizationFormData) -> Result<Organization> {
        let created: Organization = self
            .client
            .post("Organization/create", &form.to_request())
            .await?;
        info!("Organization created: {}", created.id);
        Ok(created)
    }

    // 更新机构
    pub async fn update_organization(
        &self,
        id: i64,
        form: &OrganizationFormData,
    ) -> Result<Organization> {
        self.client
            .put(&format!("Organization/{id}"), &form.to_request())
            .await
    }

    // 删除机构
    pub async fn delete_organization(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("Organization/{id}")).await?;
        info!("Organization deleted: {}", id);
        Ok(())
    }
}
