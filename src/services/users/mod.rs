pub mod import;

use tracing::info;

use super::scoped_query;
use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::PaginatedResponse;
use crate::models::users::{
    entities::User,
    requests::{UserFormData, UserListQuery},
};

pub use import::ImportResult;

pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // 获取用户列表
    pub async fn list_users(&self, mut query: UserListQuery) -> Result<PaginatedResponse<User>> {
        query.list = scoped_query(&self.client, query.list);
        self.client.post("User/get-users", &query).await
    }

    // 根据ID获取用户
    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.client.get(&format!("User/{id}")).await
    }

    // 创建用户
    pub async fn create_user(&self, form: &UserFormData) -> Result<User> {
        let created: User = self.client.post("User/create", &form.to_request()).await?;
        info!("User created: {} ({})", created.id, created.login);
        Ok(created)
    }

    // 更新用户信息，密码为空时不修改
    pub async fn update_user(&self, id: i64, form: &UserFormData) -> Result<User> {
        self.client
            .put(&format!("User/update-user/{id}"), &form.to_request())
            .await
    }

    // 删除用户
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("User/{id}")).await?;
        info!("User deleted: {}", id);
        Ok(())
    }

    /// 从 Excel 批量导入用户
    pub async fn import_users(
        &self,
        file_name: &str,
        data: Vec<u8>,
        organization_id: i64,
    ) -> Result<ImportResult> {
        import::import_users(self, file_name, data, organization_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::client_with;
    use crate::client::transport::MockHttpTransport;
    use crate::client::{HttpResponse, RequestBody};
    use crate::models::users::entities::UserRole;

    #[tokio::test]
    async fn test_create_user_sends_normalized_form() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| match &request.body {
                RequestBody::Json(body) => {
                    request.url.ends_with("/User/create")
                        && body["phone"] == "+77071234567"
                        && body["password"] == "secret1"
                        && body["role"] == 3
                }
                _ => false,
            })
            .returning(|_| {
                Ok(HttpResponse::new(
                    200,
                    r#"{"id":15,"login":"teacher1","name":"Асель","phone":"+77071234567","role":3,"organizationId":1}"#,
                ))
            });

        let test = client_with(transport);
        let form = UserFormData {
            login: "teacher1".into(),
            name: "Асель".into(),
            phone: "8 (707) 123-45-67".into(),
            password: Some("secret1".into()),
            role: UserRole::Teacher,
            organization_id: 1,
            ..Default::default()
        };

        let user = test.client.users().create_user(&form).await.unwrap();
        assert_eq!(user.id, 15);
        assert_eq!(user.role, UserRole::Teacher);
    }

    #[tokio::test]
    async fn test_list_users_filters_by_role() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| match &request.body {
                RequestBody::Json(body) => body["roles"] == serde_json::json!([1]),
                _ => false,
            })
            .returning(|_| Ok(HttpResponse::new(200, r#"{"items":[],"totalCount":0}"#)));

        let test = client_with(transport);
        let query = UserListQuery {
            roles: vec![UserRole::Student],
            ..Default::default()
        };
        let page = test.client.users().list_users(query).await.unwrap();
        assert!(page.items.is_empty());
    }
}
