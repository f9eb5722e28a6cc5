use tracing::info;

use super::scoped_query;
use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::subjects::{entities::Subject, requests::SubjectFormData};
use crate::models::{ListQuery, PaginatedResponse};

pub struct SubjectService {
    client: ApiClient,
}

impl SubjectService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_subjects(&self, query: ListQuery) -> Result<PaginatedResponse<Subject>> {
        let query = scoped_query(&self.client, query);
        self.client.post("Subject/GetAllSubjects", &query).await
    }

    pub async fn get_subject(&self, id: i64) -> Result<Subject> {
        self.client.get(&format!("Subject/{id}")).await
    }

    pub async fn create_subject(&self, form: &SubjectFormData) -> Result<Subject> {
        let created: Subject = self.client.post("Subject/create", form).await?;
        info!("Subject created: {}", created.id);
        Ok(created)
    }

    pub async fn update_subject(&self, id: i64, form: &SubjectFormData) -> Result<Subject> {
        self.client.put(&format!("Subject/{id}"), form).await
    }

    pub async fn delete_subject(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("Subject/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{client_with, respond_with};
    use crate::client::transport::MockHttpTransport;
    use crate::client::{HttpMethod, HttpResponse, RequestBody};
    use serde_json::json;

    #[tokio::test]
    async fn test_create_posts_price() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.method == HttpMethod::Post
                    && request.url.ends_with("/Subject/create")
                    && request.body
                        == RequestBody::Json(json!({
                            "name": "Математика",
                            "description": "",
                            "price": 25000.0,
                            "organizationId": 2,
                        }))
            })
            .returning(|_| {
                Ok(HttpResponse::new(
                    200,
                    r#"{"id":11,"name":"Математика","price":25000,"organizationId":2}"#,
                ))
            });

        let test = client_with(transport);
        let form = SubjectFormData {
            name: "Математика".into(),
            price: Some(25000.0),
            organization_id: 2,
            ..Default::default()
        };
        let subject = test.client.subjects().create_subject(&form).await.unwrap();
        assert_eq!(subject.id, 11);
        assert_eq!(subject.price, Some(25000.0));
    }

    #[tokio::test]
    async fn test_delete_surfaces_backend_message() {
        let test = client_with(respond_with(
            409,
            r#"{"error":"Предмет используется в группах"}"#,
        ));
        let err = test.client.subjects().delete_subject(4).await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.message(), "Предмет используется в группах");
    }
}
