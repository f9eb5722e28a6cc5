//! 机构概况报表

use futures_util::try_join;
use serde::Serialize;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::ListQuery;
use crate::models::users::requests::UserListQuery;

// 机构各类实体数量
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummary {
    pub organization_id: Option<i64>,
    pub rooms: i64,
    pub subjects: i64,
    pub groups: i64,
    pub users: i64,
}

pub struct ReportService {
    client: ApiClient,
}

impl ReportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 并发获取各列表的总数（每个列表只取一条）
    pub async fn organization_summary(
        &self,
        organization_id: Option<i64>,
    ) -> Result<OrganizationSummary> {
        let query = ListQuery::page(1, 1).with_organization(organization_id);
        let rooms = self.client.rooms();
        let subjects = self.client.subjects();
        let groups = self.client.groups();
        let users = self.client.users();

        let (rooms, subjects, groups, users) = try_join!(
            rooms.list_rooms(query.clone()),
            subjects.list_subjects(query.clone()),
            groups.list_groups(query.clone()),
            users.list_users(UserListQuery {
                list: query.clone(),
                ..Default::default()
            }),
        )?;

        Ok(OrganizationSummary {
            organization_id: organization_id.or_else(|| self.client.session().organization_id()),
            rooms: rooms.total_count,
            subjects: subjects.total_count,
            groups: groups.total_count,
            users: users.total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpResponse;
    use crate::client::testing::client_with;
    use crate::client::transport::MockHttpTransport;

    #[tokio::test]
    async fn test_summary_collects_totals() {
        let mut transport = MockHttpTransport::new();
        transport.expect_execute().times(4).returning(|request| {
            let total = if request.url.ends_with("GetAllRooms") {
                3
            } else if request.url.ends_with("GetAllSubjects") {
                5
            } else if request.url.ends_with("get-groups") {
                8
            } else {
                120
            };
            Ok(HttpResponse::new(
                200,
                format!(r#"{{"items":[],"totalCount":{total}}}"#),
            ))
        });

        let test = client_with(transport);
        let summary = test
            .client
            .reports()
            .organization_summary(Some(2))
            .await
            .unwrap();
        assert_eq!(
            summary,
            OrganizationSummary {
                organization_id: Some(2),
                rooms: 3,
                subjects: 5,
                groups: 8,
                users: 120,
            }
        );
    }

    #[tokio::test]
    async fn test_summary_fails_when_any_list_fails() {
        let mut transport = MockHttpTransport::new();
        transport.expect_execute().returning(|request| {
            if request.url.ends_with("get-groups") {
                Ok(HttpResponse::new(500, r#"{"message":"db down"}"#))
            } else {
                Ok(HttpResponse::new(200, r#"{"items":[],"totalCount":1}"#))
            }
        });

        let test = client_with(transport);
        let err = test
            .client
            .reports()
            .organization_summary(Some(2))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "db down");
    }
}
