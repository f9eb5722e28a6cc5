//! 类型化的后端服务
//!
//! 每个服务只是 `ApiClient` 上对一组路由的封装，不做缓存。

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod exports;
pub mod groups;
pub mod organizations;
pub mod reports;
pub mod rooms;
pub mod subjects;
pub mod submissions;
pub mod users;

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use exports::ExportService;
pub use groups::GroupService;
pub use organizations::OrganizationService;
pub use reports::ReportService;
pub use rooms::RoomService;
pub use subjects::SubjectService;
pub use submissions::SubmissionService;
pub use users::UserService;

use crate::client::ApiClient;
use crate::models::ListQuery;

impl ApiClient {
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.clone())
    }

    pub fn organizations(&self) -> OrganizationService {
        OrganizationService::new(self.clone())
    }

    pub fn rooms(&self) -> RoomService {
        RoomService::new(self.clone())
    }

    pub fn subjects(&self) -> SubjectService {
        SubjectService::new(self.clone())
    }

    pub fn groups(&self) -> GroupService {
        GroupService::new(self.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.clone())
    }

    pub fn assignments(&self) -> AssignmentService {
        AssignmentService::new(self.clone())
    }

    pub fn submissions(&self) -> SubmissionService {
        SubmissionService::new(self.clone())
    }

    pub fn exports(&self) -> ExportService {
        ExportService::new(self.clone())
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(self.clone())
    }
}

/// 查询未指定机构时，使用当前登录用户所在机构
pub(crate) fn scoped_query(client: &ApiClient, mut query: ListQuery) -> ListQuery {
    if query.organization_id.is_none() {
        query.organization_id = client.session().organization_id();
    }
    query
}
