//! 考勤服务
//!
//! 考勤接口部署在独立的服务上，与主服务共享会话。

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::info;

use crate::client::{ApiClient, HttpMethod};
use crate::errors::{Result, TrackademyError};
use crate::models::PaginatedResponse;
use crate::models::attendance::{
    entities::{AttendanceRecord, AttendanceStatus, StudentAttendanceStats},
    requests::{AttendanceFilter, MarkAttendanceRequest, StudentAttendanceMark},
};

pub struct AttendanceService {
    client: ApiClient,
}

impl ApiClient {
    /// 考勤服务客户端，地址取自 `api.attendance_base_url`
    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(self.with_base_url(self.attendance_base_url()))
    }
}

impl AttendanceService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // 标记一节课的出勤
    pub async fn mark_attendance(
        &self,
        lesson_id: i64,
        marks: Vec<StudentAttendanceMark>,
    ) -> Result<()> {
        if marks.is_empty() {
            return Err(TrackademyError::validation("Нет студентов для отметки"));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = marks.iter().find(|m| !seen.insert(m.student_id)) {
            return Err(TrackademyError::validation(format!(
                "Студент {} отмечен несколько раз",
                duplicate.student_id
            )));
        }

        let count = marks.len();
        let request = MarkAttendanceRequest {
            lesson_id,
            attendances: marks,
        };
        self.client
            .request_unit(
                HttpMethod::Post,
                "Attendance/mark",
                Some(serde_json::to_value(&request)?),
            )
            .await?;
        info!("Attendance marked for lesson {} ({} students)", lesson_id, count);
        Ok(())
    }

    // 查询出勤记录
    pub async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<PaginatedResponse<AttendanceRecord>> {
        if let (Some(from), Some(to)) = (filter.from_date, filter.to_date) {
            if from > to {
                return Err(TrackademyError::validation(
                    "Дата начала не может быть позже даты окончания",
                ));
            }
        }
        self.client.post("Attendance/filter", filter).await
    }

    // 修改单条出勤状态
    pub async fn update_status(
        &self,
        attendance_id: i64,
        status: AttendanceStatus,
        note: Option<String>,
    ) -> Result<AttendanceRecord> {
        let body = serde_json::json!({ "status": status, "note": note });
        self.client
            .patch(&format!("Attendance/{attendance_id}"), &body)
            .await
    }

    // 学生出勤统计
    pub async fn student_stats(
        &self,
        student_id: i64,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<StudentAttendanceStats> {
        let mut query = Vec::new();
        if let Some(from) = from_date {
            query.push(("fromDate".to_string(), from.to_string()));
        }
        if let Some(to) = to_date {
            query.push(("toDate".to_string(), to.to_string()));
        }
        self.client
            .get_with_query(&format!("Attendance/stats/student/{student_id}"), query)
            .await
    }

    /// 导出出勤记录为 Excel
    pub async fn export_attendance(&self, filter: &AttendanceFilter) -> Result<Vec<u8>> {
        self.client
            .download(
                HttpMethod::Post,
                "Attendance/export",
                Some(serde_json::to_value(filter)?),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::client_with;
    use crate::client::transport::MockHttpTransport;
    use crate::client::{HttpResponse, RequestBody};
    use serde_json::json;

    const ATTENDANCE_URL: &str = "https://attendance.trackademy.kz";

    #[tokio::test]
    async fn test_mark_attendance_uses_attendance_service() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.url == "https://attendance.trackademy.kz/Attendance/mark"
                    && request.body
                        == RequestBody::Json(json!({
                            "lessonId": 30,
                            "attendances": [
                                { "studentId": 1, "status": 1 },
                                { "studentId": 2, "status": 3, "note": "10 минут" },
                            ]
                        }))
            })
            .returning(|_| Ok(HttpResponse::new(204, "")));

        let test = client_with(transport);
        test.client
            .clone()
            .with_attendance_base_url(ATTENDANCE_URL)
            .attendance()
            .mark_attendance(
                30,
                vec![
                    StudentAttendanceMark {
                        student_id: 1,
                        status: AttendanceStatus::Present,
                        note: None,
                    },
                    StudentAttendanceMark {
                        student_id: 2,
                        status: AttendanceStatus::Late,
                        note: Some("10 минут".into()),
                    },
                ],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_mark_attendance_rejects_duplicates() {
        let test = client_with(MockHttpTransport::new());
        let mark = StudentAttendanceMark {
            student_id: 4,
            status: AttendanceStatus::Absent,
            note: None,
        };
        let err = test
            .client
            .clone()
            .with_attendance_base_url(ATTENDANCE_URL)
            .attendance()
            .mark_attendance(1, vec![mark.clone(), mark])
            .await
            .unwrap_err();
        assert!(err.message().contains("несколько раз"));
    }

    #[tokio::test]
    async fn test_list_rejects_inverted_range() {
        let test = client_with(MockHttpTransport::new());
        let mut filter = AttendanceFilter::for_organization(1);
        filter.from_date = NaiveDate::from_ymd_opt(2026, 10, 20);
        filter.to_date = NaiveDate::from_ymd_opt(2026, 10, 1);
        assert!(
            test.client
                .clone()
                .with_attendance_base_url(ATTENDANCE_URL)
                .attendance()
                .list_attendance(&filter)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_student_stats_passes_dates_as_query() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.url.ends_with("/Attendance/stats/student/5")
                    && request.query
                        == vec![
                            ("fromDate".to_string(), "2026-09-01".to_string()),
                            ("toDate".to_string(), "2026-09-30".to_string()),
                        ]
            })
            .returning(|_| {
                Ok(HttpResponse::new(
                    200,
                    r#"{"studentId":5,"totalLessons":12,"presentCount":10,"absentCount":2,"attendanceRate":83.3}"#,
                ))
            });

        let test = client_with(transport);
        let stats = test
            .client
            .clone()
            .with_attendance_base_url(ATTENDANCE_URL)
            .attendance()
            .student_stats(
                5,
                NaiveDate::from_ymd_opt(2026, 9, 1),
                NaiveDate::from_ymd_opt(2026, 9, 30),
            )
            .await
            .unwrap();
        assert_eq!(stats.total_lessons, 12);
        assert_eq!(stats.late_count, 0);
    }

    #[tokio::test]
    async fn test_attendance_url_comes_from_config() {
        use std::sync::Arc;

        use crate::client::testing::RecordingRedirect;
        use crate::client::{MemorySessionStore, SessionStore};
        use crate::config::ApiConfig;

        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.url == "https://attendance.trackademy.kz/api/Attendance/filter"
                    && request.header("Authorization") == Some("Bearer cfg-token")
            })
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, r#"{"items":[],"totalCount":0}"#)));

        let config = ApiConfig {
            base_url: "https://trackademy.kz/api".into(),
            attendance_base_url: "https://attendance.trackademy.kz/api/".into(),
            timeout_ms: 30000,
            user_agent: "trackademy-test".into(),
        };
        let session = Arc::new(MemorySessionStore::new());
        session
            .set(crate::client::session::AUTH_TOKEN_KEY, "cfg-token")
            .unwrap();
        let client = ApiClient::with_transport(
            &config,
            Arc::new(transport),
            session,
            Arc::new(RecordingRedirect::default()),
        );

        assert_eq!(client.base_url(), "https://trackademy.kz/api");
        let page = client
            .attendance()
            .list_attendance(&AttendanceFilter::for_organization(1))
            .await
            .unwrap();
        assert_eq!(page.total_count, 0);
    }
}
