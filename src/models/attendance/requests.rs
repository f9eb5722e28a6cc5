use chrono::NaiveDate;
use serde::Serialize;

use super::entities::AttendanceStatus;

// 单个学生的出勤标记
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendanceMark {
    pub student_id: i64,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// 批量标记一节课的出勤
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub lesson_id: i64,
    pub attendances: Vec<StudentAttendanceMark>,
}

// 出勤查询参数
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceFilter {
    pub organization_id: i64,
    pub page_number: i64,
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilter {
    pub fn for_organization(organization_id: i64) -> Self {
        Self {
            organization_id,
            page_number: 1,
            page_size: 10,
            group_id: None,
            student_id: None,
            from_date: None,
            to_date: None,
            status: None,
        }
    }
}
