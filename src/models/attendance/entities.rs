use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

define_int_enum! {
    /// 出勤状态
    AttendanceStatus {
        Present = 1 => "Присутствовал",
        Absent = 2 => "Отсутствовал",
        Late = 3 => "Опоздал",
        Excused = 4 => "Уважительная причина",
    }
}

// 出勤记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub lesson_id: i64,
    pub date: Option<NaiveDate>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub note: Option<String>,
}

// 学生出勤统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendanceStats {
    pub student_id: i64,
    #[serde(default)]
    pub total_lessons: i64,
    #[serde(default)]
    pub present_count: i64,
    #[serde(default)]
    pub absent_count: i64,
    #[serde(default)]
    pub late_count: i64,
    #[serde(default)]
    pub excused_count: i64,
    #[serde(default)]
    pub attendance_rate: f64,
}
