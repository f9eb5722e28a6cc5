use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_int_enum! {
    /// 作业提交状态
    ///
    /// 生命周期：Draft → Submitted → Graded / Returned，或 Overdue
    SubmissionStatus {
        Draft = 0 => "Черновик",
        Submitted = 1 => "Отправлено",
        Graded = 2 => "Оценено",
        Returned = 3 => "Возвращено",
        Overdue = 4 => "Просрочено",
    }
}

impl SubmissionStatus {
    /// 教师可评分的状态
    pub fn is_gradable(self) -> bool {
        matches!(self, SubmissionStatus::Submitted | SubmissionStatus::Overdue)
    }
}

// 提交附件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFile {
    pub id: i64,
    pub file_name: String,
    #[serde(default)]
    pub file_size: i64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

// 作业提交
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub files: Vec<SubmissionFile>,
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub teacher_comment: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub graded_at: Option<DateTime<Utc>>,
}
