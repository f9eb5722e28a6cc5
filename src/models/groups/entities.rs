use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

define_int_enum! {
    /// 付费方式
    PaymentType {
        Monthly = 1 => "Ежемесячно",
        OneTime = 2 => "За весь курс",
    }
}

// 小组所属科目（精简）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRef {
    pub id: i64,
    pub name: String,
}

// 小组成员（精简）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub id: i64,
    pub name: String,
}

// 学习小组，包含成员名单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub subject: SubjectRef,
    #[serde(default)]
    pub students: Vec<StudentRef>,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub monthly_price: f64,
    #[serde(default)]
    pub course_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub organization_id: i64,
}

impl Group {
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn has_student(&self, student_id: i64) -> bool {
        self.students.iter().any(|s| s.id == student_id)
    }
}
