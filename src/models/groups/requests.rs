use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entities::{Group, PaymentType};
use crate::models::FormRecord;

// 小组表单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupFormData {
    #[serde(skip)]
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
    pub level: String,
    pub subject_id: Option<i64>,
    pub student_ids: Vec<i64>,
    pub payment_type: PaymentType,
    pub monthly_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_end_date: Option<NaiveDate>,
    pub organization_id: i64,
}

impl FormRecord for GroupFormData {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

impl From<&Group> for GroupFormData {
    fn from(group: &Group) -> Self {
        Self {
            id: Some(group.id),
            name: group.name.clone(),
            code: group.code.clone(),
            level: group.level.clone(),
            subject_id: Some(group.subject.id).filter(|id| *id > 0),
            student_ids: group.students.iter().map(|s| s.id).collect(),
            payment_type: group.payment_type,
            monthly_price: group.monthly_price,
            course_end_date: group.course_end_date,
            organization_id: group.organization_id,
        }
    }
}

// 小组成员变更
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStudentRequest {
    pub group_id: i64,
    pub student_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::groups::entities::{StudentRef, SubjectRef};

    #[test]
    fn test_form_from_group_keeps_roster() {
        let group = Group {
            id: 7,
            name: "IELTS B2".into(),
            code: "ENG-7".into(),
            level: "B2".into(),
            subject: SubjectRef {
                id: 3,
                name: "English".into(),
            },
            students: vec![
                StudentRef {
                    id: 10,
                    name: "Айгерим".into(),
                },
                StudentRef {
                    id: 11,
                    name: "Данияр".into(),
                },
            ],
            payment_type: PaymentType::Monthly,
            monthly_price: 25000.0,
            course_end_date: None,
            organization_id: 1,
        };

        let form = GroupFormData::from(&group);
        assert_eq!(form.record_id(), Some(7));
        assert_eq!(form.subject_id, Some(3));
        assert_eq!(form.student_ids, vec![10, 11]);

        let body = serde_json::to_value(&form).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["paymentType"], 1);
        assert!(body.get("courseEndDate").is_none());
    }

    #[test]
    fn test_payment_type_rejects_unknown_value() {
        let err = serde_json::from_str::<PaymentType>("9").unwrap_err();
        assert!(err.to_string().contains("Invalid PaymentType"));
    }
}
