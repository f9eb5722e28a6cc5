pub mod files;

use tracing::info;

use crate::client::ApiClient;
use crate::errors::{Result, TrackademyError};
use crate::models::PaginatedResponse;
use crate::models::submissions::{
    entities::Submission,
    requests::{GradeSubmissionRequest, ReturnSubmissionRequest, SubmissionListQuery},
};

pub const MAX_SCORE: i32 = 100;

pub struct SubmissionService {
    client: ApiClient,
}

impl SubmissionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // 获取提交列表
    pub async fn list_submissions(
        &self,
        query: SubmissionListQuery,
    ) -> Result<PaginatedResponse<Submission>> {
        self.client.post("Submission/get-submissions", &query).await
    }

    // 获取提交详情
    pub async fn get_submission(&self, id: i64) -> Result<Submission> {
        self.client.get(&format!("Submission/{id}")).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        id: i64,
        score: i32,
        comment: Option<String>,
    ) -> Result<Submission> {
        if !(0..=MAX_SCORE).contains(&score) {
            return Err(TrackademyError::validation(format!(
                "Оценка должна быть от 0 до {MAX_SCORE}"
            )));
        }
        let request = GradeSubmissionRequest {
            score,
            teacher_comment: comment.filter(|c| !c.trim().is_empty()),
        };
        let graded: Submission = self
            .client
            .post(&format!("Submission/{id}/grade"), &request)
            .await?;
        info!("Submission {} graded with {}", id, score);
        Ok(graded)
    }

    // 退回修改，必须附带评语
    pub async fn return_submission(&self, id: i64, comment: &str) -> Result<Submission> {
        if comment.trim().is_empty() {
            return Err(TrackademyError::validation(
                "Укажите комментарий для возврата работы",
            ));
        }
        let request = ReturnSubmissionRequest {
            teacher_comment: comment.trim().to_string(),
        };
        self.client
            .post(&format!("Submission/{id}/return"), &request)
            .await
    }

    /// 上传附件
    pub async fn upload_file(
        &self,
        submission_id: i64,
        file_name: &str,
        content_type: Option<String>,
        data: Vec<u8>,
    ) -> Result<crate::models::submissions::entities::SubmissionFile> {
        files::upload_file(self, submission_id, file_name, content_type, data).await
    }

    /// 下载附件
    pub async fn download_file(&self, file_id: i64) -> Result<Vec<u8>> {
        files::download_file(self, file_id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::client_with;
    use crate::client::transport::MockHttpTransport;
    use crate::client::{HttpResponse, RequestBody};
    use crate::models::submissions::entities::SubmissionStatus;
    use serde_json::json;

    #[tokio::test]
    async fn test_grade_submission() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.url.ends_with("/Submission/11/grade")
                    && request.body == RequestBody::Json(json!({ "score": 95 }))
            })
            .returning(|_| {
                Ok(HttpResponse::new(
                    200,
                    r#"{"id":11,"assignmentId":2,"studentId":5,"status":2,"score":95,"files":[]}"#,
                ))
            });

        let test = client_with(transport);
        let submission = test
            .client
            .submissions()
            .grade_submission(11, 95, Some("  ".into()))
            .await
            .unwrap();
        assert_eq!(submission.status, SubmissionStatus::Graded);
        assert_eq!(submission.score, Some(95));
    }

    #[tokio::test]
    async fn test_grade_out_of_range_is_rejected_locally() {
        let test = client_with(MockHttpTransport::new());
        let err = test
            .client
            .submissions()
            .grade_submission(11, 101, None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn test_return_requires_comment() {
        let test = client_with(MockHttpTransport::new());
        assert!(
            test.client
                .submissions()
                .return_submission(3, " ")
                .await
                .is_err()
        );
    }
}
