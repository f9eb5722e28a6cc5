//! 提交附件上传/下载

use super::SubmissionService;
use crate::client::{HttpMethod, MultipartPart};
use crate::errors::{Result, TrackademyError};
use crate::models::submissions::entities::SubmissionFile;

// 单个附件最大 20MB
pub const MAX_FILE_SIZE: usize = 20 * 1024 * 1024;

pub async fn upload_file(
    service: &SubmissionService,
    submission_id: i64,
    file_name: &str,
    content_type: Option<String>,
    data: Vec<u8>,
) -> Result<SubmissionFile> {
    if data.is_empty() {
        return Err(TrackademyError::validation("Файл пуст"));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(TrackademyError::validation(
            "Размер файла не должен превышать 20 МБ",
        ));
    }

    let parts = vec![MultipartPart::file("file", file_name, content_type, data)];
    service
        .client
        .upload(&format!("Submission/{submission_id}/files"), parts)
        .await
}

pub async fn download_file(service: &SubmissionService, file_id: i64) -> Result<Vec<u8>> {
    service
        .client
        .download(HttpMethod::Get, &format!("Submission/file/{file_id}"), None)
        .await
}
