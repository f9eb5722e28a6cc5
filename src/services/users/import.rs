//! 用户批量导入

use serde::Deserialize;
use tracing::{info, warn};

use super::UserService;
use crate::client::MultipartPart;
use crate::errors::{Result, TrackademyError};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const XLS_MIME: &str = "application/vnd.ms-excel";

// 导入结果
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    #[serde(default)]
    pub created_count: i64,
    #[serde(default)]
    pub skipped_count: i64,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// 按扩展名确定 MIME 类型，非 Excel 文件返回 `None`
fn excel_content_type(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".xlsx") {
        Some(XLSX_MIME)
    } else if lower.ends_with(".xls") {
        Some(XLS_MIME)
    } else {
        None
    }
}

pub async fn import_users(
    service: &UserService,
    file_name: &str,
    data: Vec<u8>,
    organization_id: i64,
) -> Result<ImportResult> {
    let content_type = excel_content_type(file_name).ok_or_else(|| {
        TrackademyError::validation("Поддерживаются только файлы Excel (.xlsx, .xls)")
    })?;
    if data.is_empty() {
        return Err(TrackademyError::validation("Файл пуст"));
    }

    let parts = vec![
        MultipartPart::file("file", file_name, Some(content_type.to_string()), data),
        MultipartPart::text("organizationId", organization_id.to_string()),
    ];

    let result: ImportResult = service.client.upload("User/import-excel", parts).await?;
    if !result.errors.is_empty() {
        warn!("User import finished with {} errors", result.errors.len());
    }
    info!(
        "User import: {} created, {} skipped",
        result.created_count, result.skipped_count
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::client::testing::client_with;
    use crate::client::transport::MockHttpTransport;
    use crate::client::{HttpResponse, RequestBody};

    #[tokio::test]
    async fn test_import_sends_multipart() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| match &request.body {
                RequestBody::Multipart(parts) => {
                    parts.len() == 2
                        && parts[0].file_name.as_deref() == Some("students.xlsx")
                        && parts[1].data == b"5".to_vec()
                }
                _ => false,
            })
            .returning(|_| {
                Ok(HttpResponse::new(
                    200,
                    r#"{"createdCount":3,"skippedCount":1,"errors":["Строка 4: логин занят"]}"#,
                ))
            });

        let test = client_with(transport);
        let result = test
            .client
            .users()
            .import_users("students.xlsx", vec![1, 2, 3], 5)
            .await
            .unwrap();
        assert_eq!(result.created_count, 3);
        assert_eq!(result.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_import_rejects_other_formats() {
        let test = client_with(MockHttpTransport::new());
        let err = test
            .client
            .users()
            .import_users("students.csv", vec![1], 5)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn test_xls_upload_uses_legacy_mime() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| match &request.body {
                RequestBody::Multipart(parts) => {
                    parts[0].content_type.as_deref() == Some("application/vnd.ms-excel")
                }
                _ => false,
            })
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, r#"{"createdCount":1}"#)));

        let test = client_with(transport);
        let result = test
            .client
            .users()
            .import_users("Students.XLS", vec![1], 5)
            .await
            .unwrap();
        assert_eq!(result.created_count, 1);
    }

    #[test]
    fn test_content_type_follows_extension() {
        assert_eq!(
            super::excel_content_type("list.xlsx"),
            Some(super::XLSX_MIME)
        );
        assert_eq!(super::excel_content_type("list.xls"), Some(super::XLS_MIME));
        assert_eq!(super::excel_content_type("list.csv"), None);
    }
}
