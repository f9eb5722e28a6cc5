//! Excel 导出
//!
//! 后端返回 `.xlsx` 二进制内容，保存到本地目录（对应浏览器中的下载）。

use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::json;
use tracing::info;

use crate::client::{ApiClient, HttpMethod};
use crate::errors::{Result, TrackademyError};

pub struct ExportService {
    client: ApiClient,
}

impl ExportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn organization_id(&self, organization_id: Option<i64>) -> Result<i64> {
        organization_id
            .or_else(|| self.client.session().organization_id())
            .ok_or_else(|| TrackademyError::session("Организация пользователя не определена"))
    }

    // 导出用户列表
    pub async fn export_users(&self, organization_id: Option<i64>) -> Result<Vec<u8>> {
        let organization_id = self.organization_id(organization_id)?;
        self.client
            .download(
                HttpMethod::Post,
                "Export/users",
                Some(json!({ "organizationId": organization_id })),
            )
            .await
    }

    // 导出小组列表
    pub async fn export_groups(&self, organization_id: Option<i64>) -> Result<Vec<u8>> {
        let organization_id = self.organization_id(organization_id)?;
        self.client
            .download(
                HttpMethod::Post,
                "Export/groups",
                Some(json!({ "organizationId": organization_id })),
            )
            .await
    }
}

/// 导出文件名，例如 `users_2026-10-15.xlsx`
pub fn export_file_name(prefix: &str) -> String {
    format!("{}_{}.xlsx", prefix, Local::now().format("%Y-%m-%d"))
}

/// 保存导出内容，返回文件路径
pub async fn save_export(dir: impl AsRef<Path>, file_name: &str, data: &[u8]) -> Result<PathBuf> {
    if data.is_empty() {
        return Err(TrackademyError::not_found("Нет данных для экспорта"));
    }
    // 只取文件名部分，避免写到目录外
    let file_name = Path::new(file_name)
        .file_name()
        .ok_or_else(|| TrackademyError::validation(format!("Invalid file name: {file_name}")))?;

    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, data).await?;
    info!("Export saved to {} ({} bytes)", path.display(), data.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::client_with;
    use crate::client::transport::MockHttpTransport;
    use crate::client::{HttpResponse, RequestBody};

    #[tokio::test]
    async fn test_export_users_uses_session_organization() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.url.ends_with("/Export/users")
                    && request.body == RequestBody::Json(json!({ "organizationId": 6 }))
            })
            .returning(|_| Ok(HttpResponse::new(200, vec![0x50, 0x4B])));

        let test = client_with(transport);
        crate::client::SessionStore::set(
            test.session.as_ref(),
            crate::client::session::ORGANIZATION_ID_KEY,
            "6",
        )
        .unwrap();

        let bytes = test.client.exports().export_users(None).await.unwrap();
        assert_eq!(bytes, vec![0x50, 0x4B]);
    }

    #[tokio::test]
    async fn test_export_without_organization_fails() {
        let test = client_with(MockHttpTransport::new());
        let err = test.client.exports().export_groups(None).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_save_export_strips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_export(dir.path(), "../../users.xlsx", b"xlsx")
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("users.xlsx"));
        assert_eq!(std::fs::read(path).unwrap(), b"xlsx".to_vec());
    }

    #[tokio::test]
    async fn test_save_export_rejects_empty_payload() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save_export(dir.path(), "users.xlsx", b"").await.is_err());
    }

    #[test]
    fn test_export_file_name() {
        let name = export_file_name("groups");
        assert!(name.starts_with("groups_"));
        assert!(name.ends_with(".xlsx"));
    }
}
