//! 会话存储
//!
//! 对应浏览器 localStorage 中的 `authToken`、`user`、`userOrganizationId`。

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::errors::{Result, TrackademyError};
use crate::models::users::entities::User;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";
pub const ORGANIZATION_ID_KEY: &str = "userOrganizationId";

/// 登录失效后需要清除的键
pub const AUTH_KEYS: &[&str] = &[AUTH_TOKEN_KEY, USER_KEY, ORGANIZATION_ID_KEY];

pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;

    fn auth_token(&self) -> Option<String> {
        self.get(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn organization_id(&self) -> Option<i64> {
        self.get(ORGANIZATION_ID_KEY)
            .and_then(|value| value.parse().ok())
    }

    fn current_user(&self) -> Option<User> {
        let raw = self.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Stored user is not valid JSON: {}", e);
                None
            }
        }
    }

    /// 保存登录结果
    fn store_login(&self, token: &str, user: &User) -> Result<()> {
        self.set(AUTH_TOKEN_KEY, token)?;
        self.set(USER_KEY, &serde_json::to_string(user)?)?;
        self.set(ORGANIZATION_ID_KEY, &user.organization_id.to_string())
    }

    /// 清除登录信息
    fn clear_auth(&self) -> Result<()> {
        for key in AUTH_KEYS {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// 内存会话
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// 文件会话，每次修改都整体写回 JSON 文件
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: DashMap<String, String>,
}

impl FileSessionStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = DashMap::new();

        if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            if !raw.trim().is_empty() {
                let stored: BTreeMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
                    TrackademyError::session(format!(
                        "Session file {} is corrupted: {e}",
                        path.display()
                    ))
                })?;
                for (key, value) in stored {
                    entries.insert(key, value);
                }
            }
            debug!("Loaded session from {}", path.display());
        }

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let snapshot: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let raw = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&self.path, raw).map_err(|e| {
            TrackademyError::session(format!(
                "Failed to write session file {}: {e}",
                self.path.display()
            ))
        })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
