use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub const DEFAULT_API_URL: &str = "https://trackademy.kz/api";

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值
            .set_default("app.system_name", "Trackademy")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("api.base_url", DEFAULT_API_URL)?
            .set_default("api.attendance_base_url", DEFAULT_API_URL)?
            .set_default("api.timeout_ms", 30_000)?
            .set_default(
                "api.user_agent",
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            )?
            .set_default("session.storage_path", ".trackademy-session.json")?
            .set_default("export.dir", ".")?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("TRACKADEMY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("api.base_url", std::env::var("TRACKADEMY_API_URL").ok())?
            .set_override_option(
                "api.attendance_base_url",
                std::env::var("TRACKADEMY_ATTENDANCE_URL").ok(),
            )?
            .set_override_option(
                "session.storage_path",
                std::env::var("TRACKADEMY_SESSION_FILE").ok(),
            )?
            .set_override_option("export.dir", std::env::var("TRACKADEMY_EXPORT_DIR").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 统一去掉末尾斜杠，便于拼接路由
        app_config.api.base_url = app_config.api.base_url.trim_end_matches('/').to_string();
        app_config.api.attendance_base_url = app_config
            .api
            .attendance_base_url
            .trim_end_matches('/')
            .to_string();

        if app_config.api.timeout_ms == 0 {
            return Err(ConfigError::Message(
                "api.timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 会话文件路径 (如果配置了)
    pub fn session_path(&self) -> Option<&str> {
        if self.session.storage_path.is_empty() {
            None
        } else {
            Some(&self.session.storage_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load_without_files() {
        let config = AppConfig::load().expect("defaults should load");
        assert!(!config.api.base_url.ends_with('/'));
        assert!(config.api.timeout_ms > 0);
        assert_eq!(config.app.system_name, "Trackademy");
    }
}
