use tracing::warn;

pub const LOGIN_PATH: &str = "/login";

/// 登录失效时的跳转处理
pub trait AuthRedirect: Send + Sync {
    fn redirect(&self, path: &str);
}

/// 命令行环境下只记录日志，提示用户重新登录
#[derive(Debug, Default)]
pub struct LogRedirect;

impl AuthRedirect for LogRedirect {
    fn redirect(&self, path: &str) {
        warn!("Session expired, please sign in again ({})", path);
    }
}
