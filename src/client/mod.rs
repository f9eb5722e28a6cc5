//! 后端 REST 客户端
//!
//! 所有请求统一附带 `Authorization: Bearer <token>`，并按状态码处理：
//! - 2xx：解析 JSON（空响应体在类型化请求中按默认值处理）
//! - 401：清除会话并跳转到登录页
//! - 403：不报错，按空对象处理
//! - 其他：从响应体中提取错误消息，返回带状态码的 `TrackademyError::Api`
//!
//! 没有重试、退避、去重或缓存，每次调用都是一次独立的请求。

pub mod redirect;
pub mod session;
pub mod transport;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::ApiConfig;
use crate::errors::{Result, TrackademyError};
use crate::models::common::ApiErrorBody;

pub use redirect::{AuthRedirect, LOGIN_PATH, LogRedirect};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartPart, ReqwestTransport,
    RequestBody,
};

pub const UNAUTHORIZED_MESSAGE: &str = "Сессия истекла. Пожалуйста, войдите снова.";

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    attendance_base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
    redirect: Arc<dyn AuthRedirect>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("attendance_base_url", &self.attendance_base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
        redirect: Arc<dyn AuthRedirect>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            attendance_base_url: base_url.clone(),
            base_url,
            transport,
            session,
            redirect,
        }
    }

    /// 使用 reqwest 传输创建主服务客户端
    pub fn from_config(
        config: &ApiConfig,
        session: Arc<dyn SessionStore>,
        redirect: Arc<dyn AuthRedirect>,
    ) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(config)?);
        Ok(Self::with_transport(config, transport, session, redirect))
    }

    /// 按配置创建客户端，传输层由调用方提供
    pub fn with_transport(
        config: &ApiConfig,
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
        redirect: Arc<dyn AuthRedirect>,
    ) -> Self {
        Self::new(config.base_url.clone(), transport, session, redirect)
            .with_attendance_base_url(config.attendance_base_url.clone())
    }

    /// 设置考勤服务地址（默认与主服务相同）
    pub fn with_attendance_base_url(mut self, url: impl Into<String>) -> Self {
        self.attendance_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// 指向另一个服务（如考勤服务），共享传输层和会话
    pub fn with_base_url(&self, base_url: impl Into<String>) -> Self {
        Self::new(
            base_url,
            self.transport.clone(),
            self.session.clone(),
            self.redirect.clone(),
        )
        .with_attendance_base_url(self.attendance_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn attendance_base_url(&self) -> &str {
        &self.attendance_base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// 构造请求并附加认证头
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: RequestBody,
    ) -> HttpRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(token) = self.session.auth_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        HttpRequest {
            method,
            url: self.url(path),
            headers,
            query,
            body,
        }
    }

    /// 发送请求并按状态码分类；403 返回 `None`
    pub async fn send(&self, request: HttpRequest) -> Result<Option<HttpResponse>> {
        let method = request.method;
        let url = request.url.clone();
        debug!("{} {}", method.as_str(), url);

        // 传输层已把 reqwest 失败映射为网络错误，其余错误原样返回
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            return Ok(Some(response));
        }

        match response.status {
            401 => {
                self.handle_unauthorized();
                Err(TrackademyError::authentication(UNAUTHORIZED_MESSAGE))
            }
            403 => {
                warn!("{} {} returned 403, treating as empty result", method.as_str(), url);
                Ok(None)
            }
            status => {
                let message = extract_error_message(status, &response.body);
                if status >= 500 {
                    error!("{} {} failed with {}: {}", method.as_str(), url, status, message);
                } else {
                    warn!("{} {} failed with {}: {}", method.as_str(), url, status, message);
                }
                Err(TrackademyError::api(status, message))
            }
        }
    }

    fn handle_unauthorized(&self) {
        if let Err(e) = self.session.clear_auth() {
            error!("Failed to clear session after 401: {}", e);
        }
        self.redirect.redirect(LOGIN_PATH);
    }

    /// 原始 JSON 请求；403 时返回空对象 `{}`
    pub async fn request_json(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value> {
        let body = body.map_or(RequestBody::Empty, RequestBody::Json);
        let request = self.build_request(method, path, query, body);
        match self.send(request).await? {
            Some(response) => parse_json_body(&response.body),
            None => Ok(Value::Object(serde_json::Map::new())),
        }
    }

    /// 类型化请求；403 时返回 `T::default()`
    pub async fn request<T>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let body = body.map_or(RequestBody::Empty, RequestBody::Json);
        let request = self.build_request(method, path, query, body);
        match self.send(request).await? {
            Some(response) => decode_body(&response.body),
            None => Ok(T::default()),
        }
    }

    /// 不关心响应体的请求
    pub async fn request_unit(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<()> {
        let body = body.map_or(RequestBody::Empty, RequestBody::Json);
        let request = self.build_request(method, path, Vec::new(), body);
        self.send(request).await?;
        Ok(())
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request(HttpMethod::Get, path, Vec::new(), None).await
    }

    pub async fn get_with_query<T>(&self, path: &str, query: Vec<(String, String)>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request(HttpMethod::Get, path, query, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(HttpMethod::Post, path, Vec::new(), Some(body))
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(HttpMethod::Put, path, Vec::new(), Some(body))
            .await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(HttpMethod::Patch, path, Vec::new(), Some(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request_unit(HttpMethod::Delete, path, None).await
    }

    /// multipart 上传（对应浏览器 FormData）
    pub async fn upload<T>(&self, path: &str, parts: Vec<MultipartPart>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.build_request(
            HttpMethod::Post,
            path,
            Vec::new(),
            RequestBody::Multipart(parts),
        );
        match self.send(request).await? {
            Some(response) => decode_body(&response.body),
            None => Ok(T::default()),
        }
    }

    /// 下载二进制文件（对应浏览器 Blob）；403 时返回空内容
    pub async fn download(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Vec<u8>> {
        let body = body.map_or(RequestBody::Empty, RequestBody::Json);
        let mut request = self.build_request(method, path, Vec::new(), body);
        if let Some(accept) = request
            .headers
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case("Accept"))
        {
            accept.1 = "*/*".to_string();
        }

        Ok(self
            .send(request)
            .await?
            .map(|response| response.body)
            .unwrap_or_default())
    }
}

fn parse_json_body(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| {
        TrackademyError::serialization(format!("Некорректный ответ сервера: {e}"))
    })
}

/// 空响应体（如 204）按 `T::default()` 处理
fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value = parse_json_body(body)?;
    serde_json::from_value(value)
        .map_err(|e| TrackademyError::serialization(format!("Некорректный ответ сервера: {e}")))
}

/// 从错误响应中提取消息，无法识别时返回通用提示
pub fn extract_error_message(status: u16, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ApiErrorBody>(body) {
        if let Some(message) = parsed.extract_message() {
            return message;
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    // JSON 或 HTML 页面不直接展示
    if !text.is_empty() && !text.starts_with('{') && !text.starts_with('<') {
        return text.to_string();
    }

    format!("Ошибка запроса (HTTP {status})")
}
