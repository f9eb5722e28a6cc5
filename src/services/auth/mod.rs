use tracing::info;

use crate::client::ApiClient;
use crate::errors::{Result, TrackademyError};
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};
use crate::models::users::entities::User;
use crate::utils::validate::is_blank;

pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 登录并保存会话
    pub async fn login(&self, login: &str, password: &str) -> Result<User> {
        if is_blank(login) || password.is_empty() {
            return Err(TrackademyError::validation("Введите логин и пароль"));
        }

        let request = LoginRequest {
            login: login.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("Auth/login", &request).await?;
        if response.token.is_empty() {
            return Err(TrackademyError::authentication(
                "Сервер не вернул токен авторизации",
            ));
        }

        self.client
            .session()
            .store_login(&response.token, &response.user)?;
        info!(
            "Signed in as {} (organization {})",
            response.user.login, response.user.organization_id
        );
        Ok(response.user)
    }

    /// 退出登录，只清除本地会话
    pub fn logout(&self) -> Result<()> {
        self.client.session().clear_auth()?;
        info!("Signed out");
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.client.session().current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().auth_token().is_some()
    }
}
