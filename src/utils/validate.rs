use once_cell::sync::Lazy;
use regex::Regex;

static LOGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid login regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub const MIN_LOGIN_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// 去掉首尾空白后是否为空
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_login(login: &str) -> Result<(), &'static str> {
    let login = login.trim();
    if login.is_empty() {
        return Err("Логин обязателен");
    }
    // 按字符数计算长度
    if login.chars().count() < MIN_LOGIN_LENGTH {
        return Err("Логин должен содержать минимум 3 символа");
    }
    if !LOGIN_RE.is_match(login) {
        return Err("Логин может содержать только латинские буквы, цифры, точку, дефис и подчёркивание");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("Некорректный email");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Пароль обязателен");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Пароль должен содержать минимум 6 символов");
    }
    Ok(())
}
