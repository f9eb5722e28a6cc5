//! 电话号码格式化
//!
//! 显示格式固定为 `+7 (XXX) XXX-XX-XX`，API 格式为 `+7XXXXXXXXXX`。
//! 开头的 `7`、`8` 或 `+7` 均视为国家代码。

const COUNTRY_CODE: char = '7';
const PHONE_DIGITS: usize = 11;

/// 提取数字并规范化为以 7 开头、最多 11 位的号码
fn normalized_digits(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }

    let mut normalized = String::with_capacity(PHONE_DIGITS);
    match digits.chars().next() {
        Some('8') => {
            normalized.push(COUNTRY_CODE);
            normalized.push_str(&digits[1..]);
        }
        Some(COUNTRY_CODE) => normalized.push_str(&digits),
        _ => {
            normalized.push(COUNTRY_CODE);
            normalized.push_str(&digits);
        }
    }
    normalized.truncate(PHONE_DIGITS);
    normalized
}

/// 将任意输入格式化为显示格式，输入不完整时逐段补全
pub fn format_phone_display(input: &str) -> String {
    let digits = normalized_digits(input);
    if digits.is_empty() {
        return String::new();
    }

    // 全部为 ASCII 数字，可以直接按字节切片
    let len = digits.len();
    let mut formatted = String::from("+7");
    if len > 1 {
        formatted.push_str(" (");
        formatted.push_str(&digits[1..len.min(4)]);
    }
    if len >= 5 {
        formatted.push_str(") ");
        formatted.push_str(&digits[4..len.min(7)]);
    }
    if len >= 8 {
        formatted.push('-');
        formatted.push_str(&digits[7..len.min(9)]);
    }
    if len >= 10 {
        formatted.push('-');
        formatted.push_str(&digits[9..len]);
    }
    formatted
}

/// 去掉格式，保证以 `+7` 开头
pub fn format_phone_for_api(input: &str) -> String {
    let digits = normalized_digits(input);
    if digits.is_empty() {
        return digits;
    }
    format!("+{digits}")
}

/// 号码是否完整（11 位）
pub fn is_complete_phone(input: &str) -> bool {
    normalized_digits(input).len() == PHONE_DIGITS
}

/// 按键事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }
}

const CONTROL_KEYS: &[&str] = &["Backspace", "Delete", "Tab", "Escape", "Enter"];
const CLIPBOARD_KEYS: &[&str] = &["a", "c", "v", "x"];

/// 电话输入框只接受数字和控制键
pub fn is_phone_key_allowed(press: &KeyPress) -> bool {
    if CONTROL_KEYS.contains(&press.key.as_str()) {
        return true;
    }
    if (press.ctrl || press.meta) && CLIPBOARD_KEYS.contains(&press.key.to_lowercase().as_str()) {
        return true;
    }
    let mut chars = press.key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_full_numbers() {
        assert_eq!(format_phone_display("87771234567"), "+7 (777) 123-45-67");
        assert_eq!(format_phone_display("+79991234567"), "+7 (999) 123-45-67");
        assert_eq!(format_phone_display("77012223344"), "+7 (701) 222-33-44");
        assert_eq!(format_phone_display("9012223344"), "+7 (901) 222-33-44");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(format_phone_display(""), "");
        assert_eq!(format_phone_display("+ ( ) -"), "");
    }

    #[test]
    fn test_display_partial_input() {
        assert_eq!(format_phone_display("8"), "+7");
        assert_eq!(format_phone_display("877"), "+7 (77");
        assert_eq!(format_phone_display("87771"), "+7 (777) 1");
        assert_eq!(format_phone_display("8777123"), "+7 (777) 123");
        assert_eq!(format_phone_display("87771234"), "+7 (777) 123-4");
        assert_eq!(format_phone_display("8777123456"), "+7 (777) 123-45-6");
    }

    #[test]
    fn test_display_truncates_extra_digits() {
        assert_eq!(format_phone_display("8777123456789"), "+7 (777) 123-45-67");
    }

    #[test]
    fn test_display_is_idempotent() {
        let once = format_phone_display("87771234567");
        assert_eq!(format_phone_display(&once), once);
    }

    #[test]
    fn test_api_format() {
        assert_eq!(format_phone_for_api("+7 (999) 123-45-67"), "+79991234567");
        assert_eq!(format_phone_for_api("89991234567"), "+79991234567");
        assert_eq!(format_phone_for_api(""), "");
    }

    #[test]
    fn test_complete_phone() {
        assert!(is_complete_phone("+7 (999) 123-45-67"));
        assert!(!is_complete_phone("+7 (999) 123"));
        assert!(!is_complete_phone(""));
    }

    #[test]
    fn test_key_filter() {
        assert!(is_phone_key_allowed(&KeyPress::new("5")));
        assert!(is_phone_key_allowed(&KeyPress::new("Backspace")));
        assert!(is_phone_key_allowed(&KeyPress::new("Enter")));
        assert!(is_phone_key_allowed(&KeyPress::with_ctrl("v")));
        assert!(is_phone_key_allowed(&KeyPress::with_ctrl("A")));

        assert!(!is_phone_key_allowed(&KeyPress::new("a")));
        assert!(!is_phone_key_allowed(&KeyPress::new("+")));
        assert!(!is_phone_key_allowed(&KeyPress::new("ArrowLeft")));
        assert!(!is_phone_key_allowed(&KeyPress::with_ctrl("z")));
    }
}
