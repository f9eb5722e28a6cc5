pub mod debounce;
pub mod phone;
pub mod validate;

pub use debounce::Debouncer;
pub use phone::{format_phone_display, format_phone_for_api, is_complete_phone};
