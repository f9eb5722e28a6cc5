//! 通用创建/编辑弹窗

pub mod config;
pub mod form;
pub mod state;

pub use config::{EntityType, ModalConfig, ModalMode, modal_config};
pub use form::{ModalForm, SHAKE_DURATION, SubmitOutcome};
pub use state::UniversalModalState;
