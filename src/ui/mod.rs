//! 界面状态
//!
//! 不负责渲染，只维护弹窗、列表、列显示等状态。

pub mod columns;
pub mod feedback;
pub mod list_state;
pub mod modal;

pub use columns::ColumnVisibility;
pub use feedback::{OperationResult, run_with_feedback};
pub use list_state::{ListState, LoadTicket};
pub use modal::{
    EntityType, ModalConfig, ModalForm, ModalMode, SubmitOutcome, UniversalModalState,
};
