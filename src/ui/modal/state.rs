use super::config::{EntityType, ModalConfig, ModalMode, modal_config};

/// 弹窗开关、模式和正在编辑的记录
#[derive(Debug, Clone)]
pub struct UniversalModalState<T> {
    entity_type: EntityType,
    initial_data: T,
    is_open: bool,
    mode: ModalMode,
    edit_data: Option<T>,
}

impl<T: Clone> UniversalModalState<T> {
    pub fn new(entity_type: EntityType, initial_data: T) -> Self {
        Self {
            entity_type,
            initial_data,
            is_open: false,
            mode: ModalMode::Create,
            edit_data: None,
        }
    }

    pub fn open_create_modal(&mut self) {
        self.mode = ModalMode::Create;
        self.edit_data = None;
        self.is_open = true;
    }

    pub fn open_edit_modal(&mut self, data: T) {
        self.mode = ModalMode::Edit;
        self.edit_data = Some(data);
        self.is_open = true;
    }

    pub fn close_modal(&mut self) {
        self.is_open = false;
        self.edit_data = None;
    }

    pub fn get_config(&self) -> &'static ModalConfig {
        modal_config(self.entity_type, self.mode)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn edit_data(&self) -> Option<&T> {
        self.edit_data.as_ref()
    }

    pub fn initial_data(&self) -> &T {
        &self.initial_data
    }

    /// 表单初始值：编辑模式取编辑记录，否则取初始数据
    pub fn form_seed(&self) -> T {
        match (self.mode, &self.edit_data) {
            (ModalMode::Edit, Some(data)) => data.clone(),
            _ => self.initial_data.clone(),
        }
    }
}
