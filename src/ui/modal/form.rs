use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{debug, error};

use super::config::ModalMode;
use crate::errors::TrackademyError;
use crate::models::FormRecord;
use crate::validators::{FieldErrors, Validator};

/// 校验失败字段的抖动提示时长
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, PartialEq)]
struct FieldHighlight {
    field: String,
    started_at: Instant,
}

/// 提交结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 校验未通过，`first_field` 为第一个出错字段
    Invalid { first_field: String },
    Saved,
    /// 保存失败，表单保持原样
    Failed(TrackademyError),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }
}

/// 弹窗表单
///
/// 持有表单数据、字段错误和提交状态。创建模式保存成功后表单恢复为初始数据，
/// 编辑模式保存时把记录 id 一并交给保存回调。
#[derive(Debug, Clone)]
pub struct ModalForm<T> {
    form_data: T,
    initial_data: T,
    errors: FieldErrors,
    is_submitting: bool,
    mode: ModalMode,
    highlight: Option<FieldHighlight>,
}

impl<T: FormRecord + Clone> ModalForm<T> {
    pub fn new(initial_data: T, mode: ModalMode) -> Self {
        Self {
            form_data: initial_data.clone(),
            initial_data,
            errors: FieldErrors::new(),
            is_submitting: false,
            mode,
            highlight: None,
        }
    }

    pub fn form_data(&self) -> &T {
        &self.form_data
    }

    pub fn form_data_mut(&mut self) -> &mut T {
        &mut self.form_data
    }

    pub fn initial_data(&self) -> &T {
        &self.initial_data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    /// 外部数据或模式变化时同步
    pub fn sync_with(&mut self, data: Option<&T>, mode: ModalMode) {
        self.mode = mode;
        if let (ModalMode::Edit, Some(data)) = (mode, data) {
            self.form_data = data.clone();
            self.errors.clear();
            self.highlight = None;
        }
    }

    pub fn reset(&mut self) {
        self.form_data = self.initial_data.clone();
        self.errors.clear();
        self.highlight = None;
    }

    pub async fn submit<F, Fut>(
        &mut self,
        validate: Option<Validator<T>>,
        on_save: F,
    ) -> SubmitOutcome
    where
        F: FnOnce(T, Option<i64>) -> Fut,
        Fut: Future<Output = crate::errors::Result<()>>,
    {
        if let Some(validate) = validate {
            let errors = validate(&self.form_data);
            if let Some(first_field) = errors.first_field().map(str::to_owned) {
                debug!("Form validation failed on field {}", first_field);
                self.errors = errors;
                self.highlight = Some(FieldHighlight {
                    field: first_field.clone(),
                    started_at: Instant::now(),
                });
                return SubmitOutcome::Invalid { first_field };
            }
        }

        let id = match self.mode {
            ModalMode::Edit => self.form_data.record_id(),
            ModalMode::Create => None,
        };

        self.is_submitting = true;
        let result = on_save(self.form_data.clone(), id).await;
        self.is_submitting = false;

        match result {
            Ok(()) => {
                if self.mode == ModalMode::Create {
                    self.reset();
                } else {
                    self.errors.clear();
                }
                SubmitOutcome::Saved
            }
            Err(e) => {
                error!("Failed to save form: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub fn highlighted_field(&self) -> Option<&str> {
        self.highlight.as_ref().map(|h| h.field.as_str())
    }

    pub fn is_shaking(&self, field: &str, now: Instant) -> bool {
        self.highlight.as_ref().is_some_and(|h| {
            h.field == field && now.saturating_duration_since(h.started_at) < SHAKE_DURATION
        })
    }

    pub fn clear_expired_highlight(&mut self, now: Instant) {
        let expired = self
            .highlight
            .as_ref()
            .is_some_and(|h| now.saturating_duration_since(h.started_at) >= SHAKE_DURATION);
        if expired {
            self.highlight = None;
        }
    }

    pub fn set_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field, message);
    }

    pub fn clear_field_error(&mut self, field: &str) {
        self.errors.remove(field);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::rooms::requests::RoomFormData;
    use crate::validators::validate_room;

    fn valid_room() -> RoomFormData {
        RoomFormData {
            name: "Кабинет 101".into(),
            capacity: 20,
            organization_id: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_calls_save() {
        let mut form = ModalForm::new(RoomFormData::default(), ModalMode::Create);
        let called = Arc::new(Mutex::new(false));
        let flag = called.clone();

        let outcome = form
            .submit(Some(validate_room), |_, _| async move {
                *flag.lock().unwrap() = true;
                Ok(())
            })
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                first_field: "name".into()
            }
        );
        assert!(!*called.lock().unwrap());
        assert!(form.errors().contains("name"));
        assert!(form.is_shaking("name", Instant::now()));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_highlight_expires_after_window() {
        let mut form = ModalForm::new(RoomFormData::default(), ModalMode::Create);
        let outcome = form.submit(Some(validate_room), |_, _| async { Ok(()) }).await;
        assert!(!outcome.is_saved());

        let later = Instant::now() + SHAKE_DURATION + Duration::from_millis(1);
        assert!(!form.is_shaking("name", later));
        form.clear_expired_highlight(later);
        assert_eq!(form.highlighted_field(), None);
    }

    #[tokio::test]
    async fn test_create_success_resets_form() {
        let initial = RoomFormData {
            capacity: 10,
            ..Default::default()
        };
        let mut form = ModalForm::new(initial.clone(), ModalMode::Create);
        *form.form_data_mut() = valid_room();

        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let outcome = form
            .submit(Some(validate_room), |data, id| async move {
                *sink.lock().unwrap() = Some((data.name, id));
                Ok(())
            })
            .await;

        assert!(outcome.is_saved());
        assert_eq!(
            *seen.lock().unwrap(),
            Some(("Кабинет 101".to_string(), None))
        );
        assert_eq!(form.form_data(), &initial);
    }

    #[tokio::test]
    async fn test_edit_passes_id_and_keeps_data() {
        let mut form = ModalForm::new(RoomFormData::default(), ModalMode::Create);
        let record = RoomFormData {
            id: Some(7),
            ..valid_room()
        };
        form.sync_with(Some(&record), ModalMode::Edit);
        assert_eq!(form.form_data(), &record);

        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let outcome = form
            .submit(None, |_, id| async move {
                *sink.lock().unwrap() = id;
                Ok(())
            })
            .await;

        assert!(outcome.is_saved());
        assert_eq!(*seen.lock().unwrap(), Some(7));
        assert_eq!(form.form_data(), &record);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_form() {
        let mut form = ModalForm::new(RoomFormData::default(), ModalMode::Create);
        *form.form_data_mut() = valid_room();

        let outcome = form
            .submit(Some(validate_room), |_, _| async {
                Err(TrackademyError::api(409, "Кабинет уже существует"))
            })
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(TrackademyError::api(409, "Кабинет уже существует"))
        );
        assert_eq!(form.form_data(), &valid_room());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_create_mode_sync_leaves_data() {
        let mut form = ModalForm::new(RoomFormData::default(), ModalMode::Create);
        *form.form_data_mut() = valid_room();
        form.sync_with(None, ModalMode::Create);
        assert_eq!(form.form_data(), &valid_room());
    }

    #[test]
    fn test_field_error_management() {
        let mut form = ModalForm::new(RoomFormData::default(), ModalMode::Create);
        form.set_field_error("capacity", "Слишком мало");
        assert_eq!(form.errors().get("capacity"), Some("Слишком мало"));
        form.clear_field_error("capacity");
        assert!(form.errors().is_empty());
    }
}
