//! 表单校验
//!
//! 每个校验函数都是纯函数 `(&Form) -> FieldErrors`，通过时返回空集合。
//! 只检查必填、格式和数值下限，不做跨字段或异步校验。

mod field_errors;

pub use field_errors::FieldErrors;

use crate::models::FormRecord;
use crate::models::assignments::requests::AssignmentFormData;
use crate::models::groups::requests::GroupFormData;
use crate::models::organizations::requests::OrganizationFormData;
use crate::models::rooms::requests::RoomFormData;
use crate::models::subjects::requests::SubjectFormData;
use crate::models::users::requests::UserFormData;
use crate::utils::phone::is_complete_phone;
use crate::utils::validate::{
    MIN_PASSWORD_LENGTH, is_blank, validate_email, validate_login, validate_password,
};

/// 校验函数类型
pub type Validator<T> = fn(&T) -> FieldErrors;

const PHONE_INVALID: &str = "Введите корректный номер телефона";

pub fn validate_room(form: &RoomFormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.name) {
        errors.insert("name", "Название кабинета обязательно");
    }
    if form.capacity < 1 {
        errors.insert("capacity", "Вместимость должна быть больше 0");
    }
    errors
}

pub fn validate_subject(form: &SubjectFormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.name) {
        errors.insert("name", "Название предмета обязательно");
    } else if form.name.trim().chars().count() < 2 {
        errors.insert("name", "Название должно содержать минимум 2 символа");
    }
    match form.price {
        None => errors.insert("price", "Укажите стоимость"),
        Some(price) if !price.is_finite() || price < 0.0 => {
            errors.insert("price", "Стоимость не может быть отрицательной")
        }
        Some(_) => {}
    }
    errors
}

pub fn validate_group(form: &GroupFormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.name) {
        errors.insert("name", "Название группы обязательно");
    }
    if is_blank(&form.code) {
        errors.insert("code", "Код группы обязателен");
    }
    if is_blank(&form.level) {
        errors.insert("level", "Укажите уровень");
    }
    if form.subject_id.is_none_or(|id| id <= 0) {
        errors.insert("subjectId", "Выберите предмет");
    }
    if !form.monthly_price.is_finite() || form.monthly_price < 0.0 {
        errors.insert("monthlyPrice", "Стоимость не может быть отрицательной");
    }
    errors
}

pub fn validate_user(form: &UserFormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("login", validate_login(&form.login));
    if is_blank(&form.name) {
        errors.insert("name", "ФИО обязательно");
    }
    if !is_complete_phone(&form.phone) {
        errors.insert("phone", PHONE_INVALID);
    }
    if let Some(parent_phone) = form.parent_phone.as_deref().filter(|p| !is_blank(p)) {
        if !is_complete_phone(parent_phone) {
            errors.insert("parentPhone", PHONE_INVALID);
        }
    }
    if !is_blank(&form.email) {
        errors.check("email", validate_email(&form.email));
    }

    // 创建时密码必填，编辑时只在填写后检查长度
    let password = form.password.as_deref().unwrap_or_default();
    if form.record_id().is_none() {
        errors.check("password", validate_password(password));
    } else if !password.is_empty() && password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.check("password", validate_password(password));
    }
    errors
}

pub fn validate_organization(form: &OrganizationFormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.name) {
        errors.insert("name", "Название организации обязательно");
    }
    if !is_complete_phone(&form.phone) {
        errors.insert("phone", PHONE_INVALID);
    }
    if is_blank(&form.address) {
        errors.insert("address", "Адрес обязателен");
    }
    errors
}

pub fn validate_assignment(form: &AssignmentFormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.description) {
        errors.insert("description", "Описание задания обязательно");
    }
    if form.group_id.is_none() {
        errors.insert("groupId", "Выберите группу");
    }
    if form.assigned_date.is_none() {
        errors.insert("assignedDate", "Укажите дату выдачи");
    }
    if form.due_date.is_none() {
        errors.insert("dueDate", "Укажите срок сдачи");
    }
    errors
}
