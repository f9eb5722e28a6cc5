use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

/// 弹窗对应的实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    User,
    Room,
    Subject,
    Group,
    Organization,
    Schedule,
}

impl EntityType {
    pub const ALL: [EntityType; 6] = [
        EntityType::User,
        EntityType::Room,
        EntityType::Subject,
        EntityType::Group,
        EntityType::Organization,
        EntityType::Schedule,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::User => "user",
            EntityType::Room => "room",
            EntityType::Subject => "subject",
            EntityType::Group => "group",
            EntityType::Organization => "organization",
            EntityType::Schedule => "schedule",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|entity| entity.as_str() == s)
            .ok_or_else(|| format!("Invalid entity type: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalMode {
    #[default]
    Create,
    Edit,
}

impl ModalMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ModalMode::Create => "create",
            ModalMode::Edit => "edit",
        }
    }
}

/// 弹窗外观配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub submit_text: &'static str,
    pub loading_text: &'static str,
}

const CREATE_SUBMIT: &str = "Создать";
const CREATE_LOADING: &str = "Создание...";
const EDIT_SUBMIT: &str = "Сохранить";
const EDIT_LOADING: &str = "Сохранение...";

fn entry(
    title: &'static str,
    subtitle: &'static str,
    icon: &'static str,
    gradient: &'static str,
    mode: ModalMode,
) -> ModalConfig {
    let (submit_text, loading_text) = match mode {
        ModalMode::Create => (CREATE_SUBMIT, CREATE_LOADING),
        ModalMode::Edit => (EDIT_SUBMIT, EDIT_LOADING),
    };
    ModalConfig {
        title,
        subtitle,
        icon,
        gradient,
        submit_text,
        loading_text,
    }
}

static MODAL_CONFIGS: Lazy<HashMap<(EntityType, ModalMode), ModalConfig>> = Lazy::new(|| {
    use EntityType::*;
    use ModalMode::*;

    HashMap::from([
        (
            (User, Create),
            entry(
                "Добавить пользователя",
                "Заполните данные нового пользователя",
                "UserPlus",
                "from-violet-500 to-purple-600",
                Create,
            ),
        ),
        (
            (User, Edit),
            entry(
                "Редактировать пользователя",
                "Измените данные пользователя",
                "UserPen",
                "from-violet-500 to-purple-600",
                Edit,
            ),
        ),
        (
            (Room, Create),
            entry(
                "Создать кабинет",
                "Заполните информацию о новом кабинете",
                "DoorOpen",
                "from-emerald-500 to-teal-600",
                Create,
            ),
        ),
        (
            (Room, Edit),
            entry(
                "Редактировать кабинет",
                "Измените информацию о кабинете",
                "DoorOpen",
                "from-emerald-500 to-teal-600",
                Edit,
            ),
        ),
        (
            (Subject, Create),
            entry(
                "Создать предмет",
                "Заполните информацию о новом предмете",
                "BookOpen",
                "from-blue-500 to-indigo-600",
                Create,
            ),
        ),
        (
            (Subject, Edit),
            entry(
                "Редактировать предмет",
                "Измените информацию о предмете",
                "BookOpen",
                "from-blue-500 to-indigo-600",
                Edit,
            ),
        ),
        (
            (Group, Create),
            entry(
                "Создать группу",
                "Заполните информацию о новой группе",
                "Users",
                "from-orange-500 to-amber-600",
                Create,
            ),
        ),
        (
            (Group, Edit),
            entry(
                "Редактировать группу",
                "Измените состав и параметры группы",
                "Users",
                "from-orange-500 to-amber-600",
                Edit,
            ),
        ),
        (
            (Organization, Create),
            entry(
                "Создать организацию",
                "Заполните информацию о новой организации",
                "Building2",
                "from-sky-500 to-cyan-600",
                Create,
            ),
        ),
        (
            (Organization, Edit),
            entry(
                "Редактировать организацию",
                "Измените информацию об организации",
                "Building2",
                "from-sky-500 to-cyan-600",
                Edit,
            ),
        ),
        (
            (Schedule, Create),
            entry(
                "Создать расписание",
                "Настройте время и место занятий",
                "CalendarPlus",
                "from-rose-500 to-pink-600",
                Create,
            ),
        ),
        (
            (Schedule, Edit),
            entry(
                "Редактировать расписание",
                "Измените время и место занятий",
                "CalendarCog",
                "from-rose-500 to-pink-600",
                Edit,
            ),
        ),
    ])
});

/// 查找配置；表中覆盖了所有实体类型和模式的组合
pub fn modal_config(entity: EntityType, mode: ModalMode) -> &'static ModalConfig {
    &MODAL_CONFIGS[&(entity, mode)]
}
