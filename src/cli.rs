//! 命令行入口
//!
//! 参数解析为 [`Command`]，执行结果以文本返回，由 `main` 负责输出。

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::errors::{Result, TrackademyError};
use crate::models::ListQuery;
use crate::models::users::requests::UserListQuery;
use crate::services::exports::{export_file_name, save_export};
use crate::utils::phone::{format_phone_display, format_phone_for_api, is_complete_phone};

/// 列表命令每页条数
pub const LIST_PAGE_SIZE: i64 = 50;

pub const USAGE: &str = "\
Использование: trackademy <команда> [аргументы]

Команды:
  login <логин> <пароль>   войти и сохранить сессию
  logout                   выйти
  whoami                   текущий пользователь
  organizations            список организаций
  rooms                    список кабинетов
  subjects                 список предметов
  groups                   список групп
  users [поиск]            список пользователей
  summary                  сводка по организации
  export-users [папка]     выгрузить пользователей в Excel
  export-groups [папка]    выгрузить группы в Excel
  phone <номер>            отформатировать номер телефона
  help                     эта справка";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { login: String, password: String },
    Logout,
    WhoAmI,
    Organizations,
    Rooms,
    Subjects,
    Groups,
    Users { search: Option<String> },
    Summary,
    ExportUsers { dir: Option<PathBuf> },
    ExportGroups { dir: Option<PathBuf> },
    Phone { number: String },
    Help,
}

/// 解析命令行参数（不含程序名）
pub fn parse<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let Some(name) = args.next() else {
        return Ok(Command::Help);
    };
    let rest: Vec<String> = args.collect();

    let command = match (name.as_str(), rest.as_slice()) {
        ("login", [login, password]) => Command::Login {
            login: login.clone(),
            password: password.clone(),
        },
        ("logout", []) => Command::Logout,
        ("whoami", []) => Command::WhoAmI,
        ("organizations", []) => Command::Organizations,
        ("rooms", []) => Command::Rooms,
        ("subjects", []) => Command::Subjects,
        ("groups", []) => Command::Groups,
        ("users", []) => Command::Users { search: None },
        ("users", search) => Command::Users {
            search: Some(search.join(" ")),
        },
        ("summary", []) => Command::Summary,
        ("export-users", [] | [_]) => Command::ExportUsers {
            dir: rest.first().map(PathBuf::from),
        },
        ("export-groups", [] | [_]) => Command::ExportGroups {
            dir: rest.first().map(PathBuf::from),
        },
        ("phone", [_, ..]) => Command::Phone {
            number: rest.join(" "),
        },
        ("help" | "-h" | "--help", _) => Command::Help,
        (
            "login" | "logout" | "whoami" | "organizations" | "rooms" | "subjects" | "groups"
            | "summary" | "export-users" | "export-groups" | "phone",
            _,
        ) => {
            return Err(TrackademyError::validation(format!(
                "Неверные аргументы команды {name}\n\n{USAGE}"
            )));
        }
        _ => {
            return Err(TrackademyError::validation(format!(
                "Неизвестная команда: {name}\n\n{USAGE}"
            )));
        }
    };
    Ok(command)
}

fn list_query() -> ListQuery {
    ListQuery::page(1, LIST_PAGE_SIZE)
}

/// 执行命令，返回要输出的文本
pub async fn execute(command: Command, client: &ApiClient, config: &AppConfig) -> Result<String> {
    let mut out = String::new();

    match command {
        Command::Help => out.push_str(USAGE),
        Command::Phone { number } => {
            let _ = writeln!(out, "Отображение: {}", format_phone_display(&number));
            let _ = writeln!(out, "Для API:     {}", format_phone_for_api(&number));
            let _ = write!(
                out,
                "Полный номер: {}",
                if is_complete_phone(&number) { "да" } else { "нет" }
            );
        }
        Command::Login { login, password } => {
            let user = client.auth().login(&login, &password).await?;
            let _ = write!(
                out,
                "Вход выполнен: {} ({}, {})",
                user.name,
                user.login,
                user.role.label()
            );
        }
        Command::Logout => {
            client.auth().logout()?;
            out.push_str("Выход выполнен");
        }
        Command::WhoAmI => match client.auth().current_user() {
            Some(user) => {
                let _ = write!(
                    out,
                    "{} ({}) - {}, организация {}",
                    user.name,
                    user.login,
                    user.role.label(),
                    user.organization_id
                );
            }
            None => out.push_str("Вход не выполнен"),
        },
        Command::Organizations => {
            let organizations = client.organizations().list_organizations().await?;
            for org in &organizations {
                let _ = writeln!(
                    out,
                    "{:>5}  {}  {}",
                    org.id,
                    org.name,
                    format_phone_display(&org.phone)
                );
            }
            let _ = write!(out, "Всего: {}", organizations.len());
        }
        Command::Rooms => {
            let page = client.rooms().list_rooms(list_query()).await?;
            for room in &page.items {
                let _ = writeln!(out, "{:>5}  {}  мест: {}", room.id, room.name, room.capacity);
            }
            let _ = write!(out, "Всего: {}", page.total_count);
        }
        Command::Subjects => {
            let page = client.subjects().list_subjects(list_query()).await?;
            for subject in &page.items {
                let price = subject
                    .price
                    .map(|p| format!("{p:.0} ₸"))
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(out, "{:>5}  {}  {}", subject.id, subject.name, price);
            }
            let _ = write!(out, "Всего: {}", page.total_count);
        }
        Command::Groups => {
            let page = client.groups().list_groups(list_query()).await?;
            for group in &page.items {
                let _ = writeln!(
                    out,
                    "{:>5}  {}  {}  студентов: {}",
                    group.id,
                    group.name,
                    group.subject.name,
                    group.student_count()
                );
            }
            let _ = write!(out, "Всего: {}", page.total_count);
        }
        Command::Users { search } => {
            let query = UserListQuery {
                list: list_query().with_search(search.unwrap_or_default()),
                ..Default::default()
            };
            let page = client.users().list_users(query).await?;
            for user in &page.items {
                let _ = writeln!(
                    out,
                    "{:>5}  {}  {}  {}",
                    user.id,
                    user.login,
                    user.name,
                    user.role.label()
                );
            }
            let _ = write!(out, "Всего: {}", page.total_count);
        }
        Command::Summary => {
            let summary = client.reports().organization_summary(None).await?;
            out.push_str(&serde_json::to_string_pretty(&summary)?);
        }
        Command::ExportUsers { dir } => {
            let data = client.exports().export_users(None).await?;
            let dir = dir.unwrap_or_else(|| PathBuf::from(&config.export.dir));
            let path = save_export(dir, &export_file_name("users"), &data).await?;
            let _ = write!(out, "Сохранено: {}", path.display());
        }
        Command::ExportGroups { dir } => {
            let data = client.exports().export_groups(None).await?;
            let dir = dir.unwrap_or_else(|| PathBuf::from(&config.export.dir));
            let path = save_export(dir, &export_file_name("groups"), &data).await?;
            let _ = write!(out, "Сохранено: {}", path.display());
        }
    }

    Ok(out)
}
