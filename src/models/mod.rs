//! 后端 DTO 定义
//!
//! 字段命名与后端保持一致（camelCase），整数枚举按数值序列化。

/// 定义以整数传输的枚举
///
/// 自动生成：
/// - enum 定义（第一个变体为默认值）
/// - as_i32() / label() 方法
/// - TryFrom<i32>、Serialize、Deserialize、Display
macro_rules! define_int_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $first:ident = $first_value:literal => $first_label:literal
            $(, $variant:ident = $value:literal => $label:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $first,
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$name::$first $(, $name::$variant)*];

            /// 后端使用的数值
            pub fn as_i32(self) -> i32 {
                match self {
                    $name::$first => $first_value,
                    $($name::$variant => $value,)*
                }
            }

            /// 展示名称
            pub fn label(self) -> &'static str {
                match self {
                    $name::$first => $first_label,
                    $($name::$variant => $label,)*
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = String;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $first_value => Ok($name::$first),
                    $($value => Ok($name::$variant),)*
                    _ => {
                        let supported: Vec<String> = [$first_value $(, $value)*]
                            .iter()
                            .map(|v: &i32| v.to_string())
                            .collect();
                        Err(format!(
                            "Invalid {}: {value}. Supported values: {}",
                            stringify!($name),
                            supported.join(", ")
                        ))
                    }
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_i32(self.as_i32())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = i32::deserialize(deserializer)?;
                $name::try_from(value).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod groups;
pub mod organizations;
pub mod rooms;
pub mod subjects;
pub mod submissions;
pub mod users;

pub use common::{ListQuery, PaginatedResponse};

/// 带可选 ID 的表单数据（创建模式下 ID 为空）
pub trait FormRecord {
    fn record_id(&self) -> Option<i64>;
}
