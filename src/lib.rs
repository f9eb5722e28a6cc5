//! Trackademy Admin - 教育机构管理平台客户端
//!
//! 基于 reqwest 的类型化 REST 客户端，外加表单校验和弹窗/列表状态。
//!
//! # 架构
//! - `cli`: 命令行入口
//! - `client`: HTTP 客户端、会话存储和鉴权跳转
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 后端 DTO 和表单数据
//! - `services`: 按资源划分的接口封装
//! - `ui`: 弹窗、列表和列显示状态
//! - `utils`: 工具函数（手机号格式化、防抖、基础校验）
//! - `validators`: 表单校验

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
pub mod validators;
