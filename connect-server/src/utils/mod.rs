//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型和结果别名
//! - [`logger`] - tracing 日志初始化
//! - [`time`] - 业务时区日期换算
//! - [`validation`] - 请求字段校验

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResult};
