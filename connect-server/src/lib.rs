//! Njaboot Connect Server - 社区杂货电商后端
//!
//! # 架构概述
//!
//! 本模块是 Connect 后端的主入口，提供以下核心功能：
//!
//! - **存储** (`store`): 进程内 DashMap 存储，按实体切分的仓储接口
//! - **HTTP API** (`api`): RESTful API 接口 (顾客下单 / 门店经营 / 供应链)
//! - **配置与状态** (`core`): 环境变量配置、共享状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! connect-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── store/         # 内存存储层 (仓储 + 演示数据)
//! └── utils/         # 错误、日志、时间、校验
//! ```
//!
//! 所有状态只活在进程内：重启即清空，没有持久化层。

pub mod api;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use store::MemStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    _   __    _       __                __
   / | / /   (_)___ _/ /_  ____  ____  / /_
  /  |/ /   / / __ `/ __ \/ __ \/ __ \/ __/
 / /|  /   / / /_/ / /_/ / /_/ / /_/ / /_
/_/ |_/__ / /\__,_/_.___/\____/\____/\__/
      /___/        Connect
    "#
    );
}
