//! 服务器状态
//!
//! 持有所有 handler 共享的单例：配置和内存存储。

use std::time::Instant;

use crate::core::Config;
use crate::store::{MemStore, seed};

/// 服务器状态 - 注入到所有 handler
///
/// Clone 即共享：所有克隆指向同一份存储。
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: MemStore,
    /// 进程启动时刻 (健康检查上报 uptime)
    pub started_at: Instant,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 创建空的内存存储；按配置填充演示数据。
    pub fn initialize(config: &Config) -> Self {
        let store = MemStore::new();

        if config.seed_demo_data {
            seed::seed_demo_data(&store);
        }

        Self {
            config: config.clone(),
            store,
            started_at: Instant::now(),
        }
    }
}
