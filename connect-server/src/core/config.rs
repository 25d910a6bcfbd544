//! 服务器配置
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | HOST | 0.0.0.0 | 监听地址 |
//! | HTTP_PORT | 3000 | HTTP 服务端口 |
//! | BUSINESS_TIMEZONE | Africa/Dakar | 营业日边界所用时区 |
//! | SEED_DEMO_DATA | true | 启动时填充演示数据 |
//! | LOG_LEVEL | info | 日志级别 |
//! | LOG_DIR | (无) | 日志文件目录，缺省只输出到 stdout |
//! | ENVIRONMENT | development | 运行环境 |
//!
//! # 示例
//!
//! ```ignore
//! HTTP_PORT=8080 SEED_DEMO_DATA=false cargo run
//! ```

use chrono_tz::Tz;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 营业日 (当地零点) 换算所用时区
    pub business_timezone: Tz,
    /// 启动时填充演示数据
    pub seed_demo_data: bool,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let business_timezone = std::env::var("BUSINESS_TIMEZONE")
            .ok()
            .and_then(|tz| match tz.parse() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    tracing::warn!(timezone = %tz, "Unknown BUSINESS_TIMEZONE, falling back to Africa/Dakar");
                    None
                }
            })
            .unwrap_or(chrono_tz::Africa::Dakar);

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            business_timezone,
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 测试用配置：不填充演示数据
    pub fn for_tests() -> Self {
        Self {
            seed_demo_data: false,
            ..Self::default()
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            http_port: 3000,
            business_timezone: chrono_tz::Africa::Dakar,
            seed_demo_data: true,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}
