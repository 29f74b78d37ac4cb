// ==========================================
// 管道采购决策支持 - 配置层
// ==========================================
// 职责: 系统配置加载与校验
// 存储: JSON 文件 + 环境变量覆写
// ==========================================

pub mod advisor_config;
pub mod config_manager;
pub mod error;

// 重导出核心配置管理器
pub use advisor_config::{AdvisorConfig, SupplierDirectory};
pub use config_manager::{config_keys, ConfigManager, ConfigSource};
pub use error::{ConfigError, ConfigResult};
