// ==========================================
// 活体水族发货决策系统 - 配置层
// ==========================================
// 职责: 系统配置管理,JSON 文件存储,缺省回退默认值
// ==========================================

pub mod config_manager;
pub mod shipping_config_trait;

// 重导出核心配置管理器
pub use config_manager::{ConfigError, ConfigManager, ConfigResult, ShippingConfigValues};
pub use shipping_config_trait::ShippingConfigReader;
