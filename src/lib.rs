// ==========================================
// 活体水族发货决策系统 - 核心库
// ==========================================
// 技术栈: Tokio + Reqwest + CSV
// 系统定位: 决策支持系统 (人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 订单数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 气象层 - 地理编码与气温预报
pub mod weather;

// 电商平台层 - 订单/商品/库存适配
pub mod shopify;

// 报告层 - 落盘产物与汇总
pub mod report;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DeliveryDay, ItemCategory};

// 领域实体
pub use domain::{
    CustomerOrder, DayAssessment, Destination, ForecastSeries, OrderLine, PoRecommendation,
    ShippingDecision, VendorProduct, WeatherAssessment,
};

// 引擎
pub use engine::{
    EligibilityCore, ItemClassifier, ReplenishmentCore, ReplenishmentEngine,
    ShippingEligibilityEngine, ShippingOrchestrator,
};

// 配置
pub use config::{ConfigManager, ShippingConfigReader};

// 汇总
pub use report::BatchSummary;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "活体水族发货决策系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
