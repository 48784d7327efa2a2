// ==========================================
// 活体水族发货决策系统 - 导入层
// ==========================================
// 职责: 订单数据导入,生成合并后的客户订单
// 支持: CSV 导出文件, 平台实时拉取
// ==========================================

// 模块声明
pub mod csv_source;
pub mod error;
pub mod order_merger;
pub mod order_source;
pub mod shopify_source;

// 重导出核心类型
pub use csv_source::CsvOrderSource;
pub use error::{ImportError, ImportResult};
pub use order_merger::OrderMerger;
pub use shopify_source::ShopifyOrderSource;

// 重导出 Trait 接口
pub use order_source::OrderSource;
