// ==========================================
// 活体水族发货决策系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与基础类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod decision;
pub mod forecast;
pub mod order;
pub mod replenishment;
pub mod types;

// 重导出核心类型
pub use decision::{DayAssessment, OrderLine, ShippingDecision, WeatherAssessment};
pub use forecast::{Coordinate, ForecastSample, ForecastSeries};
pub use order::{CustomerOrder, Destination, LineItem, RawOrderRow};
pub use replenishment::{PoRecommendation, VendorProduct};
pub use types::{DeliveryDay, ItemCategory};
