// ==========================================
// 活体水族发货决策系统 - 气象层
// ==========================================
// 职责: 地理编码与气温预报的外部服务适配
// 红线: 薄封装,可替换;不含判定逻辑,不做重试与缓存
// ==========================================

pub mod error;
pub mod forecast;
pub mod geocoder;
pub mod provider_trait;

// 重导出核心类型
pub use error::{WeatherError, WeatherResult};
pub use forecast::OpenMeteoClient;
pub use geocoder::NominatimGeocoder;

// 重导出 Trait 接口
pub use provider_trait::{ForecastProvider, GeocodeProvider};
