// ==========================================
// 活体水族发货决策系统 - 气象侧协作方 Trait
// ==========================================
// 职责: 定义发货判定引擎依赖的地理编码/预报接口（不包含实现）
// 红线: 不包含判定逻辑
// ==========================================

use crate::domain::forecast::{Coordinate, ForecastSeries};
use crate::domain::order::Destination;
use crate::weather::error::WeatherResult;
use async_trait::async_trait;
use chrono::NaiveDate;

// ==========================================
// GeocodeProvider Trait
// ==========================================
// 实现者: NominatimGeocoder
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// 解析目的地坐标
    ///
    /// # 返回
    /// - Ok(Some(coord)): 命中
    /// - Ok(None): 服务正常但查无此地(合法终态,非错误)
    /// - Err: 传输或服务异常(引擎侧同样归入"未找到"终态)
    async fn resolve(&self, destination: &Destination) -> WeatherResult<Option<Coordinate>>;
}

// ==========================================
// ForecastProvider Trait
// ==========================================
// 实现者: OpenMeteoClient
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// 拉取逐时气温序列
    ///
    /// # 参数
    /// - start/end: 拉取窗口(含两端),须覆盖全部候选配送日
    ///
    /// # 返回
    /// - 时间戳为目的地当地时间;空序列由引擎侧归入"气象数据不可用"终态
    async fn fetch_hourly(
        &self,
        coordinate: &Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> WeatherResult<ForecastSeries>;
}
