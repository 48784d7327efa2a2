// ==========================================
// 活体水族发货决策系统 - 发货适温判定引擎
// ==========================================
// 红线: 协作方查询失败一律吸收为终态判定,绝不中断批次
// ==========================================
// 职责: 地理编码 → 预报拉取 → 双候选日评估 → 判定组装
// 输入: 收货目的地 + 当前时刻
// 输出: WeatherAssessment (与订单身份无关,可按目的地复用)
// ==========================================

use crate::config::ShippingConfigReader;
use crate::domain::decision::{DayAssessment, WeatherAssessment};
use crate::domain::order::Destination;
use crate::domain::types::DeliveryDay;
use crate::engine::eligibility_core::{
    EligibilityCore, REASON_LOCATION_NOT_FOUND, REASON_WEATHER_UNAVAILABLE,
};
use crate::weather::{ForecastProvider, GeocodeProvider};
use chrono::NaiveDateTime;
use std::error::Error;
use std::sync::Arc;
use tracing::{instrument, warn};

// ==========================================
// ShippingEligibilityEngine - 发货适温判定引擎
// ==========================================
// 红线: 不做跨批次缓存,不写文件,只计算并返回判定
pub struct ShippingEligibilityEngine<G, F, C>
where
    G: GeocodeProvider,
    F: ForecastProvider,
    C: ShippingConfigReader,
{
    geocoder: Arc<G>,
    forecast: Arc<F>,
    config: Arc<C>,
}

impl<G, F, C> ShippingEligibilityEngine<G, F, C>
where
    G: GeocodeProvider,
    F: ForecastProvider,
    C: ShippingConfigReader,
{
    /// 创建引擎实例
    ///
    /// # 参数
    /// - geocoder: 地理编码协作方
    /// - forecast: 预报协作方
    /// - config: 配置读取器
    pub fn new(geocoder: Arc<G>, forecast: Arc<F>, config: Arc<C>) -> Self {
        Self {
            geocoder,
            forecast,
            config,
        }
    }

    /// 评估单个目的地的发货适温判定
    ///
    /// # 步骤
    /// 1. 解析两个候选配送日期(纯日期计算)
    /// 2. 地理编码: 失败或查无 → "Location not found" 终态
    /// 3. 拉取窗口预报: 失败或空序列 → "Weather data unavailable" 终态
    /// 4. 双日评估 + 判定组装
    ///
    /// # 返回
    /// - Err 仅在配置读取失败时出现;协作方失败一律吸收为终态判定
    #[instrument(skip(self, destination), fields(destination = %destination))]
    pub async fn evaluate_destination(
        &self,
        destination: &Destination,
        now: NaiveDateTime,
    ) -> Result<WeatherAssessment, Box<dyn Error>> {
        // === 步骤 1: 解析候选配送日期 ===
        let cutoff_hour = self.config.get_dispatch_cutoff_hour().await?;
        let wed_date =
            EligibilityCore::resolve_delivery_date(now, DeliveryDay::Wed.weekday(), cutoff_hour);
        let thu_date =
            EligibilityCore::resolve_delivery_date(now, DeliveryDay::Thu.weekday(), cutoff_hour);

        // === 步骤 2: 地理编码 ===
        let coordinate = match self.geocoder.resolve(destination).await {
            Ok(Some(coordinate)) => coordinate,
            Ok(None) => {
                warn!(destination = %destination, "目的地查无结果");
                return Ok(WeatherAssessment::failed(
                    DayAssessment::unavailable(DeliveryDay::Wed, wed_date),
                    DayAssessment::unavailable(DeliveryDay::Thu, thu_date),
                    REASON_LOCATION_NOT_FOUND,
                ));
            }
            Err(e) => {
                warn!(destination = %destination, error = %e, "地理编码失败");
                return Ok(WeatherAssessment::failed(
                    DayAssessment::unavailable(DeliveryDay::Wed, wed_date),
                    DayAssessment::unavailable(DeliveryDay::Thu, thu_date),
                    REASON_LOCATION_NOT_FOUND,
                ));
            }
        };

        // === 步骤 3: 拉取窗口预报 ===
        let (window_start, window_end) =
            EligibilityCore::forecast_window(now.date(), &[wed_date, thu_date]);
        let series = match self
            .forecast
            .fetch_hourly(&coordinate, window_start, window_end)
            .await
        {
            Ok(series) if !series.is_empty() => series,
            Ok(_) => {
                warn!(destination = %destination, "预报返回空序列");
                return Ok(WeatherAssessment::failed(
                    DayAssessment::unavailable(DeliveryDay::Wed, wed_date),
                    DayAssessment::unavailable(DeliveryDay::Thu, thu_date),
                    REASON_WEATHER_UNAVAILABLE,
                ));
            }
            Err(e) => {
                warn!(destination = %destination, error = %e, "预报拉取失败");
                return Ok(WeatherAssessment::failed(
                    DayAssessment::unavailable(DeliveryDay::Wed, wed_date),
                    DayAssessment::unavailable(DeliveryDay::Thu, thu_date),
                    REASON_WEATHER_UNAVAILABLE,
                ));
            }
        };

        // === 步骤 4: 双日评估 + 判定组装 ===
        let start_hour = self.config.get_business_hour_start().await?;
        let end_hour = self.config.get_business_hour_end().await?;
        let min_temp = self.config.get_min_ship_temp_c().await?;
        let extra_cold_max = self.config.get_extra_cold_max_c().await?;
        let heatpack_temp = self.config.get_heatpack_temp_c().await?;

        let wednesday = EligibilityCore::assess_day(
            DeliveryDay::Wed,
            wed_date,
            &series,
            start_hour,
            end_hour,
            min_temp,
        );
        let thursday = EligibilityCore::assess_day(
            DeliveryDay::Thu,
            thu_date,
            &series,
            start_hour,
            end_hour,
            min_temp,
        );

        Ok(EligibilityCore::assemble_assessment(
            wednesday,
            thursday,
            min_temp,
            extra_cold_max,
            heatpack_temp,
        ))
    }
}
