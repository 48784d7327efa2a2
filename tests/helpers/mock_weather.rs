// ==========================================
// Mock 气象协作方 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use aqua_shipping_dss::domain::forecast::{Coordinate, ForecastSample, ForecastSeries};
use aqua_shipping_dss::domain::order::Destination;
use aqua_shipping_dss::weather::{ForecastProvider, GeocodeProvider, WeatherResult};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

// ==========================================
// 计数地理编码器
// ==========================================
// 记录 resolve 调用次数,验证批次内目的地级缓存;
// 未登记的目的地返回 Ok(None) (服务正常但查无此地)
pub struct CountingGeocoder {
    known: HashMap<Destination, Coordinate>,
    calls: AtomicUsize,
}

impl CountingGeocoder {
    pub fn new(known: Vec<(Destination, Coordinate)>) -> Self {
        Self {
            known: known.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// resolve 被调用的总次数
    pub fn resolve_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodeProvider for CountingGeocoder {
    async fn resolve(&self, destination: &Destination) -> WeatherResult<Option<Coordinate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.known.get(destination).copied())
    }
}

// ==========================================
// 脚本化气象源
// ==========================================
// 每个坐标对应一个恒定温度,窗口内每小时一个样本;
// 可按 (坐标, 日期) 覆盖单日温度,制造 Wed/Thu 分化场景;
// 未登记的坐标返回空序列 (引擎侧归入"气象数据不可用")
pub struct ScriptedForecast {
    flat_temps: Vec<(Coordinate, f64)>,
    day_temps: Vec<(Coordinate, NaiveDate, f64)>,
}

impl ScriptedForecast {
    pub fn new(flat_temps: Vec<(Coordinate, f64)>) -> Self {
        Self {
            flat_temps,
            day_temps: Vec::new(),
        }
    }

    /// 指定坐标在某一天的温度,优先于恒温
    pub fn day_temp(mut self, coordinate: Coordinate, date: NaiveDate, temp: f64) -> Self {
        self.day_temps.push((coordinate, date, temp));
        self
    }

    fn temp_for(&self, coordinate: &Coordinate, date: NaiveDate) -> Option<f64> {
        self.day_temps
            .iter()
            .find(|(c, d, _)| c == coordinate && *d == date)
            .map(|(_, _, t)| *t)
            .or_else(|| {
                self.flat_temps
                    .iter()
                    .find(|(c, _)| c == coordinate)
                    .map(|(_, t)| *t)
            })
    }

    fn knows(&self, coordinate: &Coordinate) -> bool {
        self.flat_temps.iter().any(|(c, _)| c == coordinate)
            || self.day_temps.iter().any(|(c, _, _)| c == coordinate)
    }
}

#[async_trait]
impl ForecastProvider for ScriptedForecast {
    async fn fetch_hourly(
        &self,
        coordinate: &Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> WeatherResult<ForecastSeries> {
        if !self.knows(coordinate) {
            return Ok(ForecastSeries::default());
        }

        let mut samples = Vec::new();
        let mut day = start;
        while day <= end {
            if let Some(temp) = self.temp_for(coordinate, day) {
                for hour in 0..24 {
                    if let Some(timestamp) = day.and_hms_opt(hour, 0, 0) {
                        samples.push(ForecastSample {
                            timestamp,
                            temperature_c: temp,
                        });
                    }
                }
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        Ok(ForecastSeries::new(samples))
    }
}
