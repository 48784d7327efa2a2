// ==========================================
// 活体水族发货决策系统 - 气象实体
// ==========================================
// 职责: 坐标、逐时气温序列
// 红线: 不含 HTTP 客户端逻辑,见 weather 层
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// 地理坐标 (Coordinate)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,  // 纬度
    pub longitude: f64, // 经度
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// ==========================================
// 逐时气温样本 (Forecast Sample)
// ==========================================
// 时间戳为目的地当地时间 (naive),小时精度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime, // 当地时间
    pub temperature_c: f64,       // 摄氏温度
}

// ==========================================
// 气温序列 (Forecast Series)
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub samples: Vec<ForecastSample>,
}

impl ForecastSeries {
    pub fn new(samples: Vec<ForecastSample>) -> Self {
        Self { samples }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_forecast_series_empty() {
        let series = ForecastSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn test_forecast_series_len() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let series = ForecastSeries::new(vec![ForecastSample {
            timestamp: ts,
            temperature_c: -1.5,
        }]);
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
    }
}
