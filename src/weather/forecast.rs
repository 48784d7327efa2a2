// ==========================================
// 活体水族发货决策系统 - Open-Meteo 预报客户端
// ==========================================
// 职责: 坐标 + 日期窗口 → 逐时气温序列(目的地当地时间)
// 红线: 不做重试,不缓存;空序列与错误由引擎归入终态
// ==========================================

use crate::domain::forecast::{Coordinate, ForecastSample, ForecastSeries};
use crate::weather::error::{WeatherError, WeatherResult};
use crate::weather::provider_trait::ForecastProvider;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com";

// Open-Meteo 逐时时间戳格式,分钟精度
const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

// ==========================================
// 响应 DTO
// ==========================================
// hourly.time 与 hourly.temperature_2m 为平行数组,温度可能为 null
#[derive(Debug, Deserialize)]
struct ForecastResponseDto {
    #[serde(default)]
    hourly: HourlyDto,
}

#[derive(Debug, Default, Deserialize)]
struct HourlyDto {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
}

impl HourlyDto {
    /// 平行数组 → 气温序列;null 温度与无法解析的时间戳跳过
    fn into_series(self) -> ForecastSeries {
        let mut samples = Vec::with_capacity(self.time.len());
        let mut skipped = 0usize;

        for (time_str, temp) in self.time.into_iter().zip(self.temperature_2m) {
            let Some(temperature_c) = temp else {
                skipped += 1;
                continue;
            };
            match NaiveDateTime::parse_from_str(&time_str, HOURLY_TIME_FORMAT) {
                Ok(timestamp) => samples.push(ForecastSample {
                    timestamp,
                    temperature_c,
                }),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "预报样本存在缺失或无法解析的条目,已跳过");
        }
        ForecastSeries::new(samples)
    }
}

// ==========================================
// OpenMeteoClient
// ==========================================
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(timeout: Duration) -> WeatherResult<Self> {
        Self::with_base_url(OPEN_METEO_BASE_URL, timeout)
    }

    /// 指定服务地址构建(测试用)
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> WeatherResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch_hourly(
        &self,
        coordinate: &Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> WeatherResult<ForecastSeries> {
        let url = format!("{}/v1/forecast", self.base_url);
        debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            start = %start,
            end = %end,
            "预报拉取请求"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
                ("hourly", "temperature_2m".to_string()),
                // 以目的地当地时区返回逐时数据
                ("timezone", "auto".to_string()),
                ("start_date", start.format("%Y-%m-%d").to_string()),
                ("end_date", end.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::BadStatus {
                status: status.as_u16(),
                context: format!(
                    "forecast ({:.4}, {:.4})",
                    coordinate.latitude, coordinate.longitude
                ),
            });
        }

        let dto: ForecastResponseDto = response.json().await?;
        Ok(dto.hourly.into_series())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_dto_into_series() {
        let dto = HourlyDto {
            time: vec![
                "2025-01-15T10:00".to_string(),
                "2025-01-15T11:00".to_string(),
            ],
            temperature_2m: vec![Some(-1.5), Some(-0.5)],
        };
        let series = dto.into_series();
        assert_eq!(series.len(), 2);
        assert!((series.samples[0].temperature_c - (-1.5)).abs() < 0.01);
        assert_eq!(
            series.samples[0].timestamp,
            NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_hourly_dto_skips_null_temperatures() {
        let dto = HourlyDto {
            time: vec![
                "2025-01-15T10:00".to_string(),
                "2025-01-15T11:00".to_string(),
                "2025-01-15T12:00".to_string(),
            ],
            temperature_2m: vec![Some(1.0), None, Some(3.0)],
        };
        assert_eq!(dto.into_series().len(), 2);
    }

    #[test]
    fn test_hourly_dto_skips_bad_timestamps() {
        let dto = HourlyDto {
            time: vec!["garbage".to_string(), "2025-01-15T10:00".to_string()],
            temperature_2m: vec![Some(1.0), Some(2.0)],
        };
        let series = dto.into_series();
        assert_eq!(series.len(), 1);
        assert!((series.samples[0].temperature_c - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_hourly_dto_length_mismatch_truncates() {
        // 平行数组长度不一致时按较短者截断
        let dto = HourlyDto {
            time: vec![
                "2025-01-15T10:00".to_string(),
                "2025-01-15T11:00".to_string(),
            ],
            temperature_2m: vec![Some(1.0)],
        };
        assert_eq!(dto.into_series().len(), 1);
    }

    #[test]
    fn test_empty_response_yields_empty_series() {
        let dto = HourlyDto::default();
        assert!(dto.into_series().is_empty());
    }
}
