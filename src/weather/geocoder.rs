// ==========================================
// 活体水族发货决策系统 - Nominatim 地理编码客户端
// ==========================================
// 职责: 城市+省份 → 坐标,每次批次内同一目的地只查一次(引擎侧缓存)
// 红线: 不做重试,超时与错误交由引擎归入终态
// ==========================================

use crate::domain::forecast::Coordinate;
use crate::domain::order::Destination;
use crate::weather::error::{WeatherError, WeatherResult};
use crate::weather::provider_trait::GeocodeProvider;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

// Nominatim 公共服务,使用政策要求可识别的 User-Agent
const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = concat!("aqua-shipping-dss/", env!("CARGO_PKG_VERSION"));

// ==========================================
// 响应 DTO
// ==========================================
// lat/lon 在 Nominatim 响应中是字符串
#[derive(Debug, Deserialize)]
struct NominatimPlaceDto {
    #[serde(default)]
    lat: String,
    #[serde(default)]
    lon: String,
}

impl NominatimPlaceDto {
    fn into_coordinate(self) -> WeatherResult<Coordinate> {
        let latitude: f64 = self
            .lat
            .parse()
            .map_err(|_| WeatherError::Parse(format!("无效纬度: {:?}", self.lat)))?;
        let longitude: f64 = self
            .lon
            .parse()
            .map_err(|_| WeatherError::Parse(format!("无效经度: {:?}", self.lon)))?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

// ==========================================
// NominatimGeocoder
// ==========================================
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
    country: String, // 限定国家,避免重名城市跨国误命中
}

impl NominatimGeocoder {
    pub fn new(country: impl Into<String>, timeout: Duration) -> WeatherResult<Self> {
        Self::with_base_url(NOMINATIM_BASE_URL, country, timeout)
    }

    /// 指定服务地址构建(测试用)
    pub fn with_base_url(
        base_url: impl Into<String>,
        country: impl Into<String>,
        timeout: Duration,
    ) -> WeatherResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            country: country.into(),
        })
    }
}

#[async_trait]
impl GeocodeProvider for NominatimGeocoder {
    async fn resolve(&self, destination: &Destination) -> WeatherResult<Option<Coordinate>> {
        let url = format!("{}/search", self.base_url);
        debug!(destination = %destination, "地理编码请求");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("city", destination.city.as_str()),
                ("state", destination.province.as_str()),
                ("country", self.country.as_str()),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::BadStatus {
                status: status.as_u16(),
                context: format!("geocode {}", destination),
            });
        }

        let places: Vec<NominatimPlaceDto> = response.json().await?;
        match places.into_iter().next() {
            Some(place) => place.into_coordinate().map(Some),
            None => Ok(None), // 查无此地: 合法终态
        }
    }
}
