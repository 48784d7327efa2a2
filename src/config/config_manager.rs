// ==========================================
// 活体水族发货决策系统 - 配置管理器
// ==========================================
// 职责: 从 JSON 配置文件加载配置,缺省字段回退默认值
// 红线: 启动时一次性读取,运行期间不热更新
// ==========================================

use crate::config::shipping_config_trait::ShippingConfigReader;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;
use thiserror::Error;
use tracing::info;

// ==========================================
// 配置错误
// ==========================================
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// 默认值函数 (serde default)
// ==========================================
mod defaults {
    pub fn min_ship_temp_c() -> f64 {
        -2.0
    }
    pub fn extra_cold_max_c() -> f64 {
        0.0
    }
    pub fn heatpack_temp_c() -> f64 {
        8.0
    }
    pub fn business_hour_start() -> u32 {
        10
    }
    pub fn business_hour_end() -> u32 {
        17
    }
    pub fn dispatch_cutoff_hour() -> u32 {
        17
    }
    pub fn livestock_keywords() -> Vec<String> {
        ["shrimp", "potted", "neocaridina", "caridina", "bundle"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
    pub fn exclusion_keywords() -> Vec<String> {
        vec!["shrimpsafe".to_string()]
    }
    pub fn geocode_country() -> String {
        "Canada".to_string()
    }
    pub fn order_lookback_days() -> i64 {
        30
    }
    pub fn vendor_name() -> String {
        "Tropica".to_string()
    }
    pub fn sales_window_days() -> i64 {
        14
    }
    pub fn high_sales_threshold() -> i64 {
        10
    }
    pub fn high_sales_buffer() -> f64 {
        1.2
    }
    pub fn low_sales_buffer() -> f64 {
        1.15
    }
    pub fn http_timeout_secs() -> u64 {
        30
    }
}

// ==========================================
// 配置值集合
// ==========================================
// 全部字段可省略,省略即采用默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfigValues {
    // ===== 适温阈值 =====
    #[serde(default = "defaults::min_ship_temp_c")]
    pub min_ship_temp_c: f64,
    #[serde(default = "defaults::extra_cold_max_c")]
    pub extra_cold_max_c: f64,
    #[serde(default = "defaults::heatpack_temp_c")]
    pub heatpack_temp_c: f64,

    // ===== 营业时段与截单 =====
    #[serde(default = "defaults::business_hour_start")]
    pub business_hour_start: u32,
    #[serde(default = "defaults::business_hour_end")]
    pub business_hour_end: u32,
    #[serde(default = "defaults::dispatch_cutoff_hour")]
    pub dispatch_cutoff_hour: u32,

    // ===== 商品分类 =====
    #[serde(default = "defaults::livestock_keywords")]
    pub livestock_keywords: Vec<String>,
    #[serde(default = "defaults::exclusion_keywords")]
    pub exclusion_keywords: Vec<String>,

    // ===== 地理编码与订单拉取 =====
    #[serde(default = "defaults::geocode_country")]
    pub geocode_country: String,
    #[serde(default = "defaults::order_lookback_days")]
    pub order_lookback_days: i64,

    // ===== 采购建议 =====
    #[serde(default = "defaults::vendor_name")]
    pub vendor_name: String,
    #[serde(default = "defaults::sales_window_days")]
    pub sales_window_days: i64,
    #[serde(default = "defaults::high_sales_threshold")]
    pub high_sales_threshold: i64,
    #[serde(default = "defaults::high_sales_buffer")]
    pub high_sales_buffer: f64,
    #[serde(default = "defaults::low_sales_buffer")]
    pub low_sales_buffer: f64,

    // ===== 外部服务 =====
    #[serde(default = "defaults::http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default)]
    pub shopify_shop_url: Option<String>,
    #[serde(default)]
    pub shopify_access_token: Option<String>,
}

impl Default for ShippingConfigValues {
    fn default() -> Self {
        Self {
            min_ship_temp_c: defaults::min_ship_temp_c(),
            extra_cold_max_c: defaults::extra_cold_max_c(),
            heatpack_temp_c: defaults::heatpack_temp_c(),
            business_hour_start: defaults::business_hour_start(),
            business_hour_end: defaults::business_hour_end(),
            dispatch_cutoff_hour: defaults::dispatch_cutoff_hour(),
            livestock_keywords: defaults::livestock_keywords(),
            exclusion_keywords: defaults::exclusion_keywords(),
            geocode_country: defaults::geocode_country(),
            order_lookback_days: defaults::order_lookback_days(),
            vendor_name: defaults::vendor_name(),
            sales_window_days: defaults::sales_window_days(),
            high_sales_threshold: defaults::high_sales_threshold(),
            high_sales_buffer: defaults::high_sales_buffer(),
            low_sales_buffer: defaults::low_sales_buffer(),
            http_timeout_secs: defaults::http_timeout_secs(),
            shopify_shop_url: None,
            shopify_access_token: None,
        }
    }
}

// ==========================================
// 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    values: ShippingConfigValues,
}

impl ConfigManager {
    /// 直接由配置值构建（测试与程序内组装用）
    pub fn from_values(values: ShippingConfigValues) -> Self {
        Self { values }
    }

    /// 从 JSON 文件加载,文件必须存在
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let values: ShippingConfigValues = serde_json::from_str(&content)?;
        info!(path = %path.display(), "已加载配置文件");
        Ok(Self { values })
    }

    /// 从 JSON 文件加载,文件缺失时回退默认配置
    ///
    /// # 规则
    /// - 文件不存在: 默认配置 + info 日志,不视为错误
    /// - 文件存在但解析失败: 返回错误,配置损坏应当显式失败
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "配置文件不存在,使用默认配置");
            Ok(Self::from_values(ShippingConfigValues::default()))
        }
    }

    pub fn values(&self) -> &ShippingConfigValues {
        &self.values
    }
}

#[async_trait]
impl ShippingConfigReader for ConfigManager {
    async fn get_min_ship_temp_c(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.values.min_ship_temp_c)
    }

    async fn get_extra_cold_max_c(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.values.extra_cold_max_c)
    }

    async fn get_heatpack_temp_c(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.values.heatpack_temp_c)
    }

    async fn get_business_hour_start(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.values.business_hour_start)
    }

    async fn get_business_hour_end(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.values.business_hour_end)
    }

    async fn get_dispatch_cutoff_hour(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.values.dispatch_cutoff_hour)
    }

    async fn get_livestock_keywords(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.values.livestock_keywords.clone())
    }

    async fn get_exclusion_keywords(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.values.exclusion_keywords.clone())
    }

    async fn get_geocode_country(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.values.geocode_country.clone())
    }

    async fn get_order_lookback_days(&self) -> Result<i64, Box<dyn Error>> {
        Ok(self.values.order_lookback_days)
    }

    async fn get_vendor_name(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.values.vendor_name.clone())
    }

    async fn get_sales_window_days(&self) -> Result<i64, Box<dyn Error>> {
        Ok(self.values.sales_window_days)
    }

    async fn get_high_sales_threshold(&self) -> Result<i64, Box<dyn Error>> {
        Ok(self.values.high_sales_threshold)
    }

    async fn get_high_sales_buffer(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.values.high_sales_buffer)
    }

    async fn get_low_sales_buffer(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.values.low_sales_buffer)
    }

    async fn get_http_timeout_secs(&self) -> Result<u64, Box<dyn Error>> {
        Ok(self.values.http_timeout_secs)
    }

    async fn get_shopify_shop_url(&self) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.values.shopify_shop_url.clone())
    }

    async fn get_shopify_access_token(&self) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.values.shopify_access_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_values() {
        let values = ShippingConfigValues::default();
        assert!((values.min_ship_temp_c - (-2.0)).abs() < 0.01);
        assert!((values.extra_cold_max_c - 0.0).abs() < 0.01);
        assert!((values.heatpack_temp_c - 8.0).abs() < 0.01);
        assert_eq!(values.business_hour_start, 10);
        assert_eq!(values.business_hour_end, 17);
        assert_eq!(values.dispatch_cutoff_hour, 17);
        assert!(values.livestock_keywords.contains(&"shrimp".to_string()));
        assert!(values.exclusion_keywords.contains(&"shrimpsafe".to_string()));
        assert_eq!(values.geocode_country, "Canada");
        assert_eq!(values.vendor_name, "Tropica");
        assert_eq!(values.sales_window_days, 14);
        assert!(values.shopify_shop_url.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        // 只覆盖一个字段,其余保持默认
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{\"min_ship_temp_c\": -5.0}}").unwrap();

        let manager = ConfigManager::load(file.path()).unwrap();
        assert!((manager.values().min_ship_temp_c - (-5.0)).abs() < 0.01);
        assert_eq!(manager.values().business_hour_start, 10);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_config.json");

        let manager = ConfigManager::load_or_default(&path).unwrap();
        assert_eq!(manager.values().dispatch_cutoff_hour, 17);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{not json").unwrap();

        assert!(ConfigManager::load(file.path()).is_err());
    }

    #[tokio::test]
    async fn test_trait_getters_reflect_values() {
        let values = ShippingConfigValues {
            high_sales_threshold: 20,
            shopify_shop_url: Some("demo.myshopify.com".to_string()),
            ..ShippingConfigValues::default()
        };
        let manager = ConfigManager::from_values(values);

        assert_eq!(manager.get_high_sales_threshold().await.unwrap(), 20);
        assert_eq!(
            manager.get_shopify_shop_url().await.unwrap(),
            Some("demo.myshopify.com".to_string())
        );
    }
}
