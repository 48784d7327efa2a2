// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use aqua_shipping_dss::config::ShippingConfigReader;
use std::error::Error;

/// Mock 配置结构: 字段即返回值
#[derive(Debug, Clone)]
pub struct MockShippingConfig {
    pub min_ship_temp_c: f64,
    pub extra_cold_max_c: f64,
    pub heatpack_temp_c: f64,
    pub business_hour_start: u32,
    pub business_hour_end: u32,
    pub dispatch_cutoff_hour: u32,
    pub livestock_keywords: Vec<String>,
    pub exclusion_keywords: Vec<String>,
    pub geocode_country: String,
    pub order_lookback_days: i64,
    pub vendor_name: String,
    pub sales_window_days: i64,
    pub high_sales_threshold: i64,
    pub high_sales_buffer: f64,
    pub low_sales_buffer: f64,
    pub http_timeout_secs: u64,
    pub shopify_shop_url: Option<String>,
    pub shopify_access_token: Option<String>,
}

impl MockShippingConfig {
    /// 生产默认值的镜像
    pub fn default() -> Self {
        Self {
            min_ship_temp_c: -2.0,
            extra_cold_max_c: 0.0,
            heatpack_temp_c: 8.0,
            business_hour_start: 10,
            business_hour_end: 17,
            dispatch_cutoff_hour: 17,
            livestock_keywords: vec![
                "shrimp".to_string(),
                "potted".to_string(),
                "neocaridina".to_string(),
                "caridina".to_string(),
                "bundle".to_string(),
            ],
            exclusion_keywords: vec!["shrimpsafe".to_string()],
            geocode_country: "Canada".to_string(),
            order_lookback_days: 30,
            vendor_name: "Tropica".to_string(),
            sales_window_days: 14,
            high_sales_threshold: 10,
            high_sales_buffer: 1.2,
            low_sales_buffer: 1.15,
            http_timeout_secs: 30,
            shopify_shop_url: None,
            shopify_access_token: None,
        }
    }

    /// 自定义最低发货温度
    pub fn with_min_ship_temp(min_temp: f64) -> Self {
        let mut config = Self::default();
        config.min_ship_temp_c = min_temp;
        config
    }

    /// 自定义销量窗口与缓冲参数
    pub fn with_sales_window(window_days: i64, threshold: i64) -> Self {
        let mut config = Self::default();
        config.sales_window_days = window_days;
        config.high_sales_threshold = threshold;
        config
    }
}

#[async_trait]
impl ShippingConfigReader for MockShippingConfig {
    async fn get_min_ship_temp_c(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.min_ship_temp_c)
    }

    async fn get_extra_cold_max_c(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.extra_cold_max_c)
    }

    async fn get_heatpack_temp_c(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.heatpack_temp_c)
    }

    async fn get_business_hour_start(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.business_hour_start)
    }

    async fn get_business_hour_end(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.business_hour_end)
    }

    async fn get_dispatch_cutoff_hour(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.dispatch_cutoff_hour)
    }

    async fn get_livestock_keywords(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.livestock_keywords.clone())
    }

    async fn get_exclusion_keywords(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.exclusion_keywords.clone())
    }

    async fn get_geocode_country(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.geocode_country.clone())
    }

    async fn get_order_lookback_days(&self) -> Result<i64, Box<dyn Error>> {
        Ok(self.order_lookback_days)
    }

    async fn get_vendor_name(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.vendor_name.clone())
    }

    async fn get_sales_window_days(&self) -> Result<i64, Box<dyn Error>> {
        Ok(self.sales_window_days)
    }

    async fn get_high_sales_threshold(&self) -> Result<i64, Box<dyn Error>> {
        Ok(self.high_sales_threshold)
    }

    async fn get_high_sales_buffer(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.high_sales_buffer)
    }

    async fn get_low_sales_buffer(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.low_sales_buffer)
    }

    async fn get_http_timeout_secs(&self) -> Result<u64, Box<dyn Error>> {
        Ok(self.http_timeout_secs)
    }

    async fn get_shopify_shop_url(&self) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.shopify_shop_url.clone())
    }

    async fn get_shopify_access_token(&self) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.shopify_access_token.clone())
    }
}
