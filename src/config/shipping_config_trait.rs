// ==========================================
// 活体水族发货决策系统 - 发货配置读取 Trait
// ==========================================
// 职责: 定义引擎与适配器所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;
use std::error::Error;

// ==========================================
// ShippingConfigReader Trait
// ==========================================
// 用途: 发货判定、商品分类、采购建议所需的配置读取接口
// 实现者: ConfigManager（从 JSON 配置文件读取,缺省回退默认值）
#[async_trait]
pub trait ShippingConfigReader: Send + Sync {
    // ===== 适温阈值配置 =====

    /// 获取最低发货温度（摄氏度）
    ///
    /// # 返回
    /// - f64: 营业时段均温不低于该值时可配送（>= 比较）
    ///
    /// # 默认值
    /// - -2.0
    async fn get_min_ship_temp_c(&self) -> Result<f64, Box<dyn Error>>;

    /// 获取临界低温区间上限（摄氏度）
    ///
    /// # 返回
    /// - f64: 选定日均温落在 [最低发货温度, 该值] 时标记 extra_cold
    ///
    /// # 默认值
    /// - 0.0
    async fn get_extra_cold_max_c(&self) -> Result<f64, Box<dyn Error>>;

    /// 获取加热包阈值（摄氏度）
    ///
    /// # 返回
    /// - f64: 选定日均温低于该值时标记 needs_heatpack（< 比较）
    ///
    /// # 默认值
    /// - 8.0
    async fn get_heatpack_temp_c(&self) -> Result<f64, Box<dyn Error>>;

    // ===== 营业时段与截单配置 =====

    /// 获取营业时段起始小时（含）
    ///
    /// # 默认值
    /// - 10
    async fn get_business_hour_start(&self) -> Result<u32, Box<dyn Error>>;

    /// 获取营业时段结束小时（含）
    ///
    /// # 默认值
    /// - 17
    async fn get_business_hour_end(&self) -> Result<u32, Box<dyn Error>>;

    /// 获取当日截单小时
    ///
    /// # 返回
    /// - u32: 候选日恰为今天且当前小时 >= 该值时,槽位顺延一周
    ///
    /// # 默认值
    /// - 17
    async fn get_dispatch_cutoff_hour(&self) -> Result<u32, Box<dyn Error>>;

    // ===== 商品分类配置 =====

    /// 获取活体/盆栽识别关键词（小写子串匹配）
    ///
    /// # 默认值
    /// - ["shrimp", "potted", "neocaridina", "caridina", "bundle"]
    async fn get_livestock_keywords(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// 获取排除关键词（命中则强制归入其他类别）
    ///
    /// # 默认值
    /// - ["shrimpsafe"]
    ///
    /// # 用途
    /// - 器材名称含有机体词根时的覆盖（如 "ShrimpSafe Net"）
    async fn get_exclusion_keywords(&self) -> Result<Vec<String>, Box<dyn Error>>;

    // ===== 地理编码配置 =====

    /// 获取地理编码限定国家
    ///
    /// # 默认值
    /// - "Canada"
    async fn get_geocode_country(&self) -> Result<String, Box<dyn Error>>;

    // ===== 订单拉取配置 =====

    /// 获取在线订单拉取回溯天数
    ///
    /// # 默认值
    /// - 30
    async fn get_order_lookback_days(&self) -> Result<i64, Box<dyn Error>>;

    // ===== 采购建议配置 =====

    /// 获取采购建议针对的供应商名称
    ///
    /// # 默认值
    /// - "Tropica"
    async fn get_vendor_name(&self) -> Result<String, Box<dyn Error>>;

    /// 获取销量统计窗口天数（含当天）
    ///
    /// # 默认值
    /// - 14
    async fn get_sales_window_days(&self) -> Result<i64, Box<dyn Error>>;

    /// 获取高销量判定阈值（件）
    ///
    /// # 返回
    /// - i64: 窗口期销量 >= 该值时采用高缓冲系数
    ///
    /// # 默认值
    /// - 10
    async fn get_high_sales_threshold(&self) -> Result<i64, Box<dyn Error>>;

    /// 获取高销量缓冲系数
    ///
    /// # 默认值
    /// - 1.2
    async fn get_high_sales_buffer(&self) -> Result<f64, Box<dyn Error>>;

    /// 获取普通缓冲系数
    ///
    /// # 默认值
    /// - 1.15
    async fn get_low_sales_buffer(&self) -> Result<f64, Box<dyn Error>>;

    // ===== 外部服务配置 =====

    /// 获取 HTTP 请求超时（秒）
    ///
    /// # 默认值
    /// - 30
    async fn get_http_timeout_secs(&self) -> Result<u64, Box<dyn Error>>;

    /// 获取电商平台店铺地址（如 your-store.myshopify.com）
    ///
    /// # 返回
    /// - None: 未配置在线订单源,使用 CSV 导出
    async fn get_shopify_shop_url(&self) -> Result<Option<String>, Box<dyn Error>>;

    /// 获取电商平台 Admin API 访问令牌
    ///
    /// # 返回
    /// - None: 未配置在线订单源
    async fn get_shopify_access_token(&self) -> Result<Option<String>, Box<dyn Error>>;
}
