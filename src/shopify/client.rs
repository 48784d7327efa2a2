// ==========================================
// 活体水族发货决策系统 - 电商平台客户端
// ==========================================
// 职责: Shopify Admin REST API 适配 (订单 / 商品 / 库存)
// 红线: 薄封装,分页必须跟随 Link 头直到耗尽;令牌不落日志
// ==========================================

use crate::domain::replenishment::VendorProduct;
use crate::engine::replenishment::VendorCatalogSource;
use crate::shopify::error::{ShopifyError, ShopifyResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, warn};

// ===== API 常量 =====
const SHOPIFY_API_VERSION: &str = "2023-10";
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";
const PAGE_LIMIT: u32 = 250;
// inventory_levels 接口按 ID 列表查询,批量过大有 URL 长度风险
const INVENTORY_BATCH_SIZE: usize = 50;

// ==========================================
// 响应 DTO (宽容解析,缺字段取默认值)
// ==========================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersPageDto {
    #[serde(default)]
    pub orders: Vec<ShopifyOrderDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopifyOrderDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String, // 订单编号,带 "#" 前缀
    #[serde(default)]
    pub cancelled_at: Option<String>,
    #[serde(default)]
    pub refunded_at: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddressDto>,
    #[serde(default)]
    pub line_items: Vec<LineItemDto>,
}

impl ShopifyOrderDto {
    /// 有效订单: 未取消且未退款
    pub fn is_active(&self) -> bool {
        self.cancelled_at.is_none() && self.refunded_at.is_none()
    }

    /// 去掉 "#" 前缀的订单编号
    pub fn order_number(&self) -> String {
        self.name.trim_start_matches('#').to_string()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShippingAddressDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItemDto {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub fulfillment_status: Option<String>,
}

impl LineItemDto {
    /// 行项目尚未履约 (状态缺失视同未履约)
    pub fn is_unfulfilled(&self) -> bool {
        match self.fulfillment_status.as_deref() {
            None | Some("unfulfilled") => true,
            Some(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProductsPageDto {
    #[serde(default)]
    products: Vec<ProductDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub vendor: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct VariantsPageDto {
    #[serde(default)]
    variants: Vec<VariantDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub inventory_item_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InventoryLevelsPageDto {
    #[serde(default)]
    inventory_levels: Vec<InventoryLevelDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InventoryLevelDto {
    #[serde(default)]
    inventory_item_id: i64,
    #[serde(default)]
    available: Option<i64>, // 未跟踪库存时平台返回 null
}

// ==========================================
// 纯函数 (分页与聚合)
// ==========================================

/// 从 Link 响应头中提取 rel="next" 的下一页地址
///
/// # 格式
/// `<https://...page_info=a>; rel="previous", <https://...page_info=b>; rel="next"`
pub fn parse_next_link(link_header: &str) -> Option<String> {
    link_header
        .split(',')
        .find(|part| part.contains("rel=\"next\""))
        .and_then(|part| {
            let start = part.find('<')? + 1;
            let end = part.find('>')?;
            if start <= end {
                Some(part[start..end].to_string())
            } else {
                None
            }
        })
}

/// 按商品汇总窗口期销量
///
/// # 规则
/// - 已取消 / 已退款订单不计
/// - 仅统计跟踪列表内的商品
pub fn aggregate_sales_by_product(
    orders: &[ShopifyOrderDto],
    tracked: &HashSet<i64>,
) -> HashMap<i64, i64> {
    let mut sales: HashMap<i64, i64> = HashMap::new();
    for order in orders.iter().filter(|o| o.is_active()) {
        for line in &order.line_items {
            if let Some(product_id) = line.product_id {
                if tracked.contains(&product_id) {
                    *sales.entry(product_id).or_insert(0) += line.quantity;
                }
            }
        }
    }
    sales
}

/// 按商品汇总未履约占用量
///
/// # 规则
/// - 已取消 / 已退款订单不计
/// - 仅统计未履约行项目 (状态缺失视同未履约)
pub fn sum_committed_by_product(
    orders: &[ShopifyOrderDto],
    tracked: &HashSet<i64>,
) -> HashMap<i64, i64> {
    let mut committed: HashMap<i64, i64> = HashMap::new();
    for order in orders.iter().filter(|o| o.is_active()) {
        for line in order.line_items.iter().filter(|l| l.is_unfulfilled()) {
            if let Some(product_id) = line.product_id {
                if tracked.contains(&product_id) {
                    *committed.entry(product_id).or_insert(0) += line.quantity;
                }
            }
        }
    }
    committed
}

/// 过滤出指定供应商的商品
fn filter_vendor_products(products: Vec<ProductDto>, vendor: &str) -> Vec<VendorProduct> {
    products
        .into_iter()
        .filter(|p| p.vendor == vendor)
        .map(|p| VendorProduct {
            product_id: p.id,
            title: p.title,
        })
        .collect()
}

// ==========================================
// ShopifyClient - 平台客户端
// ==========================================

pub struct ShopifyClient {
    client: reqwest::Client,
    base_url: String,
}

impl ShopifyClient {
    /// 创建客户端
    ///
    /// # 参数
    /// - shop_url: 店铺域名,如 "example.myshopify.com"
    /// - access_token: Admin API 访问令牌
    /// - timeout: 请求超时
    pub fn new(shop_url: &str, access_token: &str, timeout: Duration) -> ShopifyResult<Self> {
        let base_url = format!("https://{}/admin/api/{}", shop_url, SHOPIFY_API_VERSION);
        Self::with_base_url(&base_url, access_token, timeout)
    }

    /// 指定完整基地址创建 (测试用)
    pub fn with_base_url(
        base_url: &str,
        access_token: &str,
        timeout: Duration,
    ) -> ShopifyResult<Self> {
        let mut token = header::HeaderValue::from_str(access_token)
            .map_err(|_| ShopifyError::MissingCredentials("访问令牌含非法字符".to_string()))?;
        token.set_sensitive(true);
        let mut headers = header::HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    // ===== 订单 =====

    /// 拉取指定日期起创建的全部订单 (任意状态,逐页跟随 Link 头)
    pub async fn fetch_orders_since(
        &self,
        created_at_min: NaiveDate,
    ) -> ShopifyResult<Vec<ShopifyOrderDto>> {
        let first_url = format!(
            "{}/orders.json?status=any&limit={}&created_at_min={}",
            self.base_url,
            PAGE_LIMIT,
            created_at_min.format("%Y-%m-%d")
        );
        self.fetch_orders_paged(first_url, "orders").await
    }

    /// 拉取全部未履约订单
    pub async fn fetch_unfulfilled_orders(&self) -> ShopifyResult<Vec<ShopifyOrderDto>> {
        let first_url = format!(
            "{}/orders.json?status=open&fulfillment_status=unfulfilled&limit={}",
            self.base_url, PAGE_LIMIT
        );
        self.fetch_orders_paged(first_url, "unfulfilled orders").await
    }

    async fn fetch_orders_paged(
        &self,
        first_url: String,
        context: &str,
    ) -> ShopifyResult<Vec<ShopifyOrderDto>> {
        let mut orders = Vec::new();
        let mut next_url = Some(first_url);

        while let Some(url) = next_url {
            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ShopifyError::BadStatus {
                    status: status.as_u16(),
                    context: context.to_string(),
                });
            }
            // Link 头要在消费响应体前取出
            next_url = response
                .headers()
                .get(header::LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let page: OrdersPageDto = response.json().await?;
            debug!(page_orders = page.orders.len(), context, "拉取订单分页");
            orders.extend(page.orders);
        }

        info!(orders_count = orders.len(), context, "订单拉取完成");
        Ok(orders)
    }

    // ===== 商品与库存 =====

    /// 拉取指定供应商的商品 (逐页拉取全量商品后按供应商过滤)
    pub async fn fetch_products_by_vendor(
        &self,
        vendor: &str,
    ) -> ShopifyResult<Vec<VendorProduct>> {
        let mut products = Vec::new();
        let mut next_url = Some(format!(
            "{}/products.json?limit={}",
            self.base_url, PAGE_LIMIT
        ));

        while let Some(url) = next_url {
            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ShopifyError::BadStatus {
                    status: status.as_u16(),
                    context: "products".to_string(),
                });
            }
            next_url = response
                .headers()
                .get(header::LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let page: ProductsPageDto = response.json().await?;
            products.extend(page.products);
        }

        let filtered = filter_vendor_products(products, vendor);
        info!(
            vendor = %vendor,
            products_count = filtered.len(),
            "供应商商品拉取完成"
        );
        Ok(filtered)
    }

    /// 拉取单个商品的全部变体
    pub async fn fetch_variants(&self, product_id: i64) -> ShopifyResult<Vec<VariantDto>> {
        let url = format!("{}/products/{}/variants.json", self.base_url, product_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShopifyError::BadStatus {
                status: status.as_u16(),
                context: format!("variants of product {}", product_id),
            });
        }
        let page: VariantsPageDto = response.json().await?;
        Ok(page.variants)
    }

    /// 按库存项 ID 批量查询可用量 (每批 50 个,跨仓合计,null 计 0)
    pub async fn fetch_inventory_levels(
        &self,
        inventory_item_ids: &[i64],
    ) -> ShopifyResult<HashMap<i64, i64>> {
        let mut levels: HashMap<i64, i64> = HashMap::new();

        for batch in inventory_item_ids.chunks(INVENTORY_BATCH_SIZE) {
            let ids_param = batch
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let url = format!(
                "{}/inventory_levels.json?inventory_item_ids={}",
                self.base_url, ids_param
            );

            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                warn!(status = status.as_u16(), "库存批量查询返回异常状态,跳过该批");
                continue;
            }

            let page: InventoryLevelsPageDto = response.json().await?;
            for level in page.inventory_levels {
                *levels.entry(level.inventory_item_id).or_insert(0) +=
                    level.available.unwrap_or(0);
            }
        }

        Ok(levels)
    }
}

// ==========================================
// VendorCatalogSource 实现 (采购建议引擎数据源)
// ==========================================

#[async_trait]
impl VendorCatalogSource for ShopifyClient {
    async fn fetch_vendor_products(
        &self,
        vendor: &str,
    ) -> Result<Vec<VendorProduct>, Box<dyn Error>> {
        Ok(self.fetch_products_by_vendor(vendor).await?)
    }

    async fn fetch_inventory_totals(
        &self,
        products: &[VendorProduct],
    ) -> Result<HashMap<i64, i64>, Box<dyn Error>> {
        // 变体 → 库存项 ID 映射
        let mut item_to_product: HashMap<i64, i64> = HashMap::new();
        for product in products {
            match self.fetch_variants(product.product_id).await {
                Ok(variants) => {
                    for variant in variants {
                        item_to_product.insert(variant.inventory_item_id, product.product_id);
                    }
                }
                Err(e) => {
                    // 单品变体查询失败不阻断整体,该商品库存按 0 参与计算
                    warn!(product_id = product.product_id, error = %e, "变体查询失败,跳过该商品");
                }
            }
        }

        let item_ids: Vec<i64> = item_to_product.keys().copied().collect();
        let levels = self.fetch_inventory_levels(&item_ids).await?;

        let mut totals: HashMap<i64, i64> = HashMap::new();
        for (item_id, available) in levels {
            if let Some(product_id) = item_to_product.get(&item_id) {
                *totals.entry(*product_id).or_insert(0) += available;
            }
        }
        Ok(totals)
    }

    async fn fetch_committed_quantities(
        &self,
        products: &[VendorProduct],
    ) -> Result<HashMap<i64, i64>, Box<dyn Error>> {
        let tracked: HashSet<i64> = products.iter().map(|p| p.product_id).collect();
        let orders = self.fetch_unfulfilled_orders().await?;
        Ok(sum_committed_by_product(&orders, &tracked))
    }

    async fn fetch_sales_quantities(
        &self,
        products: &[VendorProduct],
        since: NaiveDate,
    ) -> Result<HashMap<i64, i64>, Box<dyn Error>> {
        let tracked: HashSet<i64> = products.iter().map(|p| p.product_id).collect();
        let orders = self.fetch_orders_since(since).await?;
        Ok(aggregate_sales_by_product(&orders, &tracked))
    }

    async fn fetch_incoming_quantities(
        &self,
        products: &[VendorProduct],
    ) -> Result<HashMap<i64, i64>, Box<dyn Error>> {
        // TODO: 采购系统对接后从到货单拉取真实在途量
        Ok(products.iter().map(|p| (p.product_id, 0)).collect())
    }
}
