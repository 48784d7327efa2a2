// ==========================================
// 活体水族发货决策系统 - 电商平台层
// ==========================================
// 职责: Shopify Admin API 的订单 / 商品 / 库存适配
// 红线: 凭据只经配置注入,不硬编码,不落日志
// ==========================================

pub mod client;
pub mod error;

// 重导出核心类型
pub use client::{
    aggregate_sales_by_product, parse_next_link, sum_committed_by_product, LineItemDto,
    ShippingAddressDto, ShopifyClient, ShopifyOrderDto,
};
pub use error::{ShopifyError, ShopifyResult};
