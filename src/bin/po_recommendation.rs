// Purchase-order helper: pull the Tropica catalog from the live shop and print
// a recommended reorder quantity per product.
//
// Usage:
//   cargo run --bin po_recommendation -- [output_csv] [config_path]
//
// Requires shop credentials in the config file; there is no CSV fallback here
// because every input (catalog, inventory, open orders) lives on the platform.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Local;
use tracing::{error, info};

use aqua_shipping_dss::config::{ConfigManager, ShippingConfigReader};
use aqua_shipping_dss::engine::ReplenishmentEngine;
use aqua_shipping_dss::report::po_table;
use aqua_shipping_dss::shopify::ShopifyClient;
use aqua_shipping_dss::{logging, APP_NAME, VERSION};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    info!("==================================================");
    info!("{} - 补货建议生成", APP_NAME);
    info!("系统版本: {}", VERSION);
    info!("==================================================");

    // ===== 解析位置参数 =====
    let mut args = std::env::args().skip(1);
    let output_path = args
        .next()
        .unwrap_or_else(|| "po_recommendation.csv".to_string());
    let config_path = args
        .next()
        .unwrap_or_else(|| "shipping_config.json".to_string());

    // ===== 加载配置 =====
    let config = match ConfigManager::load_or_default(Path::new(&config_path)) {
        Ok(manager) => Arc::new(manager),
        Err(e) => {
            error!(path = %config_path, error = %e, "配置文件解析失败");
            return Err(Box::new(e) as Box<dyn Error>);
        }
    };

    // ===== 平台凭据为硬性前提 =====
    let shop_url = config.get_shopify_shop_url().await?;
    let access_token = config.get_shopify_access_token().await?;
    let (Some(shop_url), Some(access_token)) = (shop_url, access_token) else {
        error!(path = %config_path, "配置缺少平台凭据 (shopify_shop_url / shopify_access_token)");
        return Err("补货建议必须连接平台, 请在配置文件中补全凭据".into());
    };

    let timeout = StdDuration::from_secs(config.get_http_timeout_secs().await?);
    let client = Arc::new(ShopifyClient::new(&shop_url, &access_token, timeout)?);

    // ===== 生成补货建议 =====
    let engine = ReplenishmentEngine::new(client, config);
    let today = Local::now().date_naive();
    let recommendations = engine.generate(today).await?;

    if recommendations.is_empty() {
        info!("供应商目录为空, 无补货建议可输出");
        return Ok(());
    }

    // ===== 控制台表格与 CSV 输出 =====
    println!("{}", po_table::render_table(&recommendations));

    if let Err(e) = po_table::write_csv(Path::new(&output_path), &recommendations) {
        error!(path = %output_path, error = %e, "补货建议写出失败");
        return Err(Box::new(e));
    }
    info!(path = %output_path, rows = recommendations.len(), "补货建议已写出");

    Ok(())
}
