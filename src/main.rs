// ==========================================
// 活体水族发货决策系统 - 主入口
// ==========================================
// 技术栈: Tokio + Reqwest + CSV
// 系统定位: 决策支持系统 (人工最终控制权)
// ==========================================
// 用法:
//   aqua-shipping-dss [orders_csv] [decisions_csv] [picklist_csv] [config_path]
//
// 位置参数全部可省略, 缺省值:
//   orders_export.csv / shipping_decisions.csv / warehouse_pick_list.csv / shipping_config.json
// ==========================================

use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Local, NaiveDate};
use tracing::{error, info, warn};

use aqua_shipping_dss::config::{ConfigManager, ShippingConfigReader};
use aqua_shipping_dss::domain::order::CustomerOrder;
use aqua_shipping_dss::engine::ShippingOrchestrator;
use aqua_shipping_dss::importer::{
    CsvOrderSource, ImportError, OrderSource, ShopifyOrderSource,
};
use aqua_shipping_dss::report::{pick_list, shipping_report, BatchSummary};
use aqua_shipping_dss::shopify::ShopifyClient;
use aqua_shipping_dss::weather::{NominatimGeocoder, OpenMeteoClient};
use aqua_shipping_dss::{logging, APP_NAME, VERSION};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    info!("==================================================");
    info!("{} - 发货决策批次运行", APP_NAME);
    info!("系统版本: {}", VERSION);
    info!("==================================================");

    // ===== 解析位置参数 =====
    let mut args = std::env::args().skip(1);
    let orders_path = args
        .next()
        .unwrap_or_else(|| "orders_export.csv".to_string());
    let decisions_path = args
        .next()
        .unwrap_or_else(|| "shipping_decisions.csv".to_string());
    let picklist_path = args
        .next()
        .unwrap_or_else(|| "warehouse_pick_list.csv".to_string());
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

    // ===== 拉取并合并订单 =====
    let now = Local::now().naive_local();
    let orders = fetch_orders(&config, &orders_path, now.date()).await?;
    if orders.is_empty() {
        info!("合并后无有效订单, 本次运行不产出任何文件");
        return Ok(());
    }

    // ===== 构建天气协作方与编排器 =====
    let timeout = StdDuration::from_secs(config.get_http_timeout_secs().await?);
    let country = config.get_geocode_country().await?;
    let geocoder = Arc::new(NominatimGeocoder::new(country, timeout)?);
    let forecast = Arc::new(OpenMeteoClient::new(timeout)?);
    let orchestrator = ShippingOrchestrator::new(geocoder, forecast, config);

    // ===== 批次决策 =====
    let mut decisions = orchestrator.decide_batch(orders, now).await?;
    shipping_report::sort_decisions(&mut decisions);

    // ===== 写出决策表与拣货清单 =====
    if let Err(e) = shipping_report::write_csv(Path::new(&decisions_path), &decisions) {
        error!(path = %decisions_path, error = %e, "决策表写出失败");
        return Err(Box::new(e));
    }
    info!(path = %decisions_path, rows = decisions.len(), "决策表已写出");

    let entries = pick_list::build_pick_list(&decisions);
    if entries.is_empty() {
        info!("可发货订单中无普通商品, 跳过拣货清单");
    } else {
        if let Err(e) = pick_list::write_csv(Path::new(&picklist_path), &entries) {
            error!(path = %picklist_path, error = %e, "拣货清单写出失败");
            return Err(Box::new(e));
        }
        info!(path = %picklist_path, rows = entries.len(), "拣货清单已写出");
    }

    // ===== 控制台汇总 =====
    println!("{}", BatchSummary::from_decisions(&decisions));

    Ok(())
}

/// 选择订单来源并完成合并
///
/// # 规则
/// - 平台凭据齐备时优先实时拉取; 拉取失败或结果为空时回退 CSV 导出文件
/// - 凭据缺失时直接读 CSV 导出文件
/// - CSV 文件不存在视为致命错误 (上游未导出订单, 继续运行没有意义)
async fn fetch_orders(
    config: &Arc<ConfigManager>,
    orders_path: &str,
    today: NaiveDate,
) -> Result<Vec<CustomerOrder>, Box<dyn Error>> {
    let shop_url = config.get_shopify_shop_url().await?;
    let access_token = config.get_shopify_access_token().await?;

    if let (Some(shop_url), Some(access_token)) = (shop_url, access_token) {
        let timeout = StdDuration::from_secs(config.get_http_timeout_secs().await?);
        let lookback_days = config.get_order_lookback_days().await?;
        let since = today - Duration::days(lookback_days);

        match ShopifyClient::new(&shop_url, &access_token, timeout) {
            Ok(client) => {
                let source = ShopifyOrderSource::new(Arc::new(client), since);
                match source.fetch_orders().await {
                    Ok(orders) if !orders.is_empty() => {
                        info!(
                            source = source.label(),
                            orders_count = orders.len(),
                            "订单拉取完成"
                        );
                        return Ok(orders);
                    }
                    Ok(_) => {
                        warn!("平台订单为空, 回退 CSV 导出文件");
                    }
                    Err(e) => {
                        warn!(error = %e, "平台订单拉取失败, 回退 CSV 导出文件");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "平台客户端初始化失败, 回退 CSV 导出文件");
            }
        }
    }

    let source = CsvOrderSource::new(orders_path);
    match source.fetch_orders().await {
        Ok(orders) => {
            info!(
                source = source.label(),
                orders_count = orders.len(),
                "订单拉取完成"
            );
            Ok(orders)
        }
        Err(e @ ImportError::FileNotFound(_)) => {
            error!(path = %orders_path, "订单导出文件不存在");
            Err(Box::new(e))
        }
        Err(e) => {
            error!(error = %e, "订单导入失败");
            Err(Box::new(e))
        }
    }
}
