// ==========================================
// 活体水族发货决策系统 - CSV 订单来源
// ==========================================
// 职责: 解析电商平台订单导出 CSV (无凭据时的默认来源)
// 约定: 每个行项目一行,地址列仅在订单首行有值
// ==========================================

use crate::domain::order::{CustomerOrder, RawOrderRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::order_merger::OrderMerger;
use crate::importer::order_source::OrderSource;
use async_trait::async_trait;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

// ===== 导出文件列名 =====
const COL_ORDER_NAME: &str = "Name";
const COL_LINEITEM_QUANTITY: &str = "Lineitem quantity";
const COL_LINEITEM_NAME: &str = "Lineitem name";
const COL_SHIPPING_CITY: &str = "Shipping City";
const COL_SHIPPING_PROVINCE: &str = "Shipping Province";
const COL_SHIPPING_NAME: &str = "Shipping Name";

// ==========================================
// CsvOrderSource - CSV 订单来源
// ==========================================
pub struct CsvOrderSource {
    path: PathBuf,
}

impl CsvOrderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 读取导出文件为原始行
    ///
    /// # 规则
    /// - 文件不存在 → FileNotFound (致命,调用方决定退出)
    /// - 表头裁剪空白后按列名取值
    /// - 完全空白的行跳过
    fn read_rows(path: &Path) -> ImportResult<Vec<RawOrderRow>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map: HashMap<&str, String> = HashMap::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.as_str(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(RawOrderRow {
                order_id: field(&row_map, COL_ORDER_NAME)
                    .map(|id| id.trim_start_matches('#').to_string()),
                customer_name: field(&row_map, COL_SHIPPING_NAME),
                city: field(&row_map, COL_SHIPPING_CITY),
                province: field(&row_map, COL_SHIPPING_PROVINCE),
                item_name: field(&row_map, COL_LINEITEM_NAME),
                quantity: field(&row_map, COL_LINEITEM_QUANTITY),
            });
        }

        Ok(rows)
    }
}

fn field(row_map: &HashMap<&str, String>, key: &str) -> Option<String> {
    row_map.get(key).filter(|v| !v.is_empty()).cloned()
}

#[async_trait]
impl OrderSource for CsvOrderSource {
    async fn fetch_orders(&self) -> ImportResult<Vec<CustomerOrder>> {
        let rows = Self::read_rows(&self.path)?;
        info!(
            path = %self.path.display(),
            rows_count = rows.len(),
            "CSV 订单导出读取完成"
        );
        Ok(OrderMerger::merge_rows(rows))
    }

    fn label(&self) -> &'static str {
        "csv"
    }
}
