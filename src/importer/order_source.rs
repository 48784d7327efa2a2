// ==========================================
// 活体水族发货决策系统 - 订单来源接口
// ==========================================
// 职责: 屏蔽订单来源差异 (CSV 导出 / 平台实时拉取)
// 红线: 返回值必须已完成合并,每个订单号恰好一条
// ==========================================

use crate::domain::order::CustomerOrder;
use crate::importer::error::ImportResult;
use async_trait::async_trait;

// ==========================================
// OrderSource - 订单来源
// ==========================================
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// 拉取并合并订单
    ///
    /// # 返回
    /// 合并后的客户订单列表 (每个唯一订单号恰好一条,保持来源内首次出现顺序)
    async fn fetch_orders(&self) -> ImportResult<Vec<CustomerOrder>>;

    /// 来源标识 (用于日志)
    fn label(&self) -> &'static str;
}
