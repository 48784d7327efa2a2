// ==========================================
// 活体水族发货决策系统 - 报告层
// ==========================================
// 职责: 决策与建议的落盘产物 (CSV) 与控制台汇总
// 红线: 运行结束一次性写出,不做增量写入
// ==========================================

pub mod error;
pub mod pick_list;
pub mod po_table;
pub mod shipping_report;
pub mod summary;

// 重导出核心类型
pub use error::{ReportError, ReportResult};
pub use pick_list::PickListEntry;
pub use shipping_report::DecisionRow;
pub use summary::BatchSummary;
