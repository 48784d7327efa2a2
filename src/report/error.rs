// ==========================================
// 活体水族发货决策系统 - 报告层错误
// ==========================================

use thiserror::Error;

/// 报告层错误类型
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("报告文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 处理失败: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
