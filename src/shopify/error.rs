// ==========================================
// 活体水族发货决策系统 - 电商平台层错误
// ==========================================

use thiserror::Error;

// ==========================================
// 电商平台层错误类型
// ==========================================
#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("缺少平台凭据: {0}")]
    MissingCredentials(String),

    #[error("请求地址无效: {0}")]
    InvalidUrl(String),

    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("平台返回异常状态 {status}: {context}")]
    BadStatus { status: u16, context: String },

    #[error("响应解析失败: {0}")]
    Parse(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ShopifyResult<T> = Result<T, ShopifyError>;
