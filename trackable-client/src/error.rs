//! 统一错误定义
//!
//! 标识关联本身不会失败（缺失能力时退化为 no-op / `false`），
//! 这里只收录标识解析与观察者通知两类错误。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TrackableError {
    #[error("invalid entity identifier: {reason}")]
    InvalidIdentifier { reason: String },

    #[error("property observer failed: observer={observer}, property={property}, reason={reason}")]
    Observer {
        observer: String,
        property: String,
        reason: String,
    },
}

/// 统一 Result 类型别名
pub type TrackableResult<T> = Result<T, TrackableError>;

impl TrackableError {
    pub fn observer(
        observer: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Observer {
            observer: observer.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }
}

impl From<uuid::Error> for TrackableError {
    fn from(err: uuid::Error) -> Self {
        TrackableError::InvalidIdentifier {
            reason: err.to_string(),
        }
    }
}
