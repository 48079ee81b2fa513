//! 实体标识（EntityIdentifier）
//!
//! 与业务主键无关的 128 位合成标识，用于跨序列化边界关联同一逻辑实体。
//! 全零值表示“尚未分配”。
//!
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TrackableError;

/// 实体关联标识
///
/// # 示例
///
/// ```
/// use trackable_client::EntityIdentifier;
///
/// let unassigned = EntityIdentifier::default();
/// assert!(unassigned.is_nil());
///
/// let id = EntityIdentifier::generate();
/// assert!(id.is_assigned());
/// assert_eq!(id.to_string().parse::<EntityIdentifier>().unwrap(), id);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityIdentifier(Uuid);

impl EntityIdentifier {
    /// 未分配的标识（全零）
    pub const NIL: Self = Self(Uuid::nil());

    /// 生成新的随机标识（UUIDv4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn nil() -> Self {
        Self::NIL
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// 是否已分配（非全零）
    pub fn is_assigned(&self) -> bool {
        !self.is_nil()
    }
}

impl fmt::Display for EntityIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EntityIdentifier {
    type Err = TrackableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

impl From<Uuid> for EntityIdentifier {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<EntityIdentifier> for Uuid {
    fn from(value: EntityIdentifier) -> Self {
        value.0
    }
}
