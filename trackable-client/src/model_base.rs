//! 模型基座（ModelBase）
//!
//! 参与追踪的模型内嵌的状态：关联标识与观察者列表。
//! 序列化时只输出标识本身（透明的 UUID 字符串），观察者从不跨越序列化边界；
//! 克隆时复制标识但不复制订阅。
//!
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity_identifier::EntityIdentifier;
use crate::error::TrackableResult;
use crate::notify::{NotifyConfig, ObserverList, PropertyChangedArgs};

/// 模型基座，通常由 `#[model]` 宏注入为 `model_base` 字段
#[derive(Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelBase {
    entity_identifier: EntityIdentifier,
    #[serde(skip)]
    observers: ObserverList,
}

impl ModelBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NotifyConfig) -> Self {
        Self {
            entity_identifier: EntityIdentifier::NIL,
            observers: ObserverList::with_config(config),
        }
    }

    pub fn entity_identifier(&self) -> EntityIdentifier {
        self.entity_identifier
    }

    pub fn set_entity_identifier(&mut self, value: EntityIdentifier) {
        self.entity_identifier = value;
    }

    pub fn observers(&self) -> &ObserverList {
        &self.observers
    }

    pub fn observers_mut(&mut self) -> &mut ObserverList {
        &mut self.observers
    }

    /// 以当前标识通知观察者
    pub fn notify(&self, property_name: &str) -> TrackableResult<()> {
        let args = PropertyChangedArgs::new(property_name, self.entity_identifier);
        self.observers.notify(&args)
    }

    /// 写入属性值，仅在值发生变化时通知；返回是否变化
    ///
    /// ```ignore
    /// let changed = self.model_base.set_property(&mut self.name, name, "name")?;
    /// ```
    pub fn set_property<T: PartialEq>(
        &self,
        slot: &mut T,
        value: T,
        property_name: &str,
    ) -> TrackableResult<bool> {
        if *slot == value {
            return Ok(false);
        }
        *slot = value;
        self.notify(property_name)?;
        Ok(true)
    }
}

impl Clone for ModelBase {
    fn clone(&self) -> Self {
        Self {
            entity_identifier: self.entity_identifier,
            observers: ObserverList::with_config(self.observers.config()),
        }
    }
}

impl fmt::Debug for ModelBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBase")
            .field("entity_identifier", &self.entity_identifier)
            .field("observers", &self.observers.len())
            .finish()
    }
}
