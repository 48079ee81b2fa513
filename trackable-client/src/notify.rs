//! 属性变更通知（NotifyPropertyChanged）
//!
//! 显式的观察者注册表代替多播委托：
//! - `subscribe` 返回 `SubscriptionId`，`unsubscribe` 据此精确移除；
//! - `notify` 在调用方线程上按注册顺序同步扇出，全部观察者执行完才返回；
//! - 观察者失败的处理由 `FailurePolicy` 决定（默认隔离并记录日志）。
//!
use std::{fmt, sync::Arc};

use bon::Builder;

use crate::entity_identifier::EntityIdentifier;
use crate::error::{TrackableError, TrackableResult};
use crate::identifiable::Identifiable;

/// 变更通知参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChangedArgs<'a> {
    property_name: &'a str,
    entity_identifier: EntityIdentifier,
}

impl<'a> PropertyChangedArgs<'a> {
    pub fn new(property_name: &'a str, entity_identifier: EntityIdentifier) -> Self {
        Self {
            property_name,
            entity_identifier,
        }
    }

    pub fn property_name(&self) -> &'a str {
        self.property_name
    }

    /// 发出通知的实体标识（可能尚未分配）
    pub fn entity_identifier(&self) -> EntityIdentifier {
        self.entity_identifier
    }
}

/// 属性变更观察者
pub trait PropertyObserver: Send + Sync {
    /// 观察者名称（用于日志与错误定位）
    fn observer_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 处理一次属性变更
    fn on_property_changed(&self, args: &PropertyChangedArgs<'_>) -> anyhow::Result<()>;
}

impl<F> PropertyObserver for F
where
    F: Fn(&PropertyChangedArgs<'_>) -> anyhow::Result<()> + Send + Sync,
{
    fn on_property_changed(&self, args: &PropertyChangedArgs<'_>) -> anyhow::Result<()> {
        self(args)
    }
}

/// 以闭包构造观察者
pub fn observer_fn<F>(f: F) -> Arc<dyn PropertyObserver>
where
    F: Fn(&PropertyChangedArgs<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 观察者失败时的扇出策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// 记录每个失败并继续通知其余观察者
    #[default]
    Isolate,
    /// 遇到第一个失败即中止，并把错误返回给调用方
    Propagate,
}

/// 通知配置
#[derive(Builder, Debug, Clone, Copy, Default)]
pub struct NotifyConfig {
    #[builder(default)]
    failure_policy: FailurePolicy,
}

impl NotifyConfig {
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }
}

/// 订阅句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// 有序观察者列表
#[derive(Default)]
pub struct ObserverList {
    next_id: u64,
    entries: Vec<(SubscriptionId, Arc<dyn PropertyObserver>)>,
    config: NotifyConfig,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NotifyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> NotifyConfig {
        self.config
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.config.failure_policy
    }

    pub fn set_failure_policy(&mut self, policy: FailurePolicy) {
        self.config.failure_policy = policy;
    }

    /// 注册观察者；同一观察者重复注册会得到多个独立订阅
    pub fn subscribe(&mut self, observer: Arc<dyn PropertyObserver>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, observer));
        id
    }

    /// 取消订阅；未知或已取消的句柄返回 `false`
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 按注册顺序同步通知全部观察者
    pub fn notify(&self, args: &PropertyChangedArgs<'_>) -> TrackableResult<()> {
        tracing::trace!(
            property = args.property_name(),
            observers = self.entries.len(),
            "property changed"
        );

        for (id, observer) in &self.entries {
            let Err(err) = observer.on_property_changed(args) else {
                continue;
            };

            match self.config.failure_policy {
                FailurePolicy::Isolate => {
                    tracing::warn!(
                        observer = observer.observer_name(),
                        subscription = %id,
                        property = args.property_name(),
                        entity_identifier = %args.entity_identifier(),
                        "property observer failed: {err:#}"
                    );
                }
                FailurePolicy::Propagate => {
                    return Err(TrackableError::observer(
                        observer.observer_name(),
                        args.property_name(),
                        format!("{err:#}"),
                    ));
                }
            }
        }

        Ok(())
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.entries.len())
            .field("failure_policy", &self.config.failure_policy)
            .finish()
    }
}

/// 属性变更通知能力
pub trait NotifyPropertyChanged: Identifiable {
    fn observers(&self) -> &ObserverList;

    fn observers_mut(&mut self) -> &mut ObserverList;

    fn subscribe(&mut self, observer: Arc<dyn PropertyObserver>) -> SubscriptionId {
        self.observers_mut().subscribe(observer)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers_mut().unsubscribe(id)
    }

    /// 触发属性变更通知，供实体在修改属性后调用
    fn on_property_changed(&self, property_name: &str) -> TrackableResult<()> {
        let args = PropertyChangedArgs::new(property_name, self.entity_identifier());
        self.observers().notify(&args)
    }
}
