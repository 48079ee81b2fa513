//! 客户端可追踪实体基础库（trackable-client）
//!
//! 为参与变更追踪的模型实体提供两项基础能力：
//! - 标识关联（`identifiable`）：每个实体携带一个与主键无关的合成标识
//!   `EntityIdentifier`，用于在序列化往返（客户端 → 服务端 → 客户端）之后
//!   将重建出的对象与往返前的对象对应起来；
//! - 变更通知（`notify`）：属性值变化时，同步地通知已注册的观察者。
//!
//! 模型通常不手写这些实现，而是使用 `trackable-macros` 提供的 `#[model]` 宏，
//! 由宏注入 `ModelBase` 字段并生成 `Trackable` / `Identifiable` /
//! `NotifyPropertyChanged` 的委托实现。
//!
//! 典型用法：
//! 1. 以 `#[model]` 声明实体；
//! 2. 发送前调用 `ensure_entity_identifier`（或 `correlate::ensure_all`）；
//! 3. 收到响应后用 `correlate::find_counterpart` 找到对应的本地实体；
//! 4. 通过 `subscribe` / `on_property_changed` 对接 UI 绑定等观察者。
//!
pub mod correlate;
pub mod entity_identifier;
pub mod error;
pub mod identifiable;
pub mod model_base;
pub mod notify;

pub use entity_identifier::EntityIdentifier;
pub use error::{TrackableError, TrackableResult};
pub use identifiable::{Identifiable, Trackable};
pub use model_base::ModelBase;
pub use notify::{
    FailurePolicy, NotifyConfig, NotifyPropertyChanged, ObserverList, PropertyChangedArgs,
    PropertyObserver, SubscriptionId, observer_fn,
};

// 允许在本 crate 内部通过 ::trackable_client 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::trackable_client 路径。
extern crate self as trackable_client;

/// 以字段名触发属性变更通知
///
/// 字段名取自标识符本身，并在编译期校验该字段确实存在：
///
/// ```ignore
/// fn rename(&mut self, name: String) -> TrackableResult<()> {
///     self.name = name;
///     property_changed!(self, name)
/// }
/// ```
#[macro_export]
macro_rules! property_changed {
    ($target:expr, $field:ident) => {{
        use $crate::NotifyPropertyChanged as _;
        let _ = &$target.$field;
        $target.on_property_changed(::core::stringify!($field))
    }};
}
