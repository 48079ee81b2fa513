//! trackable-macros：为参与追踪的模型生成样板实现
//!
//! - `#[model]`：注入 `model_base` 字段，并实现 `Trackable` / `Identifiable` /
//!   `NotifyPropertyChanged`，相当于让结构体“继承”模型基座。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod field_utils;
mod model;

/// 模型宏
/// - 追加字段：`model_base: ::trackable_client::ModelBase`（若缺失）并置于字段最前，
///   序列化键名为 `entityIdentifier`
/// - 合并派生：`Default`、`Serialize`、`Deserialize`，默认还有 `Debug`
/// - 自动实现 `Trackable`、`Identifiable`、`NotifyPropertyChanged`
/// - 支持参数：`#[model(debug = false, eq = true, equals_with = path::to_fn)]`
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model::expand(attr, item)
}
