use trackable_client::{Identifiable, ModelBase};
use trackable_macros::model;

#[model]
struct Invoice {
    number: u32,
    #[serde(rename = "entityIdentifier", default)]
    model_base: ModelBase,
}

fn main() {
    let mut inv = Invoice::default();
    inv.ensure_entity_identifier();
    let _ = inv.number;
}
