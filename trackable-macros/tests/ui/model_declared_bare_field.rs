use trackable_client::{EntityIdentifier, Identifiable, ModelBase};
use trackable_macros::model;

#[model]
struct Counter {
    n: u32,
    model_base: ModelBase,
}

fn main() {
    let mut c = Counter::default();
    let id = c.ensure_entity_identifier();

    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["entityIdentifier"], serde_json::json!(id.to_string()));
    assert!(json.get("model_base").is_none());

    let back: Counter = serde_json::from_str(r#"{"n":0}"#).unwrap();
    assert_eq!(back.entity_identifier(), EntityIdentifier::NIL);
    assert_eq!(back.n, 0);
}
