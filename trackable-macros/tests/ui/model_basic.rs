use trackable_client::{Identifiable, NotifyPropertyChanged};
use trackable_macros::model;

#[model]
#[derive(Clone)]
struct Customer {
    name: String,
}

fn main() {
    let mut c = Customer {
        name: "Ada".into(),
        ..Default::default()
    };
    let id = c.ensure_entity_identifier();
    assert!(id.is_assigned());
    assert!(c.observers().is_empty());
    let _ = format!("{:?}", c);
    let _ = c.clone();
}
