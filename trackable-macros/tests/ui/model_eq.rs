use trackable_client::{Identifiable, Trackable};
use trackable_macros::model;

// 标识相等即视为同一实体，双向结果一致
fn same_entity(this: &Product, other: &dyn Trackable) -> bool {
    this.identifier_equals(other)
}

#[model(eq = true, equals_with = same_entity)]
struct Product {
    sku: String,
}

fn main() {
    let mut a = Product {
        sku: "P-1".into(),
        ..Default::default()
    };
    a.ensure_entity_identifier();
    let mut b = Product::default();
    b.copy_entity_identifier_from(&a);
    assert!(a == b);
    assert!(b == a);

    let blank = Product::default();
    assert!(a != blank);
    assert!(blank != a);
}
