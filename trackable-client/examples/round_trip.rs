//! 演示：发送前分配标识，响应返回后按标识找回本地实体并同步变更
use anyhow::Result;
use trackable_client::correlate::{ensure_all, find_counterpart_mut};
use trackable_client::{Identifiable, NotifyPropertyChanged, observer_fn};
use trackable_macros::model;

#[model]
#[derive(Clone)]
struct OrderLine {
    sku: String,
    quantity: u32,
}

impl OrderLine {
    fn new(sku: &str, quantity: u32) -> Self {
        Self {
            sku: sku.to_string(),
            quantity,
            ..Default::default()
        }
    }

    fn set_quantity(&mut self, quantity: u32) -> trackable_client::TrackableResult<bool> {
        self.model_base
            .set_property(&mut self.quantity, quantity, "quantity")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("trackable_client=debug")
        .init();

    let mut lines = vec![OrderLine::new("A-100", 1), OrderLine::new("B-200", 4)];
    ensure_all(&mut lines);

    for line in lines.iter_mut() {
        let sku = line.sku.clone();
        line.subscribe(observer_fn(move |args| {
            println!("{sku}: {} changed ({})", args.property_name(), args.entity_identifier());
            Ok(())
        }));
    }

    // 模拟服务端往返：序列化、修改、再反序列化为新的对象图
    let wire = serde_json::to_string(&lines)?;
    let mut server_side: Vec<OrderLine> = serde_json::from_str(&wire)?;
    server_side[1].quantity = 6;
    let response = serde_json::to_string(&server_side)?;
    let returned: Vec<OrderLine> = serde_json::from_str(&response)?;

    for updated in &returned {
        if let Some(local) = find_counterpart_mut(&mut lines, updated) {
            local.set_quantity(updated.quantity)?;
        }
    }

    let fresh = OrderLine::new("C-300", 1);
    println!("fresh line correlates: {}", lines[0].identifier_equals(&fresh));

    Ok(())
}
