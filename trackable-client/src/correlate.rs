//! 往返关联辅助
//!
//! 发送前为实体分配标识；收到服务端返回的副本后，按标识在本地集合中找到对应实体。
//! 合并本身由上层追踪框架负责。
//!
use crate::identifiable::{Identifiable, Trackable};

/// 为集合中尚未分配标识的实体生成标识
pub fn ensure_all<T: Identifiable>(items: &mut [T]) {
    for item in items.iter_mut() {
        item.ensure_entity_identifier();
    }
}

/// 第一个与 `target` 关联相等的实体的位置
pub fn position_of_counterpart<T: Identifiable>(
    items: &[T],
    target: &dyn Trackable,
) -> Option<usize> {
    items.iter().position(|item| item.is_equatable(target))
}

pub fn find_counterpart<'a, T: Identifiable>(
    items: &'a [T],
    target: &dyn Trackable,
) -> Option<&'a T> {
    items.iter().find(|item| item.is_equatable(target))
}

pub fn find_counterpart_mut<'a, T: Identifiable>(
    items: &'a mut [T],
    target: &dyn Trackable,
) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.is_equatable(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityIdentifier;
    use trackable_macros::model;

    #[model]
    #[derive(Clone)]
    struct Line {
        sku: String,
        qty: u32,
    }

    struct Unrelated;

    impl Trackable for Unrelated {}

    fn line(sku: &str, qty: u32) -> Line {
        Line {
            sku: sku.to_string(),
            qty,
            ..Default::default()
        }
    }

    // 测试批量分配只补齐缺失的标识
    #[test]
    fn ensure_all_keeps_existing_identifiers() {
        let mut items = vec![line("a", 1), line("b", 2)];
        let preset = EntityIdentifier::generate();
        items[0].set_entity_identifier(preset);

        ensure_all(&mut items);

        assert_eq!(items[0].entity_identifier(), preset);
        assert!(items[1].entity_identifier().is_assigned());
        assert_ne!(items[0].entity_identifier(), items[1].entity_identifier());
    }

    // 测试按标识找到往返后的对应实体
    #[test]
    fn finds_counterpart_after_round_trip() {
        let mut local = vec![line("a", 1), line("b", 2), line("c", 3)];
        ensure_all(&mut local);

        let mut returned = local[1].clone();
        returned.qty = 20;

        assert_eq!(position_of_counterpart(&local, &returned), Some(1));
        assert_eq!(find_counterpart(&local, &returned).map(|l| l.sku.as_str()), Some("b"));

        if let Some(hit) = find_counterpart_mut(&mut local, &returned) {
            hit.qty = returned.qty;
        }
        assert_eq!(local[1].qty, 20);
    }

    // 测试未分配标识与非参与者都找不到对应实体
    #[test]
    fn no_counterpart_for_unassigned_or_unrelated() {
        let mut local = vec![line("a", 1)];
        let fresh = line("a", 1);
        assert!(find_counterpart(&local, &fresh).is_none());

        ensure_all(&mut local);
        assert!(find_counterpart(&local, &Unrelated).is_none());
        assert!(position_of_counterpart(&local, &fresh).is_none());
    }
}
