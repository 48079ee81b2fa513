//! 标识关联能力（Identifiable）
//!
//! 以显式的能力接口代替运行期按名称探测：
//! - `Trackable`：可出现在追踪对象图中的任意对象，通过 `as_identifiable`
//!   声明自己是否参与标识关联；
//! - `Identifiable`：参与者，持有 `EntityIdentifier` 并提供分配、复制与比较。
//!
//! 与非参与者交互时，所有操作退化为 no-op 或 `false`，从不报错。
//!
use crate::entity_identifier::EntityIdentifier;

/// 可被追踪框架探测的对象
pub trait Trackable {
    /// 若该对象参与标识关联，返回其 `Identifiable` 视图；默认不参与
    fn as_identifiable(&self) -> Option<&dyn Identifiable> {
        None
    }
}

/// 参与标识关联的实体
pub trait Identifiable: Trackable {
    /// 当前标识（未分配时为全零）
    fn entity_identifier(&self) -> EntityIdentifier;

    /// 无条件覆写标识
    fn set_entity_identifier(&mut self, value: EntityIdentifier);

    /// 若尚未分配则生成新标识；幂等，返回当前标识
    fn ensure_entity_identifier(&mut self) -> EntityIdentifier {
        let current = self.entity_identifier();
        if current.is_assigned() {
            return current;
        }

        let generated = EntityIdentifier::generate();
        tracing::debug!(entity_identifier = %generated, "entity identifier generated");
        self.set_entity_identifier(generated);
        generated
    }

    /// 从另一个对象复制标识
    ///
    /// `other` 不参与标识关联时不做任何修改并返回 `false`。
    fn copy_entity_identifier_from(&mut self, other: &dyn Trackable) -> bool {
        match other.as_identifiable() {
            Some(source) => {
                self.set_entity_identifier(source.entity_identifier());
                true
            }
            None => {
                tracing::debug!("copy skipped: source does not carry an entity identifier");
                false
            }
        }
    }

    /// 纯标识比较：双方都参与、都已分配且相等时为 `true`
    fn identifier_equals(&self, other: &dyn Trackable) -> bool {
        let Some(other) = other.as_identifiable() else {
            return false;
        };
        let (mine, theirs) = (self.entity_identifier(), other.entity_identifier());
        mine.is_assigned() && theirs.is_assigned() && mine == theirs
    }

    /// 关联相等性判断，实体可覆写以加入自定义规则；默认即 `identifier_equals`
    fn is_equatable(&self, other: &dyn Trackable) -> bool {
        self.identifier_equals(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Order {
        id: EntityIdentifier,
    }

    impl Trackable for Order {
        fn as_identifiable(&self) -> Option<&dyn Identifiable> {
            Some(self)
        }
    }

    impl Identifiable for Order {
        fn entity_identifier(&self) -> EntityIdentifier {
            self.id
        }

        fn set_entity_identifier(&mut self, value: EntityIdentifier) {
            self.id = value;
        }
    }

    // 不参与标识关联的类型
    struct AuditNote;

    impl Trackable for AuditNote {}

    // 自定义相等规则：只与同样标记为 pinned 的对象相等
    #[derive(Default)]
    struct Pinned {
        id: EntityIdentifier,
    }

    impl Trackable for Pinned {
        fn as_identifiable(&self) -> Option<&dyn Identifiable> {
            Some(self)
        }
    }

    impl Identifiable for Pinned {
        fn entity_identifier(&self) -> EntityIdentifier {
            self.id
        }

        fn set_entity_identifier(&mut self, value: EntityIdentifier) {
            self.id = value;
        }

        fn is_equatable(&self, _other: &dyn Trackable) -> bool {
            false
        }
    }

    // 测试新建实体互不相等
    #[test]
    fn fresh_entities_never_equal() {
        let a = Order::default();
        let b = Order::default();
        assert!(!a.identifier_equals(&b));
        assert!(!a.identifier_equals(&a));
        assert!(!a.is_equatable(&b));
    }

    // 测试 ensure 幂等
    #[test]
    fn ensure_is_idempotent() {
        let mut a = Order::default();
        let first = a.ensure_entity_identifier();
        let second = a.ensure_entity_identifier();
        assert!(first.is_assigned());
        assert_eq!(first, second);
        assert_eq!(a.entity_identifier(), first);
    }

    // 测试 set 可覆写已分配标识
    #[test]
    fn set_overwrites_assigned_identifier() {
        let mut a = Order::default();
        a.ensure_entity_identifier();
        let replacement = EntityIdentifier::generate();
        a.set_entity_identifier(replacement);
        assert_eq!(a.entity_identifier(), replacement);
    }

    // 测试复制后双向相等
    #[test]
    fn copy_makes_entities_equal_both_ways() {
        let mut a = Order::default();
        let g1 = a.ensure_entity_identifier();
        let mut b = Order::default();

        assert!(b.copy_entity_identifier_from(&a));
        assert_eq!(b.entity_identifier(), g1);
        assert!(a.identifier_equals(&b));
        assert!(b.identifier_equals(&a));

        let c = Order::default();
        assert!(!a.identifier_equals(&c));
    }

    // 测试从非参与者复制为 no-op
    #[test]
    fn copy_from_non_participant_is_noop() {
        let mut a = Order::default();
        let before = a.ensure_entity_identifier();
        assert!(!a.copy_entity_identifier_from(&AuditNote));
        assert_eq!(a.entity_identifier(), before);
        assert!(!a.identifier_equals(&AuditNote));
    }

    // 测试复制未分配的标识会清零
    #[test]
    fn copy_from_unassigned_participant_resets() {
        let mut a = Order::default();
        a.ensure_entity_identifier();
        let b = Order::default();
        assert!(a.copy_entity_identifier_from(&b));
        assert!(a.entity_identifier().is_nil());
    }

    // 测试跨类型比较只看标识
    #[test]
    fn identifier_equals_across_participating_types() {
        let mut order = Order::default();
        order.ensure_entity_identifier();
        let mut pinned = Pinned::default();
        pinned.copy_entity_identifier_from(&order);

        assert!(order.identifier_equals(&pinned));
        assert!(order.is_equatable(&pinned));
        // 覆写的相等规则优先
        assert!(!pinned.is_equatable(&order));
        assert!(pinned.identifier_equals(&order));
    }
}
