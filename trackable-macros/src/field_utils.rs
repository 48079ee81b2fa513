use syn::{Field, FieldsNamed, Token, punctuated::Punctuated};

fn field_name_is(field: &Field, name: &str) -> bool {
    field.ident.as_ref().map(|i| i == name).unwrap_or(false)
}

/// 确保具名字段结构体包含所需字段
/// - required: 所需字段的原型（含属性），按给定顺序置于最前；
/// - 若用户已声明同名字段，则复用其原定义，只调整位置；
///   该字段没有任何 `#[serde(...)]` 时补上原型中的 serde 属性，保证序列化键名一致。
pub(crate) fn ensure_leading_fields(fields_named: &mut FieldsNamed, required: &[Field]) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    for proto in required.iter() {
        let Some(name) = proto.ident.as_ref().map(|i| i.to_string()) else {
            continue;
        };
        match old_named.iter().find(|f| field_name_is(f, &name)) {
            Some(existing) => new_named.push(with_default_serde_attrs(existing, proto)),
            None => new_named.push(proto.clone()),
        }
    }

    // 其余字段保持原始顺序
    for f in old_named.into_iter() {
        let is_required = required.iter().any(|proto| {
            proto
                .ident
                .as_ref()
                .map(|name| field_name_is(&f, &name.to_string()))
                .unwrap_or(false)
        });
        if !is_required {
            new_named.push(f);
        }
    }

    fields_named.named = new_named;
}

fn with_default_serde_attrs(existing: &Field, proto: &Field) -> Field {
    let mut field = existing.clone();
    let has_serde = field.attrs.iter().any(|a| a.path().is_ident("serde"));
    if !has_serde {
        let serde_attrs = proto
            .attrs
            .iter()
            .filter(|a| a.path().is_ident("serde"))
            .cloned();
        field.attrs = serde_attrs.chain(field.attrs).collect();
    }
    field
}
