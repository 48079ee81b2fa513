use crate::derive_utils::{apply_derives, has_derive};
use crate::field_utils::ensure_leading_fields;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    FieldsNamed, Item, ItemStruct, Result, Token, parse::Parse, parse::ParseStream,
    parse_macro_input,
};

/// #[model] 宏实现
/// - 若缺失则追加字段 `model_base: ::trackable_client::ModelBase` 并置于字段最前
/// - 自动实现 `Trackable`（as_identifiable）、`Identifiable`、`NotifyPropertyChanged`
/// - 支持参数：`#[model(debug = true|false, eq = true|false, equals_with = path)]`；
///   - `debug` 默认 `true`（派生 Debug）。为 `false` 时不派生，便于用户自定义实现；
///   - `eq` 默认 `false`。为 `true` 时以 `is_equatable` 实现 `PartialEq`；
///   - `equals_with` 指定 `fn(&Self, &dyn Trackable) -> bool`，覆写 `is_equatable`；
///     与 `eq = true` 同用时该函数须满足对称性（`a == b` 当且仅当 `b == a`）。
/// - 用户自行 `#[derive(PartialEq)]` 会被拒绝，相等性统一由 `eq = true` 生成。
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ModelAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[model] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    // model_base 置于最前；用户已声明时沿用其定义
    let proto: FieldsNamed = syn::parse_quote!({
        #[serde(rename = "entityIdentifier", default)]
        model_base: ::trackable_client::ModelBase
    });
    let required: Vec<syn::Field> = proto.named.into_iter().collect();
    ensure_leading_fields(fields_named, &required);

    if let Err(e) = reject_derived_partial_eq(&st) {
        return e.to_compile_error().into();
    }
    let derive_eq = cfg.eq.unwrap_or(false);

    // 合并/规范 derive：默认添加 Debug（可通过 debug=false 关闭）、Default、Serialize、Deserialize
    let mut required_derives: Vec<syn::Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required_derives.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required_derives);

    let out_struct = ItemStruct { ..st };

    let ident = &out_struct.ident;
    let generics = out_struct.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let is_equatable = cfg.equals_with.map(|path| {
        quote! {
            fn is_equatable(&self, other: &dyn ::trackable_client::Trackable) -> bool {
                #path(self, other)
            }
        }
    });

    let partial_eq = derive_eq.then(|| {
        quote! {
            impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
                fn eq(&self, other: &Self) -> bool {
                    ::trackable_client::Identifiable::is_equatable(self, other)
                }
            }
        }
    });

    let expanded = quote! {
        #out_struct

        impl #impl_generics ::trackable_client::Trackable for #ident #ty_generics #where_clause {
            fn as_identifiable(&self) -> ::core::option::Option<&dyn ::trackable_client::Identifiable> {
                ::core::option::Option::Some(self)
            }
        }

        impl #impl_generics ::trackable_client::Identifiable for #ident #ty_generics #where_clause {
            fn entity_identifier(&self) -> ::trackable_client::EntityIdentifier {
                self.model_base.entity_identifier()
            }

            fn set_entity_identifier(&mut self, value: ::trackable_client::EntityIdentifier) {
                self.model_base.set_entity_identifier(value)
            }

            #is_equatable
        }

        impl #impl_generics ::trackable_client::NotifyPropertyChanged for #ident #ty_generics #where_clause {
            fn observers(&self) -> &::trackable_client::ObserverList {
                self.model_base.observers()
            }

            fn observers_mut(&mut self) -> &mut ::trackable_client::ObserverList {
                self.model_base.observers_mut()
            }
        }

        #partial_eq
    };

    TokenStream::from(expanded)
}

// 派生的 PartialEq 会比较 model_base，而 ModelBase 不实现 PartialEq
fn reject_derived_partial_eq(st: &ItemStruct) -> Result<()> {
    if has_derive(&st.attrs, "PartialEq") {
        return Err(syn::Error::new(
            st.ident.span(),
            "#[model] structs cannot derive PartialEq; use #[model(eq = true)] instead",
        ));
    }
    Ok(())
}

// -------- parsing --------

struct ModelAttrConfig {
    derive_debug: Option<bool>,
    eq: Option<bool>,
    equals_with: Option<syn::Path>,
}

impl Parse for ModelAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            derive_debug: None,
            eq: None,
            equals_with: None,
        };

        if input.is_empty() {
            return Ok(cfg);
        }

        let elems: Punctuated<ModelAttrElem, Token![,]> =
            Punctuated::<ModelAttrElem, Token![,]>::parse_terminated(input)?;

        for elem in elems.into_iter() {
            match elem {
                ModelAttrElem::Debug(key, b) => {
                    if cfg.derive_debug.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    cfg.derive_debug = Some(b);
                }
                ModelAttrElem::Eq(key, b) => {
                    if cfg.eq.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'eq' in attribute",
                        ));
                    }
                    cfg.eq = Some(b);
                }
                ModelAttrElem::EqualsWith(key, path) => {
                    if cfg.equals_with.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'equals_with' in attribute",
                        ));
                    }
                    cfg.equals_with = Some(path);
                }
            }
        }

        Ok(cfg)
    }
}

enum ModelAttrElem {
    Debug(syn::Ident, bool),
    Eq(syn::Ident, bool),
    EqualsWith(syn::Ident, syn::Path),
}

impl Parse for ModelAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        if key == "debug" {
            let b = parse_bool(input, "debug")?;
            Ok(ModelAttrElem::Debug(key, b))
        } else if key == "eq" {
            let b = parse_bool(input, "eq")?;
            Ok(ModelAttrElem::Eq(key, b))
        } else if key == "equals_with" {
            let path: syn::Path = input.parse()?;
            Ok(ModelAttrElem::EqualsWith(key, path))
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'debug', 'eq' or 'equals_with'",
            ))
        }
    }
}

fn parse_bool(input: ParseStream, key: &str) -> Result<bool> {
    let expr: syn::Expr = input.parse()?;
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Bool(b),
            ..
        }) => Ok(b.value()),
        other => Err(syn::Error::new(
            other.span(),
            format!("expected boolean literal for '{key}'"),
        )),
    }
}
