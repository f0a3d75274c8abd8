//! `#[controller]` implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    FnArg, Ident, Item, ItemFn, ItemMod, Token, Type, Visibility,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote,
};

/// Arguments for the `#[controller]` macro.
pub(crate) struct ControllerArgs {
    pub request: Option<Type>,
}

impl Parse for ControllerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut request = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "request" => {
                    let ty: Type = input.parse()?;
                    request = Some(ty);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(ControllerArgs { request })
    }
}

pub fn controller_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ControllerArgs);
    let mut module = parse_macro_input!(item as ItemMod);

    match expand(args, &mut module) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: ControllerArgs, module: &mut ItemMod) -> syn::Result<TokenStream2> {
    let Some((_, items)) = module.content.as_mut() else {
        return Err(syn::Error::new_spanned(
            &module.ident,
            "#[controller] requires an inline module: `mod name { ... }`",
        ));
    };

    if let Some(existing) = items.iter().find_map(|item| match item {
        Item::Fn(f) if f.sig.ident == "namespace" => Some(&f.sig.ident),
        _ => None,
    }) {
        return Err(syn::Error::new_spanned(
            existing,
            "#[controller] generates `namespace()`; rename this function",
        ));
    }

    let mut inferred = None;
    let tree = namespace_expr(items, &quote! { self }, &mut inferred);

    let Some(request) = args.request.or(inferred) else {
        return Err(syn::Error::new_spanned(
            &module.ident,
            "cannot infer the request type: add a one-argument `pub fn` or use #[controller(request = Type)]",
        ));
    };

    let name = module.ident.to_string();
    let generated: Item = parse_quote! {
        #[doc = concat!("Handler registry built from the `", #name, "` controller module.")]
        pub fn namespace() -> ::memo_router::Namespace<#request> {
            #tree
        }
    };
    items.push(generated);

    Ok(quote! { #module })
}

/// Builder expression for the namespace of `items`, whose module is reached
/// through `path` from the annotated module.
fn namespace_expr(items: &[Item], path: &TokenStream2, inferred: &mut Option<Type>) -> TokenStream2 {
    let mut entries = Vec::new();

    for item in items {
        let Item::Fn(f) = item else { continue };
        let Some(ty) = handler_arg(f) else { continue };
        if inferred.is_none() {
            *inferred = Some(ty.clone());
        }

        let ident = &f.sig.ident;
        let key = ident.unraw().to_string();
        entries.push(quote! { .handler(#key, #path::#ident) });
    }

    for item in items {
        let Item::Mod(m) = item else { continue };
        let (Visibility::Public(_), Some((_, children))) = (&m.vis, &m.content) else {
            continue;
        };

        let ident = &m.ident;
        let key = ident.unraw().to_string();
        let child = namespace_expr(children, &quote! { #path::#ident }, inferred);
        entries.push(quote! { .namespace(#key, #child) });
    }

    quote! { ::memo_router::Namespace::new() #(#entries)* }
}

/// The request type of a handler-shaped function: public, not generic, one
/// typed argument.
fn handler_arg(f: &ItemFn) -> Option<&Type> {
    if !matches!(f.vis, Visibility::Public(_)) || !f.sig.generics.params.is_empty() {
        return None;
    }
    if f.sig.inputs.len() != 1 {
        return None;
    }
    match f.sig.inputs.first() {
        Some(FnArg::Typed(pat_type)) => Some(pat_type.ty.as_ref()),
        _ => None,
    }
}
