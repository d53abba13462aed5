pub fn is_keyword(txt: &str) -> bool {
    match txt {
        "abstract" | "alignof" | "as" | "become" | "box" | "break" | "const" | "continue" | "crate"
        | "do" | "else" | "enum" | "extern" | "false" | "final" | "fn" | "for" | "if" | "impl" | "in"
        | "let" | "loop" | "macro" | "match" | "mod" | "move" | "mut" | "offsetof" | "override" | "priv"
        | "proc" | "pub" | "pure" | "ref" | "return" | "Self" | "self" | "sizeof" | "static" | "struct"
        | "super" | "trait" | "true" | "type" | "typeof" | "unsafe" | "unsized" | "use" | "virtual"
        | "where" | "while" | "yield" => true,
        _ => false,
    }
}

pub fn snake_to_camel(input: &str) -> String {
    input
        .split('_')
        .flat_map(|s| {
            let mut first = true;
            s.chars().map(move |c| {
                if first {
                    first = false;
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
        })
        .collect()
}

/// Build the type name for an interface, stripping a configured common prefix (e.g. `wl`) from
/// the raw interface name before camel-casing it, so `wl_surface` becomes `Surface` rather than
/// `WlSurface` under prefix `wl`.
pub fn iface_type_name(iface: &str, prefix: Option<&str>) -> String {
    let trimmed = match prefix {
        Some(prefix) => iface.strip_prefix(prefix).map(|rest| rest.trim_start_matches('_')).unwrap_or(iface),
        None => iface,
    };
    snake_to_camel(trimmed)
}

/// Render a single doc comment string as a `#[doc = "..."]` attribute.
pub fn to_doc_attr(text: &str) -> proc_macro2::TokenStream {
    use quote::quote;
    let text = text.trim();
    quote! { #[doc = #text] }
}

/// Render a protocol XML `(summary, description)` pair as a `#[doc = "..."]` attribute, folding
/// the summary and the (optional) longer description into one doc string.
pub fn description_to_doc_attr((summary, description): &(String, String)) -> proc_macro2::TokenStream {
    let description = description.trim();
    let text = if description.is_empty() {
        summary.clone()
    } else {
        format!("{}\n\n{}", summary, description)
    };
    to_doc_attr(&text)
}

/// Resolve an enum reference (`"transform"` or `"wl_output.transform"`) to the token path of
/// the generated Rust enum type, relative to the module the reference appears in.
pub fn dotted_to_relname(input: &str) -> proc_macro2::TokenStream {
    use quote::{format_ident, quote};

    let mut it = input.split('.');
    match (it.next(), it.next()) {
        (Some(module), Some(name)) => {
            let module = format_ident!("{}", module);
            let name = format_ident!("{}", snake_to_camel(name));
            quote! { super::#module::#name }
        }
        (Some(name), None) => {
            let name = format_ident!("{}", snake_to_camel(name));
            quote! { #name }
        }
        _ => unreachable!(),
    }
}
