use proc_macro2::TokenStream;

use crate::protocol::{Interface, Message, Protocol, Type};

use quote::{format_ident, quote};

/// Generate the `Interface` descriptor statics for every interface in a protocol.
pub fn generate(protocol: &Protocol) -> TokenStream {
    protocol.interfaces.iter().map(generate_interface).collect()
}

pub(crate) fn generate_interface(interface: &Interface) -> TokenStream {
    let const_name = format_ident!("{}_INTERFACE", interface.name.to_ascii_uppercase());
    let iface_name = &interface.name;
    let iface_version = interface.version;
    let requests = build_messagedesc_list(&interface.requests);
    let events = build_messagedesc_list(&interface.events);

    quote! {
        pub static #const_name: waylink_backend::protocol::Interface = waylink_backend::protocol::Interface {
            name: #iface_name,
            version: #iface_version,
            requests: #requests,
            events: #events,
        };
    }
}

fn build_messagedesc_list(list: &[Message]) -> TokenStream {
    let desc_list = list.iter().map(|message| {
        let name = &message.name;
        let since = message.since;
        let is_destructor = message.typ == Some(Type::Destructor);
        let signature = message.args.iter().map(|arg| {
            if arg.typ == Type::NewId && arg.interface.is_none() {
                // this is a special generic message, it expands to multiple arguments
                quote! {
                    waylink_backend::protocol::ArgumentType::Str(waylink_backend::protocol::AllowNull::No),
                    waylink_backend::protocol::ArgumentType::Uint,
                    waylink_backend::protocol::ArgumentType::NewId
                }
            } else {
                let typ = format_ident!("{}", arg.typ.common_type());
                if arg.typ.nullable() {
                    if arg.allow_null {
                        quote! { waylink_backend::protocol::ArgumentType::#typ(waylink_backend::protocol::AllowNull::Yes) }
                    } else {
                        quote! { waylink_backend::protocol::ArgumentType::#typ(waylink_backend::protocol::AllowNull::No) }
                    }
                } else {
                    quote! { waylink_backend::protocol::ArgumentType::#typ }
                }
            }
        });
        let child_interface = match message
            .args
            .iter()
            .find(|arg| arg.typ == Type::NewId)
            .and_then(|arg| arg.interface.as_ref())
        {
            Some(name) => {
                let target_iface = format_ident!("{}_INTERFACE", name.to_ascii_uppercase());
                quote! { Some(&#target_iface) }
            }
            None => quote! { None },
        };
        let arg_interfaces = message.args.iter().filter(|arg| arg.typ == Type::Object).map(|arg| {
            match arg.interface {
                Some(ref name) => {
                    let target_iface = format_ident!("{}_INTERFACE", name.to_ascii_uppercase());
                    quote! { &#target_iface }
                }
                None => {
                    quote! { &waylink_backend::protocol::ANONYMOUS_INTERFACE }
                }
            }
        });
        quote! {
            waylink_backend::protocol::MessageDesc {
                name: #name,
                signature: &[ #(#signature),* ],
                since: #since,
                is_destructor: #is_destructor,
                child_interface: #child_interface,
                arg_interfaces: &[ #(#arg_interfaces),* ],
            }
        }
    });

    quote!(
        &[ #(#desc_list),* ]
    )
}
