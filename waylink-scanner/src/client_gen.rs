use proc_macro2::{Ident, Span, TokenStream};

use quote::quote;

use crate::{
    protocol::{Interface, Protocol, Type},
    util::{dotted_to_relname, iface_type_name, is_keyword, snake_to_camel},
    Config, Side,
};

pub fn generate_client_objects(protocol: &Protocol, config: &Config) -> TokenStream {
    let tokens = protocol
        .interfaces
        .iter()
        .filter(|iface| iface.name != "wl_display" && iface.name != "wl_registry")
        .map(|iface| generate_objects_for(iface, config));
    quote!(
        #(#tokens)*
    )
}

fn generate_objects_for(interface: &Interface, config: &Config) -> TokenStream {
    let mod_name = Ident::new(&interface.name, Span::call_site());
    let mod_doc = interface.description.as_ref().map(crate::util::description_to_doc_attr);
    let iface_name = Ident::new(&iface_type_name(&interface.name, config.prefix.as_deref()), Span::call_site());
    let iface_const_name = Ident::new(
        &format!("{}_INTERFACE", interface.name.to_ascii_uppercase()),
        Span::call_site(),
    );

    let enums = crate::common::generate_enums_for(interface);
    let sinces = crate::common::gen_since_constants(&interface.requests, &interface.events);

    let requests = crate::common::gen_message_enum(
        &Ident::new("Request", Span::call_site()),
        Side::Client,
        false,
        &interface.requests,
        config,
    );
    let events = crate::common::gen_message_enum(
        &Ident::new("Event", Span::call_site()),
        Side::Client,
        true,
        &interface.events,
        config,
    );

    let parse_body = crate::common::gen_parse_body(interface, Side::Client, config);
    let write_body = crate::common::gen_write_body(interface, Side::Client, config);
    let methods = gen_methods(interface, config);

    quote! {
        #mod_doc
        pub mod #mod_name {
            use super::waylink_client::{
                backend::{smallvec, ObjectId, InvalidId, protocol::{WEnum, Argument, Message, Interface, same_interface}},
                Proxy, Connection, DispatchError,
            };

            #enums
            #sinces
            #requests
            #events

            #[derive(Debug, Clone)]
            pub struct #iface_name {
                id: ObjectId,
            }

            impl std::cmp::PartialEq for #iface_name {
                fn eq(&self, other: &#iface_name) -> bool {
                    self.id == other.id
                }
            }

            impl std::cmp::Eq for #iface_name {}

            impl Proxy for #iface_name {
                type Request = Request;
                type Event = Event;

                #[inline]
                fn interface() -> &'static Interface {
                    &super::#iface_const_name
                }

                #[inline]
                fn id(&self) -> ObjectId {
                    self.id.clone()
                }

                #[inline]
                fn from_id(conn: &Connection, id: ObjectId) -> Result<Self, InvalidId> {
                    if same_interface(id.interface(), Self::interface()) {
                        let _ = conn;
                        Ok(#iface_name { id })
                    } else {
                        Err(InvalidId)
                    }
                }

                fn parse_event(
                    conn: &Connection,
                    msg: Message<ObjectId>,
                ) -> Result<(Self, Self::Event), DispatchError> {
                    #parse_body
                }

                fn write_request(
                    &self,
                    conn: &Connection,
                    request: Self::Request,
                ) -> Result<(Message<ObjectId>, Option<(&'static Interface, u32)>), InvalidId> {
                    #write_body
                }
            }

            impl #iface_name {
                #methods
            }
        }
    }
}

fn gen_methods(interface: &Interface, config: &Config) -> TokenStream {
    interface
        .requests
        .iter()
        .map(|request| {
            let method_name = Ident::new(
                &format!("{}{}", if is_keyword(&request.name) { "_" } else { "" }, request.name),
                Span::call_site(),
            );
            let enum_variant = Ident::new(&snake_to_camel(&request.name), Span::call_site());
            let new_id_arg = request.args.iter().find(|arg| arg.typ == Type::NewId);

            let fn_args = request.args.iter().flat_map(|arg| {
                if arg.typ == Type::NewId {
                    return None;
                }
                let arg_name = Ident::new(
                    &format!("{}{}", if is_keyword(&arg.name) { "_" } else { "" }, arg.name),
                    Span::call_site(),
                );

                let arg_type = if let Some(ref enu) = arg.enum_ {
                    let enum_type = dotted_to_relname(enu);
                    quote! { #enum_type }
                } else {
                    match arg.typ {
                        Type::Uint => quote!(u32),
                        Type::Int => quote!(i32),
                        Type::Fixed => quote!(f64),
                        Type::String => {
                            if arg.allow_null {
                                quote! { Option<String> }
                            } else {
                                quote! { String }
                            }
                        }
                        Type::Array => {
                            if arg.allow_null {
                                quote! { Option<Vec<u8>> }
                            } else {
                                quote! { Vec<u8> }
                            }
                        }
                        Type::Fd => quote!(::std::os::unix::io::RawFd),
                        Type::Object => {
                            let iface = arg.interface.as_ref().expect("object argument without interface");
                            let (iface_path, iface_type) = crate::common::resolve_iface(config, iface);
                            if arg.allow_null {
                                quote! { Option<#iface_path::#iface_type> }
                            } else {
                                quote! { #iface_path::#iface_type }
                            }
                        }
                        Type::NewId => unreachable!("new_id arguments are synthesized, not taken as parameters"),
                        Type::Destructor => panic!("An argument cannot have type \"destructor\"."),
                    }
                };

                Some(quote! { #arg_name: #arg_type })
            });

            let enum_args = request.args.iter().flat_map(|arg| {
                if arg.typ == Type::NewId {
                    return None;
                }
                let arg_name = Ident::new(
                    &format!("{}{}", if is_keyword(&arg.name) { "_" } else { "" }, arg.name),
                    Span::call_site(),
                );
                if arg.enum_.is_some() {
                    Some(quote! { #arg_name: WEnum::Value(#arg_name) })
                } else {
                    Some(quote! { #arg_name })
                }
            });

            if let Some(new_id_arg) = new_id_arg {
                let iface = new_id_arg
                    .interface
                    .as_ref()
                    .expect("new_id without an interface is only valid on wl_registry.bind, which is hand-written");
                let (iface_path, iface_type) = crate::common::resolve_iface(config, iface);
                quote! {
                    #[allow(clippy::too_many_arguments)]
                    pub fn #method_name(&self, conn: &Connection, #(#fn_args),*) -> Result<#iface_path::#iface_type, InvalidId> {
                        self.send_constructor(conn, Request::#enum_variant { #(#enum_args),* })
                    }
                }
            } else {
                quote! {
                    #[allow(clippy::too_many_arguments)]
                    pub fn #method_name(&self, conn: &Connection, #(#fn_args),*) -> Result<(), InvalidId> {
                        self.send_request(conn, Request::#enum_variant { #(#enum_args),* })
                    }
                }
            }
        })
        .collect()
}
