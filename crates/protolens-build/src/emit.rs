//! Module emitter: Rust source for one message type's accessor module.

use crate::{
    chain::FieldChain,
    guard::guard_tokens,
    unit::{Accessor, AccessorOp, GeneratedUnit, ModuleKind},
};
use proc_macro2::TokenStream;
use protolens_core::lens::Terminal;
use protolens_paths::CratePaths;
use protolens_schema::node::MessageDef;
use quote::{format_ident, quote};

/// Render the module for `def`. Chains come from the flattener; opaque and
/// repeated-target modules carry accessors for their own fields too.
#[must_use]
pub fn emit_module(
    paths: &CratePaths,
    def: &MessageDef,
    kind: ModuleKind,
    chains: &[FieldChain<'_>],
) -> GeneratedUnit {
    let core = &paths.core;
    let type_name = def.name.as_str();
    let doc = format!(" Accessors for `{type_name}` ({kind}).");

    let mut accessors = Vec::new();
    let mut items = quote!();
    for chain in chains {
        items.extend(chain_items(core, chain, &mut accessors));
    }

    let tokens = quote! {
        #[doc = #doc]
        pub const TYPE_NAME: &str = #type_name;

        /// Instance with every field unset.
        #[must_use]
        pub fn new() -> #core::message::Message {
            #core::message::Message::new(TYPE_NAME)
        }

        pub fn encode<C: #core::codec::Codec>(
            value: &#core::message::Message,
        ) -> ::std::result::Result<::std::vec::Vec<u8>, #core::codec::CodecError> {
            #core::codec::encode::<C>(
                TYPE_NAME,
                value,
                &#core::codec::EncodeOptions::default(),
            )
        }

        pub fn encode_with<C: #core::codec::Codec>(
            value: &#core::message::Message,
            options: &#core::codec::EncodeOptions,
        ) -> ::std::result::Result<::std::vec::Vec<u8>, #core::codec::CodecError> {
            #core::codec::encode::<C>(TYPE_NAME, value, options)
        }

        pub fn decode<C: #core::codec::Codec>(
            bytes: &[u8],
        ) -> ::std::result::Result<#core::message::Message, #core::codec::CodecError> {
            #core::codec::decode::<C>(TYPE_NAME, bytes)
        }

        #items
    };

    tracing::debug!(
        ty = %def.name,
        %kind,
        chains = chains.len(),
        accessors = accessors.len(),
        "emitted module"
    );

    GeneratedUnit {
        identity: def.name.module_identity(),
        type_name: def.name.clone(),
        kind,
        accessors,
        source: tokens.to_string(),
    }
}

// lens table plus get/set(/add) for one chain
fn chain_items(
    core: &TokenStream,
    chain: &FieldChain<'_>,
    accessors: &mut Vec<Accessor>,
) -> TokenStream {
    let path = chain.accessor_path();
    let origin = chain.origin();
    let steps_ident = format_ident!("STEPS_{}", path.to_uppercase());
    let lens_ident = format_ident!("LENS_{}", path.to_uppercase());

    let steps = chain.steps().into_iter().map(|step| {
        let (field, message) = (step.field, step.message);
        quote!(#core::lens::Step::new(#field, #message))
    });
    let terminal = terminal_tokens(core, &chain.lens_terminal());

    let mut tokens = quote! {
        const #steps_ident: &[#core::lens::Step<'static>] = &[#(#steps),*];
        const #lens_ident: #core::lens::Lens<'static> =
            #core::lens::Lens::new(TYPE_NAME, #steps_ident, #terminal);
    };

    for op in chain.ops() {
        let name = format!("{path}_{op}");
        let ident = format_ident!("{}", name);
        let doc = format!(" `{op}` for {origin}");

        tokens.extend(match op {
            AccessorOp::Get => quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #ident(root: &#core::message::Message) -> #core::value::Value {
                    #lens_ident.get(root)
                }
            },
            AccessorOp::Set | AccessorOp::Add => {
                let method = format_ident!("{}", op.to_string());
                quote! {
                    #[doc = #doc]
                    pub fn #ident(
                        root: &#core::message::Message,
                        value: impl ::std::convert::Into<#core::value::Value>,
                    ) -> ::std::result::Result<#core::message::Message, #core::error::InvalidArgument> {
                        #lens_ident.#method(root, value.into())
                    }
                }
            }
        });

        accessors.push(Accessor {
            name,
            op: *op,
            origin: origin.clone(),
        });
    }

    tokens
}

fn terminal_tokens(core: &TokenStream, terminal: &Terminal<'_>) -> TokenStream {
    let field = terminal.field;
    let guard = guard_tokens(terminal.guard, core);
    let element = match terminal.element {
        Some(element) => {
            let element = guard_tokens(element, core);
            quote!(::std::option::Option::Some(#element))
        }
        None => quote!(::std::option::Option::None),
    };

    quote!(#core::lens::Terminal::new(#field, #guard, #element))
}

/// Index mounting every unit from `OUT_DIR`, in unit order.
#[must_use]
pub fn emit_index(units: &[GeneratedUnit]) -> String {
    let mods = units.iter().map(|unit| {
        let ident = format_ident!("{}", unit.identity);
        let file = format!("/{}.rs", unit.identity);
        let doc = format!(" `{}` ({})", unit.type_name, unit.kind);

        quote! {
            #[doc = #doc]
            #[allow(clippy::all, clippy::pedantic, dead_code)]
            pub mod #ident {
                include!(concat!(env!("OUT_DIR"), #file));
            }
        }
    });

    quote!(#(#mods)*).to_string()
}

///
/// TESTS
///
