// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Rust compiler backend.

use crate::{analyzer, ast};
use quote::{format_ident, quote};
use std::path::Path;

use crate::utils::padded_hex;

mod preamble;

/// Generate the hexadecimal literal of a packet id, e.g. `0x0a`.
pub fn packet_id_literal(id: u32) -> syn::LitInt {
    let hex = padded_hex(id).expect("u32 values are never negative");
    syn::LitInt::new(&hex, proc_macro2::Span::call_site())
}

/// Generate the `Direction` enum shared by all states.
fn generate_direction_decl(schema: &analyzer::Schema) -> proc_macro2::TokenStream {
    let idents = schema
        .directions
        .iter()
        .map(|direction| format_ident!("{}", direction.ident))
        .collect::<Vec<_>>();
    let labels = schema.directions.iter().map(|direction| &direction.label);

    quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Direction {
            #(#idents,)*
        }

        impl Direction {
            /// Return the protocol label of the direction.
            pub fn label(&self) -> &'static str {
                match *self {
                    #(Direction::#idents => #labels,)*
                }
            }
        }

        impl fmt::Display for Direction {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    }
}

/// Generate the packet enum of a protocol state.
fn generate_state_decl(state: &analyzer::StateDecl) -> proc_macro2::TokenStream {
    let state_ident = format_ident!("{}", state.ident);
    let state_doc = format!(" Packets of the `{}` state.", state.label);
    let variants =
        state.packets.iter().map(|packet| format_ident!("{}", packet.ident)).collect::<Vec<_>>();
    let ids = state.packets.iter().map(|packet| packet_id_literal(packet.id)).collect::<Vec<_>>();
    let directions = state
        .packets
        .iter()
        .map(|packet| format_ident!("{}", packet.direction))
        .collect::<Vec<_>>();

    quote! {
        #[doc = #state_doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum #state_ident {
            #(#variants,)*
        }

        impl #state_ident {
            /// Return the packet id.
            pub fn id(&self) -> u32 {
                match *self {
                    #(#state_ident::#variants => #ids,)*
                }
            }

            /// Return the direction in which the packet is sent.
            pub fn direction(&self) -> Direction {
                match *self {
                    #(#state_ident::#variants => Direction::#directions,)*
                }
            }

            /// Look up a packet by direction and id.
            pub fn from_id(direction: Direction, id: u32) -> Option<Self> {
                match (direction, id) {
                    #((Direction::#directions, #ids) => Some(#state_ident::#variants),)*
                    _ => None,
                }
            }
        }
    }
}

/// Generate Rust code from an analyzed packet file.
pub fn generate_tokens(
    sources: &ast::SourceDatabase,
    schema: &analyzer::Schema,
) -> proc_macro2::TokenStream {
    let source = sources.get(schema.file).expect("could not read source");
    let preamble = preamble::generate(Path::new(source.name()));
    let direction_decl = generate_direction_decl(schema);
    let state_decls = schema.states.iter().map(generate_state_decl);
    quote! {
        #preamble

        #direction_decl

        #(#state_decls)*
    }
}

/// Generate formatted Rust code from an analyzed packet file.
pub fn generate(sources: &ast::SourceDatabase, schema: &analyzer::Schema) -> String {
    let syntax_tree =
        syn::parse2(generate_tokens(sources, schema)).expect("Could not parse code");
    prettyplease::unparse(&syntax_tree)
}
