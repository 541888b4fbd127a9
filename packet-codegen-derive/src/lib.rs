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

use codespan_reporting::term;
use packet_codegen::{analyzer, ast, backends, parser};
use proc_macro2::TokenStream;
use quote::quote;
use std::env;
use std::path::Path;
use syn::parse_macro_input;

/// Run the analyzer and generate the module content, or a compile
/// error holding the rendered diagnostics.
fn generate_module(
    span: proc_macro2::Span,
    sources: ast::SourceDatabase,
    file: Result<ast::File, codespan_reporting::diagnostic::Diagnostic<ast::FileId>>,
    input: syn::ItemMod,
    include: Option<String>,
) -> TokenStream {
    let file = match file {
        Ok(file) => file,
        Err(err) => {
            let mut buffer = termcolor::Buffer::no_color();
            term::emit(&mut buffer, &term::Config::default(), &sources, &err)
                .expect("could not emit parser diagnostics");
            return syn::Error::new(span, String::from_utf8_lossy(&buffer.into_inner()))
                .to_compile_error();
        }
    };

    let schema = match analyzer::analyze(&file) {
        Ok(schema) => schema,
        Err(diagnostics) => {
            let mut buffer = termcolor::Buffer::no_color();
            diagnostics.emit(&sources, &mut buffer).expect("could not emit analyzer diagnostics");
            return syn::Error::new(span, String::from_utf8_lossy(&buffer.into_inner()))
                .to_compile_error();
        }
    };

    let packets = backends::rust::generate_tokens(&sources, &schema);
    let mod_ident = input.ident;
    let mod_attrs = input.attrs;
    let mod_vis = input.vis;
    let mod_items = input.content.map(|(_, items)| items).unwrap_or_default();
    // Generate an include_bytes! statement to force a dependency on
    // the source file.
    let include = include.map(|path| quote!(const _: &[u8] = include_bytes!(#path);));

    quote! {
        #(#mod_attrs)*
        #mod_vis mod #mod_ident {
            #include
            #packets
            #(#mod_items)*
        }
    }
}

fn packets_proc_macro(path: syn::LitStr, input: syn::ItemMod) -> TokenStream {
    // Locate the source file.
    let root = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    let Some(relative_path) =
        [Path::new(&root).join(path.value()), Path::new(&root).join("src").join(path.value())]
            .into_iter()
            .find(|path| path.exists())
    else {
        return syn::Error::new(path.span(), "error: unable to find file").to_compile_error();
    };
    let Some(relative_path) = relative_path.to_str().map(str::to_owned) else {
        return syn::Error::new(path.span(), "error: file path is not valid UTF-8")
            .to_compile_error();
    };

    let mut sources = ast::SourceDatabase::new();
    let file = parser::parse_file(&mut sources, &relative_path);
    generate_module(path.span(), sources, file, input, Some(relative_path))
}

fn packets_inline_proc_macro(code: syn::LitStr, input: syn::ItemMod) -> TokenStream {
    let mut sources = ast::SourceDatabase::new();
    let file = parser::parse_inline(&mut sources, "inline.json", code.value());
    generate_module(code.span(), sources, file, input, None)
}

/// Expand the packet tables of a JSON file inside the annotated
/// module. The path is relative to the crate root or its `src`
/// directory.
#[proc_macro_attribute]
pub fn packets(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = parse_macro_input!(attr as syn::LitStr);
    let input = parse_macro_input!(input as syn::ItemMod);
    packets_proc_macro(attr, input).into()
}

/// Expand the packet tables of an inline JSON list inside the
/// annotated module.
#[proc_macro_attribute]
pub fn packets_inline(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = parse_macro_input!(attr as syn::LitStr);
    let input = parse_macro_input!(input as syn::ItemMod);
    packets_inline_proc_macro(attr, input).into()
}
