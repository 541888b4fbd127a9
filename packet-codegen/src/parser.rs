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

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files;

use crate::ast;

/// Convert the 1-based line and column reported by serde_json
/// into a byte offset of `source`.
fn error_offset(source: &str, line_starts: &[usize], err: &serde_json::Error) -> usize {
    let line_start = line_starts
        .get(err.line().saturating_sub(1))
        .copied()
        .unwrap_or(source.len());
    let mut offset = (line_start + err.column().saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Parse a list of packet declarations from a string.
pub fn parse_inline(
    sources: &mut ast::SourceDatabase,
    name: &str,
    source: String,
) -> Result<ast::File, Diagnostic<ast::FileId>> {
    let line_starts: Vec<_> = files::line_starts(&source).collect();
    let packets = serde_json::from_str::<Vec<ast::PacketDecl>>(&source);
    let file = sources.add(name.to_owned(), source.clone());
    match packets {
        Ok(packets) => Ok(ast::File { file, packets }),
        Err(err) => {
            let offset = error_offset(&source, &line_starts, &err);
            Err(Diagnostic::error()
                .with_message(format!("failed to parse input file '{}': {}", name, err))
                .with_labels(vec![Label::primary(file, offset..offset)]))
        }
    }
}

/// Parse a list of packet declarations from a file.
pub fn parse_file(
    sources: &mut ast::SourceDatabase,
    name: &str,
) -> Result<ast::File, Diagnostic<ast::FileId>> {
    let source = std::fs::read_to_string(name).map_err(|e| {
        Diagnostic::error().with_message(format!("failed to read input file '{}': {}", name, e))
    })?;
    parse_inline(sources, name, source)
}
