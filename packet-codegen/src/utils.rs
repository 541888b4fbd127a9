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

//! Identifier and literal helpers shared by the backends.

/// Type of helper errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convert a CamelCase identifier to snake_case.
///
/// An underscore is inserted before every uppercase ASCII letter, the
/// result is lowercased and surrounding underscores are stripped.
/// Runs of capitals are split letter by letter: `"HTTPServer"`
/// becomes `"h_t_t_p_server"`.
pub fn to_snake_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len() * 2);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            output.push('_');
        }
        output.push(c);
    }
    output.to_lowercase().trim_matches('_').to_owned()
}

/// Convert a snake_case identifier to CamelCase.
///
/// Every underscore followed by a lowercase ASCII letter is replaced
/// by the uppercased letter, then the first character is uppercased.
/// Other underscores are kept: `"a__b"` becomes `"A_B"`.
///
/// Returns [`Error::InvalidInput`] for the empty string.
pub fn to_camel_case(name: &str) -> Result<String, Error> {
    let mut joined = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '_' && next.is_ascii_lowercase() => {
                joined.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => joined.push(c),
        }
    }

    let mut chars = joined.chars();
    let Some(first) = chars.next() else {
        return Err(Error::InvalidInput("cannot convert an empty name to CamelCase".to_owned()));
    };
    Ok(first.to_uppercase().chain(chars).collect())
}

/// Format `n` as a lowercase hexadecimal literal with at least two
/// digits, e.g. `0x05` or `0x1000`.
///
/// Returns [`Error::InvalidInput`] for negative values.
pub fn padded_hex(n: impl Into<i128>) -> Result<String, Error> {
    let n = n.into();
    if n < 0 {
        return Err(Error::InvalidInput(format!(
            "cannot format negative value {n} as hexadecimal"
        )));
    }
    Ok(format!("0x{n:02x}"))
}

/// Check that `s` is usable as a Rust type or variant name.
pub fn is_valid_ident(s: &str) -> bool {
    !s.is_empty()
        && s != "Self"
        && s.as_bytes()[0].is_ascii_alphabetic()
        && s.as_bytes()[1..].iter().all(|&ch| ch.is_ascii_alphanumeric() || ch == b'_')
}
