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

//! JSON backend.

use serde::Serialize;

use crate::ast;
use crate::packet::group_packets;
use crate::utils::padded_hex;

#[derive(Debug, Serialize)]
struct Group<'a> {
    direction: &'a str,
    state: &'a str,
    ids: Vec<String>,
}

/// Turn the packet list into a JSON list of packet groups.
/// Packet ids are written as hexadecimal strings.
pub fn generate(file: &ast::File) -> Result<String, String> {
    let groups = group_packets(&file.identifiers());
    let groups = groups
        .iter()
        .map(|group| {
            Ok(Group {
                direction: &group.direction,
                state: &group.state,
                ids: group.ids.iter().map(|&id| padded_hex(id)).collect::<Result<_, _>>()?,
            })
        })
        .collect::<Result<Vec<_>, crate::utils::Error>>()
        .map_err(|err| format!("could not format packet ids: {err}"))?;
    serde_json::to_string_pretty(&groups)
        .map_err(|err| format!("could not JSON serialize packet groups: {err}"))
}
