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

use codespan_reporting::files;
use serde::{Deserialize, Serialize};

use crate::packet::PacketIdentifier;

/// File identifier.
/// References a source file in the source database.
pub type FileId = usize;

/// Source database.
/// Stores the source file contents for reference.
pub type SourceDatabase = files::SimpleFiles<String, String>;

/// Packet declaration, as read from the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PacketDecl {
    /// Packet name, in snake_case or CamelCase.
    pub name: String,
    pub id: u32,
    pub direction: String,
    pub state: String,
}

#[derive(Debug, Clone)]
pub struct File {
    pub file: FileId,
    pub packets: Vec<PacketDecl>,
}

impl PacketDecl {
    pub fn identifier(&self) -> PacketIdentifier {
        PacketIdentifier::new(self.id, self.direction.clone(), self.state.clone())
    }
}

impl File {
    /// Remove the packets declared in one of the listed states.
    pub fn exclude_states(self, states: &[String]) -> File {
        File {
            packets: self
                .packets
                .into_iter()
                .filter(|packet| !states.contains(&packet.state))
                .collect(),
            ..self
        }
    }

    pub fn identifiers(&self) -> Vec<PacketIdentifier> {
        self.packets.iter().map(PacketDecl::identifier).collect()
    }
}
