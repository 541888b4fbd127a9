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

//! Packet identity and grouping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity of a packet type within a protocol schema.
///
/// Equality and hashing cover all three fields. No validation is made
/// on the direction and state labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PacketIdentifier {
    pub packet_id: u32,
    pub direction: String,
    pub state: String,
}

impl PacketIdentifier {
    pub fn new(packet_id: u32, direction: impl Into<String>, state: impl Into<String>) -> Self {
        PacketIdentifier { packet_id, direction: direction.into(), state: state.into() }
    }
}

impl fmt::Display for PacketIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.packet_id, self.direction, self.state)
    }
}

/// Key of a packet group: `(direction, state)`.
pub type GroupKey = (String, String);

/// Packet ids sharing the same direction and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PacketGroup {
    pub direction: String,
    pub state: String,
    /// Ids in input order, duplicates included.
    pub ids: Vec<u32>,
}

/// Packet groups in the order their key was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacketGroups {
    index: HashMap<GroupKey, usize>,
    groups: Vec<PacketGroup>,
}

impl PacketGroups {
    /// Return the ids grouped under `(direction, state)`.
    pub fn get(&self, direction: &str, state: &str) -> Option<&[u32]> {
        self.index
            .get(&(direction.to_owned(), state.to_owned()))
            .map(|&index| self.groups[index].ids.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PacketGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, packet: &PacketIdentifier) {
        let key = (packet.direction.clone(), packet.state.clone());
        let groups = &mut self.groups;
        let index = *self.index.entry(key).or_insert_with(|| {
            groups.push(PacketGroup {
                direction: packet.direction.clone(),
                state: packet.state.clone(),
                ids: vec![],
            });
            groups.len() - 1
        });
        groups[index].ids.push(packet.packet_id);
    }
}

impl IntoIterator for PacketGroups {
    type Item = PacketGroup;
    type IntoIter = std::vec::IntoIter<PacketGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a PacketGroups {
    type Item = &'a PacketGroup;
    type IntoIter = std::slice::Iter<'a, PacketGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group packet ids by `(direction, state)`.
pub fn group_packets<'a>(packets: impl IntoIterator<Item = &'a PacketIdentifier>) -> PacketGroups {
    let mut groups = PacketGroups::default();
    for packet in packets {
        groups.push(packet);
    }
    groups
}
