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

//! Packet identifier helpers and code generator.

pub mod analyzer;
pub mod ast;
pub mod backends;
pub mod packet;
pub mod parser;
#[cfg(test)]
pub mod test_utils;
pub mod utils;

pub use packet::{group_packets, PacketGroup, PacketGroups, PacketIdentifier};
pub use utils::{padded_hex, to_camel_case, to_snake_case};
