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

use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files;
use codespan_reporting::term;
use codespan_reporting::term::termcolor;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::ast::*;
use crate::packet::{group_packets, PacketIdentifier};
use crate::utils::{is_valid_ident, to_camel_case, to_snake_case};

/// List of unique errors reported as analyzer diagnostics.
#[repr(u16)]
#[derive(Copy, Clone)]
pub enum ErrorCode {
    DuplicatePacketIdentifier = 1,
    DuplicatePacketName = 2,
    InvalidPacketName = 3,
    InvalidDirectionIdentifier = 4,
    InvalidStateIdentifier = 5,
    DuplicateDirectionIdentifier = 6,
    DuplicateStateIdentifier = 7,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "E{}", *self as u16)
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        format!("{}", code)
    }
}

/// Aggregate analyzer diagnostics.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub diagnostics: Vec<Diagnostic<FileId>>,
}

impl Diagnostics {
    fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn push(&mut self, diagnostic: Diagnostic<FileId>) {
        self.diagnostics.push(diagnostic)
    }

    fn err_or<T>(self, value: T) -> Result<T, Diagnostics> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn emit(
        &self,
        sources: &SourceDatabase,
        writer: &mut dyn termcolor::WriteColor,
    ) -> Result<(), files::Error> {
        let config = term::Config::default();
        for d in self.diagnostics.iter() {
            term::emit(writer, &config, sources, d)?;
        }
        Ok(())
    }
}

/// Direction with its generated Rust identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionDecl {
    pub label: String,
    pub ident: String,
}

/// Packet variant generated for a protocol state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketVariant {
    pub ident: String,
    pub id: u32,
    /// Identifier of the packet direction.
    pub direction: String,
}

/// Protocol state with its generated Rust identifier and packets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDecl {
    pub label: String,
    pub ident: String,
    pub packets: Vec<PacketVariant>,
}

/// Resolved view of a packet file, ready for code generation.
/// Directions and states are listed in order of first appearance.
#[derive(Debug, Clone)]
pub struct Schema {
    pub file: FileId,
    pub directions: Vec<DirectionDecl>,
    pub states: Vec<StateDecl>,
}

impl Schema {
    pub fn direction(&self, label: &str) -> Option<&DirectionDecl> {
        self.directions.iter().find(|direction| direction.label == label)
    }
}

/// Generated identifier of a direction label: `CLIENTBOUND` becomes
/// `Clientbound`.
pub fn direction_ident(label: &str) -> Option<String> {
    to_camel_case(&label.to_lowercase()).ok().filter(|ident| is_valid_ident(ident))
}

/// Generated identifier of a state label: `LOGIN` becomes `LoginPacket`.
pub fn state_ident(label: &str) -> Option<String> {
    to_camel_case(&label.to_lowercase())
        .ok()
        .map(|ident| format!("{ident}Packet"))
        .filter(|ident| is_valid_ident(ident))
}

/// Generated identifier of a packet variant: the packet `custom_query`
/// or `CustomQuery` sent `CLIENTBOUND` becomes `ClientboundCustomQuery`.
pub fn packet_ident(packet: &PacketDecl) -> Option<String> {
    let name = to_snake_case(&packet.name);
    if name.is_empty() {
        return None;
    }
    to_camel_case(&format!("{}_{}", packet.direction.to_lowercase(), name))
        .ok()
        .filter(|ident| is_valid_ident(ident))
}

/// Check that direction and state labels produce valid and unique
/// identifiers.
fn check_labels(file: &File) -> Result<(), Diagnostics> {
    struct Context<'d> {
        kind: &'static str,
        invalid_code: ErrorCode,
        duplicate_code: ErrorCode,
        ident: fn(&str) -> Option<String>,
        /// Generated identifiers and the label they were first generated from.
        seen: HashMap<String, &'d str>,
        invalid: HashSet<&'d str>,
    }

    impl<'d> Context<'d> {
        fn new(
            kind: &'static str,
            invalid_code: ErrorCode,
            duplicate_code: ErrorCode,
            ident: fn(&str) -> Option<String>,
        ) -> Self {
            Context {
                kind,
                invalid_code,
                duplicate_code,
                ident,
                seen: Default::default(),
                invalid: Default::default(),
            }
        }

        fn check(&mut self, label: &'d str, diagnostics: &mut Diagnostics) {
            let Some(ident) = (self.ident)(label) else {
                if self.invalid.insert(label) {
                    diagnostics.push(
                        Diagnostic::error().with_code(self.invalid_code).with_message(format!(
                            "{} `{}` cannot be converted to a Rust identifier",
                            self.kind, label
                        )),
                    );
                }
                return;
            };
            match self.seen.get(&ident) {
                Some(prev) if *prev != label => diagnostics.push(
                    Diagnostic::error().with_code(self.duplicate_code).with_message(format!(
                        "{} `{}` and `{}` both generate the identifier `{}`",
                        self.kind, prev, label, ident
                    )),
                ),
                Some(_) => (),
                None => {
                    self.seen.insert(ident, label);
                }
            }
        }
    }

    let mut diagnostics: Diagnostics = Default::default();
    let mut directions = Context::new(
        "direction",
        ErrorCode::InvalidDirectionIdentifier,
        ErrorCode::DuplicateDirectionIdentifier,
        direction_ident,
    );
    let mut states = Context::new(
        "state",
        ErrorCode::InvalidStateIdentifier,
        ErrorCode::DuplicateStateIdentifier,
        state_ident,
    );
    for packet in &file.packets {
        directions.check(&packet.direction, &mut diagnostics);
        states.check(&packet.state, &mut diagnostics);
    }
    diagnostics.err_or(())
}

/// Check that no packet identifier is declared twice.
fn check_packet_identifiers(file: &File) -> Result<(), Diagnostics> {
    let mut diagnostics: Diagnostics = Default::default();
    let mut seen: HashMap<PacketIdentifier, &PacketDecl> = HashMap::new();
    for packet in &file.packets {
        let identifier = packet.identifier();
        if let Some(prev) = seen.get(&identifier) {
            diagnostics.push(
                Diagnostic::error()
                    .with_code(ErrorCode::DuplicatePacketIdentifier)
                    .with_message(format!("redeclaration of packet identifier `{identifier}`"))
                    .with_notes(vec![
                        format!("`{}` is first declared with this identifier", prev.name),
                        format!("`{}` is redeclared with this identifier", packet.name),
                    ]),
            );
        } else {
            seen.insert(identifier, packet);
        }
    }
    diagnostics.err_or(())
}

/// Check that packet names produce valid identifiers, unique within
/// each state.
fn check_packet_names(file: &File) -> Result<(), Diagnostics> {
    let mut diagnostics: Diagnostics = Default::default();
    let mut seen: HashMap<(&str, String), &PacketDecl> = HashMap::new();
    for packet in &file.packets {
        let Some(ident) = packet_ident(packet) else {
            diagnostics.push(
                Diagnostic::error()
                    .with_code(ErrorCode::InvalidPacketName)
                    .with_message(format!(
                        "packet name `{}` cannot be converted to a Rust identifier",
                        packet.name
                    ))
                    .with_notes(vec![format!("packet identifier is `{}`", packet.identifier())]),
            );
            continue;
        };
        match seen.get(&(packet.state.as_str(), ident.clone())) {
            Some(prev) => diagnostics.push(
                Diagnostic::error()
                    .with_code(ErrorCode::DuplicatePacketName)
                    .with_message(format!(
                        "packet `{}` is declared twice in state `{}`",
                        ident, packet.state
                    ))
                    .with_notes(vec![
                        format!("first declared as `{}`", prev.identifier()),
                        format!("redeclared as `{}`", packet.identifier()),
                    ]),
            ),
            None => {
                seen.insert((packet.state.as_str(), ident), packet);
            }
        }
    }
    diagnostics.err_or(())
}

/// Build the generator schema.
/// Packets of a state are ordered by (direction, state) group, then
/// by order of declaration.
fn resolve(file: &File) -> Schema {
    let decls: HashMap<PacketIdentifier, &PacketDecl> =
        file.packets.iter().map(|packet| (packet.identifier(), packet)).collect();
    let mut directions: Vec<DirectionDecl> = vec![];
    let mut states: Vec<StateDecl> = vec![];

    for group in &group_packets(&file.identifiers()) {
        // Labels were validated by `check_labels`.
        let direction_ident = direction_ident(&group.direction).unwrap_or_default();
        if !directions.iter().any(|d| d.label == group.direction) {
            directions.push(DirectionDecl {
                label: group.direction.clone(),
                ident: direction_ident.clone(),
            });
        }

        let index = match states.iter().position(|s| s.label == group.state) {
            Some(index) => index,
            None => {
                states.push(StateDecl {
                    label: group.state.clone(),
                    ident: state_ident(&group.state).unwrap_or_default(),
                    packets: vec![],
                });
                states.len() - 1
            }
        };

        for &id in &group.ids {
            let identifier =
                PacketIdentifier::new(id, group.direction.clone(), group.state.clone());
            let packet = decls[&identifier];
            states[index].packets.push(PacketVariant {
                ident: packet_ident(packet).unwrap_or_default(),
                id,
                direction: direction_ident.clone(),
            });
        }
    }

    Schema { file: file.file, directions, states }
}

/// Check a packet file and resolve the identifiers used by the
/// generated code.
pub fn analyze(file: &File) -> Result<Schema, Diagnostics> {
    check_labels(file)?;
    check_packet_identifiers(file)?;
    check_packet_names(file)?;
    Ok(resolve(file))
}
