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

use packet_codegen_derive::{packets, packets_inline};

#[packets("protocol/login.json")]
mod protocol {
    /// Items of the annotated module are kept next to the generated ones.
    pub fn all_login_packets() -> Vec<LoginPacket> {
        [Direction::Serverbound, Direction::Clientbound]
            .into_iter()
            .flat_map(|direction| {
                (0..=0xff).filter_map(move |id| LoginPacket::from_id(direction, id))
            })
            .collect()
    }
}

#[packets_inline(
    r#"[
        { "name": "bundle_delimiter", "id": 0, "direction": "CLIENTBOUND", "state": "PLAY" },
        { "name": "keep_alive", "id": 38, "direction": "CLIENTBOUND", "state": "PLAY" },
        { "name": "keep_alive", "id": 26, "direction": "SERVERBOUND", "state": "PLAY" },
        { "name": "chunk_batch_received", "id": 4096, "direction": "SERVERBOUND", "state": "PLAY" }
    ]"#
)]
mod play {}

#[test]
fn test_packet_ids() {
    use protocol::*;
    assert_eq!(LoginPacket::ServerboundHello.id(), 0x00);
    assert_eq!(LoginPacket::ClientboundHello.id(), 0x01);
    assert_eq!(LoginPacket::ClientboundGameProfile.id(), 0x02);
    assert_eq!(LoginPacket::ClientboundCustomQuery.id(), 0x04);
    assert_eq!(StatusPacket::ClientboundPongResponse.id(), 0x01);
}

#[test]
fn test_packet_directions() {
    use protocol::*;
    assert_eq!(LoginPacket::ServerboundKey.direction(), Direction::Serverbound);
    assert_eq!(LoginPacket::ClientboundLoginCompression.direction(), Direction::Clientbound);
    assert_eq!(StatusPacket::ServerboundPingRequest.direction(), Direction::Serverbound);
}

#[test]
fn test_from_id() {
    use protocol::*;
    assert_eq!(
        LoginPacket::from_id(Direction::Serverbound, 0x02),
        Some(LoginPacket::ServerboundCustomQueryAnswer)
    );
    assert_eq!(
        LoginPacket::from_id(Direction::Clientbound, 0x02),
        Some(LoginPacket::ClientboundGameProfile)
    );
    assert_eq!(LoginPacket::from_id(Direction::Serverbound, 0x04), None);
    assert_eq!(
        StatusPacket::from_id(Direction::Clientbound, 0x00),
        Some(StatusPacket::ClientboundStatusResponse)
    );
}

#[test]
fn test_from_id_round_trip() {
    let packets = protocol::all_login_packets();
    assert_eq!(packets.len(), 8);
    for packet in packets {
        assert_eq!(protocol::LoginPacket::from_id(packet.direction(), packet.id()), Some(packet));
    }
}

#[test]
fn test_direction_display() {
    use protocol::Direction;
    assert_eq!(Direction::Clientbound.to_string(), "CLIENTBOUND");
    assert_eq!(Direction::Serverbound.label(), "SERVERBOUND");
}

#[test]
fn test_inline_packets() {
    use play::*;
    assert_eq!(PlayPacket::ClientboundKeepAlive.id(), 0x26);
    assert_eq!(PlayPacket::ServerboundKeepAlive.id(), 0x1a);
    assert_eq!(PlayPacket::ServerboundChunkBatchReceived.id(), 0x1000);
    assert_eq!(
        PlayPacket::from_id(Direction::Clientbound, 0),
        Some(PlayPacket::ClientboundBundleDelimiter)
    );
    assert_eq!(PlayPacket::from_id(Direction::Clientbound, 0x1a), None);
}
