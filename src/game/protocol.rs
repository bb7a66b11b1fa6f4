//! Wire Protocol
//!
//! JSON messages exchanged with the GalaxyWar room server. Every message is
//! an event name plus an optional payload:
//!
//! ```text
//! {"event":"move","data":{"x":0.0,"y":-0.5,"z":-0.1,"roomId":"abc"}}
//! {"event":"update","data":{"id":"p2","x":1.0,"y":-0.5,"z":3.0}}
//! {"event":"remove","data":"p2"}
//! ```
//!
//! Field names follow the server (`roomId`, camelCase event names), so the
//! Rust names are mapped with serde attributes.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors decoding or encoding wire messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
}

/// Team a player belongs to. Anything the server sends other than `RED`
/// is treated as blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Camp {
    Red,
    #[serde(other)]
    Blue,
}

/// Position as the server encodes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WirePosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for WirePosition {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<WirePosition> for Vec3 {
    fn from(p: WirePosition) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

/// The local player's position, published once per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveMessage {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(rename = "roomId")]
    pub room_id: String,
}

impl MoveMessage {
    pub fn new(position: Vec3, room_id: impl Into<String>) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            room_id: room_id.into(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Messages the client sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Ask the server for a fresh room; answered by `roomCreated`
    CreateRoom,
    /// Enter a room by id; answered by `joinedRoom`
    JoinRoom(String),
    /// Start the match in a room
    GameStart(String),
    /// Per-frame position publish
    Move(MoveMessage),
    /// Ask the server for the match roster once the game has started
    GameInit(String),
    LeaveRoom,
}

impl ClientMessage {
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A player listed in `initPlayer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: String,
    pub camp: Camp,
    #[serde(default)]
    pub position: WirePosition,
}

/// A remote player's new position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerUpdate {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PeerUpdate {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Room membership change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterChange {
    pub id: String,
    #[serde(default)]
    pub players: u32,
}

/// Events the server pushes to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    RoomCreated {
        #[serde(rename = "roomId")]
        room_id: String,
    },
    /// Joined a room; `id` is the room id
    JoinedRoom(RosterChange),
    StartedGame { message: String },
    /// Assigns the local id and lists everyone in the match
    InitPlayer { id: String, players: Vec<PlayerInfo> },
    Update(PeerUpdate),
    /// A player left the match; payload is their id
    Remove(String),
    PlayerJoined(RosterChange),
    PlayerDisconnected(RosterChange),
    Error(String),
}

impl ServerEvent {
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_message_uses_server_field_names() {
        let msg = ClientMessage::Move(MoveMessage::new(Vec3::new(1.0, -0.5, 2.0), "room-7"));
        let json: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(json["event"], "move");
        assert_eq!(json["data"]["roomId"], "room-7");
        assert_eq!(json["data"]["x"], 1.0);
        assert_eq!(json["data"]["y"], -0.5);
        assert_eq!(json["data"]["z"], 2.0);
    }

    #[test]
    fn test_unit_and_string_messages() {
        assert_eq!(ClientMessage::LeaveRoom.to_json().unwrap(), r#"{"event":"leaveRoom"}"#);
        assert_eq!(
            ClientMessage::GameInit("abc".into()).to_json().unwrap(),
            r#"{"event":"gameInit","data":"abc"}"#
        );
    }

    #[test]
    fn test_decode_init_player() {
        let text = r#"{"event":"initPlayer","data":{"id":"me","players":[
            {"id":"me","camp":"RED","position":{"x":0,"y":0,"z":0}},
            {"id":"p2","camp":"BLUE","position":{"x":3,"y":-0.5,"z":1}},
            {"id":"p3","camp":"GREEN"}
        ]}}"#;
        let ServerEvent::InitPlayer { id, players } = ServerEvent::from_json(text).unwrap() else {
            panic!("expected initPlayer");
        };
        assert_eq!(id, "me");
        assert_eq!(players.len(), 3);
        assert_eq!(players[0].camp, Camp::Red);
        assert_eq!(players[1].camp, Camp::Blue);
        assert_eq!(Vec3::from(players[1].position), Vec3::new(3.0, -0.5, 1.0));
        // Unknown camp falls back to blue, missing position to origin
        assert_eq!(players[2].camp, Camp::Blue);
        assert_eq!(players[2].position, WirePosition::default());
    }

    #[test]
    fn test_decode_update_and_remove() {
        let update = ServerEvent::from_json(r#"{"event":"update","data":{"id":"p2","x":1,"y":2,"z":3}}"#).unwrap();
        assert_eq!(
            update,
            ServerEvent::Update(PeerUpdate {
                id: "p2".into(),
                x: 1.0,
                y: 2.0,
                z: 3.0
            })
        );

        let remove = ServerEvent::from_json(r#"{"event":"remove","data":"p2"}"#).unwrap();
        assert_eq!(remove, ServerEvent::Remove("p2".into()));
    }

    #[test]
    fn test_decode_error_and_started() {
        assert_eq!(
            ServerEvent::from_json(r#"{"event":"error","data":"Room not found"}"#).unwrap(),
            ServerEvent::Error("Room not found".into())
        );
        assert_eq!(
            ServerEvent::from_json(r#"{"event":"startedGame","data":{"message":"Go!"}}"#).unwrap(),
            ServerEvent::StartedGame {
                message: "Go!".into()
            }
        );
    }

    #[test]
    fn test_room_lifecycle_messages() {
        assert_eq!(ClientMessage::CreateRoom.to_json().unwrap(), r#"{"event":"createRoom"}"#);
        assert_eq!(
            ClientMessage::JoinRoom("r1".into()).to_json().unwrap(),
            r#"{"event":"joinRoom","data":"r1"}"#
        );
        assert_eq!(
            ClientMessage::GameStart("r1".into()).to_json().unwrap(),
            r#"{"event":"gameStart","data":"r1"}"#
        );

        assert_eq!(
            ServerEvent::from_json(r#"{"event":"roomCreated","data":{"roomId":"r9"}}"#).unwrap(),
            ServerEvent::RoomCreated {
                room_id: "r9".into()
            }
        );
        assert_eq!(
            ServerEvent::from_json(r#"{"event":"joinedRoom","data":{"id":"r1","players":2}}"#).unwrap(),
            ServerEvent::JoinedRoom(RosterChange {
                id: "r1".into(),
                players: 2
            })
        );
    }

    #[test]
    fn test_unknown_event_is_an_error() {
        let result = ServerEvent::from_json(r#"{"event":"fireBullet","data":{}}"#);
        assert!(matches!(result, Err(ProtocolError::Json(_))));
        assert!(ServerEvent::from_json("not json").is_err());
    }
}
