//! Match Session
//!
//! The explicit context object for one match: the local player's kinematic
//! state, its tuning, the buildings, the input collected since the last
//! frame, the remote players and the outbound transport. The render loop
//! calls [`MatchSession::frame`] once per displayed frame.

use crate::input::InputCollector;
use crate::physics::CollisionWorld;
use crate::player::{KinematicState, MovementConfig, TickScale, advance};

use super::peers::PeerRegistry;
use super::protocol::{ClientMessage, MoveMessage, ServerEvent};
use super::transport::StatePublisher;

/// What a server event meant for the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The server made a room for us; `joinRoom` has been sent
    RoomCreated { room_id: String },
    /// Entered the room
    Joined { room_id: String, players: u32 },
    /// The match started; `gameInit` has been sent and rendering can begin
    Started { message: String },
    /// Local id assigned and peers spawned
    Initialized { local_id: String, peers: usize },
    PeerMoved,
    PeerRemoved,
    /// Room head-count changed
    RosterChanged { players: u32 },
    /// An event that needed no action (e.g. an update for an unknown peer)
    Ignored,
    ServerError(String),
}

pub struct MatchSession {
    room_id: String,
    player_id: Option<String>,
    state: KinematicState,
    config: MovementConfig,
    world: CollisionWorld,
    input: InputCollector,
    peers: PeerRegistry,
    publisher: Box<dyn StatePublisher>,
    frames: u64,
}

impl MatchSession {
    /// Start a match with the player at the spawn point.
    pub fn new(
        room_id: impl Into<String>,
        config: MovementConfig,
        world: CollisionWorld,
        publisher: Box<dyn StatePublisher>,
    ) -> Self {
        let room_id = room_id.into();
        log::info!(
            "match session for room {room_id} with {} building(s)",
            world.len()
        );
        Self {
            room_id,
            player_id: None,
            state: KinematicState::spawn(),
            config,
            world,
            input: InputCollector::new(),
            peers: PeerRegistry::new(),
            publisher,
            frames: 0,
        }
    }

    /// Run one frame: sample input, integrate, publish the new position.
    ///
    /// A failed publish is logged and does not affect the frame.
    pub fn frame(&mut self, dt: TickScale) -> KinematicState {
        let input = self.input.sample();
        self.state = advance(&self.state, &input, &self.world, &self.config, dt);
        self.frames += 1;

        let message = ClientMessage::Move(MoveMessage::new(self.state.position, self.room_id.as_str()));
        if let Err(e) = self.publisher.publish(&message) {
            log::warn!("frame {}: failed to publish position: {e}", self.frames);
        }
        self.state
    }

    /// Join the configured room, or ask the server for a new one when the
    /// room id is empty.
    pub fn enter_room(&mut self) {
        if self.room_id.is_empty() {
            log::info!("requesting a new room");
            self.send(&ClientMessage::CreateRoom);
        } else {
            let message = ClientMessage::JoinRoom(self.room_id.clone());
            self.send(&message);
        }
    }

    /// Ask the server to start the match in this room.
    pub fn start_game(&mut self) {
        let message = ClientMessage::GameStart(self.room_id.clone());
        self.send(&message);
    }

    /// Send a non-movement message (e.g. `gameInit`, `leaveRoom`).
    pub fn send(&mut self, message: &ClientMessage) {
        if let Err(e) = self.publisher.publish(message) {
            log::warn!("failed to send {message:?}: {e}");
        }
    }

    /// Route a server event into the session.
    pub fn handle_server_event(&mut self, event: ServerEvent) -> SessionEvent {
        match event {
            ServerEvent::RoomCreated { room_id } => {
                log::info!("room {room_id} created");
                self.room_id = room_id.clone();
                self.send(&ClientMessage::JoinRoom(room_id.clone()));
                SessionEvent::RoomCreated { room_id }
            }
            ServerEvent::JoinedRoom(change) => {
                log::info!("joined room {} ({} player(s))", change.id, change.players);
                SessionEvent::Joined {
                    room_id: change.id,
                    players: change.players,
                }
            }
            ServerEvent::StartedGame { message } => {
                log::info!("game started: {message}");
                let init = ClientMessage::GameInit(self.room_id.clone());
                self.send(&init);
                SessionEvent::Started { message }
            }
            ServerEvent::InitPlayer { id, players } => {
                let spawned = self.peers.spawn_roster(&id, &players);
                log::info!("local player id {id}, {spawned} peer(s)");
                self.player_id = Some(id.clone());
                SessionEvent::Initialized {
                    local_id: id,
                    peers: spawned,
                }
            }
            ServerEvent::Update(update) => {
                if self.peers.apply_update(&update.id, update.position()) {
                    SessionEvent::PeerMoved
                } else {
                    SessionEvent::Ignored
                }
            }
            ServerEvent::Remove(id) => match self.peers.remove(&id) {
                Some(_) => {
                    log::info!("player {id} left the match");
                    SessionEvent::PeerRemoved
                }
                None => SessionEvent::Ignored,
            },
            ServerEvent::PlayerJoined(change) => {
                log::info!("player joined: {}", change.id);
                SessionEvent::RosterChanged {
                    players: change.players,
                }
            }
            ServerEvent::PlayerDisconnected(change) => {
                log::info!("player disconnected: {}", change.id);
                SessionEvent::RosterChanged {
                    players: change.players,
                }
            }
            ServerEvent::Error(message) => {
                log::error!("server error: {message}");
                SessionEvent::ServerError(message)
            }
        }
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    pub fn input_mut(&mut self) -> &mut InputCollector {
        &mut self.input
    }

    pub fn peers(&self) -> &PeerRegistry {
        &self.peers
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn player_id(&self) -> Option<&str> {
        self.player_id.as_deref()
    }

    /// Frames integrated so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::protocol::{Camp, PeerUpdate, PlayerInfo, WirePosition};
    use crate::game::transport::{NullPublisher, channel_publisher, drain};
    use glam::Vec3;

    fn offline_session() -> MatchSession {
        MatchSession::new(
            "r1",
            MovementConfig::default(),
            CollisionWorld::default(),
            Box::new(NullPublisher),
        )
    }

    #[test]
    fn test_frame_publishes_position() {
        let (publisher, rx) = channel_publisher();
        let mut session = MatchSession::new(
            "r1",
            MovementConfig::default(),
            CollisionWorld::default(),
            Box::new(publisher),
        );

        session.input_mut().handle_key_event("w", true);
        let state = session.frame(TickScale::FRAME);
        assert!((state.position.z - (-0.1)).abs() < 1e-6);

        let frames = drain(&rx);
        assert_eq!(frames.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&frames[0]).unwrap();
        assert_eq!(value["event"], "move");
        assert_eq!(value["data"]["roomId"], "r1");
        assert_eq!(session.frame_count(), 1);
    }

    #[test]
    fn test_closed_transport_does_not_stop_frames() {
        let (publisher, rx) = channel_publisher();
        drop(rx);
        let mut session = MatchSession::new(
            "r1",
            MovementConfig::default(),
            CollisionWorld::default(),
            Box::new(publisher),
        );
        session.input_mut().handle_key_event("d", true);
        session.frame(TickScale::FRAME);
        let state = session.frame(TickScale::FRAME);
        assert!((state.position.x - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_holds_until_first_jump() {
        let mut session = offline_session();
        for _ in 0..10 {
            session.frame(TickScale::FRAME);
        }
        assert_eq!(session.state().position, Vec3::ZERO);

        session.input_mut().handle_key_event(" ", true);
        for _ in 0..120 {
            session.frame(TickScale::FRAME);
        }
        let rest = session.config().floor_rest_height();
        assert_eq!(session.state().position.y, rest);
        assert!(session.state().is_grounded());
    }

    #[test]
    fn test_server_events_drive_peers() {
        let mut session = offline_session();
        let init = ServerEvent::InitPlayer {
            id: "me".into(),
            players: vec![
                PlayerInfo {
                    id: "me".into(),
                    camp: Camp::Red,
                    position: WirePosition::default(),
                },
                PlayerInfo {
                    id: "p2".into(),
                    camp: Camp::Blue,
                    position: WirePosition::default(),
                },
            ],
        };
        assert_eq!(
            session.handle_server_event(init),
            SessionEvent::Initialized {
                local_id: "me".into(),
                peers: 1
            }
        );
        assert_eq!(session.player_id(), Some("me"));

        let update = ServerEvent::Update(PeerUpdate {
            id: "p2".into(),
            x: 4.0,
            y: -0.5,
            z: 1.0,
        });
        assert_eq!(session.handle_server_event(update), SessionEvent::PeerMoved);
        assert_eq!(session.peers().get("p2").unwrap().position, Vec3::new(4.0, -0.5, 1.0));

        assert_eq!(
            session.handle_server_event(ServerEvent::Remove("p2".into())),
            SessionEvent::PeerRemoved
        );
        assert_eq!(
            session.handle_server_event(ServerEvent::Remove("p2".into())),
            SessionEvent::Ignored
        );
    }

    #[test]
    fn test_room_lifecycle() {
        let (publisher, rx) = channel_publisher();
        let mut session = MatchSession::new(
            "",
            MovementConfig::default(),
            CollisionWorld::default(),
            Box::new(publisher),
        );

        session.enter_room();
        assert_eq!(drain(&rx), vec![r#"{"event":"createRoom"}"#.to_string()]);

        let created = session.handle_server_event(ServerEvent::RoomCreated {
            room_id: "r9".into(),
        });
        assert_eq!(created, SessionEvent::RoomCreated { room_id: "r9".into() });
        assert_eq!(session.room_id(), "r9");
        assert_eq!(drain(&rx), vec![r#"{"event":"joinRoom","data":"r9"}"#.to_string()]);

        let joined = ServerEvent::from_json(r#"{"event":"joinedRoom","data":{"id":"r9","players":2}}"#).unwrap();
        assert_eq!(
            session.handle_server_event(joined),
            SessionEvent::Joined {
                room_id: "r9".into(),
                players: 2
            }
        );

        session.start_game();
        session.handle_server_event(ServerEvent::StartedGame {
            message: "Go!".into(),
        });
        assert_eq!(
            drain(&rx),
            vec![
                r#"{"event":"gameStart","data":"r9"}"#.to_string(),
                r#"{"event":"gameInit","data":"r9"}"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_configured_room_is_joined_directly() {
        let (publisher, rx) = channel_publisher();
        let mut session = MatchSession::new(
            "galaxy-1",
            MovementConfig::default(),
            CollisionWorld::default(),
            Box::new(publisher),
        );
        session.enter_room();
        assert_eq!(drain(&rx), vec![r#"{"event":"joinRoom","data":"galaxy-1"}"#.to_string()]);
    }

    #[test]
    fn test_error_event_is_surfaced() {
        let mut session = offline_session();
        assert_eq!(
            session.handle_server_event(ServerEvent::Error("Room not found".into())),
            SessionEvent::ServerError("Room not found".into())
        );
    }
}
