//! Game Module
//!
//! Match-level glue on top of the engine: the session context object, the
//! wire protocol, the outbound transport seam, remote players and the config
//! file.

pub mod config;
pub mod peers;
pub mod protocol;
pub mod session;
pub mod transport;

pub use config::{BuildingSpec, ConfigError, GameConfig};
pub use peers::{Peer, PeerRegistry};
pub use protocol::{Camp, ClientMessage, MoveMessage, ProtocolError, ServerEvent};
pub use session::{MatchSession, SessionEvent};
pub use transport::{ChannelPublisher, NullPublisher, PublishError, StatePublisher, channel_publisher};
