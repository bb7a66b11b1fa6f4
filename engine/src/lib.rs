//! GalaxyWar Engine Library
//!
//! Client-side core of the GalaxyWar arena shooter. Rendering and the socket
//! transport live outside this crate; what lives here is the per-frame
//! movement integrator and the typed glue around it.
//!
//! # Modules
//!
//! - [`physics`] - Axis-aligned collision volumes (buildings) and queries
//! - [`camera`] - Pointer-look angles and the vectors derived from them
//! - [`input`] - Keyboard and pointer state sampled once per frame
//! - [`player`] - Movement configuration and the per-tick integrator
//! - [`game`] - Match session, wire protocol, peers and config file
//!
//! # Example
//!
//! ```rust,ignore
//! use galaxy_war_engine::game::{MatchSession, NullPublisher};
//! use galaxy_war_engine::physics::CollisionWorld;
//! use galaxy_war_engine::player::{MovementConfig, TickScale};
//!
//! let mut session = MatchSession::new(
//!     "room-1",
//!     MovementConfig::default(),
//!     CollisionWorld::default(),
//!     Box::new(NullPublisher),
//! );
//!
//! session.input_mut().handle_key_event("w", true);
//! let state = session.frame(TickScale::FRAME);
//! println!("player at {:?}", state.position);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{InputCollector, InputState, KeyCode, MovementKeys};
// Re-export player types
pub use player::{KinematicState, MovementConfig, TickScale, advance};
// Re-export collision types
pub use physics::{Aabb, CollisionVolume, CollisionWorld};
