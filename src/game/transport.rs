//! Outbound Transport Seam
//!
//! The socket client lives outside this crate. The session only needs a
//! fire-and-forget sink for [`ClientMessage`]s; [`StatePublisher`] is that
//! sink. [`ChannelPublisher`] hands JSON text frames to whatever thread owns
//! the real socket over an unbounded `std::sync::mpsc` channel.

use std::sync::mpsc::{self, Receiver, Sender};

use thiserror::Error;

use super::protocol::{ClientMessage, ProtocolError};

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("transport closed")]
    Closed,
    #[error(transparent)]
    Encode(#[from] ProtocolError),
}

/// Fire-and-forget outbound message sink. Must not block.
pub trait StatePublisher {
    fn publish(&mut self, message: &ClientMessage) -> Result<(), PublishError>;
}

/// Encodes messages as JSON text and pushes them into a channel.
#[derive(Debug, Clone)]
pub struct ChannelPublisher {
    tx: Sender<String>,
}

/// Create a publisher and the receiving end for the socket owner.
#[must_use]
pub fn channel_publisher() -> (ChannelPublisher, Receiver<String>) {
    let (tx, rx) = mpsc::channel();
    (ChannelPublisher { tx }, rx)
}

impl StatePublisher for ChannelPublisher {
    fn publish(&mut self, message: &ClientMessage) -> Result<(), PublishError> {
        let frame = message.to_json()?;
        self.tx.send(frame).map_err(|_| PublishError::Closed)
    }
}

/// Drops every message. For offline play and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPublisher;

impl StatePublisher for NullPublisher {
    fn publish(&mut self, _message: &ClientMessage) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Drain every frame currently queued, without blocking.
pub fn drain(rx: &Receiver<String>) -> Vec<String> {
    rx.try_iter().collect()
}
