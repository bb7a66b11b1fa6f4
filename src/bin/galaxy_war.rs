//! GalaxyWar - Headless Match Harness
//!
//! Run with: `cargo run --bin galaxy_war -- [config.json] [frames]`
//!
//! Drives a match session the way the browser client does, minus rendering
//! and the socket: the client creates or joins a room and starts the match,
//! then a scripted player walks, strafes, turns and jumps while a scripted
//! server announces the match and moves a peer around. Every
//! outbound frame is logged at debug level (`RUST_LOG=debug`).
//!
//! Script:
//! - Frames 0-29: W held (walk forward)
//! - Frame 40: Space (jump)
//! - Frames 60-89: D held, pointer drifting right (strafe while turning)
//! - Frames 100-229: W + D held (diagonal, runs into the arena bounds)
//! - Frame 230: page loses focus, everything released

use std::sync::mpsc::Receiver;

use anyhow::{Context, Result};
use galaxy_war_engine::game::transport::drain;
use galaxy_war_engine::game::{
    ClientMessage, GameConfig, MatchSession, ServerEvent, SessionEvent, channel_publisher,
};
use galaxy_war_engine::player::TickScale;

const DEFAULT_FRAMES: u64 = 240;

/// Server events replayed at fixed frames.
const SERVER_SCRIPT: &[(u64, &str)] = &[
    (0, r#"{"event":"joinedRoom","data":{"id":"galaxy-local","players":2}}"#),
    (0, r#"{"event":"startedGame","data":{"message":"The battle for the galaxy begins"}}"#),
    (
        1,
        r#"{"event":"initPlayer","data":{"id":"local","players":[
            {"id":"local","camp":"RED","position":{"x":0,"y":0,"z":0}},
            {"id":"rival","camp":"BLUE","position":{"x":4,"y":-0.5,"z":-4}}
        ]}}"#,
    ),
    (50, r#"{"event":"update","data":{"id":"rival","x":3.5,"y":-0.5,"z":-3.0}}"#),
    (120, r#"{"event":"update","data":{"id":"rival","x":2.0,"y":-0.5,"z":-1.0}}"#),
    (200, r#"{"event":"remove","data":"rival"}"#),
];

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => GameConfig::default(),
    };
    let frames = match args.next() {
        Some(n) => n.parse::<u64>().with_context(|| format!("invalid frame count {n:?}"))?,
        None => DEFAULT_FRAMES,
    };

    let room_id = config.room_id.clone().unwrap_or_default();
    log::info!(
        "server {} room {}, {frames} frame(s)",
        config.server_url,
        if room_id.is_empty() { "<new>" } else { room_id.as_str() }
    );

    let (publisher, outbound) = channel_publisher();
    let mut session = MatchSession::new(
        room_id.as_str(),
        config.movement,
        config.collision_world(),
        Box::new(publisher),
    );

    session.enter_room();
    if session.room_id().is_empty() {
        let created = ServerEvent::from_json(r#"{"event":"roomCreated","data":{"roomId":"galaxy-local"}}"#)
            .context("decoding scripted room creation")?;
        session.handle_server_event(created);
    }
    session.start_game();
    log_outbound(&outbound);

    for frame in 0..frames {
        replay_server_events(&mut session, frame)?;
        script_input(&mut session, frame);
        let state = session.frame(TickScale::FRAME);

        if frame % 30 == 0 {
            log::info!(
                "frame {frame}: pos=({:.2}, {:.2}, {:.2}) airborne={} yaw={:.3}",
                state.position.x,
                state.position.y,
                state.position.z,
                state.airborne,
                state.facing_yaw
            );
        }
        log_outbound(&outbound);
    }

    session.send(&ClientMessage::LeaveRoom);
    log_outbound(&outbound);

    let state = session.state();
    println!(
        "final position ({:.3}, {:.3}, {:.3}), grounded={}, peers={}",
        state.position.x,
        state.position.y,
        state.position.z,
        state.is_grounded(),
        session.peers().len()
    );
    Ok(())
}

fn replay_server_events(session: &mut MatchSession, frame: u64) -> Result<()> {
    for (_, text) in SERVER_SCRIPT.iter().filter(|(at, _)| *at == frame) {
        let event = ServerEvent::from_json(text).context("decoding scripted server event")?;
        match session.handle_server_event(event) {
            SessionEvent::ServerError(message) => anyhow::bail!("server error: {message}"),
            other => log::debug!("frame {frame}: {other:?}"),
        }
    }
    Ok(())
}

fn script_input(session: &mut MatchSession, frame: u64) {
    let input = session.input_mut();
    match frame {
        0 => {
            input.handle_key_event("w", true);
        }
        30 => {
            input.handle_key_event("w", false);
        }
        40 => {
            input.handle_key_event(" ", true);
        }
        41 => {
            input.handle_key_event(" ", false);
        }
        60 => {
            input.handle_key_event("d", true);
        }
        61..=89 => input.handle_pointer_motion(4.0, 0.0),
        90 => {
            input.handle_key_event("d", false);
        }
        100 => {
            input.handle_key_event("ArrowUp", true);
            input.handle_key_event("ArrowRight", true);
        }
        230 => input.reset(),
        _ => {}
    }
}

fn log_outbound(outbound: &Receiver<String>) {
    for frame in drain(outbound) {
        log::debug!("-> {frame}");
    }
}
