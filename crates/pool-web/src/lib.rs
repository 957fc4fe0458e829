//! wasm-bindgen exports for the 8-ball match.
//!
//! JS calls `game_init` once, then `game_tick(dt)` every animation frame, and
//! reads the ball, event and cue buffers straight out of wasm memory. Every
//! export is a no-op (or returns a zero value) before `game_init`.

use std::cell::RefCell;

use pool_engine::{InputEvent, MatchConfig};
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::MatchRunner;

thread_local! {
    static RUNNER: RefCell<Option<MatchRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut MatchRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Start a new match. `config_json` may override any part of the default
/// `MatchConfig`; an invalid config is logged and the defaults are used.
#[wasm_bindgen]
pub fn game_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref().map(MatchConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("{e}; using the default config");
            MatchConfig::default()
        }
        None => MatchConfig::default(),
    };

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(MatchRunner::new(config));
    });
    log::info!("pool: initialized");
}

/// `dt` is the frame time in seconds.
#[wasm_bindgen]
pub fn game_tick(dt: f64) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_pointer_down(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_up(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_move(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f64, b: f64, c: f64) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Buffer accessors ----

#[wasm_bindgen]
pub fn get_balls_ptr() -> *const f32 {
    with_runner(|r| r.balls_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_ball_count() -> u32 {
    with_runner(|r| r.ball_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_cue_ptr() -> *const f32 {
    with_runner(|r| r.cue_ptr()).unwrap_or(std::ptr::null())
}

// ---- Scalar accessors ----

#[wasm_bindgen]
pub fn get_aim_x() -> f64 {
    with_runner(|r| r.aim().x).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_aim_y() -> f64 {
    with_runner(|r| r.aim().y).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_power_fraction() -> f64 {
    with_runner(|r| r.power_fraction()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_current_player() -> u32 {
    with_runner(|r| r.current_player()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_score(player: u32) -> u32 {
    with_runner(|r| r.score(player)).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_shot_phase() -> u32 {
    with_runner(|r| r.shot_phase()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_winner() -> u32 {
    with_runner(|r| r.winner()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_world_width() -> f64 {
    with_runner(|r| r.world_width()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_world_height() -> f64 {
    with_runner(|r| r.world_height()).unwrap_or(0.0)
}
