//! Client-side behavior for the portfolio page.
//!
//! Every module except `frontend` is target independent: it holds the state
//! machines and thresholds and is tested natively. `frontend` binds them to
//! the host document and only builds for `wasm32`.

pub mod config;
pub mod contact;
pub mod counter;
pub mod filter;
pub mod lazy;
pub mod menu;
pub mod particles;
pub mod scroll;
pub mod task;
pub mod telemetry;
pub mod theme;
pub mod throttle;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
