// ============================================================================
// SPACE CARGO 360 - Inventory dashboard (Rust + Yew + WASM)
// ============================================================================
// - models      -> cargo, crew and session data (mock manifests)
// - viewmodels  -> per-page state and transitions, no DOM
// - services    -> login check and session persistence
// - guard       -> session gate evaluated before a protected page
// - scene       -> AR frame as a list of draw commands + canvas executor
// - hooks       -> session and navigation contexts
// - components  -> Yew pages
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod guard;
pub mod services;
pub mod utils;
pub mod viewmodels;
pub mod scene;
pub mod hooks;
pub mod components;
