//! Interactive session layer
//!
//! Menu-driven control flow over the core game logic.

mod controller;

pub use controller::Session;
