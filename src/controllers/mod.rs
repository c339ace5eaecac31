pub mod commands;
pub mod move_dispatcher;
pub mod osc;

pub use commands::{command_for_key, Command};
pub use move_dispatcher::{Gating, MoveDispatcher};
pub use osc::OscController;
