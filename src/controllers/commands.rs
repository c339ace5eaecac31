// src/controllers/commands.rs
//
// What the outside world can ask of the puzzle. Keyboard and OSC input
// both boil down to these.

use nannou::prelude::Key;

use crate::models::MoveId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(MoveId),
    Reset,
    /// Absolute speed slider value, 1..=100
    Speed(u8),
    /// Relative speed change in configured steps
    SpeedStep(i32),
}

/// Keyboard binding. Shift selects the counter-clockwise variant where
/// there is one.
pub fn command_for_key(key: Key, shift: bool) -> Option<Command> {
    let pick = |normal: MoveId, primed: MoveId| {
        Some(Command::Move(if shift { primed } else { normal }))
    };

    match key {
        Key::X => pick(MoveId::X, MoveId::XPrime),
        Key::R => pick(MoveId::R, MoveId::RPrime),
        Key::L => pick(MoveId::L, MoveId::LPrime),
        Key::Y => pick(MoveId::Y, MoveId::YPrime),
        Key::U => Some(Command::Move(MoveId::U2)),
        Key::D => Some(Command::Move(MoveId::D2)),
        Key::F => Some(Command::Move(MoveId::F2)),
        Key::B => Some(Command::Move(MoveId::B2)),
        Key::A => Some(Command::Move(MoveId::GyroFirstHalf)),
        Key::S => Some(Command::Move(MoveId::GyroSecondHalf)),
        Key::Back | Key::Delete => Some(Command::Reset),
        Key::Up => Some(Command::SpeedStep(1)),
        Key::Down => Some(Command::SpeedStep(-1)),
        _ => None,
    }
}
