// src/controllers/osc.rs
// OSC Controller

use log::warn;
use nannou_osc as osc;
use std::error::Error;

use crate::controllers::commands::Command;
use crate::models::MoveId;

pub const MOVE_ADDR: &str = "/hedgehog/move";
pub const RESET_ADDR: &str = "/hedgehog/reset";
pub const SPEED_ADDR: &str = "/hedgehog/speed";

pub struct OscController {
    command_queue: Vec<Command>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message.addr, &message.args) {
                    Some(command) => self.command_queue.push(command),
                    None => warn!(
                        "Ignoring OSC message {} {:?}",
                        message.addr, message.args
                    ),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.command_queue)
    }
}

/// Maps one OSC message onto a command. Unknown addresses, wrong argument
/// lists and unknown move names give `None`.
pub fn parse_message(addr: &str, args: &[osc::Type]) -> Option<Command> {
    match addr {
        MOVE_ADDR => {
            if let [osc::Type::String(name)] = args {
                if name.trim().eq_ignore_ascii_case("reset") {
                    return Some(Command::Reset);
                }
                name.parse::<MoveId>().ok().map(Command::Move)
            } else {
                None
            }
        }
        RESET_ADDR => Some(Command::Reset),
        SPEED_ADDR => {
            if let [osc::Type::Int(value)] = args {
                Some(Command::Speed((*value).clamp(0, u8::MAX as i32) as u8))
            } else {
                None
            }
        }
        _ => None,
    }
}
