use crate::bravia::print_content;
use crate::tv::{TVConnection, VolumeOperation};

#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Print the power status
    ShowPower,
    /// Turn the TV on
    On,
    /// Put the TV in standby
    Off,
    /// Print volume information for every audio output
    ShowVolume,
    /// Raise the speaker volume by one step
    Up,
    /// Lower the speaker volume by one step
    Down,
    Mute,
    Unmute,
}

pub fn run(command: Command, tv: &dyn TVConnection) {
    match command {
        Command::ShowPower => print_content(tv.power_status().as_ref()),
        Command::On => tv.on_off(true),
        Command::Off => tv.on_off(false),
        Command::ShowVolume => print_content(tv.volume_information().as_ref()),
        Command::Up => tv.volume_change(VolumeOperation::Increment),
        Command::Down => tv.volume_change(VolumeOperation::Decrement),
        Command::Mute => tv.mute(true),
        Command::Unmute => tv.mute(false),
    }
}
