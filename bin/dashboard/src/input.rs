use std::str::FromStr;

use smartroom::{Command, Error};

pub const HELP: &str = "commands: fan | led | mode | auto | manual | quit";

#[derive(Debug, PartialEq)]
pub enum Input {
    Command(Command),
    Quit,
    Empty,
}

impl FromStr for Input {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim() {
            "" => Ok(Input::Empty),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            command => Command::from_str(command).map(Input::Command),
        }
    }
}
