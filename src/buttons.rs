//! Button line handling
//!
//! Three physical lines select the operating mode. Each line maps to a fixed
//! command code, posted to the menu controller's overwrite mailbox straight
//! from the interrupt handler. No debouncing: a rapid double-trigger posts
//! one or two commands depending on timing, and only the latest unconsumed
//! command survives.

use crate::channels::CommandMailbox;
use crate::config::{CMD_ADC_READ, CMD_BINARY_COUNTER, CMD_MAIN_MENU};

/// The three external-interrupt lines wired to the front-panel buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLine {
    BinaryCounter,
    AdcRead,
    MainMenu,
}

impl ButtonLine {
    pub const fn command_code(self) -> u8 {
        match self {
            ButtonLine::BinaryCounter => CMD_BINARY_COUNTER,
            ButtonLine::AdcRead => CMD_ADC_READ,
            ButtonLine::MainMenu => CMD_MAIN_MENU,
        }
    }
}

/// Interrupt-side command source.
///
/// `on_press` is the only operation and is safe to call from interrupt
/// context: the mailbox post is lock-free, never blocks and completes in
/// bounded time regardless of the consumer's state.
pub struct Buttons {
    commands: &'static CommandMailbox,
}

impl Buttons {
    pub const fn new(commands: &'static CommandMailbox) -> Self {
        Self { commands }
    }

    /// Line handler. Maps the line to its command code and posts it,
    /// replacing any command the controller has not consumed yet.
    pub fn on_press(&self, line: ButtonLine) {
        self.commands.signal(line.command_code());
    }
}
