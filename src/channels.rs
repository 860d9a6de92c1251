//! Inter-task communication channels
//!
//! All signaling between MenuLink tasks goes through the channel set defined
//! here: overwrite mailboxes (`Signal`) for control and samples, and one
//! bounded queue for banner text. `CriticalSectionRawMutex` is used because
//! the command mailbox is fed from interrupt context.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

use crate::config::BANNER_QUEUE_DEPTH;
use crate::types::Banner;

/// Command codes from the button lines to the menu controller.
/// Overwrite semantics: an unconsumed command is replaced by a newer one.
pub type CommandMailbox = Signal<CriticalSectionRawMutex, u8>;

/// Worker activation. The value carries no data; firing is the signal.
pub type ActivateMailbox = Signal<CriticalSectionRawMutex, ()>;

/// Latest sample from the active worker to the data sender.
pub type SampleMailbox = Signal<CriticalSectionRawMutex, u16>;

/// Banner text to the print sink. A full queue blocks the producer rather
/// than dropping the block.
pub type BannerQueue = Channel<CriticalSectionRawMutex, Banner, BANNER_QUEUE_DEPTH>;
pub type BannerSender = Sender<'static, CriticalSectionRawMutex, Banner, BANNER_QUEUE_DEPTH>;
pub type BannerReceiver = Receiver<'static, CriticalSectionRawMutex, Banner, BANNER_QUEUE_DEPTH>;

/// The full channel set, created once at startup. Components never reach
/// for this as a global; each one receives exactly the endpoints it needs
/// at construction.
pub struct Channels {
    pub commands: CommandMailbox,
    pub counter_start: ActivateMailbox,
    pub adc_start: ActivateMailbox,
    pub samples: SampleMailbox,
    pub banners: BannerQueue,
}

impl Channels {
    pub const fn new() -> Self {
        Self {
            commands: Signal::new(),
            counter_start: Signal::new(),
            adc_start: Signal::new(),
            samples: Signal::new(),
            banners: Channel::new(),
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
