//! Shared types for the MenuLink task layer

use portable_atomic::{AtomicU8, Ordering};

use crate::config::BANNER_CAPACITY;

/// One fixed-capacity text block, queued by value to the print sink.
pub type Banner = heapless::String<BANNER_CAPACITY>;

/// Build a banner block from a static text. Banner texts are compile-time
/// constants sized within [`BANNER_CAPACITY`].
pub fn banner(text: &str) -> Banner {
    let mut block = Banner::new();
    block.push_str(text).unwrap();
    block
}

/// The single mode selecting which worker may run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OperatingMode {
    MainMenu = 0,
    BinaryCounting = 1,
    AdcSampling = 2,
}

/// Process-wide operating mode.
///
/// Written only by the menu controller; read by both workers without further
/// synchronization. Relaxed ordering is sufficient: the value is a single
/// aligned scalar and readers tolerate a stale mode for at most one inner
/// loop iteration.
pub struct SharedMode(AtomicU8);

impl SharedMode {
    pub const fn new() -> Self {
        Self(AtomicU8::new(OperatingMode::MainMenu as u8))
    }

    pub fn set(&self, mode: OperatingMode) {
        self.0.store(mode as u8, Ordering::Relaxed);
    }

    pub fn get(&self) -> OperatingMode {
        match self.0.load(Ordering::Relaxed) {
            1 => OperatingMode::BinaryCounting,
            2 => OperatingMode::AdcSampling,
            _ => OperatingMode::MainMenu,
        }
    }
}

impl Default for SharedMode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_main_menu() {
        let mode = SharedMode::new();
        assert_eq!(mode.get(), OperatingMode::MainMenu);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mode = SharedMode::new();
        mode.set(OperatingMode::AdcSampling);
        assert_eq!(mode.get(), OperatingMode::AdcSampling);
        mode.set(OperatingMode::BinaryCounting);
        assert_eq!(mode.get(), OperatingMode::BinaryCounting);
        mode.set(OperatingMode::MainMenu);
        assert_eq!(mode.get(), OperatingMode::MainMenu);
    }

    #[test]
    fn banner_copies_text() {
        let block = banner("hello\r\n");
        assert_eq!(block.as_str(), "hello\r\n");
    }
}
