//! Timing, sizing and command-code configuration for MenuLink

use embassy_time::Duration;

// ===================================================================
// Command codes delivered by the button lines
// ===================================================================

pub const CMD_BINARY_COUNTER: u8 = 0;
pub const CMD_ADC_READ: u8 = 1;
pub const CMD_MAIN_MENU: u8 = 2;

// ===================================================================
// Banner queue sizing
// ===================================================================

/// One text block in flight at a time; producers serialize on the sink.
pub const BANNER_QUEUE_DEPTH: usize = 1;

/// Capacity of one banner block. The largest banner is 126 bytes.
pub const BANNER_CAPACITY: usize = 130;

// ===================================================================
// Serial transmit sizing
// ===================================================================

/// Widest decimal rendering of a 16-bit sample ("65535").
pub const TX_DECIMAL_WIDTH: usize = 5;

// ===================================================================
// Worker cadence
// ===================================================================

pub const BANNER_SETTLE_MS: u64 = 10;
pub const SAMPLE_INTERVAL_MS: u64 = 240;

/// Delays a worker observes per active iteration. Deployments keep the
/// defaults (~250 ms per sample); tests construct faster values.
#[derive(Clone, Copy, Debug)]
pub struct Cadence {
    /// Pause between enqueueing the banner and producing the sample.
    pub banner_settle: Duration,
    /// Pause after forwarding a sample, before the mode re-check.
    pub sample_interval: Duration,
}

impl Cadence {
    pub const fn new(banner_settle: Duration, sample_interval: Duration) -> Self {
        Self {
            banner_settle,
            sample_interval,
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(BANNER_SETTLE_MS),
            Duration::from_millis(SAMPLE_INTERVAL_MS),
        )
    }
}

// ===================================================================
// Supervisor
// ===================================================================

pub const SUPERVISOR_TICK_SECS: u64 = 10;
pub const STATUS_REPORT_SECS: u32 = 60;
