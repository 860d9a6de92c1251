//! Serial data sender
//!
//! Sole consumer of the sample mailbox. Each sample is rendered as a decimal
//! string into a buffer wide enough for the full 16-bit range and exactly
//! the formatted bytes go out on the link - no trailing padding, no
//! truncation.

use core::fmt::Write;

use crate::channels::SampleMailbox;
use crate::config::TX_DECIMAL_WIDTH;
use crate::hardware::SerialLink;
use crate::supervisor::Heartbeat;

/// Render a sample as decimal text. The buffer holds the widest u16
/// rendering, so the write cannot overflow.
pub fn format_sample(value: u16) -> heapless::String<TX_DECIMAL_WIDTH> {
    let mut text = heapless::String::new();
    let _ = write!(text, "{}", value);
    text
}

pub struct DataSender<S: SerialLink> {
    serial: S,
    samples: &'static SampleMailbox,
    health: &'static Heartbeat,
}

impl<S: SerialLink> DataSender<S> {
    pub fn new(
        serial: S,
        samples: &'static SampleMailbox,
        health: &'static Heartbeat,
    ) -> Self {
        Self {
            serial,
            samples,
            health,
        }
    }

    /// Task body. One serial write per received sample; no acknowledgement,
    /// no retry, no flow control with the remote end.
    pub async fn run(mut self) -> ! {
        info!("Data sender started");

        loop {
            let value = self.samples.wait().await;
            self.health.beat();

            let text = format_sample(value);
            debug!("Sample transfer to link: {}", value);
            self.serial.write(text.as_bytes());
        }
    }
}
