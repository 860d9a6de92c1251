//! Binary counter worker
//!
//! Idle until the menu controller fires its activation mailbox. While the
//! shared mode stays on BinaryCounting, produces an 8-bit count that wraps
//! past 255 back to 0, forwarding every value to the data sender. The count
//! restarts at zero on each activation.

use embassy_time::Timer;

use crate::channels::{ActivateMailbox, BannerSender, SampleMailbox};
use crate::config::Cadence;
use crate::supervisor::Heartbeat;
use crate::types::{banner, OperatingMode, SharedMode};

pub const COUNTER_BANNER: &str = "\n==========================\r\n\
                                  |      Counter Menu      |\r\n\
                                  ==========================\r\n";

pub struct CounterWorker {
    mode: &'static SharedMode,
    activate: &'static ActivateMailbox,
    banners: BannerSender,
    samples: &'static SampleMailbox,
    health: &'static Heartbeat,
    cadence: Cadence,
}

impl CounterWorker {
    pub fn new(
        mode: &'static SharedMode,
        activate: &'static ActivateMailbox,
        banners: BannerSender,
        samples: &'static SampleMailbox,
        health: &'static Heartbeat,
        cadence: Cadence,
    ) -> Self {
        Self {
            mode,
            activate,
            banners,
            samples,
            health,
            cadence,
        }
    }

    /// Task body. The mode re-check sits at the loop boundary, so after a
    /// mode change the worker finishes its current iteration before going
    /// idle again.
    pub async fn run(self) -> ! {
        info!("Counter worker started");

        loop {
            self.activate.wait().await;
            debug!("Counter worker active");
            self.health.set_active(true);

            let mut count: u8 = 0;
            while self.mode.get() == OperatingMode::BinaryCounting {
                self.health.beat();
                self.banners.send(banner(COUNTER_BANNER)).await;
                Timer::after(self.cadence.banner_settle).await;

                count = count.wrapping_add(1);
                self.samples.signal(count as u16);

                Timer::after(self.cadence.sample_interval).await;
            }

            self.health.set_active(false);
            debug!("Counter worker idle");
        }
    }
}
