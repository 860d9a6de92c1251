//! ADC sampling worker
//!
//! Mirror of the counter worker, gated on AdcSampling. Polls the converter
//! each iteration; a not-ready poll forwards nothing and the next attempt
//! happens only after the full sample interval. The free-running sample
//! clock is started exactly once, before the first activation wait.

use embassy_time::Timer;

use crate::channels::{ActivateMailbox, BannerSender, SampleMailbox};
use crate::config::Cadence;
use crate::hardware::{AdcInput, SampleClock};
use crate::supervisor::Heartbeat;
use crate::types::{banner, OperatingMode, SharedMode};

pub const ADC_BANNER: &str = "\n==========================\r\n\
                              |      ADCRead Menu      |\r\n\
                              ==========================\r\n";

pub struct AdcWorker<A: AdcInput, C: SampleClock> {
    adc: A,
    clock: C,
    mode: &'static SharedMode,
    activate: &'static ActivateMailbox,
    banners: BannerSender,
    samples: &'static SampleMailbox,
    health: &'static Heartbeat,
    cadence: Cadence,
}

impl<A: AdcInput, C: SampleClock> AdcWorker<A, C> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        adc: A,
        clock: C,
        mode: &'static SharedMode,
        activate: &'static ActivateMailbox,
        banners: BannerSender,
        samples: &'static SampleMailbox,
        health: &'static Heartbeat,
        cadence: Cadence,
    ) -> Self {
        Self {
            adc,
            clock,
            mode,
            activate,
            banners,
            samples,
            health,
            cadence,
        }
    }

    pub async fn run(mut self) -> ! {
        self.clock.start();
        info!("ADC worker started");

        loop {
            self.activate.wait().await;
            debug!("ADC worker active");
            self.health.set_active(true);

            while self.mode.get() == OperatingMode::AdcSampling {
                self.health.beat();
                self.banners.send(banner(ADC_BANNER)).await;
                Timer::after(self.cadence.banner_settle).await;

                if self.adc.result_ready() {
                    self.samples.signal(self.adc.read());
                } else {
                    debug!("ADC not ready, skipping sample");
                }

                Timer::after(self.cadence.sample_interval).await;
            }

            self.health.set_active(false);
            debug!("ADC worker idle");
        }
    }
}
