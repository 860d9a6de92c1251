//! Menu controller
//!
//! Owns the shared operating mode. Interprets command codes from the button
//! lines, switches the mode and fires the matching worker's activation
//! mailbox. Unrecognized codes are ignored. The main-menu banner goes out
//! once at startup and again on every return to the main menu.

use crate::channels::{ActivateMailbox, BannerSender, CommandMailbox};
use crate::config::{CMD_ADC_READ, CMD_BINARY_COUNTER, CMD_MAIN_MENU};
use crate::supervisor::Heartbeat;
use crate::types::{banner, OperatingMode, SharedMode};

pub const MAIN_MENU_BANNER: &str = "\n=======================\r\n\
                                    |      Main Menu      |\r\n\
                                    =======================\r\n\
                                    .Binary Counter ----> 0\r\n\
                                    .Read ADC Value ----> 1\r\n";

pub struct MenuController {
    mode: &'static SharedMode,
    commands: &'static CommandMailbox,
    counter_start: &'static ActivateMailbox,
    adc_start: &'static ActivateMailbox,
    banners: BannerSender,
    health: &'static Heartbeat,
}

impl MenuController {
    pub fn new(
        mode: &'static SharedMode,
        commands: &'static CommandMailbox,
        counter_start: &'static ActivateMailbox,
        adc_start: &'static ActivateMailbox,
        banners: BannerSender,
        health: &'static Heartbeat,
    ) -> Self {
        Self {
            mode,
            commands,
            counter_start,
            adc_start,
            banners,
            health,
        }
    }

    /// Task body. Blocks on the command mailbox; each received code is a
    /// synchronous transition plus one side effect.
    ///
    /// The banner enqueue blocks for as long as the print sink is stalled;
    /// menu responsiveness depends on the sink draining its queue.
    pub async fn run(self) -> ! {
        info!("Menu controller started");
        self.banners.send(banner(MAIN_MENU_BANNER)).await;

        loop {
            let code = self.commands.wait().await;
            self.health.beat();
            match code {
                CMD_BINARY_COUNTER => {
                    self.mode.set(OperatingMode::BinaryCounting);
                    self.counter_start.signal(());
                }
                CMD_ADC_READ => {
                    self.mode.set(OperatingMode::AdcSampling);
                    self.adc_start.signal(());
                }
                CMD_MAIN_MENU => {
                    self.mode.set(OperatingMode::MainMenu);
                    self.banners.send(banner(MAIN_MENU_BANNER)).await;
                }
                other => {
                    debug!("Ignoring unrecognized command {}", other);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::Channels;
    use crate::supervisor::Health;
    use std::time::Duration;
    use tokio::time::timeout;

    struct TestBed {
        channels: &'static Channels,
        mode: &'static SharedMode,
    }

    fn spawn_controller() -> TestBed {
        let channels: &'static Channels = Box::leak(Box::new(Channels::new()));
        let mode: &'static SharedMode = Box::leak(Box::new(SharedMode::new()));
        let health: &'static Health = Box::leak(Box::new(Health::new()));

        let controller = MenuController::new(
            mode,
            &channels.commands,
            &channels.counter_start,
            &channels.adc_start,
            channels.banners.sender(),
            &health.menu,
        );
        tokio::spawn(controller.run());

        TestBed { channels, mode }
    }

    async fn drained(commands: &'static CommandMailbox) {
        while commands.signaled() {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn startup_banner_precedes_any_command() {
        let bed = spawn_controller();
        let block = timeout(Duration::from_secs(2), bed.channels.banners.receive())
            .await
            .unwrap();
        assert!(block.contains("Main Menu"));
    }

    #[tokio::test]
    async fn command_zero_activates_counter() {
        let bed = spawn_controller();
        bed.channels.commands.signal(CMD_BINARY_COUNTER);

        timeout(Duration::from_secs(2), bed.channels.counter_start.wait())
            .await
            .unwrap();
        assert_eq!(bed.mode.get(), OperatingMode::BinaryCounting);
        assert!(!bed.channels.adc_start.signaled());
    }

    #[tokio::test]
    async fn command_one_activates_adc() {
        let bed = spawn_controller();
        bed.channels.commands.signal(CMD_ADC_READ);

        timeout(Duration::from_secs(2), bed.channels.adc_start.wait())
            .await
            .unwrap();
        assert_eq!(bed.mode.get(), OperatingMode::AdcSampling);
        assert!(!bed.channels.counter_start.signaled());
    }

    #[tokio::test]
    async fn command_two_reprints_the_menu() {
        let bed = spawn_controller();
        // Drain the startup banner first; the queue holds one block.
        timeout(Duration::from_secs(2), bed.channels.banners.receive())
            .await
            .unwrap();

        bed.channels.commands.signal(CMD_MAIN_MENU);
        let block = timeout(Duration::from_secs(2), bed.channels.banners.receive())
            .await
            .unwrap();
        assert!(block.contains("Main Menu"));
        assert_eq!(bed.mode.get(), OperatingMode::MainMenu);
    }

    #[tokio::test]
    async fn unrecognized_code_is_a_no_op() {
        let bed = spawn_controller();
        bed.channels.commands.signal(9);
        timeout(Duration::from_secs(2), drained(&bed.channels.commands))
            .await
            .unwrap();

        assert_eq!(bed.mode.get(), OperatingMode::MainMenu);
        assert!(!bed.channels.counter_start.signaled());
        assert!(!bed.channels.adc_start.signaled());
    }

    #[tokio::test]
    async fn latest_of_two_back_to_back_commands_wins() {
        let channels: &'static Channels = Box::leak(Box::new(Channels::new()));
        let mode: &'static SharedMode = Box::leak(Box::new(SharedMode::new()));
        let health: &'static Health = Box::leak(Box::new(Health::new()));

        // Both commands land before the controller is even running, so the
        // second overwrites the first in the mailbox.
        channels.commands.signal(CMD_BINARY_COUNTER);
        channels.commands.signal(CMD_ADC_READ);

        let controller = MenuController::new(
            mode,
            &channels.commands,
            &channels.counter_start,
            &channels.adc_start,
            channels.banners.sender(),
            &health.menu,
        );
        tokio::spawn(controller.run());

        timeout(Duration::from_secs(2), channels.adc_start.wait())
            .await
            .unwrap();
        assert_eq!(mode.get(), OperatingMode::AdcSampling);
        assert!(!channels.counter_start.signaled());
    }
}
