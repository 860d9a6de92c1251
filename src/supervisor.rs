//! Application supervision and task liveness
//!
//! Every task bumps a heartbeat counter once per loop iteration and the
//! workers publish an Active flag around their sampling loop. The supervisor
//! task reads those counters on a fixed tick and logs a status report, which
//! is the watchdog-visible liveness signal for the system: a task whose beat
//! count stops advancing is wedged.

use embassy_time::{Duration, Timer};
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::config::{STATUS_REPORT_SECS, SUPERVISOR_TICK_SECS};
use crate::types::SharedMode;

/// Liveness record for one task.
pub struct Heartbeat {
    beats: AtomicU32,
    active: AtomicBool,
}

impl Heartbeat {
    pub const fn new() -> Self {
        Self {
            beats: AtomicU32::new(0),
            active: AtomicBool::new(false),
        }
    }

    /// Bump the beat counter. Called once per task loop iteration.
    pub fn beat(&self) {
        self.beats.fetch_add(1, Ordering::Relaxed);
    }

    pub fn beats(&self) -> u32 {
        self.beats.load(Ordering::Relaxed)
    }

    /// Workers flag the span between activation and return to idle.
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new()
    }
}

/// Heartbeats for the whole task set, created once at startup next to the
/// channel set.
pub struct Health {
    pub menu: Heartbeat,
    pub print: Heartbeat,
    pub counter: Heartbeat,
    pub adc: Heartbeat,
    pub sender: Heartbeat,
}

impl Health {
    pub const fn new() -> Self {
        Self {
            menu: Heartbeat::new(),
            print: Heartbeat::new(),
            counter: Heartbeat::new(),
            adc: Heartbeat::new(),
            sender: Heartbeat::new(),
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new()
    }
}

/// Uptime accounting and periodic status reports.
pub struct Supervisor {
    mode: &'static SharedMode,
    health: &'static Health,
    uptime_seconds: u32,
    last_report: u32,
}

impl Supervisor {
    pub fn new(mode: &'static SharedMode, health: &'static Health) -> Self {
        Self {
            mode,
            health,
            uptime_seconds: 0,
            last_report: 0,
        }
    }

    /// Log the startup banner.
    pub fn print_startup_banner(&self) {
        info!("========================================");
        info!("MenuLink starting");
        info!("Modes: main menu / binary counter / ADC sampling");
        info!("Links: serial uplink + console screen");
        info!("========================================");
    }

    /// Run the supervisor loop.
    pub async fn run(mut self) -> ! {
        info!("Supervisor started");

        loop {
            Timer::after(Duration::from_secs(SUPERVISOR_TICK_SECS)).await;
            self.uptime_seconds += SUPERVISOR_TICK_SECS as u32;

            if self.uptime_seconds - self.last_report >= STATUS_REPORT_SECS {
                self.print_status();
                self.last_report = self.uptime_seconds;
            }
        }
    }

    fn print_status(&self) {
        let minutes = self.uptime_seconds / 60;
        info!("Status: uptime {}m, mode {:?}", minutes, self.mode.get());
        info!(
            "Beats: menu {} print {} counter {} adc {} sender {}",
            self.health.menu.beats(),
            self.health.print.beats(),
            self.health.counter.beats(),
            self.health.adc.beats(),
            self.health.sender.beats(),
        );
        if self.health.counter.is_active() || self.health.adc.is_active() {
            info!(
                "Active worker: {}",
                if self.health.counter.is_active() {
                    "counter"
                } else {
                    "adc"
                }
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heartbeat_counts_beats() {
        let hb = Heartbeat::new();
        assert_eq!(hb.beats(), 0);
        hb.beat();
        hb.beat();
        assert_eq!(hb.beats(), 2);
    }

    #[test]
    fn activity_flag_round_trips() {
        let hb = Heartbeat::new();
        assert!(!hb.is_active());
        hb.set_active(true);
        assert!(hb.is_active());
        hb.set_active(false);
        assert!(!hb.is_active());
    }
}
