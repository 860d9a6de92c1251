//! MenuLink - menu-driven sampling core for small acquisition devices
//!
//! This library provides the task-coordination layer of a button-operated
//! sampling device: the operator picks an operating mode, a mode-specific
//! worker produces data on a fixed cadence, and the data is streamed as
//! decimal text over a point-to-point serial link while menu banners are
//! mirrored to a console screen.
//!
//! ## Architecture
//! - **Async**: Embassy primitives with async/await; one suspension point
//!   per task loop iteration
//! - **Signals**: overwrite mailboxes for control (latest command wins)
//! - **Channel**: bounded banner queue with producer backpressure
//! - **Hardware Abstraction**: ADC, serial link, console and sample clock
//!   consumed through traits; boards wire real peripherals, tests wire mocks
//!
//! Every component is constructed with endpoints to exactly the neighbors it
//! signals; there are no global task handles.

#![cfg_attr(not(test), no_std)]

// Logging macros - defmt when the feature is enabled, no-ops otherwise
#[macro_use]
mod fmt;

pub mod adc;
pub mod buttons;
pub mod channels;
pub mod config;
pub mod counter;
pub mod hardware;
pub mod menu;
pub mod print;
pub mod sender;
pub mod supervisor;
pub mod types;

pub use types::{OperatingMode, SharedMode};
