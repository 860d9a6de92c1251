//! Host simulator for the MenuLink task layer
//!
//! Wires the whole system to simulated peripherals: stdin digits stand in
//! for the button lines, stdout is the console screen, serial transmissions
//! are echoed as text, and the ADC produces a synthetic ramp.
//!
//! Run with: `cargo run --features std --bin sim`, then type 0, 1 or 2
//! followed by Enter.

use std::io::{BufRead, Write as _};

use embassy_executor::Executor;
use static_cell::StaticCell;

use menulink::adc::AdcWorker;
use menulink::buttons::{ButtonLine, Buttons};
use menulink::channels::Channels;
use menulink::config::Cadence;
use menulink::counter::CounterWorker;
use menulink::hardware::{AdcInput, Console, SampleClock, SerialLink};
use menulink::menu::MenuController;
use menulink::print::PrintSink;
use menulink::sender::DataSender;
use menulink::supervisor::{Health, Supervisor};
use menulink::types::SharedMode;

static CHANNELS: Channels = Channels::new();
static MODE: SharedMode = SharedMode::new();
static HEALTH: Health = Health::new();
static BUTTONS: Buttons = Buttons::new(&CHANNELS.commands);
static EXECUTOR: StaticCell<Executor> = StaticCell::new();

// ===================================================================
// Simulated peripherals
// ===================================================================

struct StdoutConsole;

impl Console for StdoutConsole {
    fn write(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

struct EchoSerial;

impl SerialLink for EchoSerial {
    fn write(&mut self, bytes: &[u8]) {
        let text = core::str::from_utf8(bytes).unwrap_or("<non-utf8>");
        println!("[uplink] tx {} byte(s): {}", bytes.len(), text);
    }
}

/// Ramp generator; pretends the conversion is ready on every other poll.
struct SimAdc {
    level: u16,
    ready: bool,
}

impl AdcInput for SimAdc {
    fn result_ready(&mut self) -> bool {
        self.ready = !self.ready;
        self.ready
    }

    fn read(&mut self) -> u16 {
        self.level = self.level.wrapping_add(1237);
        self.level
    }
}

struct SimClock;

impl SampleClock for SimClock {
    fn start(&mut self) {
        println!("[clock] free-running sample timer started");
    }
}

// ===================================================================
// Task wrappers
// ===================================================================

#[embassy_executor::task]
async fn menu_task(controller: MenuController) {
    controller.run().await
}

#[embassy_executor::task]
async fn print_task(sink: PrintSink<StdoutConsole>) {
    sink.run().await
}

#[embassy_executor::task]
async fn counter_task(worker: CounterWorker) {
    worker.run().await
}

#[embassy_executor::task]
async fn adc_task(worker: AdcWorker<SimAdc, SimClock>) {
    worker.run().await
}

#[embassy_executor::task]
async fn sender_task(sender: DataSender<EchoSerial>) {
    sender.run().await
}

#[embassy_executor::task]
async fn supervisor_task(supervisor: Supervisor) {
    supervisor.run().await
}

fn main() {
    println!("MenuLink simulator - keys: 0 counter, 1 adc, 2 main menu");

    // Stdin stands in for the interrupt controller: each digit line fires
    // the matching button handler.
    std::thread::spawn(|| {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match line.trim() {
                "0" => BUTTONS.on_press(ButtonLine::BinaryCounter),
                "1" => BUTTONS.on_press(ButtonLine::AdcRead),
                "2" => BUTTONS.on_press(ButtonLine::MainMenu),
                "" => {}
                other => println!("[sim] unknown key: {other}"),
            }
        }
    });

    let supervisor = Supervisor::new(&MODE, &HEALTH);
    supervisor.print_startup_banner();

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner
            .spawn(menu_task(MenuController::new(
                &MODE,
                &CHANNELS.commands,
                &CHANNELS.counter_start,
                &CHANNELS.adc_start,
                CHANNELS.banners.sender(),
                &HEALTH.menu,
            )))
            .unwrap();
        spawner
            .spawn(print_task(PrintSink::new(
                StdoutConsole,
                CHANNELS.banners.receiver(),
                &HEALTH.print,
            )))
            .unwrap();
        spawner
            .spawn(counter_task(CounterWorker::new(
                &MODE,
                &CHANNELS.counter_start,
                CHANNELS.banners.sender(),
                &CHANNELS.samples,
                &HEALTH.counter,
                Cadence::default(),
            )))
            .unwrap();
        spawner
            .spawn(adc_task(AdcWorker::new(
                SimAdc {
                    level: 0,
                    ready: false,
                },
                SimClock,
                &MODE,
                &CHANNELS.adc_start,
                CHANNELS.banners.sender(),
                &CHANNELS.samples,
                &HEALTH.adc,
                Cadence::default(),
            )))
            .unwrap();
        spawner
            .spawn(sender_task(DataSender::new(
                EchoSerial,
                &CHANNELS.samples,
                &HEALTH.sender,
            )))
            .unwrap();
        spawner.spawn(supervisor_task(supervisor)).unwrap();
    })
}
