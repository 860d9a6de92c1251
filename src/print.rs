//! Print sink
//!
//! Sole consumer of the banner queue. Clears the console screen before
//! writing each block verbatim. Producers block while the queue is full;
//! that backpressure is the only flow control on the console path.

use crate::channels::BannerReceiver;
use crate::hardware::Console;
use crate::supervisor::Heartbeat;

/// ANSI: cursor home, then clear screen.
pub const CLEAR_SCREEN: &str = "\x1b[1;1H\x1b[2J";

pub struct PrintSink<C: Console> {
    console: C,
    banners: BannerReceiver,
    health: &'static Heartbeat,
}

impl<C: Console> PrintSink<C> {
    pub fn new(console: C, banners: BannerReceiver, health: &'static Heartbeat) -> Self {
        Self {
            console,
            banners,
            health,
        }
    }

    pub async fn run(mut self) -> ! {
        info!("Print sink started");

        loop {
            let block = self.banners.receive().await;
            self.health.beat();
            self.console.write(CLEAR_SCREEN);
            self.console.write(&block);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::Channels;
    use crate::supervisor::Health;
    use crate::types::banner;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::timeout;

    #[derive(Clone, Default)]
    struct RecordingConsole {
        output: Arc<Mutex<String>>,
    }

    impl Console for RecordingConsole {
        fn write(&mut self, text: &str) {
            self.output.lock().unwrap().push_str(text);
        }
    }

    #[tokio::test]
    async fn clears_screen_then_writes_block_verbatim() {
        let channels: &'static Channels = Box::leak(Box::new(Channels::new()));
        let health: &'static Health = Box::leak(Box::new(Health::new()));
        let console = RecordingConsole::default();
        let output = console.output.clone();

        let sink = PrintSink::new(console, channels.banners.receiver(), &health.print);
        tokio::spawn(sink.run());

        channels.banners.send(banner("|      Counter Menu      |\r\n")).await;

        timeout(Duration::from_secs(2), async {
            while !output.lock().unwrap().contains("Counter Menu") {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();

        let written = output.lock().unwrap();
        assert_eq!(
            written.as_str(),
            concat!("\x1b[1;1H\x1b[2J", "|      Counter Menu      |\r\n")
        );
    }
}
