use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind};

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Where raw terminal events come from.
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<event::Event>;
}

pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<event::Event> {
        event::read()
    }
}

/// Forwards key presses and emits `Tick` on a fixed cadence, even while keys
/// are arriving.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, TerminalEvents)
    }

    pub fn with_source<S: EventSource + Send + 'static>(tick_rate: Duration, mut source: S) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                if source.poll(timeout).unwrap_or(false) {
                    if let Ok(event::Event::Key(key)) = source.read() {
                        if key.kind == KeyEventKind::Press && tx.send(Event::Key(key)).is_err() {
                            return;
                        }
                    }
                }
                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    /// Wait for the next event.
    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }

    /// An event that is already queued, without waiting.
    pub fn try_next(&self) -> Option<Event> {
        self.rx.try_recv().ok()
    }

    #[cfg(test)]
    pub fn from_receiver(rx: mpsc::Receiver<Event>) -> Self {
        Self { rx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    /// Never has input; just waits out each poll.
    struct Idle;

    impl EventSource for Idle {
        fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
            thread::sleep(timeout);
            Ok(false)
        }

        fn read(&mut self) -> io::Result<event::Event> {
            Err(io::Error::new(io::ErrorKind::WouldBlock, "no input"))
        }
    }

    /// A key is ready every millisecond, as when an arrow key is held down.
    struct HeldKey;

    impl EventSource for HeldKey {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            thread::sleep(Duration::from_millis(1));
            Ok(true)
        }

        fn read(&mut self) -> io::Result<event::Event> {
            Ok(event::Event::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)))
        }
    }

    fn count_for(handler: &EventHandler, window: Duration) -> (usize, usize) {
        let start = Instant::now();
        let (mut ticks, mut keys) = (0, 0);
        while start.elapsed() < window {
            match handler.rx.recv_timeout(Duration::from_millis(50)) {
                Ok(Event::Tick) => ticks += 1,
                Ok(Event::Key(_)) => keys += 1,
                Err(_) => {}
            }
        }
        (ticks, keys)
    }

    #[test]
    fn test_ticks_without_input() {
        let handler = EventHandler::with_source(Duration::from_millis(5), Idle);
        let (ticks, keys) = count_for(&handler, Duration::from_millis(200));
        assert_eq!(keys, 0);
        assert!(ticks >= 10, "only {ticks} ticks in 200ms");
    }

    #[test]
    fn test_ticks_keep_coming_while_keys_arrive() {
        let handler = EventHandler::with_source(Duration::from_millis(5), HeldKey);
        let (ticks, keys) = count_for(&handler, Duration::from_millis(200));
        assert!(keys > 0);
        assert!(ticks >= 10, "only {ticks} ticks in 200ms with a key held");
    }

    #[test]
    fn test_try_next_does_not_block() {
        let (tx, rx) = mpsc::channel();
        let handler = EventHandler::from_receiver(rx);
        assert!(handler.try_next().is_none());
        tx.send(Event::Tick).unwrap();
        assert!(matches!(handler.try_next(), Some(Event::Tick)));
        assert!(handler.try_next().is_none());
    }
}
