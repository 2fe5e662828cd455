// Recording peripherals for tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use glam::{IVec2, UVec2};

use super::audio::{Buzzer, Tone};
use super::clock::Clock;
use super::display::Display;
use super::indicator::{Channel, Indicator};
use super::input::{KeyPosition, KeyScanner};
use super::Peripherals;

/// One observable side effect on a peripheral
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    Clear,
    Text { pos: IVec2, text: String },
    Rect { origin: IVec2, size: UVec2 },
    Present,
    Tone(Tone),
    Brightness(Channel, u8),
    Blink { channel: Channel, times: u32, interval: Duration },
    Sleep(Duration),
}

/// Shared event log plus a script of key presses
///
/// Clones share state, so one recorder can back every peripheral and still
/// be inspected by the test afterwards.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<DeviceEvent>>>,
    keys: Rc<RefCell<VecDeque<Option<KeyPosition>>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxed peripherals all writing to this recorder
    pub fn peripherals(&self) -> Peripherals {
        Peripherals {
            keypad: Box::new(self.clone()),
            display: Box::new(self.clone()),
            buzzer: Box::new(self.clone()),
            indicator: Box::new(self.clone()),
            clock: Box::new(self.clone()),
        }
    }

    /// Queue a press of the key with this legend for a future scan
    pub fn press(&self, legend: char) {
        let position = KeyPosition::of_legend(legend).expect("key not on the keypad");
        self.keys.borrow_mut().push_back(Some(position));
    }

    /// Queue a scan that reports nothing
    pub fn idle(&self) {
        self.keys.borrow_mut().push_back(None);
    }

    pub fn events(&self) -> Vec<DeviceEvent> {
        self.events.borrow().clone()
    }

    pub fn take_events(&self) -> Vec<DeviceEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Every tone played, in order
    pub fn tones(&self) -> Vec<Tone> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                DeviceEvent::Tone(tone) => Some(*tone),
                _ => None,
            })
            .collect()
    }

    /// Every string drawn, in order
    pub fn texts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                DeviceEvent::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Total time spent in clock sleeps
    pub fn slept(&self) -> Duration {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                DeviceEvent::Sleep(d) => Some(*d),
                _ => None,
            })
            .sum()
    }

    fn record(&self, event: DeviceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl KeyScanner for Recorder {
    fn scan(&mut self) -> Option<KeyPosition> {
        self.keys.borrow_mut().pop_front().flatten()
    }
}

impl Display for Recorder {
    fn clear(&mut self) {
        self.record(DeviceEvent::Clear);
    }

    fn draw_text(&mut self, pos: IVec2, text: &str) {
        self.record(DeviceEvent::Text {
            pos,
            text: text.to_string(),
        });
    }

    fn draw_rect(&mut self, origin: IVec2, size: UVec2) {
        self.record(DeviceEvent::Rect { origin, size });
    }

    fn present(&mut self) {
        self.record(DeviceEvent::Present);
    }
}

impl Buzzer for Recorder {
    fn play_tone(&mut self, tone: Tone) {
        self.record(DeviceEvent::Tone(tone));
    }
}

impl Indicator for Recorder {
    fn set_brightness(&mut self, channel: Channel, level: u8) {
        self.record(DeviceEvent::Brightness(channel, level));
    }

    fn blink(&mut self, channel: Channel, times: u32, interval: Duration) {
        self.record(DeviceEvent::Blink {
            channel,
            times,
            interval,
        });
    }
}

impl Clock for Recorder {
    fn sleep(&mut self, duration: Duration) {
        self.record(DeviceEvent::Sleep(duration));
    }
}
