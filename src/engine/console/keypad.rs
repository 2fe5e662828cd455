// Keypad fed from a byte stream (stdin)

use std::io::Read;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{debug, info};

use crate::engine::input::{KeyPosition, KeyScanner};
use crate::engine::DeviceError;

/// Presses queued between the reader thread and the game loop
const KEY_QUEUE_DEPTH: usize = 16;

/// Keypad reading legend characters from a stream
///
/// A reader thread is the only producer; the game loop drains one press per
/// `scan`.
pub struct ConsoleKeypad {
    presses: Receiver<KeyPosition>,
    _reader: JoinHandle<()>,
}

impl ConsoleKeypad {
    /// Start reading key presses from `source`
    pub fn spawn<R: Read + Send + 'static>(source: R) -> Result<Self, DeviceError> {
        let (tx, rx) = mpsc::sync_channel(KEY_QUEUE_DEPTH);

        let reader = thread::Builder::new()
            .name("keypad".into())
            .spawn(move || {
                for byte in source.bytes() {
                    let Ok(byte) = byte else { break };
                    let key = char::from(byte).to_ascii_uppercase();
                    let Some(position) = KeyPosition::of_legend(key) else {
                        continue;
                    };
                    if tx.send(position).is_err() {
                        break;
                    }
                }
                info!("Keypad input closed");
            })
            .map_err(DeviceError::Keypad)?;

        Ok(Self {
            presses: rx,
            _reader: reader,
        })
    }
}

impl KeyScanner for ConsoleKeypad {
    fn scan(&mut self) -> Option<KeyPosition> {
        match self.presses.try_recv() {
            Ok(position) => {
                debug!("Key {}", position);
                Some(position)
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
