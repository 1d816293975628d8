//! Button click events

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{Channel, Receiver, Sender, TrySendError};

/// A single button click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Click;

pub type ClickChannel<const SIZE: usize> = Channel<Click, SIZE>;
pub type ClickSender<'a, const SIZE: usize> = Sender<'a, Click, SIZE>;
pub type ClickReceiver<'a, const SIZE: usize> = Receiver<'a, Click, SIZE>;

impl<const SIZE: usize> Sender<'_, Click, SIZE> {
    /// Register a click
    ///
    /// When the queue is full the click is dropped and handed back.
    pub fn click(&self) -> Result<(), TrySendError<Click>> {
        let result = self.try_send(Click);
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[Click] queue full, click dropped");
        }
        result
    }
}
