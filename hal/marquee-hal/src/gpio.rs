//! Digital channel abstractions
//!
//! Provides the trait for the digital input channels (toggle switches or
//! push buttons) wired to the DAQ module.

/// Digital input channel
///
/// Implementations read the current level of one DAQ input. Reads take
/// `&mut self` because simulated channels may advance a script on every poll.
pub trait InputPin {
    /// Check if the channel reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the channel reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}
