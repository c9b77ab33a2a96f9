//! # Output seam
//! The only way an LS-8 program talks to the outside world is the `PRN`
//! instruction. The machine emits through this trait instead of writing to
//! stdout itself, so front ends decide where values go and tests can capture
//! them.

/// Receiver for `PRN` output.
pub trait Console {
    /// Called once per `PRN` with the value of the named register.
    fn print(&mut self, value: u8);
}

/// Collects printed values. This is the capture console the tests use.
impl Console for Vec<u8> {
    fn print(&mut self, value: u8) {
        self.push(value)
    }
}

/// Discards output.
impl Console for () {
    fn print(&mut self, _value: u8) {}
}
