mod dump;

pub use dump::{DumpFileSource, SourceStats};

use thiserror::Error;

/// One host-to-device packet read from a capture dump.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    /// Relative capture time in seconds.
    pub timestamp: f64,
    pub data: Vec<u8>,
}

pub trait PacketSource {
    fn next_packet(&mut self) -> Result<Option<Packet>, SourceError>;
}

impl<S: PacketSource + ?Sized> PacketSource for &mut S {
    fn next_packet(&mut self) -> Result<Option<Packet>, SourceError> {
        (**self).next_packet()
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
