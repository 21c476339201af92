use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use crate::source::{Packet, PacketSource, SourceError};

use super::layout;
use super::reader::parse_line;

/// Line counters collected while reading a dump.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceStats {
    pub lines_read: u64,
    pub packets: u64,
    pub lines_skipped: u64,
}

/// `PacketSource` over a text dump, reading one line at a time.
pub struct DumpFileSource<R = BufReader<File>> {
    reader: R,
    line: Vec<u8>,
    stats: SourceStats,
}

impl DumpFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Ok(Self::from_reader(BufReader::with_capacity(
            layout::READER_BUFFER_SIZE,
            file,
        )))
    }
}

impl<R: BufRead> DumpFileSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            stats: SourceStats::default(),
        }
    }

    pub fn stats(&self) -> SourceStats {
        self.stats
    }
}

impl<R: BufRead> PacketSource for DumpFileSource<R> {
    fn next_packet(&mut self) -> Result<Option<Packet>, SourceError> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_until(layout::LINE_TERMINATOR, &mut self.line)?;
            if read == 0 {
                return Ok(None);
            }
            self.stats.lines_read += 1;

            // Dumps are UTF-8 text, but stray bytes in a header must not end the read.
            let text = String::from_utf8_lossy(&self.line);
            match parse_line(&text) {
                Ok(packet) => {
                    self.stats.packets += 1;
                    return Ok(Some(packet));
                }
                Err(err) => {
                    self.stats.lines_skipped += 1;
                    trace!(line = self.stats.lines_read, %err, "skipping dump line");
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for DumpFileSource<R> {
    type Item = Result<Packet, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_packet().transpose()
    }
}
