use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::protocols::iforce::{lookup, parse_packet};
use crate::render::Renderer;
use crate::source::{DumpFileSource, Packet, PacketSource, SourceError, SourceStats};
use crate::{Record, RecordBody};

mod params;

pub use params::ParameterStore;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Per-run packet counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStats {
    pub packets: u64,
    pub records: u64,
    pub unknown_opcodes: u64,
    pub truncated: u64,
}

/// Stateful IForce decoder for one capture.
///
/// Owns the address -> parameter block map; create a fresh decoder per run.
#[derive(Debug, Default)]
pub struct Decoder {
    parameters: ParameterStore,
    stats: DecodeStats,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one packet, updating parameter state. Unknown and truncated
    /// packets yield `None` and leave the state untouched.
    pub fn decode_packet(&mut self, packet: &Packet) -> Option<Record> {
        self.stats.packets += 1;
        match parse_packet(&packet.data) {
            Ok(Some(body)) => {
                if let RecordBody::Parameter(param) = &body {
                    self.parameters.insert(param.address, param.block.clone());
                }
                self.stats.records += 1;
                Some(Record {
                    timestamp: packet.timestamp,
                    body,
                })
            }
            Ok(None) => {
                self.stats.unknown_opcodes += 1;
                debug!(
                    timestamp = packet.timestamp,
                    opcode = packet.data.first().copied(),
                    "skipping packet with unrecognized opcode"
                );
                None
            }
            Err(err) => {
                self.stats.truncated += 1;
                let kind = packet
                    .data
                    .first()
                    .and_then(|opcode| lookup(*opcode))
                    .map(|entry| entry.kind.name());
                debug!(
                    timestamp = packet.timestamp,
                    kind,
                    %err,
                    "skipping truncated packet"
                );
                None
            }
        }
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    pub fn stats(&self) -> DecodeStats {
        self.stats
    }
}

pub fn decode_dump_file(path: &Path) -> Result<Vec<Record>, DecodeError> {
    let mut source = DumpFileSource::open(path)?;
    let records = decode_source(&mut source)?;
    log_source_summary(&source.stats());
    Ok(records)
}

pub fn decode_source<S: PacketSource>(mut source: S) -> Result<Vec<Record>, DecodeError> {
    let mut decoder = Decoder::new();
    let mut records = Vec::new();
    while let Some(packet) = source.next_packet()? {
        if let Some(record) = decoder.decode_packet(&packet) {
            records.push(record);
        }
    }
    log_summary(&decoder.stats());
    Ok(records)
}

pub fn render_dump_file<R, W>(
    path: &Path,
    renderer: &R,
    out: &mut W,
) -> Result<DecodeStats, DecodeError>
where
    R: Renderer + ?Sized,
    W: Write,
{
    let mut source = DumpFileSource::open(path)?;
    let stats = render_source(&mut source, renderer, out)?;
    log_source_summary(&source.stats());
    Ok(stats)
}

/// Stream packets through the decoder and renderer.
///
/// Effect references are resolved against the parameter blocks seen up to
/// that packet, the same state a live device would have.
pub fn render_source<S, R, W>(
    mut source: S,
    renderer: &R,
    out: &mut W,
) -> Result<DecodeStats, DecodeError>
where
    S: PacketSource,
    R: Renderer + ?Sized,
    W: Write,
{
    let mut decoder = Decoder::new();
    while let Some(packet) = source.next_packet()? {
        let Some(record) = decoder.decode_packet(&packet) else {
            continue;
        };
        for line in renderer.render(&record, decoder.parameters()) {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()?;
    let stats = decoder.stats();
    log_summary(&stats);
    Ok(stats)
}

fn log_source_summary(stats: &SourceStats) {
    info!(
        lines_read = stats.lines_read,
        lines_skipped = stats.lines_skipped,
        "dump read"
    );
}

fn log_summary(stats: &DecodeStats) {
    info!(
        packets = stats.packets,
        records = stats.records,
        unknown_opcodes = stats.unknown_opcodes,
        truncated = stats.truncated,
        "decode finished"
    );
}

#[cfg(test)]
mod tests {
    use super::{Decoder, decode_source, render_source};
    use crate::render::{SdlRenderer, TextRenderer};
    use crate::source::{DumpFileSource, Packet};
    use crate::{Magnitude, ParameterBlock, RecordBody};
    use std::io::Cursor;

    fn packet(timestamp: f64, data: &[u8]) -> Packet {
        Packet {
            timestamp,
            data: data.to_vec(),
        }
    }

    #[test]
    fn parameter_packets_update_state_and_emit_records() {
        let mut decoder = Decoder::new();
        let record = decoder
            .decode_packet(&packet(0.5, &[0x03, 0x10, 0x00, 0x7F]))
            .unwrap();
        assert!(matches!(record.body, RecordBody::Parameter(_)));
        assert_eq!(
            decoder.parameters().get(0x10),
            Some(&ParameterBlock::Magnitude(Magnitude { level: 127 }))
        );
    }

    #[test]
    fn truncated_parameter_does_not_touch_state() {
        let mut decoder = Decoder::new();
        decoder.decode_packet(&packet(0.1, &[0x03, 0x10, 0x00, 0x20]));
        assert!(
            decoder
                .decode_packet(&packet(0.2, &[0x03, 0x10, 0x00]))
                .is_none()
        );
        assert_eq!(
            decoder.parameters().get(0x10),
            Some(&ParameterBlock::Magnitude(Magnitude { level: 32 }))
        );
        let stats = decoder.stats();
        assert_eq!(stats.packets, 2);
        assert_eq!(stats.records, 1);
        assert_eq!(stats.truncated, 1);
    }

    #[test]
    fn unknown_and_empty_packets_are_counted_and_skipped() {
        let mut decoder = Decoder::new();
        assert!(decoder.decode_packet(&packet(0.0, &[0x7E, 0x01])).is_none());
        assert!(decoder.decode_packet(&packet(0.0, &[])).is_none());
        let stats = decoder.stats();
        assert_eq!(stats.unknown_opcodes, 1);
        assert_eq!(stats.truncated, 1);
        assert!(decoder.parameters().is_empty());
    }

    #[test]
    fn decode_source_keeps_capture_order() {
        let dump = "0.1\t4301\n0.2\t0310007f\n0.3\t420102\n";
        let records = decode_source(DumpFileSource::from_reader(Cursor::new(dump))).unwrap();
        let kinds: Vec<_> = records
            .iter()
            .map(|record| match record.body {
                RecordBody::Gain(_) => "gain",
                RecordBody::Parameter(_) => "parameter",
                RecordBody::State(_) => "state",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["gain", "parameter", "state"]);
    }

    #[test]
    fn render_source_writes_lines_and_returns_stats() {
        let dump = "0.5\t4380\n0.6\t99\n";
        let mut out = Vec::new();
        let stats = render_source(
            DumpFileSource::from_reader(Cursor::new(dump)),
            &TextRenderer::new(),
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0.50 Set gain\n\tGain: 128 (100.0 %)\n");
        assert_eq!(stats.records, 1);
        assert_eq!(stats.unknown_opcodes, 1);
    }

    #[test]
    fn effects_resolve_against_parameters_written_so_far() {
        // constant effect on channel 0 referencing magnitude block 0x0010
        let effect = "0100001064000000001000ffff0000";
        let dump = format!("0.1\t{effect}\n0.2\t0310007f\n0.3\t{effect}\n0.4\t03100081\n");
        let mut out = Vec::new();
        render_source(
            DumpFileSource::from_reader(Cursor::new(dump)),
            &SdlRenderer::new(),
            &mut out,
        )
        .unwrap();
        let sdl = String::from_utf8(out).unwrap();

        let (first, second) = sdl
            .split_once("/* Time: 0.30 */")
            .expect("second effect present");
        assert!(first.contains("/* Time: 0.10 */"));
        assert!(!first.contains(".level"));
        assert!(second.contains("effect0.constant.level = 32767;"));
        assert!(!sdl.contains("-32767"));
    }

    #[test]
    fn borrowed_source_keeps_its_line_counters() {
        let mut source = DumpFileSource::from_reader(Cursor::new("header\n0.1\t4380\n"));
        let records = decode_source(&mut source).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(source.stats().lines_read, 2);
        assert_eq!(source.stats().lines_skipped, 1);
    }
}
