use super::error::DumpLineError;
use super::layout;
use crate::source::Packet;

/// Split a dump line into its timestamp and payload columns.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use iforcedump_core::source::dump::reader::split_line;
///
/// let (ts, hex) = split_line("0.25\t4301\n").unwrap();
/// assert_eq!((ts, hex), ("0.25", "4301"));
/// ```
///
/// # Errors
/// Returns `DumpLineError::MissingSeparator` when the line has no tab.
pub fn split_line(line: &str) -> Result<(&str, &str), DumpLineError> {
    line.split_once(layout::FIELD_SEPARATOR)
        .map(|(ts, payload)| (ts.trim(), payload.trim()))
        .ok_or(DumpLineError::MissingSeparator)
}

/// Parse the relative timestamp column (seconds).
///
/// # Errors
/// Returns `DumpLineError::InvalidTimestamp` when the column is not a float.
pub fn parse_timestamp(field: &str) -> Result<f64, DumpLineError> {
    field
        .parse::<f64>()
        .map_err(|_| DumpLineError::InvalidTimestamp {
            value: field.to_string(),
        })
}

/// Decode the hex payload column into bytes.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use iforcedump_core::source::dump::reader::decode_payload;
///
/// assert_eq!(decode_payload("0310007f").unwrap(), vec![0x03, 0x10, 0x00, 0x7f]);
/// assert!(decode_payload("031").is_err());
/// ```
///
/// # Errors
/// Returns `DumpLineError::InvalidHex` for odd-length or non-hex input.
pub fn decode_payload(field: &str) -> Result<Vec<u8>, DumpLineError> {
    hex::decode(field).map_err(|err| DumpLineError::InvalidHex {
        message: err.to_string(),
    })
}

/// Parse one full dump line into a packet.
///
/// # Errors
/// Returns the first `DumpLineError` hit while splitting or decoding.
pub fn parse_line(line: &str) -> Result<Packet, DumpLineError> {
    let (ts, payload) = split_line(line)?;
    let timestamp = parse_timestamp(ts)?;
    let data = decode_payload(payload)?;
    Ok(Packet { timestamp, data })
}
