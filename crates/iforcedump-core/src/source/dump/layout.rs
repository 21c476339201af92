/// Separator between the timestamp and payload columns.
pub const FIELD_SEPARATOR: char = '\t';

pub const LINE_TERMINATOR: u8 = b'\n';

pub const READER_BUFFER_SIZE: usize = 64 * 1024;
