//! IForce host-to-device protocol decoding.
//!
//! Every packet starts with an opcode byte that selects a fixed field
//! layout. The parser looks the opcode up in a single dispatch table
//! (minimum length, field decoder, command kind), enforces the minimum
//! length, and decodes fields into record types. All multi-byte fields are
//! little-endian except the effect delay, which is big-endian on the wire.
//!
//! Unknown opcodes decode to `Ok(None)`; truncated packets return
//! `IforceError::TooShort`. Neither is fatal: the decode layer skips them.
//! Byte offsets live in `layout` and safe reads in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use layout::NO_PARAMETER;
pub use parser::{lookup, parse_packet};
