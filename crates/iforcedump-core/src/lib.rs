//! iforcedump core library for offline IForce capture decoding.
//!
//! This crate implements the pipeline used by the CLI: a packet source turns
//! a text dump into timestamped byte packets, the decoder classifies each
//! packet by opcode (layout/reader/parser) and keeps the parameter blocks
//! that later effect definitions refer to, and renderers project the
//! resulting record stream into text or SDL code. Parsing is byte-oriented
//! and side-effect free; all I/O is isolated in `source`.
//!
//! Invariants:
//! - Records are emitted in capture order, one per recognized packet.
//! - Truncated packets and unknown opcodes never produce a record and never
//!   touch decoder state.
//! - Parameter blocks are keyed by address, last write wins, and are
//!   resolved by the consumer at the moment an effect is rendered.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use iforcedump_core::decode_dump_file;
//!
//! let records = decode_dump_file(Path::new("capture.txt"))?;
//! println!("decoded {} records", records.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod decode;
mod protocols;
pub mod render;
mod source;

pub use decode::{
    DecodeError, DecodeStats, Decoder, ParameterStore, decode_dump_file, decode_source,
    render_dump_file, render_source,
};
pub use protocols::iforce::NO_PARAMETER;
pub use render::{OutputFormat, Renderer, SdlRenderer, TextRenderer};
pub use source::{DumpFileSource, Packet, PacketSource, SourceError, SourceStats};

/// One decoded packet together with its capture timestamp.
///
/// # Examples
/// ```
/// use iforcedump_core::{GainRecord, Record, RecordBody};
///
/// let record = Record {
///     timestamp: 1.5,
///     body: RecordBody::Gain(GainRecord { gain: 128 }),
/// };
/// assert!(matches!(record.body, RecordBody::Gain(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Relative capture time in seconds.
    pub timestamp: f64,
    /// Decoded fields, tagged by packet kind.
    pub body: RecordBody,
}

/// Decoded packet contents, one variant per recognized opcode family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordBody {
    /// Effect definition (`0x01`).
    Effect(EffectRecord),
    /// Parameter block write (`0x02`..=`0x05`).
    Parameter(ParameterRecord),
    /// Play/stop control (`0x41`).
    Control(ControlRecord),
    /// Device state (`0x42`).
    State(StateRecord),
    /// Global gain (`0x43`).
    Gain(GainRecord),
}

/// Effect definition assigned to a channel.
///
/// Parameter addresses are kept unresolved; `None` stands for the reserved
/// `0xFFFF` address.
///
/// # Examples
/// ```
/// use iforcedump_core::{Axes, EffectRecord, EffectType};
///
/// let effect = EffectRecord {
///     channel: 0,
///     effect_type: EffectType::Sine,
///     trigger: 0,
///     axes: Axes::Directional,
///     duration_ms: 1000,
///     direction: 64,
///     time_between_ms: 0,
///     address1: Some(0x0010),
///     address2: None,
///     delay_ms: 0,
/// };
/// assert_eq!(effect.parameter_addresses().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectRecord {
    pub channel: u8,
    pub effect_type: EffectType,
    /// Trigger button mask (low nibble).
    pub trigger: u8,
    pub axes: Axes,
    pub duration_ms: u16,
    /// Raw direction byte.
    pub direction: u8,
    pub time_between_ms: u16,
    /// Primary parameter block (magnitude, period or interactive).
    pub address1: Option<u16>,
    /// Secondary parameter block (attack/fade for non-condition effects).
    pub address2: Option<u16>,
    pub delay_ms: u16,
}

impl EffectRecord {
    /// Iterate over the parameter addresses this effect refers to.
    pub fn parameter_addresses(&self) -> impl Iterator<Item = u16> + '_ {
        self.address1.into_iter().chain(self.address2)
    }
}

/// Effect waveform type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    Constant,
    Square,
    Triangle,
    Sine,
    SawtoothUp,
    SawtoothDown,
    Spring,
    FrictionInertia,
    Unknown(u8),
}

impl EffectType {
    /// Map a raw effect-type byte.
    ///
    /// # Examples
    /// ```
    /// use iforcedump_core::EffectType;
    ///
    /// assert_eq!(EffectType::from_raw(0x22), EffectType::Sine);
    /// assert_eq!(EffectType::from_raw(0x99), EffectType::Unknown(0x99));
    /// ```
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x00 => Self::Constant,
            0x20 => Self::Square,
            0x21 => Self::Triangle,
            0x22 => Self::Sine,
            0x23 => Self::SawtoothUp,
            0x24 => Self::SawtoothDown,
            0x40 => Self::Spring,
            0x41 => Self::FrictionInertia,
            other => Self::Unknown(other),
        }
    }

    /// Raw byte as seen on the wire.
    pub fn raw(self) -> u8 {
        match self {
            Self::Constant => 0x00,
            Self::Square => 0x20,
            Self::Triangle => 0x21,
            Self::Sine => 0x22,
            Self::SawtoothUp => 0x23,
            Self::SawtoothDown => 0x24,
            Self::Spring => 0x40,
            Self::FrictionInertia => 0x41,
            Self::Unknown(raw) => raw,
        }
    }

    /// Effect class, or `None` for unknown types.
    pub fn class(self) -> Option<EffectClass> {
        match self {
            Self::Constant => Some(EffectClass::Constant),
            Self::Square
            | Self::Triangle
            | Self::Sine
            | Self::SawtoothUp
            | Self::SawtoothDown => Some(EffectClass::Periodic),
            Self::Spring | Self::FrictionInertia => Some(EffectClass::Condition),
            Self::Unknown(_) => None,
        }
    }
}

/// Effect class; decides which parameter block kinds are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectClass {
    Constant,
    Periodic,
    /// Condition effects carry no attack/fade envelope.
    Condition,
}

impl EffectClass {
    pub fn uses_envelope(self) -> bool {
        !matches!(self, Self::Condition)
    }
}

/// Axis selection of an effect (high nibble of byte 3, shifted right by 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axes {
    Directional,
    X,
    Y,
    XAndY,
    Unknown(u8),
}

impl Axes {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x02 => Self::Directional,
            0x04 => Self::X,
            0x08 => Self::Y,
            0x0C => Self::XAndY,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            Self::Directional => 0x02,
            Self::X => 0x04,
            Self::Y => 0x08,
            Self::XAndY => 0x0C,
            Self::Unknown(raw) => raw,
        }
    }
}

/// Parameter block write, keyed by address.
///
/// # Examples
/// ```
/// use iforcedump_core::{Magnitude, ParameterBlock, ParameterRecord};
///
/// let param = ParameterRecord {
///     address: 0x0010,
///     block: ParameterBlock::Magnitude(Magnitude { level: 127 }),
/// };
/// assert_eq!(param.block.name(), "magnitude");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub address: u16,
    pub block: ParameterBlock,
}

/// Decoded parameter block contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterBlock {
    AttackFade(AttackFade),
    Magnitude(Magnitude),
    Period(Period),
    Interactive(Interactive),
}

impl ParameterBlock {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AttackFade(_) => "attack_fade",
            Self::Magnitude(_) => "magnitude",
            Self::Period(_) => "period",
            Self::Interactive(_) => "interactive",
        }
    }
}

/// Envelope parameters (`0x02`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackFade {
    pub attack_duration_ms: u16,
    /// Level at start of attack, signed 8-bit percentage-like value.
    pub attack_level: i8,
    pub fade_duration_ms: u16,
    /// Level after fade, signed 8-bit percentage-like value.
    pub fade_level: i8,
}

/// Constant force magnitude (`0x03`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magnitude {
    pub level: i8,
}

/// Periodic waveform parameters (`0x04`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub magnitude: i8,
    pub offset: i8,
    /// Phase in 1/64 of 90 degrees.
    pub phase: u8,
    pub period_ms: u16,
}

/// Condition (spring/friction) parameters (`0x05`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactive {
    pub positive_coeff: i8,
    pub negative_coeff: i8,
    /// Center offset, nominally within +-500.
    pub center_offset: i16,
    pub deadband: u16,
    pub positive_saturation: u8,
    pub negative_saturation: u8,
}

/// Play/stop command for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRecord {
    pub channel: u8,
    pub mode: ControlMode,
    /// Only meaningful for [`ControlMode::PlayNTimes`].
    pub iterations: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    Stop,
    PlayOnce,
    PlayNTimes,
    Unknown(u8),
}

impl ControlMode {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x00 => Self::Stop,
            0x01 => Self::PlayOnce,
            0x41 => Self::PlayNTimes,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            Self::Stop => 0x00,
            Self::PlayOnce => 0x01,
            Self::PlayNTimes => 0x41,
            Self::Unknown(raw) => raw,
        }
    }
}

/// Device state flags. Flags are independent; any combination may be set.
///
/// # Examples
/// ```
/// use iforcedump_core::StateRecord;
///
/// let state = StateRecord {
///     stop_all: true,
///     enable: true,
///     pause: false,
/// };
/// assert!(state.stop_all && state.enable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateRecord {
    pub stop_all: bool,
    pub enable: bool,
    pub pause: bool,
}

/// Global gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainRecord {
    pub gain: u8,
}
