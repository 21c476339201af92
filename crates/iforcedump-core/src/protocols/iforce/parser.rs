use super::error::IforceError;
use super::layout;
use super::reader::IforceReader;
use crate::{
    AttackFade, Axes, ControlMode, ControlRecord, EffectRecord, EffectType, GainRecord,
    Interactive, Magnitude, ParameterBlock, ParameterRecord, Period, RecordBody, StateRecord,
};

/// Record kind produced by an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Effect,
    AttackFade,
    Magnitude,
    Period,
    Interactive,
    Control,
    State,
    Gain,
}

impl CommandKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Effect => "effect",
            Self::AttackFade => "attack_fade",
            Self::Magnitude => "magnitude",
            Self::Period => "period",
            Self::Interactive => "interactive",
            Self::Control => "control",
            Self::State => "state",
            Self::Gain => "gain",
        }
    }
}

type FieldDecoder = fn(&IforceReader<'_>) -> Result<RecordBody, IforceError>;

/// Dispatch entry: everything needed to decode one opcode.
pub struct OpcodeLayout {
    pub opcode: u8,
    pub kind: CommandKind,
    pub min_len: usize,
    decode: FieldDecoder,
}

static OPCODES: &[OpcodeLayout] = &[
    OpcodeLayout {
        opcode: layout::OP_EFFECT,
        kind: CommandKind::Effect,
        min_len: layout::EFFECT_MIN_LEN,
        decode: decode_effect,
    },
    OpcodeLayout {
        opcode: layout::OP_ATTACK_FADE,
        kind: CommandKind::AttackFade,
        min_len: layout::ATTACK_FADE_MIN_LEN,
        decode: decode_attack_fade,
    },
    OpcodeLayout {
        opcode: layout::OP_MAGNITUDE,
        kind: CommandKind::Magnitude,
        min_len: layout::MAGNITUDE_MIN_LEN,
        decode: decode_magnitude,
    },
    OpcodeLayout {
        opcode: layout::OP_PERIOD,
        kind: CommandKind::Period,
        min_len: layout::PERIOD_MIN_LEN,
        decode: decode_period,
    },
    OpcodeLayout {
        opcode: layout::OP_INTERACTIVE,
        kind: CommandKind::Interactive,
        min_len: layout::INTERACTIVE_MIN_LEN,
        decode: decode_interactive,
    },
    OpcodeLayout {
        opcode: layout::OP_CONTROL,
        kind: CommandKind::Control,
        min_len: layout::CONTROL_MIN_LEN,
        decode: decode_control,
    },
    OpcodeLayout {
        opcode: layout::OP_STATE,
        kind: CommandKind::State,
        min_len: layout::STATE_MIN_LEN,
        decode: decode_state,
    },
    OpcodeLayout {
        opcode: layout::OP_GAIN,
        kind: CommandKind::Gain,
        min_len: layout::GAIN_MIN_LEN,
        decode: decode_gain,
    },
];

/// Find the layout for an opcode, if it is one we decode.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeLayout> {
    OPCODES.iter().find(|entry| entry.opcode == opcode)
}

/// Decode one packet.
///
/// Returns `Ok(None)` for unrecognized opcodes and `IforceError::TooShort`
/// for packets shorter than their opcode's minimum length (including empty
/// packets).
pub fn parse_packet(payload: &[u8]) -> Result<Option<RecordBody>, IforceError> {
    let reader = IforceReader::new(payload);
    let opcode = reader.read_u8(layout::OPCODE_OFFSET)?;
    let Some(entry) = lookup(opcode) else {
        return Ok(None);
    };
    reader.require_len(entry.min_len)?;
    (entry.decode)(&reader).map(Some)
}

fn decode_effect(reader: &IforceReader<'_>) -> Result<RecordBody, IforceError> {
    let trigger_axes = reader.read_u8(layout::EFFECT_TRIGGER_AXES_OFFSET)?;
    let axes = (trigger_axes & layout::EFFECT_AXES_MASK) >> layout::EFFECT_AXES_SHIFT;
    Ok(RecordBody::Effect(EffectRecord {
        channel: reader.read_u8(layout::EFFECT_CHANNEL_OFFSET)?,
        effect_type: EffectType::from_raw(reader.read_u8(layout::EFFECT_TYPE_OFFSET)?),
        trigger: trigger_axes & layout::EFFECT_TRIGGER_MASK,
        axes: Axes::from_raw(axes),
        duration_ms: reader.read_u16_le(layout::EFFECT_DURATION_RANGE)?,
        direction: reader.read_u8(layout::EFFECT_DIRECTION_OFFSET)?,
        time_between_ms: reader.read_u16_le(layout::EFFECT_INTERVAL_RANGE)?,
        address1: reader.read_address(layout::EFFECT_ADDRESS1_RANGE)?,
        address2: reader.read_address(layout::EFFECT_ADDRESS2_RANGE)?,
        delay_ms: reader.read_u16_be(layout::EFFECT_DELAY_RANGE)?,
    }))
}

fn parameter(reader: &IforceReader<'_>, block: ParameterBlock) -> Result<RecordBody, IforceError> {
    Ok(RecordBody::Parameter(ParameterRecord {
        address: reader.read_u16_le(layout::PARAM_ADDRESS_RANGE)?,
        block,
    }))
}

fn decode_attack_fade(reader: &IforceReader<'_>) -> Result<RecordBody, IforceError> {
    let block = ParameterBlock::AttackFade(AttackFade {
        attack_duration_ms: reader.read_u16_le(layout::ATTACK_DURATION_RANGE)?,
        attack_level: reader.read_i8(layout::ATTACK_LEVEL_OFFSET)?,
        fade_duration_ms: reader.read_u16_le(layout::FADE_DURATION_RANGE)?,
        fade_level: reader.read_i8(layout::FADE_LEVEL_OFFSET)?,
    });
    parameter(reader, block)
}

fn decode_magnitude(reader: &IforceReader<'_>) -> Result<RecordBody, IforceError> {
    let block = ParameterBlock::Magnitude(Magnitude {
        level: reader.read_i8(layout::MAGNITUDE_LEVEL_OFFSET)?,
    });
    parameter(reader, block)
}

fn decode_period(reader: &IforceReader<'_>) -> Result<RecordBody, IforceError> {
    let block = ParameterBlock::Period(Period {
        magnitude: reader.read_i8(layout::PERIOD_MAGNITUDE_OFFSET)?,
        offset: reader.read_i8(layout::PERIOD_BIAS_OFFSET)?,
        phase: reader.read_u8(layout::PERIOD_PHASE_OFFSET)?,
        period_ms: reader.read_u16_le(layout::PERIOD_LENGTH_RANGE)?,
    });
    parameter(reader, block)
}

fn decode_interactive(reader: &IforceReader<'_>) -> Result<RecordBody, IforceError> {
    let block = ParameterBlock::Interactive(Interactive {
        positive_coeff: reader.read_i8(layout::INTERACTIVE_POS_COEFF_OFFSET)?,
        negative_coeff: reader.read_i8(layout::INTERACTIVE_NEG_COEFF_OFFSET)?,
        center_offset: reader.read_i16_le(layout::INTERACTIVE_CENTER_RANGE)?,
        deadband: reader.read_u16_le(layout::INTERACTIVE_DEADBAND_RANGE)?,
        positive_saturation: reader.read_u8(layout::INTERACTIVE_POS_SAT_OFFSET)?,
        negative_saturation: reader.read_u8(layout::INTERACTIVE_NEG_SAT_OFFSET)?,
    });
    parameter(reader, block)
}

fn decode_control(reader: &IforceReader<'_>) -> Result<RecordBody, IforceError> {
    Ok(RecordBody::Control(ControlRecord {
        channel: reader.read_u8(layout::CONTROL_CHANNEL_OFFSET)?,
        mode: ControlMode::from_raw(reader.read_u8(layout::CONTROL_MODE_OFFSET)?),
        iterations: reader.read_u8(layout::CONTROL_ITERATIONS_OFFSET)?,
    }))
}

fn decode_state(reader: &IforceReader<'_>) -> Result<RecordBody, IforceError> {
    let flags = reader.read_u8(layout::STATE_FLAGS_OFFSET)?;
    Ok(RecordBody::State(StateRecord {
        stop_all: flags & layout::STATE_STOP_ALL != 0,
        enable: flags & layout::STATE_ENABLE != 0,
        pause: flags & layout::STATE_PAUSE != 0,
    }))
}

fn decode_gain(reader: &IforceReader<'_>) -> Result<RecordBody, IforceError> {
    Ok(RecordBody::Gain(GainRecord {
        gain: reader.read_u8(layout::GAIN_OFFSET)?,
    }))
}
