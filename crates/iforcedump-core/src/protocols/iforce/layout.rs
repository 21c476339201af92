use std::ops::Range;

pub const OPCODE_OFFSET: usize = 0;

pub const OP_EFFECT: u8 = 0x01;
pub const OP_ATTACK_FADE: u8 = 0x02;
pub const OP_MAGNITUDE: u8 = 0x03;
pub const OP_PERIOD: u8 = 0x04;
pub const OP_INTERACTIVE: u8 = 0x05;
pub const OP_CONTROL: u8 = 0x41;
pub const OP_STATE: u8 = 0x42;
pub const OP_GAIN: u8 = 0x43;

/// Reserved parameter address meaning "no parameter block attached".
pub const NO_PARAMETER: u16 = 0xFFFF;

// 0x01 effect definition
pub const EFFECT_CHANNEL_OFFSET: usize = 1;
pub const EFFECT_TYPE_OFFSET: usize = 2;
pub const EFFECT_TRIGGER_AXES_OFFSET: usize = 3;
pub const EFFECT_TRIGGER_MASK: u8 = 0x0F;
pub const EFFECT_AXES_MASK: u8 = 0xF0;
pub const EFFECT_AXES_SHIFT: u32 = 3;
pub const EFFECT_DURATION_RANGE: Range<usize> = 4..6;
pub const EFFECT_DIRECTION_OFFSET: usize = 6;
pub const EFFECT_INTERVAL_RANGE: Range<usize> = 7..9;
pub const EFFECT_ADDRESS1_RANGE: Range<usize> = 9..11;
pub const EFFECT_ADDRESS2_RANGE: Range<usize> = 11..13;
/// Big-endian, unlike every other multi-byte field.
pub const EFFECT_DELAY_RANGE: Range<usize> = 13..15;
pub const EFFECT_MIN_LEN: usize = 15;

// 0x02..=0x05 parameter blocks share the address position
pub const PARAM_ADDRESS_RANGE: Range<usize> = 1..3;

// 0x02 attack/fade
pub const ATTACK_DURATION_RANGE: Range<usize> = 3..5;
pub const ATTACK_LEVEL_OFFSET: usize = 5;
pub const FADE_DURATION_RANGE: Range<usize> = 6..8;
pub const FADE_LEVEL_OFFSET: usize = 8;
pub const ATTACK_FADE_MIN_LEN: usize = 9;

// 0x03 magnitude
pub const MAGNITUDE_LEVEL_OFFSET: usize = 3;
pub const MAGNITUDE_MIN_LEN: usize = 4;

// 0x04 period
pub const PERIOD_MAGNITUDE_OFFSET: usize = 3;
pub const PERIOD_BIAS_OFFSET: usize = 4;
pub const PERIOD_PHASE_OFFSET: usize = 5;
pub const PERIOD_LENGTH_RANGE: Range<usize> = 6..8;
pub const PERIOD_MIN_LEN: usize = 8;

// 0x05 interactive
pub const INTERACTIVE_POS_COEFF_OFFSET: usize = 3;
pub const INTERACTIVE_NEG_COEFF_OFFSET: usize = 4;
pub const INTERACTIVE_CENTER_RANGE: Range<usize> = 5..7;
pub const INTERACTIVE_DEADBAND_RANGE: Range<usize> = 7..9;
pub const INTERACTIVE_POS_SAT_OFFSET: usize = 9;
pub const INTERACTIVE_NEG_SAT_OFFSET: usize = 10;
pub const INTERACTIVE_MIN_LEN: usize = 11;

// 0x41 control
pub const CONTROL_CHANNEL_OFFSET: usize = 1;
pub const CONTROL_MODE_OFFSET: usize = 2;
pub const CONTROL_ITERATIONS_OFFSET: usize = 3;
pub const CONTROL_MIN_LEN: usize = 4;

// 0x42 state
pub const STATE_FLAGS_OFFSET: usize = 1;
pub const STATE_STOP_ALL: u8 = 0x01;
pub const STATE_ENABLE: u8 = 0x02;
pub const STATE_PAUSE: u8 = 0x04;
pub const STATE_MIN_LEN: usize = 2;

// 0x43 gain
pub const GAIN_OFFSET: usize = 1;
pub const GAIN_MIN_LEN: usize = 2;
