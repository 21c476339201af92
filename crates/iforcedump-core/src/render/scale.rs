//! Fixed-point conversions shared by the renderers.
//!
//! Raw values stay untouched in records; these helpers produce the numbers
//! printed in text reports and the SDL haptic ranges used in generated code.
//! Rounding is half away from zero.

/// Divisor mapping a signed 8-bit level of +-127 to +-100 %.
pub const PERCENT_DIVISOR: f64 = 1.27;
/// Divisor mapping a gain byte to percent.
pub const GAIN_DIVISOR: f64 = 1.28;

const SDL_LEVEL_MAX: f64 = 32767.0;
const SDL_UNSIGNED_MAX: f64 = 65535.0;
const LEVEL_MAX: f64 = 127.0;
const CENTER_MAX: f64 = 500.0;
const PHASE_UNITS: f64 = 64.0;

/// Signed 8-bit level as percent: `level / 1.27`.
pub fn percent(level: i8) -> f64 {
    f64::from(level) / PERCENT_DIVISOR
}

/// Phase in degrees for text output: `90 * phase / 64`.
pub fn phase_degrees(phase: u8) -> f64 {
    90.0 * f64::from(phase) / PHASE_UNITS
}

/// Phase in hundredths of a degree for SDL: `round(9000 * phase / 64)`.
pub fn phase_centidegrees(phase: u8) -> u16 {
    (9000.0 * f64::from(phase) / PHASE_UNITS).round() as u16
}

/// Direction byte in hundredths of a degree for SDL.
pub fn direction_centidegrees(direction: u8) -> u32 {
    u32::from(direction) * 100
}

/// Signed 8-bit level into SDL's signed 16-bit range: `round(32767 * v / 127)`.
///
/// -128 would land one step below `i16::MIN`; it saturates.
pub fn level_to_sdl(value: i8) -> i16 {
    (SDL_LEVEL_MAX * f64::from(value) / LEVEL_MAX).round() as i16
}

/// Saturation byte into SDL's unsigned 16-bit range: `round(65535 * v / 255)`.
pub fn saturation_to_sdl(value: u8) -> u16 {
    (SDL_UNSIGNED_MAX * f64::from(value) / 255.0).round() as u16
}

/// Coefficient percentage into SDL units: `round(327.67 * v)`.
pub fn coefficient_to_sdl(value: i8) -> i32 {
    (327.67 * f64::from(value)).round() as i32
}

/// Deadband into SDL units: `round(65.535 * v)`.
pub fn deadband_to_sdl(value: u16) -> u32 {
    (65.535 * f64::from(value)).round() as u32
}

/// Center offset (+-500) into SDL's signed range: `round(32767 * v / 500)`.
pub fn center_to_sdl(value: i16) -> i32 {
    (SDL_LEVEL_MAX * f64::from(value) / CENTER_MAX).round() as i32
}

/// Center offset as percent of its +-500 range.
pub fn center_percent(value: i16) -> f64 {
    f64::from(value) / 5.0
}

/// Saturation byte as percent of 255.
pub fn saturation_percent(value: u8) -> f64 {
    f64::from(value) * 100.0 / 255.0
}

pub fn gain_percent(gain: u8) -> f64 {
    f64::from(gain) / GAIN_DIVISOR
}

/// Gain for `SDL_HapticSetGain`, truncated toward zero.
pub fn gain_to_sdl(gain: u8) -> u8 {
    gain_percent(gain).trunc() as u8
}
