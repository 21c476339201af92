use super::{Renderer, format_timestamp, scale};
use crate::protocols::iforce::NO_PARAMETER;
use crate::{
    AttackFade, Axes, ControlMode, ControlRecord, EffectRecord, EffectType, GainRecord,
    Interactive, Magnitude, ParameterBlock, ParameterRecord, ParameterStore, Period, Record,
    RecordBody, StateRecord,
};

/// Human-readable report: a header line per record, then tab-indented fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    fn render(&self, record: &Record, _params: &ParameterStore) -> Vec<String> {
        let ts = format_timestamp(record.timestamp);
        match &record.body {
            RecordBody::Effect(effect) => effect_lines(&ts, effect),
            RecordBody::Parameter(param) => parameter_lines(&ts, param),
            RecordBody::Control(control) => control_lines(&ts, control),
            RecordBody::State(state) => state_lines(&ts, state),
            RecordBody::Gain(gain) => gain_lines(&ts, gain),
        }
    }
}

fn field(name: &str, value: impl std::fmt::Display) -> String {
    format!("\t{name}: {value}")
}

fn level(value: i8) -> String {
    format!("{value} ({:.1} %)", scale::percent(value))
}

fn waveform_label(effect_type: EffectType) -> String {
    let name = match effect_type {
        EffectType::Constant => "Constant Force",
        EffectType::Square => "Square Wave",
        EffectType::Triangle => "Triangle Wave",
        EffectType::Sine => "Sine Wave",
        EffectType::SawtoothUp => "Sawtooth Up",
        EffectType::SawtoothDown => "Sawtooth down",
        EffectType::Spring => "Spring",
        EffectType::FrictionInertia => "Friction And Inertia",
        EffectType::Unknown(_) => "Unknown",
    };
    format!("{name} {:#04X}", effect_type.raw())
}

fn axes_label(axes: Axes) -> String {
    let name = match axes {
        Axes::Directional => "Directional",
        Axes::X => "X",
        Axes::Y => "Y",
        Axes::XAndY => "X and Y",
        Axes::Unknown(_) => "Unknown",
    };
    format!("{name} {:#04X}", axes.raw())
}

fn address_label(address: Option<u16>) -> String {
    match address {
        Some(address) => address.to_string(),
        None => format!("{NO_PARAMETER} (not used)"),
    }
}

fn effect_lines(ts: &str, effect: &EffectRecord) -> Vec<String> {
    vec![
        format!("{ts} Force_effect"),
        field("Channel", effect.channel),
        field("Waveform", waveform_label(effect.effect_type)),
        field("Trigger", effect.trigger),
        field("Axes", axes_label(effect.axes)),
        field("Duration", format!("{} ms", effect.duration_ms)),
        field("Direction", format!("{} degrees", effect.direction)),
        field(
            "Time between triggers",
            format!("{} ms", effect.time_between_ms),
        ),
        field("Parameter address 1", address_label(effect.address1)),
        field("Parameter address 2", address_label(effect.address2)),
        field("Delay", format!("{} ms", effect.delay_ms)),
    ]
}

fn parameter_lines(ts: &str, param: &ParameterRecord) -> Vec<String> {
    let title = match param.block {
        ParameterBlock::AttackFade(_) => "Attack and fade",
        ParameterBlock::Magnitude(_) => "Magnitude",
        ParameterBlock::Period(_) => "Period",
        ParameterBlock::Interactive(_) => "Interactive",
    };
    let mut lines = vec![
        format!("{ts} Parameter: {title}"),
        field("Address", param.address),
    ];
    match &param.block {
        ParameterBlock::AttackFade(block) => attack_fade_fields(block, &mut lines),
        ParameterBlock::Magnitude(block) => magnitude_fields(block, &mut lines),
        ParameterBlock::Period(block) => period_fields(block, &mut lines),
        ParameterBlock::Interactive(block) => interactive_fields(block, &mut lines),
    }
    lines
}

fn attack_fade_fields(block: &AttackFade, lines: &mut Vec<String>) {
    lines.push(field(
        "Attack duration",
        format!("{} ms", block.attack_duration_ms),
    ));
    lines.push(field("Level at start of attack", level(block.attack_level)));
    lines.push(field(
        "Fade duration",
        format!("{} ms", block.fade_duration_ms),
    ));
    lines.push(field("Level after fade", level(block.fade_level)));
}

fn magnitude_fields(block: &Magnitude, lines: &mut Vec<String>) {
    lines.push(field("Level", level(block.level)));
}

fn period_fields(block: &Period, lines: &mut Vec<String>) {
    lines.push(field("Magnitude", level(block.magnitude)));
    lines.push(field("Offset", level(block.offset)));
    // Debug formatting keeps the fractional part visible (45.0, 88.59375).
    lines.push(field(
        "Phase",
        format!("{} ({:?} deg)", block.phase, scale::phase_degrees(block.phase)),
    ));
    lines.push(field("Period", format!("{} ms", block.period_ms)));
}

fn interactive_fields(block: &Interactive, lines: &mut Vec<String>) {
    lines.push(field(
        "Positive coeff",
        format!("{} %", block.positive_coeff),
    ));
    lines.push(field(
        "Negative coeff",
        format!("{} %", block.negative_coeff),
    ));
    lines.push(field(
        "Center offset",
        format!(
            "{} ({:.1} %)",
            block.center_offset,
            scale::center_percent(block.center_offset)
        ),
    ));
    lines.push(field(
        "Dead band",
        format!("{} % ({})", block.deadband, u32::from(block.deadband) * 10),
    ));
    lines.push(field(
        "Positive saturation",
        saturation(block.positive_saturation),
    ));
    lines.push(field(
        "Negative saturation",
        saturation(block.negative_saturation),
    ));
}

fn saturation(value: u8) -> String {
    format!("{value} ({:.1} %)", scale::saturation_percent(value))
}

fn control_lines(ts: &str, control: &ControlRecord) -> Vec<String> {
    let mode = match control.mode {
        ControlMode::Stop => "Stop",
        ControlMode::PlayOnce => "Play Once",
        ControlMode::PlayNTimes => "Play N Times",
        ControlMode::Unknown(_) => "Unknown",
    };
    vec![
        format!("{ts} Control Command"),
        field("Channel", control.channel),
        field(
            "Start/stop",
            format!("{mode} {:#04X}", control.mode.raw()),
        ),
        field("Iterations", control.iterations),
    ]
}

fn state_lines(ts: &str, state: &StateRecord) -> Vec<String> {
    let flags: Vec<&str> = [
        (state.stop_all, "Stop all"),
        (state.enable, "Enable FF"),
        (state.pause, "Pause FF"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect();
    vec![
        format!("{ts} Set effect state"),
        field("State", flags.join(" ")),
    ]
}

fn gain_lines(ts: &str, gain: &GainRecord) -> Vec<String> {
    vec![
        format!("{ts} Set gain"),
        field(
            "Gain",
            format!("{} ({:.1} %)", gain.gain, scale::gain_percent(gain.gain)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::TextRenderer;
    use crate::render::Renderer;
    use crate::{
        Axes, ControlMode, ControlRecord, EffectRecord, EffectType, Magnitude, ParameterBlock,
        ParameterRecord, ParameterStore, Period, Record, RecordBody, StateRecord,
    };

    fn render(timestamp: f64, body: RecordBody) -> Vec<String> {
        TextRenderer::new().render(&Record { timestamp, body }, &ParameterStore::new())
    }

    #[test]
    fn effect_marks_unused_addresses() {
        let lines = render(
            1.0,
            RecordBody::Effect(EffectRecord {
                channel: 2,
                effect_type: EffectType::Spring,
                trigger: 0,
                axes: Axes::X,
                duration_ms: 500,
                direction: 90,
                time_between_ms: 0,
                address1: Some(48),
                address2: None,
                delay_ms: 10,
            }),
        );
        assert_eq!(lines[0], "1.00 Force_effect");
        assert_eq!(lines[2], "\tWaveform: Spring 0x40");
        assert_eq!(lines[4], "\tAxes: X 0x04");
        assert_eq!(lines[6], "\tDirection: 90 degrees");
        assert_eq!(lines[8], "\tParameter address 1: 48");
        assert_eq!(lines[9], "\tParameter address 2: 65535 (not used)");
        assert_eq!(lines[10], "\tDelay: 10 ms");
    }

    #[test]
    fn unknown_values_show_raw_byte() {
        let lines = render(
            0.0,
            RecordBody::Effect(EffectRecord {
                channel: 0,
                effect_type: EffectType::Unknown(0x30),
                trigger: 0,
                axes: Axes::Unknown(0x06),
                duration_ms: 0,
                direction: 0,
                time_between_ms: 0,
                address1: None,
                address2: None,
                delay_ms: 0,
            }),
        );
        assert_eq!(lines[2], "\tWaveform: Unknown 0x30");
        assert_eq!(lines[4], "\tAxes: Unknown 0x06");
    }

    #[test]
    fn magnitude_reports_percent() {
        let lines = render(
            0.25,
            RecordBody::Parameter(ParameterRecord {
                address: 16,
                block: ParameterBlock::Magnitude(Magnitude { level: -127 }),
            }),
        );
        assert_eq!(
            lines,
            vec![
                "0.25 Parameter: Magnitude",
                "\tAddress: 16",
                "\tLevel: -127 (-100.0 %)",
            ]
        );
    }

    #[test]
    fn period_phase_keeps_fraction() {
        let lines = render(
            0.0,
            RecordBody::Parameter(ParameterRecord {
                address: 32,
                block: ParameterBlock::Period(Period {
                    magnitude: 64,
                    offset: 0,
                    phase: 0,
                    period_ms: 100,
                }),
            }),
        );
        assert_eq!(lines[2], "\tMagnitude: 64 (50.4 %)");
        assert_eq!(lines[3], "\tOffset: 0 (0.0 %)");
        assert_eq!(lines[4], "\tPhase: 0 (0.0 deg)");
    }

    #[test]
    fn control_and_state_lines() {
        let lines = render(
            3.0,
            RecordBody::Control(ControlRecord {
                channel: 1,
                mode: ControlMode::PlayNTimes,
                iterations: 3,
            }),
        );
        assert_eq!(lines[2], "\tStart/stop: Play N Times 0x41");
        assert_eq!(lines[3], "\tIterations: 3");

        let lines = render(
            3.5,
            RecordBody::State(StateRecord {
                stop_all: true,
                enable: false,
                pause: true,
            }),
        );
        assert_eq!(lines, vec!["3.50 Set effect state", "\tState: Stop all Pause FF"]);
    }
}
