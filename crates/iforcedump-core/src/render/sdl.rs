use super::{Renderer, format_timestamp, scale};
use crate::{
    ControlMode, ControlRecord, EffectClass, EffectRecord, EffectType, GainRecord,
    ParameterBlock, ParameterStore, Record, RecordBody, StateRecord,
};

/// SDL2 haptic code stub: C statements that would replay the capture.
#[derive(Debug, Default, Clone, Copy)]
pub struct SdlRenderer;

impl SdlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for SdlRenderer {
    fn render(&self, record: &Record, params: &ParameterStore) -> Vec<String> {
        match &record.body {
            RecordBody::Effect(effect) => effect_lines(record.timestamp, effect, params),
            RecordBody::Parameter(_) => Vec::new(),
            RecordBody::Control(control) => control_lines(record.timestamp, control),
            RecordBody::State(state) => state_lines(record.timestamp, state),
            RecordBody::Gain(gain) => gain_lines(record.timestamp, gain),
        }
    }
}

fn time_comment(timestamp: f64) -> String {
    format!("/* Time: {} */", format_timestamp(timestamp))
}

fn type_name(effect_type: EffectType) -> Option<&'static str> {
    let name = match effect_type {
        EffectType::Constant => "SDL_HAPTIC_CONSTANT;",
        EffectType::Square => "SDL_HAPTIC_SQUARE; /* if supported by SDL */",
        EffectType::Triangle => "SDL_HAPTIC_TRIANGLE;",
        EffectType::Sine => "SDL_HAPTIC_SINE;",
        EffectType::SawtoothUp => "SDL_HAPTIC_SAWTOOTHUP;",
        EffectType::SawtoothDown => "SDL_HAPTIC_SAWTOOTHDOWN;",
        EffectType::Spring => "SDL_HAPTIC_SPRING;",
        EffectType::FrictionInertia => "SDL_HAPTIC_FRICTION; /* or SDL_HAPTIC_INERTIA */",
        EffectType::Unknown(_) => return None,
    };
    Some(name)
}

fn member(class: EffectClass) -> &'static str {
    match class {
        EffectClass::Constant => "constant",
        EffectClass::Periodic => "periodic",
        EffectClass::Condition => "condition",
    }
}

/// Struct member assignments for a resolved parameter block, without the
/// `effectN.<class>` prefix.
fn block_members(block: &ParameterBlock) -> Vec<String> {
    match block {
        ParameterBlock::AttackFade(b) => vec![
            format!(".attack_length = {};", b.attack_duration_ms),
            format!(".attack_level = {};", scale::level_to_sdl(b.attack_level)),
            format!(".fade_length = {};", b.fade_duration_ms),
            format!(".fade_level = {};", scale::level_to_sdl(b.fade_level)),
        ],
        ParameterBlock::Magnitude(b) => {
            vec![format!(".level = {};", scale::level_to_sdl(b.level))]
        }
        ParameterBlock::Period(b) => vec![
            format!(".period = {};", b.period_ms),
            format!(".magnitude = {};", scale::level_to_sdl(b.magnitude)),
            format!(".offset = {};", scale::level_to_sdl(b.offset)),
            format!(".phase = {};", scale::phase_centidegrees(b.phase)),
        ],
        ParameterBlock::Interactive(b) => vec![
            format!(
                ".right_sat = {};",
                scale::saturation_to_sdl(b.positive_saturation)
            ),
            format!(
                ".left_sat = {};",
                scale::saturation_to_sdl(b.negative_saturation)
            ),
            format!(
                ".right_coeff = {};",
                scale::coefficient_to_sdl(b.positive_coeff)
            ),
            format!(
                ".left_coeff = {};",
                scale::coefficient_to_sdl(b.negative_coeff)
            ),
            format!(".deadband = {};", scale::deadband_to_sdl(b.deadband)),
            format!(".center = {};", scale::center_to_sdl(b.center_offset)),
        ],
    }
}

fn effect_lines(timestamp: f64, effect: &EffectRecord, params: &ParameterStore) -> Vec<String> {
    let (Some(name), Some(class)) = (type_name(effect.effect_type), effect.effect_type.class())
    else {
        return vec!["/* Unknown effect type */".to_string()];
    };
    let ch = effect.channel;
    let prefix = format!("effect{ch}.{}", member(class));

    let mut lines = vec![
        time_comment(timestamp),
        format!("SDL_memset(&effect{ch}, 0, sizeof(SDL_HapticEffect));"),
        format!("effect{ch}.type = {name}"),
        format!("{prefix}.length = {};", effect.duration_ms),
        format!("{prefix}.delay = {};", effect.delay_ms),
        format!("{prefix}.button = {};", effect.trigger),
        format!("{prefix}.interval = {};", effect.time_between_ms),
        format!("{prefix}.direction.type = SDL_HAPTIC_POLAR;"),
        format!(
            "{prefix}.direction.dir[0] = {};",
            scale::direction_centidegrees(effect.direction)
        ),
    ];

    let mut blocks = vec![params.resolve(effect.address1)];
    if class.uses_envelope() {
        blocks.push(params.resolve(effect.address2));
    }
    for block in blocks.into_iter().flatten() {
        lines.extend(
            block_members(block)
                .into_iter()
                .map(|m| format!("{prefix}{m}")),
        );
    }

    lines.push(format!(
        "effect_id{ch} = SDL_HapticNewEffect(haptic, &effect{ch});"
    ));
    lines
}

fn control_lines(timestamp: f64, control: &ControlRecord) -> Vec<String> {
    let ch = control.channel;
    let call = match control.mode {
        ControlMode::Stop => format!("SDL_HapticStopEffect(haptic, effect_id{ch});"),
        ControlMode::PlayOnce => format!("SDL_HapticRunEffect(haptic, effect_id{ch}, 1);"),
        ControlMode::PlayNTimes => format!(
            "SDL_HapticRunEffect(haptic, effect_id{ch}, {});",
            control.iterations
        ),
        ControlMode::Unknown(raw) => format!("/* Unknown control mode {raw:#04X} */"),
    };
    vec![time_comment(timestamp), call]
}

fn state_lines(timestamp: f64, state: &StateRecord) -> Vec<String> {
    let mut lines = vec![time_comment(timestamp)];
    if state.stop_all {
        lines.push("SDL_HapticStopAll(haptic);".to_string());
    }
    if state.enable {
        lines.push("SDL_HapticUnpause(haptic);".to_string());
    }
    if state.pause {
        lines.push("SDL_HapticPause(haptic);".to_string());
    }
    lines
}

fn gain_lines(timestamp: f64, gain: &GainRecord) -> Vec<String> {
    vec![
        time_comment(timestamp),
        format!("SDL_HapticSetGain(haptic, {});", scale::gain_to_sdl(gain.gain)),
    ]
}

#[cfg(test)]
mod tests {
    use super::SdlRenderer;
    use crate::render::Renderer;
    use crate::{
        AttackFade, Axes, ControlMode, ControlRecord, EffectRecord, EffectType, Interactive,
        Magnitude, ParameterBlock, ParameterRecord, ParameterStore, Record, RecordBody,
        StateRecord,
    };

    fn effect(effect_type: EffectType, address1: Option<u16>, address2: Option<u16>) -> Record {
        Record {
            timestamp: 2.0,
            body: RecordBody::Effect(EffectRecord {
                channel: 1,
                effect_type,
                trigger: 0,
                axes: Axes::Directional,
                duration_ms: 1000,
                direction: 90,
                time_between_ms: 0,
                address1,
                address2,
                delay_ms: 0,
            }),
        }
    }

    fn store() -> ParameterStore {
        let mut params = ParameterStore::new();
        params.insert(
            0x10,
            ParameterBlock::Magnitude(Magnitude { level: 127 }),
        );
        params.insert(
            0x20,
            ParameterBlock::AttackFade(AttackFade {
                attack_duration_ms: 100,
                attack_level: 0,
                fade_duration_ms: 200,
                fade_level: -127,
            }),
        );
        params.insert(
            0x30,
            ParameterBlock::Interactive(Interactive {
                positive_coeff: 100,
                negative_coeff: -100,
                center_offset: 0,
                deadband: 10,
                positive_saturation: 255,
                negative_saturation: 0,
            }),
        );
        params
    }

    #[test]
    fn constant_effect_with_resolved_blocks() {
        let lines = SdlRenderer::new().render(
            &effect(EffectType::Constant, Some(0x10), Some(0x20)),
            &store(),
        );
        assert_eq!(
            lines,
            vec![
                "/* Time: 2.00 */",
                "SDL_memset(&effect1, 0, sizeof(SDL_HapticEffect));",
                "effect1.type = SDL_HAPTIC_CONSTANT;",
                "effect1.constant.length = 1000;",
                "effect1.constant.delay = 0;",
                "effect1.constant.button = 0;",
                "effect1.constant.interval = 0;",
                "effect1.constant.direction.type = SDL_HAPTIC_POLAR;",
                "effect1.constant.direction.dir[0] = 9000;",
                "effect1.constant.level = 32767;",
                "effect1.constant.attack_length = 100;",
                "effect1.constant.attack_level = 0;",
                "effect1.constant.fade_length = 200;",
                "effect1.constant.fade_level = -32767;",
                "effect_id1 = SDL_HapticNewEffect(haptic, &effect1);",
            ]
        );
    }

    #[test]
    fn condition_effect_ignores_second_address() {
        let lines = SdlRenderer::new().render(
            &effect(EffectType::Spring, Some(0x30), Some(0x20)),
            &store(),
        );
        assert!(lines.contains(&"effect1.condition.right_sat = 65535;".to_string()));
        assert!(lines.contains(&"effect1.condition.left_coeff = -32767;".to_string()));
        assert!(lines.contains(&"effect1.condition.deadband = 655;".to_string()));
        assert!(!lines.iter().any(|line| line.contains("attack_length")));
    }

    #[test]
    fn unresolved_addresses_are_omitted() {
        let lines = SdlRenderer::new().render(
            &effect(EffectType::Sine, Some(0x99), None),
            &ParameterStore::new(),
        );
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[2], "effect1.type = SDL_HAPTIC_SINE;");
    }

    #[test]
    fn unknown_effect_type_emits_comment_only() {
        let lines = SdlRenderer::new().render(
            &effect(EffectType::Unknown(0x55), Some(0x10), None),
            &store(),
        );
        assert_eq!(lines, vec!["/* Unknown effect type */"]);
    }

    #[test]
    fn parameter_records_emit_nothing() {
        let record = Record {
            timestamp: 0.0,
            body: RecordBody::Parameter(ParameterRecord {
                address: 0x10,
                block: ParameterBlock::Magnitude(Magnitude { level: 1 }),
            }),
        };
        assert!(SdlRenderer::new().render(&record, &store()).is_empty());
    }

    #[test]
    fn control_and_state_calls() {
        let params = ParameterStore::new();
        let control = Record {
            timestamp: 4.0,
            body: RecordBody::Control(ControlRecord {
                channel: 3,
                mode: ControlMode::PlayNTimes,
                iterations: 5,
            }),
        };
        assert_eq!(
            SdlRenderer::new().render(&control, &params),
            vec!["/* Time: 4.00 */", "SDL_HapticRunEffect(haptic, effect_id3, 5);"]
        );

        let state = Record {
            timestamp: 4.5,
            body: RecordBody::State(StateRecord {
                stop_all: true,
                enable: true,
                pause: false,
            }),
        };
        assert_eq!(
            SdlRenderer::new().render(&state, &params),
            vec![
                "/* Time: 4.50 */",
                "SDL_HapticStopAll(haptic);",
                "SDL_HapticUnpause(haptic);",
            ]
        );
    }
}
