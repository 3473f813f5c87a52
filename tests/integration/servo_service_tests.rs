//! Integration tests for the servo firmwares: input → duty → heartbeat.

use crate::mock_hw::{MockDelay, MockHardware, RecordingSink, Timeline};

use sortline::app::events::AppEvent;
use sortline::app::service::ServoService;
use sortline::config::{SystemConfig, Variant};
use sortline::control::input::InputCode;
use sortline::control::mapping::{DutyTicks, SERVO_SAFE_RANGE};

fn make_app(variant: Variant) -> (ServoService, RecordingSink) {
    let app = ServoService::new(SystemConfig::for_variant(variant)).unwrap();
    (app, RecordingSink::new())
}

fn ticks(values: &[u16]) -> Vec<DutyTicks> {
    values.iter().copied().map(DutyTicks).collect()
}

#[test]
fn start_commands_power_up_position() {
    let (mut app, mut sink) = make_app(Variant::PushServo);
    let mut hw = MockHardware::new();

    app.start(&mut hw, &mut sink);

    assert_eq!(hw.duties, ticks(&[187]));
    assert_eq!(sink.events, vec![AppEvent::Started(Variant::PushServo)]);
}

#[test]
fn push_servo_follows_single_line() {
    let (mut app, mut sink) = make_app(Variant::PushServo);
    let mut hw = MockHardware::scripted(&[0, 1, 1, 0]);

    for _ in 0..4 {
        app.tick(&mut hw, &mut sink);
    }

    assert_eq!(hw.duties, ticks(&[125, 250, 250, 125]));
    assert_eq!(app.duty(), DutyTicks(125));
}

#[test]
fn push_servo_ignores_second_line() {
    let (mut app, mut sink) = make_app(Variant::PushServo);
    let mut hw = MockHardware::scripted(&[0b10, 0b11]);

    assert_eq!(app.tick(&mut hw, &mut sink), InputCode::B00);
    assert_eq!(app.tick(&mut hw, &mut sink), InputCode::B01);
    assert_eq!(hw.duties, ticks(&[125, 250]));
}

#[test]
fn push_servo_mirrors_sampled_bit() {
    let (mut app, mut sink) = make_app(Variant::PushServo);
    let mut hw = MockHardware::scripted(&[1, 0, 1]);

    for _ in 0..3 {
        app.tick(&mut hw, &mut sink);
    }

    assert_eq!(
        hw.mirrored,
        vec![InputCode::B01, InputCode::B00, InputCode::B01]
    );
}

#[test]
fn directional_servo_applies_full_table() {
    let (mut app, mut sink) = make_app(Variant::DirectionalServo);
    let mut hw = MockHardware::scripted(&[0b00, 0b01, 0b10, 0b11]);

    for _ in 0..4 {
        app.tick(&mut hw, &mut sink);
    }

    assert_eq!(hw.duties, ticks(&[210, 176, 260, 210]));
    assert!(hw.mirrored.is_empty(), "directional board has no mirror output");
}

#[test]
fn repeated_samples_reapply_same_duty() {
    let (mut app, mut sink) = make_app(Variant::DirectionalServo);
    let mut hw = MockHardware::scripted(&[0b10; 5]);

    for _ in 0..5 {
        app.tick(&mut hw, &mut sink);
    }

    assert_eq!(hw.duties, ticks(&[260; 5]));
    assert_eq!(
        sink.count_where(|e| matches!(e, AppEvent::DutyApplied { .. })),
        5
    );
}

#[test]
fn every_written_duty_is_inside_safe_range() {
    for variant in [Variant::PushServo, Variant::DirectionalServo] {
        let (mut app, mut sink) = make_app(variant);
        let script: Vec<u8> = (0..=255).collect();
        let mut hw = MockHardware::scripted(&script);
        app.start(&mut hw, &mut sink);
        for _ in 0..script.len() {
            app.tick(&mut hw, &mut sink);
        }
        assert!(hw.duties.iter().all(|&d| SERVO_SAFE_RANGE.contains(d)));
    }
}

#[test]
fn heartbeat_toggles_once_per_iteration() {
    let (mut app, mut sink) = make_app(Variant::DirectionalServo);
    let mut hw = MockHardware::scripted(&[0, 0, 3, 3, 1, 1, 1]);

    for _ in 0..7 {
        app.tick(&mut hw, &mut sink);
    }

    assert_eq!(
        hw.activity,
        vec![true, false, true, false, true, false, true]
    );
    assert_eq!(app.activity().toggles(), app.iterations());
    assert_eq!(
        sink.count_where(|e| matches!(e, AppEvent::Heartbeat { .. })),
        7
    );
}

#[test]
fn iterate_blocks_for_loop_period() {
    let (mut app, mut sink) = make_app(Variant::PushServo);
    let mut hw = MockHardware::scripted(&[1, 0]);
    let timeline = Timeline::default();
    let mut delay = MockDelay {
        timeline: timeline.clone(),
    };

    app.iterate(&mut hw, &mut delay, &mut sink);
    app.iterate(&mut hw, &mut delay, &mut sink);

    assert_eq!(timeline.delays(), vec![200, 200]);
    assert_eq!(app.iterations(), 2);
}
