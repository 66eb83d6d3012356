//! Integration tests: serial line → dispatch → scoring → motor pulse →
//! response lines.
//!
//! These run on the host and verify the full command cycle against the
//! wire protocol: `BOTOL` answers `poin:<N>` + `SELESAI`, `TIDAK`
//! answers `SELESAI`, everything else is silence.

use crate::mock_hw::{FakeClock, MockHardware, RecordingSink, ScriptedLink};

use botolbox::app::ports::{LinePort, MotorCommand};
use botolbox::app::service::AppService;
use botolbox::config::SystemConfig;

fn make_app() -> (AppService, FakeClock, ScriptedLink, RecordingSink) {
    let mut app = AppService::new(SystemConfig::default());
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, FakeClock::new(), ScriptedLink::new(), sink)
}

// ── Deposit: scoring table over the wire ─────────────────────

#[test]
fn deposit_count_two_reports_five_points() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    let mut hw = MockHardware::with_beams([true, true, false, false]);

    app.dispatch("BOTOL", &mut hw, &mut clock, &mut link, &mut sink);

    assert_eq!(link.sent, vec!["poin:5", "SELESAI"]);
}

#[test]
fn deposit_all_beams_reports_fifteen_points() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    let mut hw = MockHardware::with_beams([true; 4]);

    app.dispatch("BOTOL", &mut hw, &mut clock, &mut link, &mut sink);

    assert_eq!(link.sent, vec!["poin:15", "SELESAI"]);
}

#[test]
fn deposit_low_counts_are_zero_point_events_not_errors() {
    for beams in [[false; 4], [true, false, false, false]] {
        let (mut app, mut clock, mut link, mut sink) = make_app();
        let mut hw = MockHardware::with_beams(beams);

        app.dispatch("BOTOL", &mut hw, &mut clock, &mut link, &mut sink);

        // Still a full, successful cycle: report + completion marker,
        // and the gate still swings forward.
        assert_eq!(link.sent, vec!["poin:0", "SELESAI"]);
        assert_eq!(
            hw.motor_calls,
            vec![MotorCommand::Forward, MotorCommand::Stop]
        );
    }
}

#[test]
fn deposit_emits_exactly_two_lines_first_points_then_done() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    let mut hw = MockHardware::with_beams([true, false, true, true]);

    app.dispatch("BOTOL", &mut hw, &mut clock, &mut link, &mut sink);

    assert_eq!(link.sent.len(), 2);
    assert!(link.sent[0].starts_with("poin:"));
    assert!(link.sent[0][5..].parse::<u16>().is_ok());
    assert_eq!(link.sent[1], "SELESAI");
}

// ── Deposit: motor pulse sequencing ───────────────────────────

#[test]
fn deposit_pulses_forward_for_configured_duration_then_stops() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    let mut hw = MockHardware::with_beams([true, true, true, false]);

    app.dispatch("BOTOL", &mut hw, &mut clock, &mut link, &mut sink);

    assert_eq!(
        hw.motor_calls,
        vec![MotorCommand::Forward, MotorCommand::Stop]
    );
    assert_eq!(clock.sleeps, vec![1_000]);
    assert_eq!(hw.final_motor_state(), MotorCommand::Stop);
}

#[test]
fn pulse_duration_follows_config() {
    let mut config = SystemConfig::default();
    config.pulse_duration_ms = 250;
    let mut app = AppService::new(config);
    let mut hw = MockHardware::with_beams([true; 4]);
    let mut clock = FakeClock::new();
    let mut link = ScriptedLink::new();
    let mut sink = RecordingSink::new();

    app.dispatch("BOTOL", &mut hw, &mut clock, &mut link, &mut sink);

    assert_eq!(clock.sleeps, vec![250]);
}

// ── Reject ────────────────────────────────────────────────────

#[test]
fn reject_reports_done_and_never_points() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    // Detector state must be irrelevant to a reject.
    let mut hw = MockHardware::with_beams([true; 4]);

    app.dispatch("TIDAK", &mut hw, &mut clock, &mut link, &mut sink);

    assert_eq!(link.sent, vec!["SELESAI"]);
    assert!(link.sent.iter().all(|l| !l.starts_with("poin:")));
}

#[test]
fn reject_pulses_reverse_then_stops() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    let mut hw = MockHardware::new();

    app.dispatch("TIDAK", &mut hw, &mut clock, &mut link, &mut sink);

    assert_eq!(
        hw.motor_calls,
        vec![MotorCommand::Reverse, MotorCommand::Stop]
    );
    assert_eq!(clock.sleeps, vec![1_000]);
}

// ── Unrecognized input ────────────────────────────────────────

#[test]
fn unrecognized_lines_produce_no_output_and_no_motor_commands() {
    for line in ["", "botol", "BOTOL ", "PING", "poin:5", "SELESAI", "??"] {
        let (mut app, mut clock, mut link, mut sink) = make_app();
        let mut hw = MockHardware::with_beams([true; 4]);

        app.dispatch(line, &mut hw, &mut clock, &mut link, &mut sink);

        assert!(link.sent.is_empty(), "line {:?} must stay silent", line);
        assert!(
            hw.motor_calls.is_empty(),
            "line {:?} must not move the motor",
            line
        );
        assert!(clock.sleeps.is_empty());
    }
}

// ── Sequencing across commands ────────────────────────────────

#[test]
fn motor_is_stopped_after_every_command_in_a_session() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    let mut hw = MockHardware::with_beams([true, true, false, false]);

    for line in ["BOTOL", "TIDAK", "junk", "BOTOL"] {
        app.dispatch(line, &mut hw, &mut clock, &mut link, &mut sink);
        assert_eq!(hw.final_motor_state(), MotorCommand::Stop);
    }

    // Two deposits and one reject completed.
    assert_eq!(app.commands_handled(), 3);
    assert_eq!(
        link.sent,
        vec!["poin:5", "SELESAI", "SELESAI", "poin:5", "SELESAI"]
    );
}

#[test]
fn scripted_link_session_drains_lines_in_order() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    let mut hw = MockHardware::with_beams([true, true, true, false]);

    link.queue_line("BOTOL");
    link.queue_line("noise");
    link.queue_line("TIDAK");

    while let Some(line) = link.read_line() {
        app.dispatch(line.as_str(), &mut hw, &mut clock, &mut link, &mut sink);
    }

    assert_eq!(link.sent, vec!["poin:10", "SELESAI", "SELESAI"]);
    assert_eq!(hw.final_motor_state(), MotorCommand::Stop);
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn deposit_emits_score_event_with_count_and_points() {
    let (mut app, mut clock, mut link, mut sink) = make_app();
    let mut hw = MockHardware::with_beams([true, true, false, false]);

    app.dispatch("BOTOL", &mut hw, &mut clock, &mut link, &mut sink);

    assert!(
        sink.events
            .iter()
            .any(|e| e.contains("DepositScored") && e.contains("active: 2") && e.contains("points: 5")),
        "events were: {:?}",
        sink.events
    );
}
