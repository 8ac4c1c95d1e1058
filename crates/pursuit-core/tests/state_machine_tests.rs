// Host-side tests for the idle/pursuit state machine timings.

use pursuit_core::{EngineConfig, Phase, PursuitState, StateMachine, Transition};
use std::time::Duration;

fn machine() -> StateMachine {
    StateMachine::new(&EngineConfig::default(), 0.0)
}

fn poll(m: &mut StateMachine, now_ms: f64) -> Vec<Transition> {
    let mut out = Vec::new();
    m.poll(now_ms, &mut out);
    out
}

fn pointer_move(m: &mut StateMachine, now_ms: f64) -> Vec<Transition> {
    let mut out = Vec::new();
    m.on_pointer_move(now_ms, &mut out);
    out
}

fn phases(ts: &[Transition]) -> Vec<(Phase, Phase)> {
    ts.iter().map(|t| (t.from, t.to)).collect()
}

#[test]
fn stays_idle_below_threshold() {
    let mut m = machine();
    assert!(poll(&mut m, 14_999.0).is_empty());
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(m.pending_timers(), 0);
}

#[test]
fn scenario_idle_alert_climax_then_recover() {
    let mut m = machine();
    assert_eq!(
        phases(&poll(&mut m, 15_000.0)),
        vec![(Phase::Idle, Phase::Alerting)]
    );
    assert_eq!(m.climax_deadline_ms(), Some(18_000.0));

    assert_eq!(
        phases(&poll(&mut m, 17_000.0)),
        vec![(Phase::Alerting, Phase::Hunting)]
    );
    assert_eq!(m.climax_deadline_ms(), Some(18_000.0));

    assert_eq!(
        phases(&poll(&mut m, 18_000.0)),
        vec![(Phase::Hunting, Phase::Climax)]
    );
    assert_eq!(m.pending_timers(), 0);

    let ts = pointer_move(&mut m, 18_500.0);
    assert_eq!(phases(&ts), vec![(Phase::Climax, Phase::Recovery)]);
    assert_eq!(m.phase(), Phase::Recovery);
    assert_eq!(m.state().entered_ms(), Some(18_500.0));
}

#[test]
fn scenario_short_idle_then_move_resets_clock() {
    let mut m = machine();
    assert!(poll(&mut m, 10_000.0).is_empty());
    assert!(pointer_move(&mut m, 10_000.0).is_empty());
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(m.clock().last_pointer_move_ms(), 10_000.0);

    assert!(poll(&mut m, 24_999.0).is_empty());
    assert_eq!(
        phases(&poll(&mut m, 25_000.0)),
        vec![(Phase::Idle, Phase::Alerting)]
    );
}

#[test]
fn move_during_alerting_recovers_and_cancels_climax() {
    let mut m = machine();
    poll(&mut m, 15_000.0);
    assert_eq!(m.phase(), Phase::Alerting);
    // One windup timer and exactly one climax timer.
    assert_eq!(m.pending_timers(), 2);

    let ts = pointer_move(&mut m, 16_000.0);
    assert_eq!(phases(&ts), vec![(Phase::Alerting, Phase::Recovery)]);
    assert_eq!(m.pending_timers(), 1, "only the recovery timer remains");
    assert_eq!(m.climax_deadline_ms(), None);

    // Past the old climax deadline: still recovering, never climax.
    assert!(poll(&mut m, 18_500.0).is_empty());
    assert_eq!(m.phase(), Phase::Recovery);

    let ts = poll(&mut m, 19_000.0);
    assert_eq!(phases(&ts), vec![(Phase::Recovery, Phase::Idle)]);
    assert!(ts.iter().all(|t| t.to != Phase::Climax));
}

#[test]
fn move_during_hunting_recovers() {
    let mut m = machine();
    poll(&mut m, 17_500.0);
    assert_eq!(m.phase(), Phase::Hunting);
    assert_eq!(m.state().entered_ms(), Some(17_000.0));
    let ts = pointer_move(&mut m, 17_600.0);
    assert_eq!(phases(&ts), vec![(Phase::Hunting, Phase::Recovery)]);
    assert!(poll(&mut m, 18_100.0).is_empty());
}

#[test]
fn recovery_returns_to_idle_after_display_and_keeps_trigger_time() {
    let mut m = machine();
    poll(&mut m, 18_000.0);
    pointer_move(&mut m, 18_100.0);

    assert!(poll(&mut m, 21_099.0).is_empty());
    assert_eq!(m.phase(), Phase::Recovery);
    let ts = poll(&mut m, 21_100.0);
    assert_eq!(phases(&ts), vec![(Phase::Recovery, Phase::Idle)]);
    assert_eq!(ts[0].at_ms, 21_100.0);
    assert_eq!(m.clock().last_pointer_move_ms(), 18_100.0);
    assert_eq!(m.pending_timers(), 0);

    // The next idle period is measured from the recovering move.
    assert!(poll(&mut m, 33_099.0).is_empty());
    assert_eq!(
        phases(&poll(&mut m, 33_100.0)),
        vec![(Phase::Idle, Phase::Alerting)]
    );
}

#[test]
fn movement_during_recovery_does_not_extend_it() {
    let mut m = machine();
    poll(&mut m, 18_000.0);
    pointer_move(&mut m, 18_100.0);
    assert!(pointer_move(&mut m, 19_000.0).is_empty());
    assert_eq!(m.phase(), Phase::Recovery);
    assert_eq!(
        phases(&poll(&mut m, 21_100.0)),
        vec![(Phase::Recovery, Phase::Idle)]
    );
    assert_eq!(m.clock().last_pointer_move_ms(), 19_000.0);
}

#[test]
fn late_poll_replays_every_due_transition_in_order() {
    let mut m = machine();
    let ts = poll(&mut m, 60_000.0);
    assert_eq!(
        phases(&ts),
        vec![
            (Phase::Idle, Phase::Alerting),
            (Phase::Alerting, Phase::Hunting),
            (Phase::Hunting, Phase::Climax),
        ]
    );
    let at: Vec<f64> = ts.iter().map(|t| t.at_ms).collect();
    assert_eq!(at, vec![15_000.0, 17_000.0, 18_000.0]);
    assert_eq!(m.state().entered_ms(), Some(18_000.0));
    // Climax has no exit timer; only movement ends it.
    assert!(poll(&mut m, 600_000.0).is_empty());
    assert_eq!(m.phase(), Phase::Climax);
}

#[test]
fn long_windup_skips_hunting() {
    let config = EngineConfig {
        alert_windup: Duration::from_secs(5),
        ..EngineConfig::default()
    };
    let mut m = StateMachine::new(&config, 0.0);
    poll(&mut m, 15_000.0);
    assert_eq!(m.pending_timers(), 1);
    match m.state() {
        PursuitState::Alerting { hunt_timer, .. } => assert!(hunt_timer.is_none()),
        other => panic!("expected alerting, got {other:?}"),
    }
    assert_eq!(
        phases(&poll(&mut m, 18_000.0)),
        vec![(Phase::Alerting, Phase::Climax)]
    );
}

#[test]
fn out_of_order_timestamps_do_not_rewind_the_clock() {
    let mut m = machine();
    pointer_move(&mut m, 5_000.0);
    pointer_move(&mut m, 4_000.0);
    assert_eq!(m.clock().last_pointer_move_ms(), 5_000.0);
}

#[test]
fn shutdown_cancels_everything_in_any_state() {
    for stop_at in [0.0, 15_500.0, 17_500.0, 18_500.0] {
        let mut m = machine();
        poll(&mut m, stop_at);
        m.shutdown();
        assert_eq!(m.pending_timers(), 0, "stopped at {stop_at}");
        assert_eq!(m.phase(), Phase::Idle);
    }

    let mut m = machine();
    poll(&mut m, 18_000.0);
    pointer_move(&mut m, 18_100.0);
    assert_eq!(m.shutdown(), 1);
}

#[test]
fn move_after_missed_deadlines_still_recovers() {
    let mut m = machine();
    assert!(poll(&mut m, 14_990.0).is_empty());

    // No frame ran between the deadlines and this move.
    let ts = pointer_move(&mut m, 18_500.0);
    assert_eq!(
        phases(&ts),
        vec![
            (Phase::Idle, Phase::Alerting),
            (Phase::Alerting, Phase::Hunting),
            (Phase::Hunting, Phase::Climax),
            (Phase::Climax, Phase::Recovery),
        ]
    );
    let at: Vec<f64> = ts.iter().map(|t| t.at_ms).collect();
    assert_eq!(at, vec![15_000.0, 17_000.0, 18_000.0, 18_500.0]);
    assert_eq!(m.clock().last_pointer_move_ms(), 18_500.0);
}

#[test]
fn move_before_crossing_is_a_plain_idle_move() {
    let mut m = machine();
    assert!(pointer_move(&mut m, 14_999.0).is_empty());
    assert_eq!(m.phase(), Phase::Idle);
    assert!(poll(&mut m, 29_998.0).is_empty());
}

#[test]
fn short_threshold_never_backdates_alerting_into_recovery() {
    let config = EngineConfig {
        idle_threshold: Duration::from_secs(1),
        ..EngineConfig::default()
    };
    let mut m = StateMachine::new(&config, 0.0);
    poll(&mut m, 4_000.0);
    assert_eq!(m.phase(), Phase::Climax);

    pointer_move(&mut m, 20_000.0);
    assert_eq!(m.phase(), Phase::Recovery);

    // The pointer has been still longer than the threshold when recovery
    // ends, so alerting starts right then and not one second after the move.
    let ts = poll(&mut m, 23_000.0);
    assert_eq!(
        phases(&ts),
        vec![(Phase::Recovery, Phase::Idle), (Phase::Idle, Phase::Alerting)]
    );
    assert_eq!(ts[1].at_ms, 23_000.0);
    assert_eq!(m.state().entered_ms(), Some(23_000.0));
    assert_eq!(m.climax_deadline_ms(), Some(26_000.0));

    assert!(poll(&mut m, 24_999.0).is_empty());
    assert_eq!(
        phases(&poll(&mut m, 25_000.0)),
        vec![(Phase::Alerting, Phase::Hunting)]
    );
    let ts = poll(&mut m, 26_000.0);
    assert_eq!(phases(&ts), vec![(Phase::Hunting, Phase::Climax)]);
    assert_eq!(ts[0].at_ms - 23_000.0, 3_000.0);
}
