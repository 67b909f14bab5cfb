//! Integration tests for the timer engine public API.
//!
//! These tests drive `Timer` with explicit timestamps:
//! - Elapsed accumulation across pause/resume cycles
//! - Remaining/elapsed complement in Pomodoro mode
//! - Pause idempotence
//! - Focus/break/long-break cycle
//! - Stopwatch mode never completing

use pomod::engine::{Clock, ManualClock, Timer};
use pomod::types::{TimerConfig, TimerMode, TimerPhase, TimerState};

// ============================================================================
// Test Helpers
// ============================================================================

/// Creates a Pomodoro timer with short phases (60s/30s/120s, 4 cycles).
fn create_fast_timer() -> Timer {
    Timer::new(TimerConfig {
        focus_seconds: 60,
        break_seconds: 30,
        long_break_seconds: 120,
        cycles_per_long_break: 4,
    })
}

/// Advances through the current phase until it times out.
fn run_out_phase(timer: &mut Timer, now: &mut u64) -> TimerPhase {
    *now += timer.phase_duration_ms();
    assert!(timer.is_complete(*now));
    timer.advance_phase(*now).next
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_start_then_query() {
    let mut timer = Timer::default();
    timer.start(0);

    assert_eq!(timer.elapsed_ms(1000), 1000);
    assert_eq!(timer.remaining_ms(1000), 1_499_000);
}

#[test]
fn test_paused_gap_not_counted() {
    let mut timer = Timer::default();
    timer.start(0);
    timer.pause(500);
    timer.resume(2000);

    assert_eq!(timer.elapsed_ms(2500), 1000);
}

#[test]
fn test_stop_zeroes_elapsed() {
    let mut timer = Timer::default();
    timer.start(0);
    timer.stop();

    for now in [0, 1, 10_000, u64::MAX] {
        assert_eq!(timer.elapsed_ms(now), 0);
    }
    assert_eq!(timer.state(), TimerState::Stopped);
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn test_accumulation_is_additive() {
    // (resume_at, pause_at) pairs; running intervals total 100+250+5+1000
    let intervals = [(0u64, 100u64), (400, 650), (700, 705), (10_000, 11_000)];
    let mut timer = Timer::default();

    let mut expected = 0;
    for (i, &(from, to)) in intervals.iter().enumerate() {
        if i == 0 {
            timer.start(from);
        } else {
            timer.resume(from);
        }
        assert_eq!(timer.elapsed_ms(from), expected);
        timer.pause(to);
        expected += to - from;
        assert_eq!(timer.elapsed_ms(to + 5000), expected);
    }
    assert_eq!(expected, 1355);

    timer.resume(20_000);
    assert_eq!(timer.elapsed_ms(20_045), 1400);
}

#[test]
fn test_remaining_complements_elapsed() {
    let mut timer = create_fast_timer();
    timer.start(1000);
    let duration = timer.phase_duration_ms();

    for now in (1000..=61_000).step_by(7_000) {
        assert_eq!(timer.remaining_ms(now) + timer.elapsed_ms(now), duration);
    }
    // Past the end remaining saturates at zero
    assert_eq!(timer.remaining_ms(1000 + duration + 1), 0);
}

#[test]
fn test_pause_is_idempotent() {
    let mut once = Timer::default();
    once.start(0);
    once.pause(700);

    let mut twice = once.clone();
    twice.pause(900);

    assert_eq!(once, twice);
    assert_eq!(twice.elapsed_ms(5000), 700);
}

#[test]
fn test_phase_cycle_law() {
    let mut timer = create_fast_timer();
    let mut now = 0;
    timer.start(now);

    let mut breaks = Vec::new();
    for _ in 0..5 {
        assert_eq!(timer.phase(), TimerPhase::Focus);
        breaks.push(run_out_phase(&mut timer, &mut now));
        assert_eq!(run_out_phase(&mut timer, &mut now), TimerPhase::Focus);
    }

    assert_eq!(
        breaks,
        vec![
            TimerPhase::Break,
            TimerPhase::Break,
            TimerPhase::Break,
            TimerPhase::LongBreak,
            TimerPhase::Break,
        ]
    );
    assert_eq!(timer.completed_focus_sessions(), 5);
}

#[test]
fn test_stopwatch_never_completes() {
    let mut timer = create_fast_timer();
    timer.set_mode(TimerMode::Stopwatch);
    timer.start(0);

    for now in [0, 59_999, 60_000, 3_600_000, u64::MAX] {
        assert_eq!(timer.remaining_ms(now), 0);
        assert!(!timer.is_complete(now));
    }
    assert_eq!(timer.elapsed_ms(3_600_000), 3_600_000);
}

#[test]
fn test_out_of_order_commands_are_accepted() {
    let mut timer = Timer::default();
    timer.resume(100);
    timer.pause(200);
    assert_eq!(timer.state(), TimerState::Stopped);

    timer.start(300);
    timer.pause(350);
    // Starting a paused timer keeps the banked 50ms
    timer.start(400);
    assert_eq!(timer.elapsed_ms(500), 150);
}

// ============================================================================
// Clock Tests
// ============================================================================

#[test]
fn test_manual_clock_drives_timer() {
    let clock = ManualClock::new(10_000);
    let mut timer = create_fast_timer();
    timer.start(clock.now_ms());

    clock.advance(60_000);
    assert!(timer.is_complete(clock.now_ms()));

    let end = timer.advance_phase(clock.now_ms());
    assert_eq!(end.phase, TimerPhase::Focus);
    assert_eq!(end.elapsed_ms, 60_000);
    assert_eq!(end.next, TimerPhase::Break);
}
