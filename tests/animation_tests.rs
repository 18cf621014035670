//! Animation Clip Tests
//!
//! Tests for:
//! - Initial state and construction warnings (empty frame list, bad fps)
//! - update(): frame-rate-independent stepping, multi-step catch-up,
//!   looping wrap-around and cycle closure, non-looping clamp-and-finish
//! - play / pause / reset state transitions
//! - set_speed clamping, speed-zero freeze vs pause
//! - set_looping un-finishing, set_fps fallback and position preservation
//! - current_frame sentinel for empty clips

use flipbook::animation::AnimationClip;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Construction & initial state
// ============================================================================

#[test]
fn new_clip_starts_playing_at_frame_zero() {
    let clip = AnimationClip::new("idle", vec![3, 4, 5], 10.0);
    assert_eq!(clip.name(), "idle");
    assert_eq!(clip.current_frame_index(), 0);
    assert_eq!(clip.current_frame(), Some(3));
    assert!(!clip.is_paused());
    assert!(!clip.is_finished());
    assert!(clip.is_looping());
    assert!(approx(clip.speed(), 1.0));
    assert_eq!(clip.frame_count(), 3);
}

#[test]
fn fps_is_derived_from_frame_duration() {
    let clip = AnimationClip::new("idle", vec![0, 1], 4.0);
    assert!(approx(clip.fps(), 4.0));
}

#[test]
fn non_positive_fps_falls_back_to_ten() {
    init_logs();
    let clip = AnimationClip::new("bad", vec![0, 1], 0.0);
    assert!(approx(clip.fps(), 10.0));

    let clip = AnimationClip::new("worse", vec![0, 1], -5.0);
    assert!(approx(clip.fps(), 10.0));
}

#[test]
fn repeated_frame_indices_are_allowed() {
    let mut clip = AnimationClip::new("blink", vec![2, 2, 7], 2.0);
    clip.update(0.5);
    assert_eq!(clip.current_frame(), Some(2));
    clip.update(0.5);
    assert_eq!(clip.current_frame(), Some(7));
}

// ============================================================================
// update(): stepping
// ============================================================================

#[test]
fn update_consumes_multiple_whole_steps() {
    // 4 frames at 10 fps, one 0.25 s tick: two full 0.1 s steps consumed,
    // sequence position lands on 2.
    let mut clip = AnimationClip::new("fire", vec![0, 1, 2, 3], 10.0);
    clip.update(0.25);
    assert_eq!(clip.current_frame_index(), 2);
    assert_eq!(clip.current_frame(), Some(2));
    assert!(!clip.is_finished());
}

#[test]
fn update_below_frame_duration_holds_position() {
    let mut clip = AnimationClip::new("fire", vec![0, 1, 2, 3], 10.0);
    clip.update(0.05);
    assert_eq!(clip.current_frame_index(), 0);
}

#[test]
fn cycle_closure_is_split_independent() {
    // A looping 4-frame clip returns to its starting frame after exactly one
    // cycle of wall-clock time, however the time is split across calls.
    let mut whole = AnimationClip::new("a", vec![9, 8, 7, 6], 10.0);
    let start = whole.current_frame();
    for _ in 0..4 {
        whole.update(0.1);
    }
    assert_eq!(whole.current_frame(), start);

    let mut halves = AnimationClip::new("b", vec![9, 8, 7, 6], 10.0);
    halves.update(0.2);
    halves.update(0.2);
    assert_eq!(halves.current_frame(), start);
}

#[test]
fn looping_clip_wraps_within_a_single_update() {
    // 2 frames at 2 fps; 2.5 s covers five 0.5 s steps: 1, 0, 1, 0, 1.
    let mut clip = AnimationClip::new("spin", vec![0, 1], 2.0);
    clip.update(2.5);
    assert_eq!(clip.current_frame_index(), 1);
    assert!(!clip.is_finished());
}

// ============================================================================
// update(): clamp-and-finish
// ============================================================================

#[test]
fn non_looping_clip_clamps_and_finishes() {
    // frames [5, 6] at 2 fps, one 1.2 s tick: 0.5 s consumed (→ index 1),
    // another 0.5 s would step past the end → clamp, finish.
    let mut clip = AnimationClip::new("die", vec![5, 6], 2.0);
    clip.set_looping(false);
    clip.update(1.2);

    assert_eq!(clip.current_frame_index(), 1);
    assert_eq!(clip.current_frame(), Some(6));
    assert!(clip.is_finished());
}

#[test]
fn finished_clip_stays_finished_and_still() {
    let mut clip = AnimationClip::new("die", vec![5, 6], 2.0);
    clip.set_looping(false);
    clip.update(1.2);
    assert!(clip.is_finished());

    clip.update(10.0);
    assert!(clip.is_finished());
    assert_eq!(clip.current_frame(), Some(6));
}

#[test]
fn non_looping_never_reports_past_the_last_frame() {
    let mut clip = AnimationClip::new("once", vec![1, 2, 3], 5.0);
    clip.set_looping(false);

    let mut t = 0.0;
    while t < 2.0 {
        clip.update(0.07);
        t += 0.07;
        assert!(clip.current_frame_index() < 3);
    }
    assert!(clip.is_finished());
}

// ============================================================================
// play / pause / reset
// ============================================================================

#[test]
fn pause_freezes_position() {
    let mut clip = AnimationClip::new("walk", vec![0, 1, 2], 10.0);
    clip.update(0.1);
    assert_eq!(clip.current_frame_index(), 1);

    clip.pause();
    assert!(clip.is_paused());
    clip.update(5.0);
    assert_eq!(clip.current_frame_index(), 1);

    clip.play();
    assert!(!clip.is_paused());
    clip.update(0.1);
    assert_eq!(clip.current_frame_index(), 2);
}

#[test]
fn play_on_a_finished_clip_restarts_it() {
    let mut clip = AnimationClip::new("once", vec![0, 1], 2.0);
    clip.set_looping(false);
    clip.update(1.2);
    assert!(clip.is_finished());

    clip.play();
    assert!(!clip.is_finished());
    assert_eq!(clip.current_frame_index(), 0);
}

#[test]
fn reset_rewinds_and_clears_flags() {
    let mut clip = AnimationClip::new("walk", vec![0, 1, 2], 10.0);
    clip.update(0.2);
    clip.pause();

    clip.reset();
    assert_eq!(clip.current_frame_index(), 0);
    assert!(!clip.is_paused());
    assert!(!clip.is_finished());
}

// ============================================================================
// set_speed
// ============================================================================

#[test]
fn speed_scales_time_accumulation() {
    // 2 fps, speed 2: a 0.5 s tick covers two steps.
    let mut clip = AnimationClip::new("run", vec![0, 1, 2, 3], 2.0);
    clip.set_speed(2.0);
    clip.update(0.5);
    assert_eq!(clip.current_frame_index(), 2);
}

#[test]
fn negative_speed_clamps_to_zero() {
    init_logs();
    let mut clip = AnimationClip::new("run", vec![0, 1, 2], 10.0);
    clip.set_speed(-1.0);
    assert!(approx(clip.speed(), 0.0));

    clip.update(100.0);
    assert_eq!(clip.current_frame_index(), 0);
}

#[test]
fn speed_zero_freezes_without_pausing() {
    let mut clip = AnimationClip::new("stuck", vec![0, 1], 10.0);
    clip.set_speed(0.0);
    clip.update(5.0);
    assert_eq!(clip.current_frame_index(), 0);
    assert!(!clip.is_paused());
}

// ============================================================================
// set_looping / set_fps
// ============================================================================

#[test]
fn enabling_looping_unfinishes_a_clamped_clip() {
    let mut clip = AnimationClip::new("once", vec![4, 5], 2.0);
    clip.set_looping(false);
    clip.update(1.2);
    assert!(clip.is_finished());

    clip.set_looping(true);
    assert!(!clip.is_finished());

    // Resumes advancing from the held last frame.
    clip.update(0.5);
    assert_eq!(clip.current_frame(), Some(4));
}

#[test]
fn set_fps_keeps_the_current_position() {
    let mut clip = AnimationClip::new("walk", vec![0, 1, 2, 3], 10.0);
    clip.update(0.1);
    assert_eq!(clip.current_frame_index(), 1);

    clip.set_fps(5.0);
    assert!(approx(clip.fps(), 5.0));
    assert_eq!(clip.current_frame_index(), 1);

    // New rate applies from here: a 0.2 s step now advances one frame.
    clip.update(0.2);
    assert_eq!(clip.current_frame_index(), 2);
}

#[test]
fn set_fps_rejects_non_positive_values() {
    init_logs();
    let mut clip = AnimationClip::new("walk", vec![0, 1], 20.0);
    clip.set_fps(-3.0);
    assert!(approx(clip.fps(), 10.0));
}

// ============================================================================
// Empty clips
// ============================================================================

#[test]
fn empty_clip_is_inert() {
    init_logs();
    let mut clip = AnimationClip::new("ghost", vec![], 10.0);
    assert_eq!(clip.frame_count(), 0);
    assert_eq!(clip.current_frame(), None);

    clip.update(1.0);
    assert_eq!(clip.current_frame_index(), 0);
    assert_eq!(clip.current_frame(), None);
    assert!(!clip.is_finished());
}
