#![forbid(unsafe_code)]

//! End-to-end wheel scenarios on a simulated frame clock.
//!
//! Run:
//!   cargo test -p wheelpick-widgets --test wheel_scenarios

use wheelpick_core::Duration;
use wheelpick_core::event::{Event, PointerInput, WheelInput};
use wheelpick_widgets::testing::FrameDriver;
use wheelpick_widgets::wheel::{Wheel, WheelChange, WheelItem, WheelPhase};

fn items(n: i32) -> Vec<WheelItem<i32>> {
    (1..=n).map(WheelItem::from).collect()
}

fn driver(n: i32, value: i32) -> FrameDriver<i32> {
    FrameDriver::new(Wheel::new(items(n), Some(&value)))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Drag without fling: hold still before releasing so the release velocity
/// is zero.
fn slow_mouse_drag(d: &mut FrameDriver<i32>, from: f64, to: f64) {
    d.mouse_hold_drag(from, to, 6);
    d.advance(ms(100));
    d.send(PointerInput::mouse_move(to));
    d.send(PointerInput::mouse_up(to));
}

fn assert_at_rest(d: &FrameDriver<i32>, index: usize) {
    let wheel = d.wheel();
    assert_eq!(wheel.phase(), WheelPhase::Idle);
    assert_eq!(wheel.current_index(), Some(index));
    assert_eq!(wheel.offset(), -(index as f64) * 40.0);
}

// ============================================================================
// Mount and props
// ============================================================================

#[test]
fn mount_selects_matching_value_without_commit() {
    for value in 1..=5 {
        let d = driver(5, value);
        assert_at_rest(&d, (value - 1) as usize);
        assert!(d.changes().is_empty());
    }
}

#[test]
fn mount_without_match_rests_on_first_item() {
    let d = driver(5, 99);
    assert_at_rest(&d, 0);
    let none: FrameDriver<i32> = FrameDriver::new(Wheel::new(items(5), None));
    assert_at_rest(&none, 0);
}

#[test]
fn rerender_with_identical_props_is_idempotent() {
    let mut d = driver(5, 3);
    d.wheel_mut().set_items(items(5));
    d.wheel_mut().set_value(Some(&3));
    d.settle();
    assert_at_rest(&d, 2);
    assert!(d.changes().is_empty());
}

#[test]
fn external_value_change_jumps_without_commit() {
    let mut d = driver(5, 3);
    d.wheel_mut().set_value(Some(&5));
    assert_at_rest(&d, 4);
    assert_eq!(d.wheel().next_wakeup(), None);
    assert!(d.changes().is_empty());
}

#[test]
fn external_value_change_cancels_drag() {
    let mut d = driver(5, 1);
    d.mouse_hold_drag(100.0, 20.0, 4);
    d.wheel_mut().set_value(Some(&4));
    assert_at_rest(&d, 3);
    d.send(PointerInput::mouse_up(20.0));
    d.settle();
    assert!(d.changes().is_empty());
}

#[test]
fn replacing_items_reseeds_from_value() {
    let mut d = driver(5, 3);
    let shuffled = vec![
        WheelItem::from(5),
        WheelItem::from(4),
        WheelItem::from(3),
        WheelItem::from(2),
        WheelItem::from(1),
    ];
    d.wheel_mut().set_items(shuffled);
    assert_at_rest(&d, 2);

    d.wheel_mut().set_items(items(2));
    assert_at_rest(&d, 1);
    assert!(d.changes().is_empty());
}

// ============================================================================
// Direct selection
// ============================================================================

#[test]
fn click_label_five_commits_once() {
    let mut d = driver(5, 3);
    assert_at_rest(&d, 2);
    d.click(4);
    d.settle();
    assert_eq!(d.changes(), &[WheelChange { index: 4, value: 5 }]);
    assert_at_rest(&d, 4);
}

#[test]
fn click_commits_before_animation_finishes() {
    let mut d = driver(5, 1);
    d.click(1);
    let mut frames = 0;
    while d.changes().is_empty() {
        d.frame();
        frames += 1;
    }
    assert_eq!(d.wheel().phase(), WheelPhase::Animating);
    assert!(frames >= 4, "commit waits for 30% progress, got {frames} frames");
    d.settle();
    assert_eq!(d.committed_values(), vec![2]);
}

#[test]
fn click_on_every_index_commits_exactly_that_value() {
    for k in 0..5usize {
        let mut d = driver(5, 3);
        d.click(k);
        d.settle();
        if k == 2 {
            assert!(d.changes().is_empty());
        } else {
            assert_eq!(d.committed_values(), vec![k as i32 + 1]);
        }
        assert_at_rest(&d, k);
    }
}

#[test]
fn tap_selects_item_under_pointer() {
    let mut d = driver(5, 1);
    // Viewport y=180 is two rows below the highlight band.
    d.send(PointerInput::mouse_down(180.0));
    d.advance(ms(50));
    d.send(PointerInput::mouse_up(181.0));
    d.settle();
    assert_eq!(d.committed_values(), vec![3]);
    assert_at_rest(&d, 2);
}

#[test]
fn tap_on_empty_space_settles_in_place() {
    let mut d = driver(5, 1);
    d.send(PointerInput::touch_start(10.0));
    d.send(PointerInput::touch_end(10.0));
    d.settle();
    assert!(d.changes().is_empty());
    assert_at_rest(&d, 0);
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn drag_never_commits_mid_gesture() {
    let mut d = driver(10, 1);
    d.mouse_hold_drag(190.0, 10.0, 12);
    assert_eq!(d.wheel().phase(), WheelPhase::Dragging);
    assert_eq!(d.wheel().current_index(), Some(5));
    d.advance(ms(500));
    assert!(d.changes().is_empty());
    assert_eq!(d.wheel().next_wakeup(), None);
}

#[test]
fn drag_commits_once_on_release() {
    let mut d = driver(10, 1);
    slow_mouse_drag(&mut d, 150.0, 70.0);
    d.settle();
    assert_eq!(d.committed_values(), vec![3]);
    assert_at_rest(&d, 2);
}

#[test]
fn drag_release_rounds_to_nearest() {
    let mut d = driver(10, 1);
    // -70px: 1.75 rows
    slow_mouse_drag(&mut d, 150.0, 80.0);
    d.settle();
    assert_eq!(d.committed_values(), vec![3]);

    let mut d = driver(10, 1);
    // -50px: 1.25 rows
    slow_mouse_drag(&mut d, 150.0, 100.0);
    d.settle();
    assert_eq!(d.committed_values(), vec![2]);
}

#[test]
fn flick_carries_momentum_past_release_point() {
    let mut d = driver(20, 1);
    // 80px in 4 frames, released immediately: ~-1.25 px/ms
    d.touch_drag(150.0, 70.0, 4);
    d.settle();
    let index = d.wheel().current_index().unwrap();
    assert!(index > 2, "momentum should carry past index 2, got {index}");
    assert_eq!(d.changes().len(), 1);
    assert_at_rest(&d, index);
}

#[test]
fn drag_past_start_settles_on_first_item() {
    let mut d = driver(5, 2);
    slow_mouse_drag(&mut d, 0.0, 1000.0);
    d.settle();
    assert_eq!(d.committed_values(), vec![1]);
    assert_at_rest(&d, 0);
}

#[test]
fn drag_past_end_settles_on_last_item() {
    let mut d = driver(5, 1);
    slow_mouse_drag(&mut d, 200.0, -1000.0);
    d.settle();
    assert_eq!(d.committed_values(), vec![5]);
    assert_at_rest(&d, 4);
}

#[test]
fn drag_overshoot_is_damped() {
    let mut d = driver(5, 1);
    d.mouse_hold_drag(0.0, 100.0, 2);
    assert_eq!(d.wheel().offset(), 50.0);
}

#[test]
fn pointer_capture_ignores_other_touches() {
    let mut d = driver(10, 1);
    d.send(PointerInput::touch_start(150.0).with_id(1));
    d.advance(ms(16));
    d.send(PointerInput::touch_move(110.0).with_id(1));
    let offset = d.wheel().offset();
    d.send(PointerInput::touch_start(0.0).with_id(2));
    d.send(PointerInput::touch_move(0.0).with_id(2));
    d.send(PointerInput::touch_end(0.0).with_id(2));
    assert_eq!(d.wheel().offset(), offset);
    assert_eq!(d.wheel().phase(), WheelPhase::Dragging);
    d.advance(ms(100));
    d.send(PointerInput::touch_move(110.0).with_id(1));
    d.send(PointerInput::touch_end(110.0).with_id(1));
    d.settle();
    assert_eq!(d.committed_values(), vec![2]);
}

#[test]
fn platform_cancel_settles_without_momentum() {
    let mut d = driver(20, 1);
    d.mouse_hold_drag(150.0, 60.0, 3);
    d.send(Event::Pointer(PointerInput::new(
        wheelpick_core::event::PointerKind::Mouse,
        wheelpick_core::event::PointerPhase::Cancel,
        60.0,
    )));
    d.settle();
    // -90px rounds to index 2 with no fling
    assert_at_rest(&d, 2);
    assert_eq!(d.committed_values(), vec![3]);
}

// ============================================================================
// Wheel device
// ============================================================================

#[test]
fn single_small_notch_snaps_back() {
    let mut d = driver(10, 1);
    d.send(WheelInput::pixels(100.0));
    assert_eq!(d.wheel().phase(), WheelPhase::Scrolling);
    d.settle();
    assert!(d.changes().is_empty());
    assert_at_rest(&d, 0);
}

#[test]
fn sub_threshold_trackpad_jitter_does_not_move() {
    let mut d = driver(10, 3);
    d.send(WheelInput::pixels(2.0));
    d.advance(ms(5));
    d.send(WheelInput::pixels(2.0));
    assert_eq!(d.wheel().offset(), -80.0);
    d.settle();
    assert!(d.changes().is_empty());
    assert_at_rest(&d, 2);
}

#[test]
fn burst_of_notches_carries_forward_and_commits_once() {
    let mut d = driver(10, 1);
    for _ in 0..4 {
        d.scroll(100.0);
    }
    assert!(d.changes().is_empty());
    // 12.5 + 3 * 13.125 px scrolled: nearest is 1, momentum adds one row
    assert_eq!(d.wheel().position().nearest_index(), 1);
    d.settle();
    assert_eq!(d.committed_values(), vec![3]);
    assert_at_rest(&d, 2);
}

#[test]
fn wheel_momentum_carries_no_further_than_the_gesture_scrolled() {
    let mut d = driver(30, 1);
    for _ in 0..6 {
        d.scroll(100.0);
    }
    let scrolled = -d.wheel().offset();
    let nearest = d.wheel().position().nearest_index();
    assert_eq!(nearest, 2);
    d.settle();
    let settled = d.wheel().current_index().unwrap();
    assert!(settled >= nearest, "settled {settled} behind nearest {nearest}");
    let reach = (scrolled / 40.0).round() as usize;
    assert!(settled - nearest <= reach, "settled {settled}, nearest {nearest}, scrolled {scrolled}");
    assert!(settled <= 4);
    assert_eq!(d.committed_values().len(), 1);
}

#[test]
fn line_mode_delta_is_scaled_by_item_height() {
    let mut d = driver(10, 1);
    d.send(WheelInput::lines(1.0));
    assert!((d.wheel().offset() + 5.0).abs() < 1e-9);
}

#[test]
fn debounce_restarts_on_every_event() {
    let mut d = driver(10, 1);
    for _ in 0..10 {
        d.send(WheelInput::pixels(3.0));
        d.advance(ms(90));
    }
    assert_eq!(d.wheel().phase(), WheelPhase::Scrolling);
    d.settle();
    assert_eq!(d.wheel().phase(), WheelPhase::Idle);
}

#[test]
fn reverse_jitter_never_flings_backward() {
    let mut d = driver(20, 6);
    d.send(WheelInput::pixels(100.0));
    for _ in 0..20 {
        d.advance(ms(1));
        d.send(WheelInput::pixels(-1.0));
    }
    let nearest = d.wheel().position().nearest_index();
    d.settle();
    let settled = d.wheel().current_index().unwrap();
    assert!(settled >= nearest, "settled {settled} behind nearest {nearest}");
    assert_at_rest(&d, 5);
    assert!(d.changes().is_empty());
}

#[test]
fn wheel_overscroll_is_capped() {
    let mut d = driver(5, 1);
    for _ in 0..50 {
        d.send(WheelInput::pixels(-100.0));
        d.advance(ms(5));
    }
    assert!(d.wheel().offset() <= 40.0);
    assert!(d.wheel().offset() > 0.0);
    d.settle();
    assert_at_rest(&d, 0);
    assert!(d.changes().is_empty());
}

#[test]
fn wheel_is_ignored_during_drag() {
    let mut d = driver(10, 1);
    d.mouse_hold_drag(100.0, 60.0, 2);
    let offset = d.wheel().offset();
    d.send(WheelInput::pixels(100.0));
    assert_eq!(d.wheel().offset(), offset);
    assert_eq!(d.wheel().phase(), WheelPhase::Dragging);
}

#[test]
fn wheel_interrupts_animation() {
    let mut d = driver(10, 1);
    d.click(5);
    d.frame();
    assert_eq!(d.wheel().phase(), WheelPhase::Animating);
    d.send(WheelInput::pixels(100.0));
    assert_eq!(d.wheel().phase(), WheelPhase::Scrolling);
    d.settle();
    assert!(d.changes().len() <= 1);
    assert!(!d.committed_values().contains(&6));
}

// ============================================================================
// Supersession and cancellation
// ============================================================================

#[test]
fn new_drag_supersedes_animation() {
    let mut d = driver(5, 1);
    d.click(4);
    d.frame();
    assert!(d.changes().is_empty());
    d.send(PointerInput::mouse_down(100.0));
    assert_eq!(d.wheel().phase(), WheelPhase::Dragging);
    d.advance(ms(16));
    d.send(PointerInput::mouse_move(60.0));
    d.advance(ms(100));
    d.send(PointerInput::mouse_move(60.0));
    d.send(PointerInput::mouse_up(60.0));
    d.settle();
    assert_eq!(d.committed_values(), vec![2]);
    assert_at_rest(&d, 1);
}

#[test]
fn pointer_down_supersedes_pending_wheel_gesture() {
    let mut d = driver(10, 1);
    d.scroll(100.0);
    d.send(PointerInput::mouse_down(100.0));
    assert_eq!(d.wheel().phase(), WheelPhase::Dragging);
    d.advance(ms(300));
    assert!(d.changes().is_empty());
    d.send(PointerInput::mouse_up(100.0));
    d.settle();
    assert_eq!(d.wheel().phase(), WheelPhase::Idle);
}

#[test]
fn focus_loss_cancels_animation_silently() {
    let mut d = driver(5, 1);
    d.click(4);
    d.frame();
    d.send(Event::Focus(false));
    assert_eq!(d.wheel().phase(), WheelPhase::Idle);
    assert_eq!(d.wheel().next_wakeup(), None);
    d.advance(ms(500));
    assert!(d.changes().is_empty());
}

// ============================================================================
// Empty list
// ============================================================================

#[test]
fn empty_list_never_commits() {
    let mut d: FrameDriver<i32> = FrameDriver::new(Wheel::new(Vec::new(), None));
    d.click(0);
    d.scroll(100.0);
    d.mouse_drag(0.0, 100.0, 3);
    d.send(PointerInput::touch_start(50.0));
    d.send(PointerInput::touch_end(50.0));
    d.settle();
    assert!(d.changes().is_empty());
    assert_eq!(d.wheel().current_index(), None);
    assert!(d.wheel().project().is_empty());
}
