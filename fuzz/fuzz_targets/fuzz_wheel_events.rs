#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wheelpick_core::event::{
    DeltaMode, Event, PointerInput, PointerKind, PointerPhase, WheelInput,
};
use wheelpick_core::{Duration, Instant};
use wheelpick_widgets::wheel::{Wheel, WheelItem, WheelPhase};

#[derive(Debug, Arbitrary)]
enum Op {
    Wheel { delta: i16, mode: u8 },
    Pointer { touch: bool, phase: u8, id: u8, y: i16 },
    Click(u8),
    Advance(u16),
    Focus(bool),
    SetValue(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    len: u8,
    value: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let len = usize::from(input.len % 64);
    let items = (0..len).map(WheelItem::from).collect();
    let mut wheel = Wheel::new(items, Some(&usize::from(input.value)));
    let mut now = Instant::now();

    for op in input.ops.iter().take(512) {
        let authoritative = wheel.value().copied();
        let change = match *op {
            Op::Wheel { delta, mode } => {
                let mode = match mode % 3 {
                    0 => DeltaMode::Pixel,
                    1 => DeltaMode::Line,
                    _ => DeltaMode::Page,
                };
                let event = Event::Wheel(WheelInput {
                    delta_y: f64::from(delta),
                    mode,
                });
                wheel.handle_event(&event, now)
            }
            Op::Pointer { touch, phase, id, y } => {
                let kind = if touch { PointerKind::Touch } else { PointerKind::Mouse };
                let phase = match phase % 4 {
                    0 => PointerPhase::Down,
                    1 => PointerPhase::Move,
                    2 => PointerPhase::Up,
                    _ => PointerPhase::Cancel,
                };
                let pointer = PointerInput::new(kind, phase, f64::from(y)).with_id(u32::from(id));
                wheel.handle_event(&Event::Pointer(pointer), now)
            }
            Op::Click(index) => wheel.select_index(usize::from(index), now),
            Op::Advance(ms) => {
                now += Duration::from_millis(u64::from(ms % 1000));
                wheel.tick(now)
            }
            Op::Focus(focused) => wheel.handle_event(&Event::Focus(focused), now),
            Op::SetValue(value) => {
                wheel.set_value(Some(&usize::from(value)));
                None
            }
        };

        // Invariants after every operation:
        match wheel.current_index() {
            Some(index) => assert!(index < len, "index {index} out of {len}"),
            None => assert_eq!(len, 0, "no index on a non-empty wheel"),
        }
        assert!(wheel.offset().is_finite(), "non-finite offset");
        if let Some(change) = change {
            assert!(len > 0, "commit from an empty wheel");
            assert_ne!(wheel.phase(), WheelPhase::Dragging, "commit while dragging");
            assert_ne!(Some(change.value), authoritative, "commit of the current value");
            assert_eq!(wheel.value(), Some(&change.value));
        }
    }

    // Releasing and running frames always reaches rest.
    wheel.cancel();
    for _ in 0..1000 {
        if wheel.next_wakeup().is_none() {
            break;
        }
        now += Duration::from_millis(16);
        wheel.tick(now);
    }
    assert_eq!(wheel.phase(), WheelPhase::Idle);
    if let Some(index) = wheel.current_index() {
        assert_eq!(wheel.offset(), wheel.position().rest_offset(index));
    }
});
