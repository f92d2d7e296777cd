use super::*;

// =============================================================
// duplication
// =============================================================

#[test]
fn copies_fill_minimum_rendered_count() {
    assert_eq!(copies_for(0), 0);
    assert_eq!(copies_for(1), 20);
    assert_eq!(copies_for(6), 4);
    assert_eq!(copies_for(7), 3);
    assert_eq!(copies_for(40), 3);
}

#[test]
fn duplicate_repeats_in_order() {
    let out = duplicate(&["a", "b", "c", "d", "e", "f", "g"]);
    assert_eq!(out.len(), 21);
    assert_eq!(&out[..7], &out[7..14]);
    assert_eq!(out[7], "a");
    assert!(duplicate::<u8>(&[]).is_empty());
}

#[test]
fn set_width_is_one_copy_of_rendered_width() {
    // 7 items x 3 copies at 220px each.
    let width = set_width(21.0 * 220.0, 7);
    assert!((width - 7.0 * 220.0).abs() < 1e-9);
    assert_eq!(set_width(1000.0, 0), 0.0);
}

// =============================================================
// advance
// =============================================================

#[test]
fn advance_uses_base_and_hover_speeds() {
    let mut m = MarqueeState::new(5);
    m.advance(1000.0);
    assert!((m.offset - BASE_SPEED_PX).abs() < 1e-9);
    m.hovering = true;
    m.advance(1000.0);
    assert!((m.offset - (BASE_SPEED_PX + HOVER_SPEED_PX)).abs() < 1e-9);
}

#[test]
fn wrap_keeps_remainder_instead_of_resetting() {
    let mut m = MarqueeState::new(5);
    m.offset = 999.5;
    let offset = m.advance(1000.0);
    // 999.5 + 1.2 = 1000.7 -> 0.7, not 0.
    assert!((offset - 0.7).abs() < 1e-9);
}

#[test]
fn wrap_keeps_offset_below_set_width_over_many_frames() {
    let mut m = MarqueeState::new(3);
    for _ in 0..10_000 {
        let offset = m.advance(333.0);
        assert!((0.0..333.0).contains(&offset));
    }
}

#[test]
fn set_narrower_than_one_step_still_wraps_into_range() {
    let mut m = MarqueeState::new(1);
    for _ in 0..10 {
        let offset = m.advance(0.5);
        assert!((0.0..0.5).contains(&offset), "{offset}");
    }
}

#[test]
fn zero_set_width_never_wraps() {
    let mut m = MarqueeState::new(3);
    m.advance(0.0);
    m.advance(0.0);
    assert!((m.offset - 2.0 * BASE_SPEED_PX).abs() < 1e-9);
}

// =============================================================
// modal
// =============================================================

#[test]
fn opening_modal_stops_the_loop() {
    let mut m = MarqueeState::new(4);
    assert!(m.is_running());
    m.open(9);
    assert_eq!(m.selected, Some(1));
    assert!(!m.is_running());
    let before = m.offset;
    assert_eq!(m.advance(100.0), before);
    m.close();
    assert!(m.is_running());
}

#[test]
fn empty_strip_never_runs() {
    let mut m = MarqueeState::new(0);
    assert!(!m.is_running());
    m.open(0);
    assert_eq!(m.selected, None);
    assert_eq!(m.item_count(), 0);
}
