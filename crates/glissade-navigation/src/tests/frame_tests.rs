use super::*;

use glissade_graphics::{Rect, Size};

const CURRENT: Rect = Rect::new(0.0, 0.0, 320.0, 568.0);

fn query(
    from_hides: bool,
    to_hides: bool,
    under_top: bool,
    under_bottom: bool,
    tab_hidden: bool,
) -> PopLayoutQuery {
    PopLayoutQuery {
        from_hides_navigation_bar: from_hides,
        to_hides_navigation_bar: to_hides,
        extends_under_top_bar: under_top,
        extends_under_bottom_bar: under_bottom,
        tab_bar_hidden: tab_hidden,
    }
}

#[test]
fn incoming_frame_decision_table() {
    // (from_hides, to_hides, under_top, under_bottom, tab_hidden) -> frame
    let cases = [
        // Navigation bar was hidden, incoming screen shows it.
        ((true, false, false, false, false), (0.0, 0.0, 320.0, 568.0)),
        ((true, false, false, false, true), (0.0, 64.0, 320.0, 504.0)),
        ((true, false, false, true, true), (0.0, 64.0, 320.0, 519.0)),
        ((true, false, true, false, true), (0.0, 64.0, 320.0, 504.0)),
        // Navigation bar hidden on both sides.
        ((true, true, false, false, false), (0.0, 0.0, 320.0, 568.0)),
        ((true, true, false, false, true), (0.0, 0.0, 320.0, 568.0)),
        ((true, true, false, true, true), (0.0, 64.0, 320.0, 455.0)),
        ((true, true, true, false, true), (0.0, 64.0, 320.0, 504.0)),
        // Navigation bar visible throughout.
        ((false, false, false, false, false), (0.0, 0.0, 320.0, 519.0)),
        ((false, false, false, false, true), (0.0, 64.0, 320.0, 568.0)),
        ((false, false, false, true, true), (0.0, 64.0, 320.0, 519.0)),
        ((false, false, true, false, true), (0.0, 64.0, 320.0, 568.0)),
    ];

    for ((from_hides, to_hides, top, bottom, tab_hidden), (x, y, w, h)) in cases {
        let result = incoming_view_frame(
            CURRENT,
            &query(from_hides, to_hides, top, bottom, tab_hidden),
        );
        assert_eq!(
            result,
            Rect::new(x, y, w, h),
            "flags ({from_hides}, {to_hides}, {top}, {bottom}, {tab_hidden})"
        );
    }
}

#[test]
fn extended_under_both_bars_keeps_current_frame() {
    let shifted = Rect::new(0.0, 20.0, 320.0, 548.0);
    for from_hides in [false, true] {
        for to_hides in [false, true] {
            let result =
                incoming_view_frame(shifted, &query(from_hides, to_hides, true, true, true));
            assert_eq!(result, shifted);
        }
    }
}

#[test]
fn tab_bar_overlay_placement_table() {
    let view = Rect::new(0.0, 0.0, 320.0, 568.0);
    let bar = Size::new(320.0, 49.0);

    // Hidden navigation bar, tab bar visible on the incoming screen.
    let frame = tab_bar_overlay_frame(view, bar, &query(true, false, false, false, false));
    assert_eq!(frame, Rect::new(0.0, 519.0, 320.0, 49.0));

    // Hidden navigation bar, content not extended under the bottom bar.
    let frame = tab_bar_overlay_frame(view, bar, &query(true, false, false, false, true));
    assert_eq!(frame, Rect::new(0.0, 504.0, 320.0, 49.0));

    // Content extended under the bottom bar.
    let frame = tab_bar_overlay_frame(view, bar, &query(false, false, false, true, true));
    assert_eq!(frame, Rect::new(0.0, 519.0, 320.0, 49.0));

    // Neither applies: the overlay rides just below the view.
    let frame = tab_bar_overlay_frame(view, bar, &query(false, false, false, false, true));
    assert_eq!(frame, Rect::new(0.0, 568.0, 320.0, 49.0));
}
