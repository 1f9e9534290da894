use circular_slider::gui::slider::color::{HexColor, calculate_arc_color};
use circular_slider::gui::slider::geometry::{AngleRange, ArcSegment, Point, normalize_angle};
use circular_slider::gui::slider::gesture::{self, Handle};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

const EPS: f64 = 1e-9;

fn arb_angle() -> impl Strategy<Value = f64> {
    -10.0 * TAU..10.0 * TAU
}

fn arb_range() -> impl Strategy<Value = AngleRange> {
    (arb_angle(), arb_angle()).prop_map(|(s, l)| AngleRange::new(s, l))
}

fn arb_color() -> impl Strategy<Value = HexColor> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| HexColor::rgb(r, g, b))
}

/// Distance between two angles on the circle.
fn circular_gap(a: f64, b: f64) -> f64 {
    let d = normalize_angle(a - b);
    d.min(TAU - d)
}

fn in_unit_turn(angle: f64) -> bool {
    (0.0..TAU).contains(&angle)
}

proptest! {
    /// The slices tile the arc: contiguous, equal, and spanning start to start + length.
    #[test]
    fn segments_partition_the_arc(
        segments in 1usize..16,
        radius in 1.0f64..500.0,
        start in arb_angle(),
        length in arb_angle(),
    ) {
        let range = AngleRange::new(start, length);
        let slices: Vec<_> = (0..segments)
            .map(|i| ArcSegment::calculate(i, segments, radius, start, length))
            .collect();

        prop_assert!(circular_gap(slices[0].from_angle, range.start_angle) < EPS);
        prop_assert!(circular_gap(slices[segments - 1].to_angle, range.end_angle()) < EPS);

        let width = range.angle_length / segments as f64;
        for pair in slices.windows(2) {
            prop_assert!((pair[0].to_angle - pair[1].from_angle).abs() < EPS);
        }
        for slice in &slices {
            prop_assert!((slice.to_angle - slice.from_angle - width).abs() < EPS);
            prop_assert!((slice.from.distance(Point::default()) - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn gradient_ends_on_configured_colors(
        segments in 1usize..16,
        from in arb_color(),
        to in arb_color(),
    ) {
        prop_assert_eq!(calculate_arc_color(0, segments, from, to).from_color, from);
        prop_assert_eq!(calculate_arc_color(segments - 1, segments, from, to).to_color, to);
    }

    #[test]
    fn pointer_angle_is_normalized(
        cx in -1000.0f64..1000.0,
        cy in -1000.0f64..1000.0,
        px in -1000.0f64..1000.0,
        py in -1000.0f64..1000.0,
    ) {
        let angle = gesture::pointer_angle(Point::new(cx, cy), Point::new(px, py));
        prop_assert!(in_unit_turn(angle));
    }

    #[test]
    fn drags_stay_normalized(range in arb_range(), pointer in arb_angle()) {
        for handle in [Handle::Start, Handle::Stop] {
            let updated = gesture::drag(range, pointer, handle);
            prop_assert!(in_unit_turn(updated.start_angle));
            prop_assert!(in_unit_turn(updated.angle_length));
        }
    }

    #[test]
    fn stop_drag_onto_start_collapses(range in arb_range()) {
        let updated = gesture::drag_stop(range, range.start_angle);
        prop_assert!(updated.angle_length >= 0.0);
        prop_assert!(circular_gap(updated.angle_length, 0.0) < EPS);
        prop_assert!((updated.start_angle - range.start_angle).abs() < EPS);
    }

    #[test]
    fn start_drag_keeps_the_end(range in arb_range(), pointer in arb_angle()) {
        let updated = gesture::drag_start(range, pointer);
        prop_assert!(circular_gap(updated.end_angle(), range.end_angle()) < EPS);
        prop_assert!(circular_gap(updated.start_angle, pointer) < EPS);
    }

    #[test]
    fn taps_rotate_by_a_quarter_turn(range in arb_range()) {
        let stop = gesture::tap(range, Handle::Stop);
        prop_assert!((stop.start_angle - range.start_angle).abs() < EPS);
        prop_assert!(circular_gap(stop.angle_length, range.angle_length + FRAC_PI_2) < EPS);

        let start = gesture::tap(range, Handle::Start);
        prop_assert!(circular_gap(start.start_angle, range.start_angle - FRAC_PI_2) < EPS);
        prop_assert!(circular_gap(start.angle_length, range.angle_length + FRAC_PI_2) < EPS);
    }
}
