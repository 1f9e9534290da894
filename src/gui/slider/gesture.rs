use super::TAP_STEP;
use super::geometry::{AngleRange, Point, normalize_angle};
use std::f64::consts::FRAC_PI_2;
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Handle {
    Start,
    Stop,
}

impl Handle {
    /// Picks the handle whose anchor lies within `hit_radius` of `pointer`, nearest first.
    pub fn hit_test(
        pointer: Point,
        start_anchor: Point,
        stop_anchor: Point,
        hit_radius: f64,
    ) -> Option<Self> {
        let anchor = |handle: &Handle| match handle {
            Handle::Start => start_anchor,
            Handle::Stop => stop_anchor,
        };

        Self::iter()
            .map(|h| (h, pointer.distance(anchor(&h))))
            .filter(|&(_, d)| d <= hit_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(h, _)| h)
    }
}

/// Exclusive claim on a pointer stream, granted to the handle a press landed on.
#[derive(Debug)]
pub struct PointerCapture {
    handle: Handle,
    moved: bool,
}

impl PointerCapture {
    pub fn claim(handle: Handle) -> Self {
        Self {
            handle,
            moved: false,
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Maps a pointer move to the range it selects.
    pub fn drag(&mut self, range: AngleRange, center: Point, pointer: Point) -> AngleRange {
        self.moved = true;
        drag(range, pointer_angle(center, pointer), self.handle)
    }

    /// Ends the capture. A press released without motion counts as a tap.
    pub fn release(self, range: AngleRange) -> Option<AngleRange> {
        (!self.moved).then(|| tap(range, self.handle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release,
}

/// Angle of `pointer` around `center`, 0 pointing up and growing clockwise, in `[0, 2π)`.
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    let (dx, dy) = (pointer.x - center.x, pointer.y - center.y);
    normalize_angle(dy.atan2(dx) + FRAC_PI_2)
}

pub fn drag(range: AngleRange, pointer_angle: f64, handle: Handle) -> AngleRange {
    match handle {
        Handle::Start => drag_start(range, pointer_angle),
        Handle::Stop => drag_stop(range, pointer_angle),
    }
}

/// Moves the arc start to `pointer_angle` while its end stays put.
pub fn drag_start(range: AngleRange, pointer_angle: f64) -> AngleRange {
    let new_start = normalize_angle(pointer_angle);
    AngleRange::new(new_start, range.end_angle() - new_start)
}

/// Moves the arc end to `pointer_angle` while its start stays put.
pub fn drag_stop(range: AngleRange, pointer_angle: f64) -> AngleRange {
    let start = normalize_angle(range.start_angle);
    AngleRange::new(start, pointer_angle - start)
}

pub fn tap(range: AngleRange, handle: Handle) -> AngleRange {
    match handle {
        Handle::Start => AngleRange::new(
            range.start_angle - TAP_STEP,
            range.angle_length + TAP_STEP,
        ),
        Handle::Stop => AngleRange::new(range.start_angle, range.angle_length + TAP_STEP),
    }
}
