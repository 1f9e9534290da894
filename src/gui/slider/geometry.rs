use super::SEAM_OVERLAP;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Point on a circle centered at the origin. Angle 0 points up and grows clockwise.
pub fn point_on_circle(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleRange {
    pub start_angle: f64,
    pub angle_length: f64,
}

impl AngleRange {
    pub fn new(start_angle: f64, angle_length: f64) -> Self {
        Self {
            start_angle: normalize_angle(start_angle),
            angle_length: normalize_angle(angle_length),
        }
    }

    pub fn normalized(self) -> Self {
        Self::new(self.start_angle, self.angle_length)
    }

    pub fn end_angle(&self) -> f64 {
        normalize_angle(self.start_angle + self.angle_length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub from_angle: f64,
    pub to_angle: f64,
    pub from: Point,
    /// Drawing end, slightly past `real_to` so neighbouring strokes overlap.
    pub to: Point,
    pub real_to: Point,
}

impl ArcSegment {
    /// Endpoints of the `index`-th of `segments` equal slices of the arc, relative to the
    /// circle center.
    pub fn calculate(
        index: usize,
        segments: usize,
        radius: f64,
        start_angle: f64,
        angle_length: f64,
    ) -> Self {
        let start = normalize_angle(start_angle);
        let length = normalize_angle(angle_length);
        let step = length / segments as f64;

        let from_angle = step * index as f64 + start;
        let to_angle = step * (index + 1) as f64 + start;

        Self {
            from_angle,
            to_angle,
            from: point_on_circle(radius, from_angle),
            to: point_on_circle(radius, to_angle + SEAM_OVERLAP),
            real_to: point_on_circle(radius, to_angle),
        }
    }

    pub fn for_range(index: usize, segments: usize, radius: f64, range: AngleRange) -> Self {
        Self::calculate(index, segments, radius, range.start_angle, range.angle_length)
    }
}

/// Positions of the start and stop handles relative to the circle center.
pub fn handle_anchors(segments: usize, radius: f64, range: AngleRange) -> (Point, Point) {
    let first = ArcSegment::for_range(0, segments, radius, range);
    let last = ArcSegment::for_range(segments.saturating_sub(1), segments, radius, range);
    (first.from, last.to)
}
