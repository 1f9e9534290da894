use std::f64::consts::PI;

pub mod clock_face;
pub mod color;
pub mod geometry;
pub mod gesture;
pub mod model;
pub mod view;

pub use color::{ArcColor, HexColor};
pub use geometry::{AngleRange, ArcSegment, Point};
pub use gesture::{Handle, PointerCapture, PointerEvent};
pub use model::State;
pub use view::draw;

pub const SEAM_OVERLAP: f64 = 0.005; // rad, drawn past each segment end so strokes meet
pub const TAP_STEP: f64 = PI / 2.0;
pub const CONTAINER_PADDING: f64 = 20.0;
pub const ICON_SIZE: i32 = 64;
pub const HANDLE_DOT_FACTOR: f64 = 0.35; // default handle radius relative to stroke width
pub const TEXT_FONT_SIZE: f64 = 20.0;
