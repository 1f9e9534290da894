use super::geometry::{AngleRange, Point, handle_anchors};
use super::gesture::{Handle, PointerCapture, PointerEvent};
use super::view::HandleIcons;
use crate::config::SliderConfig;
use std::collections::VecDeque;

/// Pointer events held back while waiting for the first layout.
pub const MAX_PENDING_EVENTS: usize = 64;

pub struct State {
    pub config: SliderConfig,
    /// Last range handed in by the owner. Only the owner's copy is authoritative.
    pub range: AngleRange,
    pub text: String,
    pub center: Option<Point>,
    pub icons: HandleIcons,
    capture: Option<PointerCapture>,
    pending: VecDeque<PointerEvent>,
}

impl State {
    pub fn new(config: SliderConfig, range: AngleRange, icons: HandleIcons) -> Self {
        Self {
            text: config.text.clone(),
            config,
            range: range.normalized(),
            center: None,
            icons,
            capture: None,
            pending: VecDeque::new(),
        }
    }

    pub fn set_range(&mut self, range: AngleRange) {
        self.range = range.normalized();
    }

    pub fn reconfigure(&mut self, config: SliderConfig, icons: HandleIcons) {
        self.text = config.text.clone();
        self.config = config;
        self.icons = icons;
    }

    /// Records a settled allocation. The circle sits in the middle of it.
    ///
    /// Pointer events that arrived before the first measurement are replayed here and their
    /// updates returned in order.
    pub fn layout_settled(&mut self, width: f64, height: f64) -> Vec<AngleRange> {
        self.center = Some(Point::new(width / 2.0, height / 2.0));

        if !self.pending.is_empty() {
            log::debug!("Replaying {} buffered pointer events", self.pending.len());
        }

        let mut updates = Vec::new();
        while let Some(event) = self.pending.pop_front() {
            if let Some(update) = self.pointer(event) {
                // the owner has not answered yet, so chain on our own result
                self.range = update;
                updates.push(update);
            }
        }
        updates
    }

    /// Feeds one pointer event through the capture and mapper, returning the range it selects.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<AngleRange> {
        let Some(center) = self.center else {
            self.buffer(event);
            return None;
        };

        match event {
            PointerEvent::Press(point) => {
                self.capture = self.handle_at(center, point).map(|handle| {
                    log::debug!("Pointer captured by {} handle", handle);
                    PointerCapture::claim(handle)
                });
                None
            }
            PointerEvent::Move(point) => {
                let range = self.range;
                self.capture
                    .as_mut()
                    .map(|capture| capture.drag(range, center, point))
            }
            PointerEvent::Release => self
                .capture
                .take()
                .and_then(|capture| capture.release(self.range)),
        }
    }

    /// Queues an event for replay. Once full, a move overwrites the last queued move and
    /// anything else is dropped.
    fn buffer(&mut self, event: PointerEvent) {
        if self.pending.len() < MAX_PENDING_EVENTS {
            self.pending.push_back(event);
            return;
        }
        match (event, self.pending.back_mut()) {
            (PointerEvent::Move(point), Some(PointerEvent::Move(last))) => *last = point,
            (event, _) => log::debug!("Pointer event buffer full, dropping {:?}", event),
        }
    }

    pub fn captured_handle(&self) -> Option<Handle> {
        self.capture.as_ref().map(PointerCapture::handle)
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    fn handle_at(&self, center: Point, point: Point) -> Option<Handle> {
        let (start, stop) = self.handle_anchors();
        Handle::hit_test(
            point,
            center.offset(start),
            center.offset(stop),
            self.config.stroke_width / 2.0,
        )
    }

    /// Start and stop handle positions relative to the circle center.
    pub fn handle_anchors(&self) -> (Point, Point) {
        handle_anchors(self.config.segments.get(), self.config.radius, self.range)
    }
}
