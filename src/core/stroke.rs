use glam::Vec2;

/// Line segment to rasterize, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Map a pointer position in CSS pixels to the canvas's native raster.
///
/// `rect_origin`/`rect_size` are the element's bounding client rect and
/// `raster_size` its `width`/`height` attributes. Returns `None` while the
/// element has no layout size.
#[inline]
pub fn raster_point(client: Vec2, rect_origin: Vec2, rect_size: Vec2, raster_size: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    Some((client - rect_origin) * (raster_size / rect_size))
}

/// Freehand stroke state for the paint canvas.
///
/// Strokes are rasterized as they are drawn; only the current stroke's
/// points are kept.
#[derive(Clone, Debug)]
pub struct StrokeState {
    drawing: bool,
    points: Vec<Vec2>,
    hint_visible: bool,
}

impl Default for StrokeState {
    fn default() -> Self {
        Self {
            drawing: false,
            points: Vec::new(),
            hint_visible: true,
        }
    }
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Hide the placeholder hint. Returns true only the first time.
    pub fn dismiss_hint(&mut self) -> bool {
        std::mem::replace(&mut self.hint_visible, false)
    }

    /// Start a new stroke. The hint is dismissed separately, since notes
    /// dismiss it too.
    pub fn begin(&mut self) {
        self.drawing = true;
        self.points.clear();
    }

    /// Append `p` to the current stroke and return the segment to draw, if any.
    pub fn extend(&mut self, p: Vec2) -> Option<Segment> {
        if !self.drawing {
            return None;
        }
        let from = self.points.last().copied();
        self.points.push(p);
        from.map(|from| Segment { from, to: p })
    }

    pub fn end(&mut self) {
        self.drawing = false;
    }
}
