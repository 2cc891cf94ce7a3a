use egui_extras::RetainedImage;

use crate::error::Result;

pub const SCALE: i32 = 4;
pub const PAN_STEP: i32 = 50;

/// Loads the map image from disk and uploads it as a nearest-neighbour
/// texture.
pub fn load_map(path: &str) -> Result<RetainedImage> {
    let image = image::open(path)?.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    let pixels = image.as_flat_samples();
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());

    Ok(RetainedImage::from_color_image("map", color_image)
        .with_options(egui::TextureOptions::NEAREST))
}

/// The viewport's window into the scaled map: native image dimensions, the
/// fixed display scale, and the pan offset into the scaled image.
pub struct MapView {
    native_width: i32,
    native_height: i32,
    scale: i32,
    offset_x: i32,
    offset_y: i32,
}

impl MapView {
    pub fn new(native_width: i32, native_height: i32, scale: i32) -> Self {
        Self {
            native_width,
            native_height,
            scale,
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn scaled_width(&self) -> i32 {
        self.native_width * self.scale
    }

    pub fn scaled_height(&self) -> i32 {
        self.native_height * self.scale
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    /// Moves the offset by the given delta, clamped so the viewport never
    /// leaves the scaled image. When the scaled map is smaller than the
    /// viewport the offset stays pinned at zero.
    pub fn pan(&mut self, dx: i32, dy: i32, viewport: (i32, i32)) {
        let max_x = (self.scaled_width() - viewport.0).max(0);
        let max_y = (self.scaled_height() - viewport.1).max(0);
        self.offset_x = (self.offset_x + dx).clamp(0, max_x);
        self.offset_y = (self.offset_y + dy).clamp(0, max_y);
    }

    /// Converts a viewport position to image-space coordinates at native
    /// resolution (integer division).
    pub fn screen_to_image(&self, sx: i32, sy: i32) -> (i32, i32) {
        (
            (sx + self.offset_x) / self.scale,
            (sy + self.offset_y) / self.scale,
        )
    }

    /// Converts image-space coordinates back to a viewport position.
    pub fn image_to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        (x * self.scale - self.offset_x, y * self.scale - self.offset_y)
    }
}

/// Whether a viewport position is inside the visible bounds.
pub fn in_viewport(pos: (i32, i32), viewport: (i32, i32)) -> bool {
    0 <= pos.0 && pos.0 <= viewport.0 && 0 <= pos.1 && pos.1 <= viewport.1
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: (i32, i32) = (1200, 1000);

    #[test]
    fn click_round_trips_exactly_without_pan_at_scale_one() {
        let view = MapView::new(2000, 2000, 1);
        assert_eq!(view.screen_to_image(50, 60), (50, 60));
        assert_eq!(view.image_to_screen(50, 60), (50, 60));
    }

    #[test]
    fn click_recovers_image_coordinate_under_pan_and_scale() {
        let mut view = MapView::new(1000, 1000, 4);
        view.pan(100, 200, VIEWPORT);
        // (sx + ox) / s, (sy + oy) / s
        assert_eq!(view.screen_to_image(50, 60), ((50 + 100) / 4, (60 + 200) / 4));
    }

    #[test]
    fn scale_four_click_uses_integer_division() {
        let view = MapView::new(100, 100, 4);
        assert_eq!(view.screen_to_image(50, 60), (12, 15));
    }

    #[test]
    fn pan_clamps_at_zero() {
        let mut view = MapView::new(1000, 1000, 4);
        view.pan(-PAN_STEP, -PAN_STEP, VIEWPORT);
        assert_eq!(view.offset(), (0, 0));
    }

    #[test]
    fn pan_clamps_at_far_edge() {
        let mut view = MapView::new(1000, 1000, 4);
        let max = (4000 - VIEWPORT.0, 4000 - VIEWPORT.1);
        for _ in 0..200 {
            view.pan(PAN_STEP, PAN_STEP, VIEWPORT);
        }
        assert_eq!(view.offset(), max);

        view.pan(PAN_STEP, PAN_STEP, VIEWPORT);
        assert_eq!(view.offset(), max);
    }

    #[test]
    fn no_panning_when_scaled_map_fits_the_viewport() {
        let mut view = MapView::new(100, 100, 4);
        view.pan(PAN_STEP, PAN_STEP, VIEWPORT);
        assert_eq!(view.offset(), (0, 0));
    }

    #[test]
    fn viewport_bounds_are_inclusive() {
        assert!(in_viewport((0, 0), VIEWPORT));
        assert!(in_viewport((1200, 1000), VIEWPORT));
        assert!(!in_viewport((-1, 0), VIEWPORT));
        assert!(!in_viewport((0, 1001), VIEWPORT));
    }

    #[test]
    fn panned_out_waypoint_falls_outside_the_viewport() {
        let mut view = MapView::new(1000, 1000, 4);
        let on_screen = view.image_to_screen(10, 10);
        assert!(in_viewport(on_screen, VIEWPORT));

        view.pan(2000, 0, VIEWPORT);
        let panned = view.image_to_screen(10, 10);
        assert!(!in_viewport(panned, VIEWPORT));
    }
}
