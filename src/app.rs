use std::path::Path;
use std::time::Duration;

use crate::input_box::{InputBox, InputOutcome};
use crate::map::{self, MapView, PAN_STEP, SCALE};
use crate::waypoint::{Waypoint, OUTPUT_FILE};
use clipboard::ClipboardContext;
use clipboard::ClipboardProvider;
use egui::{Align2, Color32, Context, FontId, Rect, Response, Ui};
use egui_extras::RetainedImage;

const FRAME_INTERVAL: Duration = Duration::from_millis(33); // ~30 fps

// Either waiting for a click, or naming the pending one. The pending
// image-space coordinate only exists together with its input box.
enum Mode {
    Idle,
    Naming { input: InputBox, pending: (i32, i32) },
}

pub struct WaypointApp {
    map: RetainedImage,
    view: MapView,
    waypoints: Vec<Waypoint>,
    mode: Mode,
    clipboard: Option<ClipboardContext>,
}

// Main implementation of the waypoint maker app
impl WaypointApp {
    // Initialize the app around the already-loaded map image
    pub fn new(_cc: &eframe::CreationContext<'_>, map: RetainedImage) -> Self {
        let [width, height] = map.size();
        let view = MapView::new(width as i32, height as i32, SCALE);

        Self {
            map,
            view,
            waypoints: Vec::new(),
            mode: Mode::Idle,
            clipboard: ClipboardProvider::new().ok(),
        }
    }

    pub fn copy_to_clipboard(&mut self, text: String) -> bool {
        if let Some(clipboard) = &mut self.clipboard {
            clipboard.set_contents(text).is_ok()
        } else {
            false
        }
    }

    // Draw the panned map, the stored waypoints and the input box on top
    fn draw_map(&self, ui: &mut Ui) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;
        let viewport = (rect.width() as i32, rect.height() as i32);

        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let (offset_x, offset_y) = self.view.offset();
        let map_rect = Rect::from_min_size(
            rect.min - egui::vec2(offset_x as f32, offset_y as f32),
            egui::vec2(
                self.view.scaled_width() as f32,
                self.view.scaled_height() as f32,
            ),
        );
        painter.image(
            self.map.texture_id(ui.ctx()),
            map_rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        for wp in &self.waypoints {
            let (render_x, render_y) = self.view.image_to_screen(wp.x, wp.y);
            if !map::in_viewport((render_x, render_y), viewport) {
                continue;
            }

            let center = rect.min + egui::vec2(render_x as f32, render_y as f32);
            painter.circle_filled(center, 4.0, Color32::RED);
            painter.text(
                center + egui::vec2(5.0, -5.0),
                Align2::LEFT_TOP,
                &wp.name,
                FontId::default(),
                Color32::WHITE,
            );
        }

        if let Mode::Naming { input, .. } = &self.mode {
            input.draw(&painter);
        }

        response
    }

    // A primary click starts naming; clicks while naming are ignored
    fn handle_click(&mut self, response: &Response) {
        if !matches!(self.mode, Mode::Idle) {
            return;
        }

        if response.clicked() {
            if let Some(pos) = response.hover_pos() {
                let local = pos - response.rect.min;
                let pending = self.view.screen_to_image(local.x as i32, local.y as i32);
                self.mode = Mode::Naming {
                    input: InputBox::new(pos),
                    pending,
                };
            }
        }
    }

    // Route polled events to the input box while naming
    fn handle_naming(&mut self, ctx: &Context) {
        if !matches!(self.mode, Mode::Naming { .. }) {
            return;
        }

        let events = ctx.input(|i| i.events.clone());
        let mut finished: Option<Option<String>> = None;

        if let Mode::Naming { input, .. } = &mut self.mode {
            for event in &events {
                match input.handle_event(event) {
                    InputOutcome::Committed(name) => {
                        finished = Some(Some(name));
                        break;
                    }
                    InputOutcome::Cancelled => {
                        finished = Some(None);
                        break;
                    }
                    InputOutcome::Pending => {}
                }
            }
        }

        if let Some(outcome) = finished {
            if let Mode::Naming { pending, .. } = std::mem::replace(&mut self.mode, Mode::Idle) {
                if let Some(name) = outcome {
                    self.add_waypoint(name, pending);
                }
            }
        }
    }

    fn add_waypoint(&mut self, name: String, (x, y): (i32, i32)) {
        let wp = Waypoint::new(name, x, y);
        let line = wp.format_line();

        // Append failures keep the waypoint in memory only
        if let Err(err) = wp.append_line(Path::new(OUTPUT_FILE)) {
            tracing::error!(%err, "failed to append waypoint to {}", OUTPUT_FILE);
        }

        println!("Added: {line}");
        self.copy_to_clipboard(line);
        self.waypoints.push(wp);
    }

    // Arrow keys pan by held state each frame, in both modes
    fn handle_panning(&mut self, ctx: &Context, viewport: (i32, i32)) {
        let (left, right, up, down) = ctx.input(|i| {
            (
                i.key_down(egui::Key::ArrowLeft),
                i.key_down(egui::Key::ArrowRight),
                i.key_down(egui::Key::ArrowUp),
                i.key_down(egui::Key::ArrowDown),
            )
        });

        let mut dx = 0;
        let mut dy = 0;
        if left {
            dx -= PAN_STEP;
        }
        if right {
            dx += PAN_STEP;
        }
        if up {
            dy -= PAN_STEP;
        }
        if down {
            dy += PAN_STEP;
        }

        if dx != 0 || dy != 0 {
            self.view.pan(dx, dy, viewport);
        }
    }
}

// Implement the main update loop for the app
impl eframe::App for WaypointApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let response = self.draw_map(ui);
                let viewport = (
                    response.rect.width() as i32,
                    response.rect.height() as i32,
                );

                self.handle_click(&response);
                self.handle_naming(ctx);
                self.handle_panning(ctx, viewport);
            });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
