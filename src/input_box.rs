use egui::{Color32, FontId, Painter, Pos2, Rect, Stroke};

const MAX_NAME_LEN: usize = 30;
const MIN_WIDTH: f32 = 200.0;
const BOX_HEIGHT: f32 = 32.0;
const PROMPT: &str = "Enter name and press Enter...";

pub enum InputOutcome {
    Pending,
    Committed(String),
    Cancelled,
}

pub struct InputBox {
    anchor: Pos2,
    text: String,
    active: bool,
}

impl InputBox {
    pub fn new(anchor: Pos2) -> Self {
        Self {
            anchor,
            text: String::new(),
            active: true,
        }
    }

    // Events are only processed while the box is active
    pub fn handle_event(&mut self, event: &egui::Event) -> InputOutcome {
        if !self.active {
            return InputOutcome::Pending;
        }

        match event {
            egui::Event::Key {
                key: egui::Key::Enter,
                pressed: true,
                ..
            } => {
                let name = self.text.trim().to_uppercase();
                if name.is_empty() {
                    // Confirming an empty name keeps the box open
                    self.text.clear();
                    InputOutcome::Pending
                } else {
                    self.text.clear();
                    self.active = false;
                    InputOutcome::Committed(name)
                }
            }
            egui::Event::Key {
                key: egui::Key::Escape,
                pressed: true,
                ..
            } => {
                self.active = false;
                InputOutcome::Cancelled
            }
            egui::Event::Key {
                key: egui::Key::Backspace,
                pressed: true,
                ..
            } => {
                self.text.pop();
                InputOutcome::Pending
            }
            egui::Event::Text(entered) => {
                for ch in entered.chars() {
                    if self.text.chars().count() < MAX_NAME_LEN {
                        self.text.push(ch);
                    }
                }
                InputOutcome::Pending
            }
            _ => InputOutcome::Pending,
        }
    }

    pub fn draw(&self, painter: &Painter) {
        let display = if self.text.is_empty() {
            PROMPT.to_string()
        } else {
            self.text.clone()
        };

        let galley = painter.layout_no_wrap(display, FontId::default(), Color32::WHITE);
        let width = (galley.size().x + 10.0).max(MIN_WIDTH);
        let rect = Rect::from_min_size(self.anchor, egui::vec2(width, BOX_HEIGHT));

        painter.galley(self.anchor + egui::vec2(5.0, 5.0), galley);
        painter.rect_stroke(rect, 0.0, Stroke::new(2.0, Color32::WHITE));
    }
}
