//! Min/max text entry pair

use egui::{Response, TextEdit, Ui};

use crate::constants::layout::ENTRY_WIDTH;

/// Two text boxes editing the ends of a range.
///
/// Values stay as text until the owner parses them, so typing never touches
/// the view state directly.
pub struct RangeInput<'a> {
    label: &'a str,
    min: &'a mut String,
    max: &'a mut String,
    enabled: bool,
    hint: Option<(&'a str, &'a str)>,
}

impl<'a> RangeInput<'a> {
    /// Create a new range input widget
    pub fn new(label: &'a str, min: &'a mut String, max: &'a mut String) -> Self {
        Self {
            label,
            min,
            max,
            enabled: true,
            hint: None,
        }
    }

    /// Grey out the boxes
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Placeholder text shown while a box is empty
    pub fn hint(mut self, min: &'a str, max: &'a str) -> Self {
        self.hint = Some((min, max));
        self
    }

    /// Show the widget; the response reports whether Enter was pressed in either box
    pub fn show(self, ui: &mut Ui) -> Response {
        let (min_hint, max_hint) = self.hint.unwrap_or(("min", "max"));
        ui.horizontal(|ui| {
            ui.add_enabled_ui(self.enabled, |ui| {
                ui.label(self.label);
                let min = ui.add(TextEdit::singleline(self.min).desired_width(ENTRY_WIDTH).hint_text(min_hint));
                ui.label("to");
                let max = ui.add(TextEdit::singleline(self.max).desired_width(ENTRY_WIDTH).hint_text(max_hint));
                min | max
            })
            .inner
        })
        .inner
    }
}

/// True when the user pressed Enter in a text box this frame
pub fn submitted(response: &Response) -> bool {
    response.lost_focus() && response.ctx.input(|i| i.key_pressed(egui::Key::Enter))
}
