// EDMC Log Collector - ui/theme.rs
//
// Status colour mapping and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::StatusMessage;
use egui::Color32;

/// Colour for a status message, legible under the given theme.
pub fn status_colour(status: &StatusMessage, dark_mode: bool) -> Color32 {
    match (status, dark_mode) {
        (StatusMessage::Failed, true) => Color32::from_rgb(248, 113, 113), // Red 400
        (StatusMessage::Failed, false) => Color32::from_rgb(185, 28, 28), // Red 800
        (StatusMessage::Collected, true) => Color32::from_rgb(74, 222, 128), // Green 400
        (StatusMessage::Collected, false) => Color32::from_rgb(21, 128, 61), // Green 700
        (StatusMessage::Collecting, true) => Color32::from_rgb(251, 191, 36), // Amber 400
        (StatusMessage::Collecting, false) => Color32::from_rgb(180, 83, 9), // Amber 700
        (StatusMessage::Ready, true) => Color32::from_rgb(209, 213, 219), // Gray 300
        (StatusMessage::Ready, false) => Color32::from_rgb(75, 85, 99),  // Gray 600
    }
}

/// Layout constants.
pub const PANEL_PADDING: f32 = 12.0;
pub const BUTTON_PADDING: f32 = 5.0;
