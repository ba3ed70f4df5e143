use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::model::pollutants::Pollutant;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: pollutant → Color32
// ---------------------------------------------------------------------------

/// Assigns each pollutant a stable, distinct colour for the bar chart.
#[derive(Debug, Clone)]
pub struct PollutantColors {
    mapping: BTreeMap<&'static str, Color32>,
    default_color: Color32,
}

impl Default for PollutantColors {
    fn default() -> Self {
        let palette = generate_palette(Pollutant::ALL.len());
        let mapping: BTreeMap<&'static str, Color32> = Pollutant::ALL
            .iter()
            .zip(palette.into_iter())
            .map(|(p, c): (&Pollutant, Color32)| (p.name(), c))
            .collect();

        PollutantColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl PollutantColors {
    /// Look up the colour for a pollutant.
    pub fn color_for(&self, pollutant: Pollutant) -> Color32 {
        self.mapping
            .get(pollutant.name())
            .copied()
            .unwrap_or(self.default_color)
    }
}
