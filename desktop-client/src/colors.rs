use eframe::egui;
use serde::{Deserialize, Serialize};

/// Cosmetic snake color choice. Purely presentational, persisted with the
/// rest of the client config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeColor {
    Green,
    Blue,
    Purple,
    Orange,
    Pink,
}

impl SnakeColor {
    pub const ALL: [Self; 5] = [
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Orange,
        Self::Pink,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
        }
    }

    fn hue(&self) -> f32 {
        match self {
            Self::Green => 120.0,
            Self::Blue => 210.0,
            Self::Purple => 280.0,
            Self::Orange => 30.0,
            Self::Pink => 330.0,
        }
    }

    pub fn body(&self) -> egui::Color32 {
        color_from_hsl(self.hue(), 0.7, 0.5)
    }

    pub fn head(&self) -> egui::Color32 {
        color_from_hsl(self.hue(), 0.7, 0.33)
    }
}

fn color_from_hsl(hue: f32, saturation: f32, lightness: f32) -> egui::Color32 {
    let c = (1.0_f32 - (2.0_f32 * lightness - 1.0_f32).abs()) * saturation;
    let x = c * (1.0_f32 - ((hue / 60.0_f32) % 2.0_f32 - 1.0_f32).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    egui::Color32::from_rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
