use eframe::egui::Color32;
use palette::named;
use palette::Srgb;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Color schemes
// ---------------------------------------------------------------------------

pub const PALETTE_LEN: usize = 7;

const fn rgb(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

const RAINBOW: [Color32; PALETTE_LEN] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(255, 127, 0),
    Color32::from_rgb(255, 255, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(75, 0, 130),
    Color32::from_rgb(148, 0, 211),
];

const GRAY: [Color32; PALETTE_LEN] = [
    Color32::from_rgb(210, 210, 210),
    Color32::from_rgb(190, 190, 190),
    Color32::from_rgb(170, 170, 170),
    Color32::from_rgb(150, 150, 150),
    Color32::from_rgb(130, 130, 130),
    Color32::from_rgb(105, 105, 105),
    Color32::from_rgb(90, 90, 90),
];

const LIGHT: [Color32; PALETTE_LEN] = [
    rgb(named::LIGHTBLUE),
    rgb(named::LIGHTCORAL),
    rgb(named::LIGHTGREEN),
    rgb(named::LIGHTPINK),
    rgb(named::LIGHTSTEELBLUE),
    rgb(named::LIGHTSALMON),
    rgb(named::LIGHTSEAGREEN),
];

/// Selectable color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    #[default]
    Rainbow,
    Gray,
    Light,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 3] = [PaletteKind::Rainbow, PaletteKind::Gray, PaletteKind::Light];

    pub fn label(self) -> &'static str {
        match self {
            PaletteKind::Rainbow => "Rainbow",
            PaletteKind::Gray => "Gradient gray",
            PaletteKind::Light => "Light colors",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            PaletteKind::Rainbow => Palette(RAINBOW),
            PaletteKind::Gray => Palette(GRAY),
            PaletteKind::Light => Palette(LIGHT),
        }
    }
}

// ---------------------------------------------------------------------------
// Palette: entry index → Color32
// ---------------------------------------------------------------------------

/// Seven colors reused cyclically across dataset entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette([Color32; PALETTE_LEN]);

impl Palette {
    /// Color for the entry at `index`, wrapping every seven entries.
    pub fn color_for(&self, index: usize) -> Color32 {
        self.0[index % PALETTE_LEN]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_wrap_every_seven() {
        let p = PaletteKind::Rainbow.palette();
        assert_eq!(p.color_for(0), Color32::from_rgb(255, 0, 0));
        assert_eq!(p.color_for(7), p.color_for(0));
        assert_eq!(p.color_for(13), Color32::from_rgb(148, 0, 211));
    }

    #[test]
    fn light_scheme_uses_css_names() {
        let p = PaletteKind::Light.palette();
        assert_eq!(p.color_for(0), Color32::from_rgb(173, 216, 230));
        assert_eq!(p.color_for(6), Color32::from_rgb(32, 178, 170));
    }

    #[test]
    fn kind_from_config_text() {
        let kind: PaletteKind = serde_json::from_str("\"gray\"").unwrap();
        assert_eq!(kind, PaletteKind::Gray);
    }
}
