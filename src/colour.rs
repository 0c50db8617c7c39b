/// A colour, expressed in RGB or greyscale colour spaces. The layout engines
/// never emit colours—these exist for renderer themes only.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a new colour in the Gray space, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }

    /// The colour as 0–255 RGB components, for emitting into markup
    pub fn to_rgb_bytes(&self) -> (u8, u8, u8) {
        match *self {
            Colour::RGB { r, g, b } => (
                (r.clamp(0.0, 1.0) * 255.0).round() as u8,
                (g.clamp(0.0, 1.0) * 255.0).round() as u8,
                (b.clamp(0.0, 1.0) * 255.0).round() as u8,
            ),
            Colour::Grey { g } => {
                let v = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
                (v, v, v)
            }
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Saturated blue used for header outlines and table header fills
    pub const ACCENT_BLUE: Colour = Colour::RGB {
        r: 25.0 / 255.0,
        g: 118.0 / 255.0,
        b: 210.0 / 255.0,
    };
    /// Pale blue used for heading and note box fills
    pub const ACCENT_TINT: Colour = Colour::RGB {
        r: 227.0 / 255.0,
        g: 242.0 / 255.0,
        b: 253.0 / 255.0,
    };
    /// Light grey used for alternating table rows
    pub const ROW_SHADE: Colour = Colour::Grey { g: 245.0 / 255.0 };
    /// Mid grey used for table cell borders
    pub const GRID_LINE: Colour = Colour::Grey { g: 189.0 / 255.0 };
    /// Dark blue used for heading text
    pub const HEADING_INK: Colour = Colour::RGB {
        r: 21.0 / 255.0,
        g: 101.0 / 255.0,
        b: 192.0 / 255.0,
    };
}
