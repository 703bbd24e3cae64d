use crate::internal_util::{lerp_rgb, to_channel};

/// Two-hue color scale with a neutral midpoint: low values are blue, the
/// center is neutral, high values are red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum DivergingColormap {
    /// Moreland's cool-warm map, grey at the center.
    #[default]
    CoolWarm,
    /// Pure blue through white to pure red.
    BlueWhiteRed,
}

// Equally spaced control points from 0.0 to 1.0.
const COOL_WARM: [[u8; 3]; 9] = [
    [59, 76, 192],
    [98, 130, 234],
    [141, 176, 254],
    [184, 208, 249],
    [221, 221, 221],
    [245, 196, 173],
    [244, 154, 123],
    [222, 96, 77],
    [180, 4, 38],
];

const BLUE_WHITE_RED: [[u8; 3]; 3] = [[0, 0, 255], [255, 255, 255], [255, 0, 0]];

impl DivergingColormap {
    fn control_points(&self) -> &'static [[u8; 3]] {
        match self {
            DivergingColormap::CoolWarm => &COOL_WARM,
            DivergingColormap::BlueWhiteRed => &BLUE_WHITE_RED,
        }
    }

    /// Opaque RGBA color for a normalized value in `[0, 1]`.
    pub fn color(&self, t: f64) -> [u8; 4] {
        let points = self.control_points();
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };

        let position = t * (points.len() - 1) as f64;
        let index = (position.floor() as usize).min(points.len() - 2);
        let rgb = lerp_rgb(points[index], points[index + 1], position - index as f64);

        [
            to_channel(rgb[0]),
            to_channel(rgb[1]),
            to_channel(rgb[2]),
            u8::MAX,
        ]
    }
}
