use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

/// Stock slice/legend colors, assigned by index and wrapped modulo length.
pub const DEFAULT_PALETTE: [Color; 12] = [
    Color::from_rgb8(0x3B, 0x82, 0xF6),
    Color::from_rgb8(0xEF, 0x44, 0x44),
    Color::from_rgb8(0x10, 0xB9, 0x81),
    Color::from_rgb8(0xF5, 0x9E, 0x0B),
    Color::from_rgb8(0x8B, 0x5C, 0xF6),
    Color::from_rgb8(0x06, 0xB6, 0xD4),
    Color::from_rgb8(0x84, 0xCC, 0x16),
    Color::from_rgb8(0xF9, 0x73, 0x16),
    Color::from_rgb8(0xEC, 0x48, 0x99),
    Color::from_rgb8(0x63, 0x66, 0xF1),
    Color::from_rgb8(0x14, 0xB8, 0xA6),
    Color::from_rgb8(0xA8, 0x55, 0xF7),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Non-series colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub text: Color,
    pub muted_text: Color,
    pub grid: Color,
    pub ring: Color,
    pub bar: Color,
    pub line: Color,
}

impl Theme {
    #[must_use]
    pub fn colors(self) -> ThemeColors {
        match self {
            Self::Light => ThemeColors {
                text: Color::from_rgb8(0x37, 0x41, 0x51),
                muted_text: Color::from_rgb8(0x6B, 0x72, 0x80),
                grid: Color::from_rgb8(0xE5, 0xE7, 0xEB),
                ring: Color::from_rgb8(0xE5, 0xE7, 0xEB),
                bar: Color::from_rgb8(0x3B, 0x82, 0xF6),
                line: Color::from_rgb8(0x36, 0xA2, 0xEB),
            },
            Self::Dark => ThemeColors {
                text: Color::from_rgb8(0xD1, 0xD5, 0xDB),
                muted_text: Color::from_rgb8(0x9C, 0xA3, 0xAF),
                grid: Color::from_rgb8(0x37, 0x41, 0x51),
                ring: Color::from_rgb8(0x37, 0x41, 0x51),
                bar: Color::from_rgb8(0x60, 0xA5, 0xFA),
                line: Color::from_rgb8(0x60, 0xA5, 0xFA),
            },
        }
    }
}

/// Optional caller-supplied look of a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default)]
    pub theme: Theme,
    /// Hex colors (`#RRGGBB` / `#RGB`) replacing [`DEFAULT_PALETTE`].
    #[serde(default)]
    pub palette: Option<Vec<String>>,
}

impl ChartStyle {
    /// Resolves the slice palette; an empty override falls back to the stock one.
    pub fn resolve_palette(&self) -> ChartResult<Palette> {
        match self.palette.as_deref() {
            Some(hexes) if !hexes.is_empty() => {
                let colors = hexes
                    .iter()
                    .map(|hex| Color::from_hex(hex))
                    .collect::<ChartResult<Vec<_>>>()?;
                Ok(Palette { colors })
            }
            _ => Ok(Palette::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Palette {
    /// Color for slice `index`; wraps around past the end.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
