use std::fmt;
use std::str::FromStr;

use crate::error::FigureError;

/// Cortical lamina, outer (I) to inner (VI).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::I,
        Layer::II,
        Layer::III,
        Layer::IV,
        Layer::V,
        Layer::VI,
    ];

    /// Position on the categorical x axis.
    pub fn index(self) -> usize {
        match self {
            Layer::I => 0,
            Layer::II => 1,
            Layer::III => 2,
            Layer::IV => 3,
            Layer::V => 4,
            Layer::VI => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layer::I => "I",
            Layer::II => "II",
            Layer::III => "III",
            Layer::IV => "IV",
            Layer::V => "V",
            Layer::VI => "VI",
        }
    }

    pub fn from_index(idx: usize) -> Option<Layer> {
        Self::ALL.get(idx).copied()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Layer {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|layer| layer.label() == token)
            .ok_or_else(|| FigureError::UnknownLayer(token.to_string()))
    }
}
