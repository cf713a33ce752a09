use serde::{Deserialize, Serialize};

/// Logical category an occupant belongs to, used to filter neighbor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Roads,
    Buildings,
}

impl Layer {
    #[inline]
    fn bit(self) -> u8 {
        match self {
            Layer::Roads => 1 << 0,
            Layer::Buildings => 1 << 1,
        }
    }
}

/// Set of layers a query should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LayerMask(u8);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);

    pub fn only(layer: Layer) -> Self {
        Self(layer.bit())
    }

    pub fn with(self, layer: Layer) -> Self {
        Self(self.0 | layer.bit())
    }

    #[inline]
    pub fn contains(self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }
}
