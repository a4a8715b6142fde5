// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

// Enumeration for dimensionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    _2D,
    _3D,
}

impl Dimension {
    pub fn as_usize(&self) -> usize {
        match self {
            Dimension::_2D => 2,
            Dimension::_3D => 3,
        }
    }
}
