//! Options for the STL codec

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// STL loading options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StlLoadOptions {
    /// Merge vertices whose three components are identical
    pub weld_vertices: bool,
    /// Reject facets whose loop does not hold exactly three vertices
    pub triangles_only: bool,
}

impl Default for StlLoadOptions {
    fn default() -> Self {
        Self {
            weld_vertices: true,
            triangles_only: true,
        }
    }
}

/// STL saving options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StlSaveOptions {
    /// Digits after the decimal point in the scientific mantissa
    pub precision: usize,
    /// Close the file with `endsolid <name>`
    pub write_endsolid: bool,
}

impl Default for StlSaveOptions {
    fn default() -> Self {
        Self {
            precision: 6,
            write_endsolid: true,
        }
    }
}
