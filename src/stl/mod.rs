//! ASCII STL codec
//!
//! ```text
//! solid <name>
//!   facet normal <nx> <ny> <nz>
//!     outer loop
//!       vertex <x> <y> <z>
//!       vertex <x> <y> <z>
//!       vertex <x> <y> <z>
//!     endloop
//!   endfacet
//!   ...
//! endsolid <name>
//! ```
//!
//! Loading welds vertices with bit-identical coordinates and stores one
//! normal per face. Saving requires a single-shape scene whose geometry is a
//! triangle mesh with per-face normals. Binary STL is not supported.

mod loader; // text -> IndexedFaceSet
mod saver; // IndexedFaceSet -> text
mod tokenizer; // whitespace tokens with line numbers

pub use loader::{read_stl, LoaderStl};
pub use saver::{format_sci, write_stl, SaverStl};

/// File extension handled by this codec
pub const STL_EXT: &str = "stl";
