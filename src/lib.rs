//! # cornerstl
//!
//! ASCII STL reading and writing for indexed triangle meshes, with a
//! face-corner adjacency table ([`Faces`]) over the mesh's coordinate-index
//! array.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cornerstl::{LoaderStl, SaverStl};
//!
//! let scene = LoaderStl::load("part.stl")?;
//! let ifs = scene.single_face_set().unwrap();
//!
//! let faces = ifs.faces();
//! for face in 0..faces.number_of_faces() as i32 {
//!     let corners: Vec<i32> = faces.face_corners(face).collect();
//!     println!("face {}: corners {:?}", face, corners);
//! }
//!
//! SaverStl::save("copy.stl", &scene)?;
//! # Ok::<(), cornerstl::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod faces;
pub mod geometry;
pub mod log;
pub mod registry;
pub mod scene;
pub mod stl;
pub mod utils;

// Re-exports
pub use config::{StlLoadOptions, StlSaveOptions};
pub use error::{Error, ErrorKind, Result};
pub use faces::{Faces, NO_INDEX};
pub use geometry::{IndexedFaceSet, IndexedLineSet};
pub use log::LogFile;
pub use registry::{FormatRegistry, Loader, Saver};
pub use scene::{Appearance, Geometry, Group, Material, Node, SceneGraph, Shape};
pub use stl::{format_sci, read_stl, write_stl, LoaderStl, SaverStl};
pub use utils::{TempFolder, Utils};
