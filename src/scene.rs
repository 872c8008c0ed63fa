//! Scene graph container for loaded and saved geometry
//!
//! Only the node types the STL codec reads or produces are modelled: a
//! [`Shape`] carrying an [`Appearance`] and a [`Geometry`], and a [`Group`]
//! for everything else.

use crate::geometry::{IndexedFaceSet, IndexedLineSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Surface material with VRML default values
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    pub ambient_intensity: f32,
    pub diffuse_color: [f32; 3],
    pub emissive_color: [f32; 3],
    pub shininess: f32,
    pub specular_color: [f32; 3],
    pub transparency: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.2,
            diffuse_color: [0.8, 0.8, 0.8],
            emissive_color: [0.0, 0.0, 0.0],
            shininess: 0.2,
            specular_color: [0.0, 0.0, 0.0],
            transparency: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Appearance {
    pub material: Option<Material>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    IndexedFaceSet(IndexedFaceSet),
    IndexedLineSet(IndexedLineSet),
}

impl Geometry {
    pub fn as_indexed_face_set(&self) -> Option<&IndexedFaceSet> {
        match self {
            Geometry::IndexedFaceSet(ifs) => Some(ifs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    pub appearance: Option<Appearance>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    Shape(Shape),
    Group(Group),
}

impl Node {
    pub fn is_shape(&self) -> bool {
        matches!(self, Node::Shape(_))
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Node::Shape(shape) => Some(shape),
            _ => None,
        }
    }
}

/// Root of a scene: an optional source url and a list of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneGraph {
    url: String,
    children: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene holding one shape with a default material and `ifs` as geometry.
    ///
    /// This is the layout the STL loader produces and the STL saver expects.
    pub fn from_face_set(ifs: IndexedFaceSet) -> Self {
        let shape = Shape {
            appearance: Some(Appearance {
                material: Some(Material::default()),
            }),
            geometry: Some(Geometry::IndexedFaceSet(ifs)),
        };
        Self {
            url: String::new(),
            children: vec![Node::Shape(shape)],
        }
    }

    /// Remove all children and reset the url
    pub fn clear(&mut self) {
        self.children.clear();
        self.url.clear();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn add_child(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The face set of a scene with exactly one shape whose geometry is an
    /// indexed face set.
    pub fn single_face_set(&self) -> Option<&IndexedFaceSet> {
        match self.children.as_slice() {
            [node] => node
                .as_shape()?
                .geometry
                .as_ref()?
                .as_indexed_face_set(),
            _ => None,
        }
    }
}
