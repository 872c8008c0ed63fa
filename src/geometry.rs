//! Indexed geometry nodes

use crate::faces::Faces;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Polygon mesh stored as flat arrays.
///
/// `coord` holds three floats per vertex. `coord_index` lists each face as a
/// run of vertex indices closed by `-1`. When `normal_per_vertex` is false and
/// `normal_index` is empty, `normal` holds one normal per face, in face order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedFaceSet {
    pub name: String,
    pub coord: Vec<f32>,
    pub coord_index: Vec<i32>,
    pub normal: Vec<f32>,
    pub normal_index: Vec<i32>,
    pub normal_per_vertex: bool,
}

impl Default for IndexedFaceSet {
    fn default() -> Self {
        Self {
            name: String::new(),
            coord: Vec::new(),
            coord_index: Vec::new(),
            normal: Vec::new(),
            normal_index: Vec::new(),
            normal_per_vertex: true,
        }
    }
}

impl IndexedFaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Number of vertices (coordinate triples)
    pub fn number_of_coord(&self) -> usize {
        self.coord.len() / 3
    }

    /// Number of normal triples
    pub fn number_of_normal(&self) -> usize {
        self.normal.len() / 3
    }

    /// Number of faces, i.e. terminators in `coord_index`
    pub fn number_of_faces(&self) -> usize {
        self.coord_index.iter().filter(|&&i| i < 0).count()
    }

    /// Number of corners that belong to a terminated face
    pub fn number_of_corners(&self) -> usize {
        let tail = self
            .coord_index
            .iter()
            .rev()
            .take_while(|&&i| i >= 0)
            .count();
        self.coord_index.len() - self.number_of_faces() - tail
    }

    /// True when every face has exactly three corners.
    ///
    /// An empty face set is a triangle mesh. Trailing indices without a
    /// terminator make it not one.
    pub fn is_triangle_mesh(&self) -> bool {
        let mut size = 0;
        for &index in &self.coord_index {
            if index < 0 {
                if size != 3 {
                    return false;
                }
                size = 0;
            } else {
                size += 1;
            }
        }
        size == 0
    }

    /// Vertex position by index
    pub fn coord_at(&self, index: usize) -> Option<Vector3<f32>> {
        triple_at(&self.coord, index)
    }

    /// Normal by index
    pub fn normal_at(&self, index: usize) -> Option<Vector3<f32>> {
        triple_at(&self.normal, index)
    }

    /// Append a vertex and return its index
    pub fn push_coord(&mut self, v: Vector3<f32>) -> i32 {
        let index = self.number_of_coord() as i32;
        self.coord.extend_from_slice(&[v.x, v.y, v.z]);
        index
    }

    /// Append a normal
    pub fn push_normal(&mut self, n: Vector3<f32>) {
        self.normal.extend_from_slice(&[n.x, n.y, n.z]);
    }

    /// Append a face given by vertex indices, followed by its terminator
    pub fn push_face(&mut self, vertices: &[i32]) {
        self.coord_index.extend_from_slice(vertices);
        self.coord_index.push(-1);
    }

    /// Build a corner table over the current `coord_index`
    pub fn faces(&self) -> Faces {
        Faces::new(self.number_of_coord(), &self.coord_index)
    }
}

/// Polyline set; a geometry the STL codec does not handle.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedLineSet {
    pub coord: Vec<f32>,
    pub coord_index: Vec<i32>,
}

fn triple_at(values: &[f32], index: usize) -> Option<Vector3<f32>> {
    let start = index.checked_mul(3)?;
    let v = values.get(start..start.checked_add(3)?)?;
    Some(Vector3::new(v[0], v[1], v[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> IndexedFaceSet {
        let mut ifs = IndexedFaceSet::new();
        ifs.push_coord(Vector3::new(0.0, 0.0, 0.0));
        ifs.push_coord(Vector3::new(1.0, 0.0, 0.0));
        ifs.push_coord(Vector3::new(0.0, 1.0, 0.0));
        ifs.push_coord(Vector3::new(0.0, 0.0, 1.0));
        ifs.push_face(&[2, 1, 0]);
        ifs.push_face(&[3, 2, 0]);
        ifs.push_face(&[1, 3, 0]);
        ifs.push_face(&[2, 3, 1]);
        ifs
    }

    #[test]
    fn test_counts() {
        let ifs = tetrahedron();
        assert_eq!(ifs.number_of_coord(), 4);
        assert_eq!(ifs.number_of_faces(), 4);
        assert_eq!(ifs.number_of_corners(), 12);
        assert!(ifs.is_triangle_mesh());
        assert!(ifs.normal_per_vertex);
    }

    #[test]
    fn test_is_triangle_mesh() {
        let mut ifs = IndexedFaceSet::new();
        assert!(ifs.is_triangle_mesh());

        ifs.coord_index = vec![0, 1, 2, 3, -1];
        assert!(!ifs.is_triangle_mesh());

        ifs.coord_index = vec![0, 1, 2, -1, 0, 2];
        assert!(!ifs.is_triangle_mesh());
        assert_eq!(ifs.number_of_corners(), 3);
    }

    #[test]
    fn test_coord_at() {
        let ifs = tetrahedron();
        assert_eq!(ifs.coord_at(3), Some(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(ifs.coord_at(4), None);
        assert_eq!(ifs.normal_at(0), None);
    }

    #[test]
    fn test_faces_from_face_set() {
        let faces = tetrahedron().faces();
        assert_eq!(faces.number_of_vertices(), 4);
        assert_eq!(faces.number_of_faces(), 4);
        assert_eq!(faces.get_face_vertex(1, 4), 3);
    }
}
