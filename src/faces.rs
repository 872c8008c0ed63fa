//! Face-corner adjacency table
//!
//! [`Faces`] turns a flat coordinate-index array, where each face is a run of
//! vertex indices closed by a `-1` terminator, into constant-time queries over
//! faces and corners. A corner is a position in that array holding a vertex
//! index; terminator positions are not corners.
//!
//! ```rust
//! use cornerstl::Faces;
//!
//! let faces = Faces::new(4, &[2, 1, 0, -1, 3, 2, 0, -1]);
//! assert_eq!(faces.number_of_faces(), 2);
//! assert_eq!(faces.get_face_first_corner(1), 4);
//! assert_eq!(faces.get_corner_face(3), -1);
//! ```

/// Sentinel returned by every query that has no answer.
pub const NO_INDEX: i32 = -1;

/// Corner table built from a snapshot of a coordinate-index array.
///
/// The table copies the array and never changes it. If the source array is
/// edited, build a new table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faces {
    num_vertices: usize,
    num_corners: usize,
    coord_index: Vec<i32>,
    // per array slot, NO_INDEX at terminators and in an unterminated tail
    corner_face: Vec<i32>,
    next_corner: Vec<i32>,
    next_in_face: Vec<i32>,
    // per face
    face_first: Vec<i32>,
    face_size: Vec<i32>,
    // per vertex
    vertex_corner: Vec<i32>,
}

impl Faces {
    /// Build the table in a single pass over `coord_index`.
    ///
    /// Any negative entry closes the current face. Entries after the last
    /// terminator do not belong to a face and are not counted as corners.
    pub fn new(num_vertices: usize, coord_index: &[i32]) -> Self {
        let len = coord_index.len();
        let mut corner_face = vec![NO_INDEX; len];
        let mut next_in_face = vec![NO_INDEX; len];
        let mut face_first = Vec::new();
        let mut face_size = Vec::new();
        let mut num_corners = 0;

        let mut first = 0usize;
        for (i, &value) in coord_index.iter().enumerate() {
            if value >= 0 {
                continue;
            }

            let face = face_first.len() as i32;
            for corner in first..i {
                corner_face[corner] = face;
                next_in_face[corner] = if corner + 1 < i {
                    (corner + 1) as i32
                } else {
                    first as i32
                };
            }

            let size = i - first;
            face_first.push(if size > 0 { first as i32 } else { NO_INDEX });
            face_size.push(size as i32);
            num_corners += size;
            first = i + 1;
        }

        // Successor in array order, skipping terminators.
        let mut next_corner = vec![NO_INDEX; len];
        let mut following = NO_INDEX;
        for corner in (0..len).rev() {
            if corner_face[corner] != NO_INDEX {
                next_corner[corner] = following;
                following = corner as i32;
            }
        }

        let mut vertex_corner = vec![NO_INDEX; num_vertices];
        for (corner, &vertex) in coord_index.iter().enumerate() {
            if corner_face[corner] == NO_INDEX {
                continue;
            }
            if let Some(slot) = vertex_corner.get_mut(vertex as usize) {
                if *slot == NO_INDEX {
                    *slot = corner as i32;
                }
            }
        }

        Self {
            num_vertices,
            num_corners,
            coord_index: coord_index.to_vec(),
            corner_face,
            next_corner,
            next_in_face,
            face_first,
            face_size,
            vertex_corner,
        }
    }

    /// Number of vertices, as given at construction
    pub fn number_of_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of terminated faces
    pub fn number_of_faces(&self) -> usize {
        self.face_first.len()
    }

    /// Number of corners, i.e. vertex entries that belong to a face
    pub fn number_of_corners(&self) -> usize {
        self.num_corners
    }

    /// First corner of face `face`, or `-1` if out of range or empty
    pub fn get_face_first_corner(&self, face: i32) -> i32 {
        self.face_slot(face).map_or(NO_INDEX, |f| self.face_first[f])
    }

    /// Number of corners of face `face`, or `-1` if out of range
    pub fn get_face_size(&self, face: i32) -> i32 {
        self.face_slot(face).map_or(NO_INDEX, |f| self.face_size[f])
    }

    /// Vertex stored at `corner`, or `-1` if `corner` is not a corner.
    ///
    /// `face` is advisory: the vertex is returned even when `corner` belongs to
    /// a different face.
    pub fn get_face_vertex(&self, _face: i32, corner: i32) -> i32 {
        self.corner_slot(corner).map_or(NO_INDEX, |c| self.coord_index[c])
    }

    /// Face owning `corner`, or `-1` if `corner` is not a corner
    pub fn get_corner_face(&self, corner: i32) -> i32 {
        self.corner_slot(corner).map_or(NO_INDEX, |c| self.corner_face[c])
    }

    /// Corner following `corner` in array order, skipping the terminator
    /// between faces.
    ///
    /// Inside a face this is the next corner of the face. For the last corner
    /// of a face it is the first corner of the next face, and `-1` after the
    /// last corner of the last face. Use [`Faces::get_next_corner_in_face`] for
    /// a circular walk around one face.
    pub fn get_next_corner(&self, corner: i32) -> i32 {
        self.corner_slot(corner).map_or(NO_INDEX, |c| self.next_corner[c])
    }

    /// Next corner around the face of `corner`, wrapping from the last corner
    /// back to the face's first corner.
    pub fn get_next_corner_in_face(&self, corner: i32) -> i32 {
        self.corner_slot(corner).map_or(NO_INDEX, |c| self.next_in_face[c])
    }

    /// First corner referencing `vertex`, or `-1` if no face uses it
    pub fn get_vertex_corner(&self, vertex: i32) -> i32 {
        usize::try_from(vertex)
            .ok()
            .and_then(|v| self.vertex_corner.get(v).copied())
            .unwrap_or(NO_INDEX)
    }

    /// Corners of `face` in traversal order; empty if `face` is out of range.
    pub fn face_corners(&self, face: i32) -> impl Iterator<Item = i32> + '_ {
        let first = self.get_face_first_corner(face);
        let size = self.get_face_size(face).max(0) as usize;
        let mut corner = first;
        (0..size).map_while(move |_| {
            if corner == NO_INDEX {
                return None;
            }
            let current = corner;
            corner = self.get_next_corner_in_face(corner);
            Some(current)
        })
    }

    fn face_slot(&self, face: i32) -> Option<usize> {
        usize::try_from(face).ok().filter(|&f| f < self.face_first.len())
    }

    fn corner_slot(&self, corner: i32) -> Option<usize> {
        usize::try_from(corner)
            .ok()
            .filter(|&c| c < self.corner_face.len() && self.corner_face[c] != NO_INDEX)
    }
}
