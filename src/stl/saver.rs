//! ASCII STL saving

use crate::config::StlSaveOptions;
use crate::faces::NO_INDEX;
use crate::geometry::IndexedFaceSet;
use crate::scene::{Geometry, SceneGraph};
use crate::utils::Utils;
use crate::{log, Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct SaverStl;

impl SaverStl {
    /// Save a single-shape scene as ASCII STL.
    ///
    /// The scene must hold exactly one shape whose geometry is a triangle
    /// mesh with one normal per face. Nothing is written when a check fails.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cornerstl::{LoaderStl, SaverStl};
    ///
    /// let scene = LoaderStl::load("in.stl")?;
    /// SaverStl::save("out.stl", &scene)?;
    /// # Ok::<(), cornerstl::Error>(())
    /// ```
    pub fn save<P: AsRef<Path>>(path: P, scene: &SceneGraph) -> Result<()> {
        Self::save_with_options(path, scene, &StlSaveOptions::default())
    }

    pub fn save_with_options<P: AsRef<Path>>(
        path: P,
        scene: &SceneGraph,
        options: &StlSaveOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let result = save_scene(path, scene, options);
        if let Err(e) = &result {
            log::error(format!("{}: {}", path.display(), e));
        }
        result
    }

    /// Boolean form of [`SaverStl::save`]
    pub fn save_ok<P: AsRef<Path>>(path: P, scene: &SceneGraph) -> bool {
        Self::save(path, scene).is_ok()
    }
}

fn save_scene(path: &Path, scene: &SceneGraph, options: &StlSaveOptions) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPath("empty filename".to_string()));
    }

    let ifs = check_scene(scene)?;
    check_face_set(ifs)?;

    if path.exists() {
        log::log(format!("Overwriting {}", path.display()));
    }

    let file = File::create(path)
        .map_err(|e| Error::InvalidPath(format!("cannot create {}: {}", path.display(), e)))?;
    let mut out = BufWriter::new(file);

    let name = if ifs.name().is_empty() {
        Utils::file_stem(path)
    } else {
        ifs.name().to_string()
    };

    write_faces(&mut out, ifs, &name, options)?;
    out.flush()?;
    Ok(())
}

fn check_scene(scene: &SceneGraph) -> Result<&IndexedFaceSet> {
    let [node] = scene.children() else {
        return Err(Error::PreconditionFailed(format!(
            "expected a single top-level node, found {}",
            scene.children().len()
        )));
    };
    let shape = node
        .as_shape()
        .ok_or_else(|| Error::PreconditionFailed("top-level node is not a shape".to_string()))?;
    match &shape.geometry {
        Some(Geometry::IndexedFaceSet(ifs)) => Ok(ifs),
        _ => Err(Error::PreconditionFailed(
            "shape geometry is not an indexed face set".to_string(),
        )),
    }
}

fn check_face_set(ifs: &IndexedFaceSet) -> Result<()> {
    if !ifs.is_triangle_mesh() {
        return Err(Error::PreconditionFailed("geometry is not a triangle mesh".to_string()));
    }
    if ifs.normal_per_vertex {
        return Err(Error::PreconditionFailed(
            "normals are per vertex, expected per face".to_string(),
        ));
    }
    if ifs.number_of_normal() != ifs.number_of_faces() {
        return Err(Error::PreconditionFailed(format!(
            "{} normals for {} faces",
            ifs.number_of_normal(),
            ifs.number_of_faces()
        )));
    }
    if !ifs.normal_index.is_empty() {
        return Err(Error::PreconditionFailed("normal index array is not supported".to_string()));
    }
    let num_coord = ifs.number_of_coord();
    if let Some(&bad) = ifs
        .coord_index
        .iter()
        .find(|&&i| i >= 0 && i as usize >= num_coord)
    {
        return Err(Error::PreconditionFailed(format!(
            "coordinate index {} out of range for {} vertices",
            bad, num_coord
        )));
    }
    Ok(())
}

/// Write `ifs` as an ASCII STL solid called `name`.
///
/// The name is a single token; whitespace inside it is written as `_`.
pub fn write_stl<W: Write>(
    out: &mut W,
    ifs: &IndexedFaceSet,
    name: &str,
    options: &StlSaveOptions,
) -> Result<()> {
    check_face_set(ifs)?;
    write_faces(out, ifs, name, options)
}

// Faces are walked through a corner table built from `coord_index`.
fn write_faces<W: Write>(
    out: &mut W,
    ifs: &IndexedFaceSet,
    name: &str,
    options: &StlSaveOptions,
) -> Result<()> {
    let name = name.split_whitespace().collect::<Vec<_>>().join("_");
    let p = options.precision;
    let faces = ifs.faces();

    writeln!(out, "solid {}", name)?;
    for face in 0..faces.number_of_faces() as i32 {
        let n = ifs.normal_at(face as usize).ok_or_else(|| {
            Error::PreconditionFailed(format!("missing normal for face {}", face))
        })?;
        writeln!(
            out,
            "  facet normal {} {} {}",
            format_sci(n.x, p),
            format_sci(n.y, p),
            format_sci(n.z, p)
        )?;
        writeln!(out, "    outer loop")?;

        let mut corner = faces.get_face_first_corner(face);
        for _ in 0..faces.get_face_size(face) {
            if corner == NO_INDEX {
                break;
            }
            let vertex = faces.get_face_vertex(face, corner);
            let v = ifs.coord_at(vertex as usize).ok_or_else(|| {
                Error::PreconditionFailed(format!("missing coordinate {}", vertex))
            })?;
            writeln!(
                out,
                "      vertex {} {} {}",
                format_sci(v.x, p),
                format_sci(v.y, p),
                format_sci(v.z, p)
            )?;
            corner = faces.get_next_corner(corner);
        }

        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;
    }
    if options.write_endsolid {
        writeln!(out, "endsolid {}", name)?;
    }
    Ok(())
}

/// Scientific notation with a C-style exponent, e.g. `1.500000e+00`.
pub fn format_sci(value: f32, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = format!("{:.*e}", precision, value);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => s,
    }
}
