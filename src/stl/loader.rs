//! ASCII STL loading

use super::tokenizer::{parse_float, Tokenizer};
use crate::config::StlLoadOptions;
use crate::geometry::IndexedFaceSet;
use crate::scene::SceneGraph;
use crate::utils::Utils;
use crate::{log, Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct LoaderStl;

impl LoaderStl {
    /// Load an ASCII STL file into a single-shape scene graph.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cornerstl::LoaderStl;
    ///
    /// let scene = LoaderStl::load("part.stl")?;
    /// let ifs = scene.single_face_set().unwrap();
    /// println!("{} faces", ifs.number_of_faces());
    /// # Ok::<(), cornerstl::Error>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SceneGraph> {
        Self::load_with_options(path, &StlLoadOptions::default())
    }

    /// Load with explicit options. Failures are also reported to the log.
    pub fn load_with_options<P: AsRef<Path>>(
        path: P,
        options: &StlLoadOptions,
    ) -> Result<SceneGraph> {
        let path = path.as_ref();
        match load_scene(path, options) {
            Ok(scene) => {
                log::log(format!("Loaded {}", path.display()));
                Ok(scene)
            }
            Err(e) => {
                log::error(format!("{}: {}", path.display(), e));
                Err(e)
            }
        }
    }

    /// Boolean form: clears `scene`, fills it on success and leaves it
    /// cleared on failure.
    pub fn load_into<P: AsRef<Path>>(path: P, scene: &mut SceneGraph) -> bool {
        scene.clear();
        match Self::load(path) {
            Ok(loaded) => {
                *scene = loaded;
                true
            }
            Err(_) => false,
        }
    }
}

fn load_scene(path: &Path, options: &StlLoadOptions) -> Result<SceneGraph> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPath("empty filename".to_string()));
    }

    let file = File::open(path)
        .map_err(|e| Error::InvalidPath(format!("cannot open {}: {}", path.display(), e)))?;
    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);

    let ifs = read_stl(&text, options)?;
    let mut scene = SceneGraph::from_face_set(ifs);
    scene.set_url(path.to_string_lossy());
    Ok(scene)
}

/// Parse ASCII STL text into a face set with per-face normals.
pub fn read_stl(text: &str, options: &StlLoadOptions) -> Result<IndexedFaceSet> {
    let mut tkn = Tokenizer::new(text);
    expect(&mut tkn, "solid")?;

    let mut ifs = IndexedFaceSet::new();
    ifs.normal_per_vertex = false;
    if tkn.get() {
        match tkn.token() {
            // unnamed solid
            "facet" | "endsolid" => tkn.unget(),
            name => ifs.set_name(name),
        }
    }

    let mut welder = Welder::new(options.weld_vertices);

    loop {
        if !tkn.get() {
            break;
        }
        match tkn.token() {
            "facet" => read_facet(&mut tkn, &mut ifs, &mut welder, options)?,
            "endsolid" => {
                // optional name, then nothing
                if tkn.get() && tkn.get() {
                    return Err(unexpected(&tkn));
                }
                break;
            }
            _ => return Err(unexpected(&tkn)),
        }
    }

    Ok(ifs)
}

fn read_facet(
    tkn: &mut Tokenizer<'_>,
    ifs: &mut IndexedFaceSet,
    welder: &mut Welder,
    options: &StlLoadOptions,
) -> Result<()> {
    let facet_line = tkn.line();
    expect(tkn, "normal")?;
    let normal = read_triple(tkn, "facet normal")?;
    ifs.normal.extend_from_slice(&normal);

    expect(tkn, "outer")?;
    expect(tkn, "loop")?;

    let mut count = 0;
    while tkn.expecting("vertex") {
        let v = read_triple(tkn, "vertex")?;
        let index = welder.index_of(v, &mut ifs.coord);
        ifs.coord_index.push(index);
        count += 1;
    }

    match tkn.token() {
        "" => return Err(end_of_input(tkn, "endloop")),
        "endloop" => {}
        _ => return Err(unexpected(tkn)),
    }
    if options.triangles_only && count != 3 {
        return Err(Error::MalformedToken(format!(
            "line {}: facet has {} vertices, expected 3",
            facet_line, count
        )));
    }
    ifs.coord_index.push(-1);

    expect(tkn, "endfacet")
}

fn read_triple(tkn: &mut Tokenizer<'_>, what: &str) -> Result<[f32; 3]> {
    let mut v = [0.0f32; 3];
    for c in v.iter_mut() {
        if !tkn.get() {
            return Err(end_of_input(tkn, &format!("{} component", what)));
        }
        *c = parse_float(tkn.token());
    }
    Ok(v)
}

fn expect(tkn: &mut Tokenizer<'_>, word: &str) -> Result<()> {
    if tkn.expecting(word) {
        Ok(())
    } else if tkn.token().is_empty() {
        Err(end_of_input(tkn, &format!("'{}'", word)))
    } else {
        Err(Error::MalformedToken(format!(
            "line {}: expected '{}', found '{}'",
            tkn.line(),
            word,
            Utils::shorten(tkn.token(), 32)
        )))
    }
}

fn unexpected(tkn: &Tokenizer<'_>) -> Error {
    Error::MalformedToken(format!(
        "line {}: unexpected token '{}'",
        tkn.line(),
        Utils::shorten(tkn.token(), 32)
    ))
}

fn end_of_input(tkn: &Tokenizer<'_>, what: &str) -> Error {
    Error::UnexpectedEndOfInput(format!("line {}: expected {}", tkn.line(), what))
}

/// Assigns vertex indices, reusing the index of an exact duplicate.
struct Welder {
    enabled: bool,
    seen: HashMap<[u32; 3], i32>,
}

impl Welder {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            seen: HashMap::new(),
        }
    }

    /// Index for `v`, appending it to `coord` when it is new.
    fn index_of(&mut self, v: [f32; 3], coord: &mut Vec<f32>) -> i32 {
        let next = (coord.len() / 3) as i32;
        if !self.enabled {
            coord.extend_from_slice(&v);
            return next;
        }
        let index = *self.seen.entry(weld_key(v)).or_insert(next);
        if index == next {
            coord.extend_from_slice(&v);
        }
        index
    }
}

// Bit patterns, with -0.0 folded into +0.0.
fn weld_key(v: [f32; 3]) -> [u32; 3] {
    v.map(|c| if c == 0.0 { 0 } else { c.to_bits() })
}
