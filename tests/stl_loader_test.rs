use cornerstl::{ErrorKind, LoaderStl, SceneGraph, TempFolder};
use std::fs;

const TWO_FACETS: &str = "solid square
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 1 1 0
    endloop
  endfacet
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 1 0
      vertex 0 1 0
    endloop
  endfacet
endsolid square
";

#[test]
fn test_shared_vertices_are_welded() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("square.stl");
    fs::write(&path, TWO_FACETS).unwrap();

    let scene = LoaderStl::load(&path).expect("Failed to load STL");
    let ifs = scene.single_face_set().unwrap();

    assert_eq!(ifs.name(), "square");
    assert_eq!(ifs.number_of_coord(), 4);
    assert_eq!(ifs.coord_index, vec![0, 1, 2, -1, 0, 2, 3, -1]);
    assert_eq!(ifs.number_of_normal(), 2);
    assert_eq!(scene.url(), path.to_string_lossy());

    let shape = scene.children()[0].as_shape().unwrap();
    assert!(shape.appearance.as_ref().unwrap().material.is_some());
}

#[test]
fn test_empty_solid() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("empty.stl");
    fs::write(&path, "solid empty\n").unwrap();

    let scene = LoaderStl::load(&path).expect("Failed to load STL");
    let ifs = scene.single_face_set().unwrap();
    assert_eq!(ifs.name(), "empty");
    assert_eq!(ifs.number_of_faces(), 0);
    assert_eq!(ifs.number_of_coord(), 0);
    assert!(ifs.normal.is_empty());
}

#[test]
fn test_malformed_after_name() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("bad.stl");
    fs::write(&path, "solid bad\nfacets normal 0 0 1\n").unwrap();

    let err = LoaderStl::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedToken);
}

#[test]
fn test_invalid_path() {
    let err = LoaderStl::load("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPath);

    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let err = LoaderStl::load(tmp.path().join("missing.stl")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPath);
}

#[test]
fn test_load_into_leaves_scene_cleared_on_failure() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let good = tmp.path().join("good.stl");
    let bad = tmp.path().join("bad.stl");
    fs::write(&good, TWO_FACETS).unwrap();
    fs::write(&bad, TWO_FACETS.replace("endloop", "end")).unwrap();

    let mut scene = SceneGraph::new();
    assert!(LoaderStl::load_into(&good, &mut scene));
    assert_eq!(scene.children().len(), 1);

    assert!(!LoaderStl::load_into(&bad, &mut scene));
    assert!(scene.children().is_empty());
    assert_eq!(scene.url(), "");
}

#[test]
fn test_nearly_equal_vertices_are_not_welded() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("near.stl");
    // smallest subnormal: one bit away from the first facet's origin
    let text = TWO_FACETS.replacen(
        "      vertex 0 0 0\n      vertex 1 1 0",
        "      vertex 1e-45 0 0\n      vertex 1 1 0",
        1,
    );
    fs::write(&path, text).unwrap();

    let scene = LoaderStl::load(&path).expect("Failed to load STL");
    let ifs = scene.single_face_set().unwrap();
    assert_eq!(ifs.number_of_coord(), 5);
    assert_eq!(ifs.coord_index, vec![0, 1, 2, -1, 3, 2, 4, -1]);
}

#[test]
fn test_single_line_file() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("oneline.stl");
    fs::write(
        &path,
        "solid x facet normal 0 0 1 outer loop vertex 0 0 0 vertex 1 0 0 vertex 0 1 0 \
         endloop endfacet endsolid x",
    )
    .unwrap();

    let scene = LoaderStl::load(&path).expect("Failed to load STL");
    let ifs = scene.single_face_set().unwrap();
    assert_eq!(ifs.name(), "x");
    assert_eq!(ifs.number_of_faces(), 1);
    assert_eq!(ifs.number_of_coord(), 3);
}
