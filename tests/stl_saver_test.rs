use cornerstl::{
    log, ErrorKind, Geometry, Group, IndexedFaceSet, IndexedLineSet, LogFile, Node, SaverStl,
    SceneGraph, Shape, TempFolder,
};
use nalgebra::Vector3;
use serial_test::serial;
use std::fs;

fn triangle() -> IndexedFaceSet {
    let mut ifs = IndexedFaceSet::new();
    ifs.normal_per_vertex = false;
    let v0 = ifs.push_coord(Vector3::new(0.0, 0.0, 0.0));
    let v1 = ifs.push_coord(Vector3::new(10.0, 0.0, 0.0));
    let v2 = ifs.push_coord(Vector3::new(5.0, 10.0, 0.0));
    ifs.push_face(&[v0, v1, v2]);
    ifs.push_normal(Vector3::new(0.0, 0.0, 1.0));
    ifs
}

#[test]
fn test_name_falls_back_to_file_stem() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("bracket.v2.stl");
    SaverStl::save(&path, &SceneGraph::from_face_set(triangle())).expect("Failed to save STL");

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("solid bracket.v2\n"));
    assert!(text.contains("facet normal 0.000000e+00 0.000000e+00 1.000000e+00"));
    assert_eq!(text.matches("vertex").count(), 3);
}

#[test]
fn test_stored_name_wins() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("file.stl");
    let mut ifs = triangle();
    ifs.set_name("widget");
    SaverStl::save(&path, &SceneGraph::from_face_set(ifs)).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("solid widget\n"));
    assert!(text.ends_with("endsolid widget\n"));
}

#[test]
fn test_rejects_per_vertex_normals() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("pv.stl");
    let mut ifs = triangle();
    ifs.normal_per_vertex = true;

    let err = SaverStl::save(&path, &SceneGraph::from_face_set(ifs)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
    assert!(!path.exists(), "no file should be written");
}

#[test]
fn test_rejects_non_triangle_faces() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("quad.stl");
    let mut ifs = triangle();
    let v3 = ifs.push_coord(Vector3::new(0.0, 10.0, 0.0));
    ifs.push_face(&[0, 1, 2, v3]);
    ifs.push_normal(Vector3::new(0.0, 0.0, 1.0));

    assert!(!SaverStl::save_ok(&path, &SceneGraph::from_face_set(ifs)));
    assert!(!path.exists());
}

#[test]
fn test_rejects_scene_layouts() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("scene.stl");

    let mut two = SceneGraph::from_face_set(triangle());
    two.add_child(Node::Shape(Shape::default()));
    assert_eq!(
        SaverStl::save(&path, &two).unwrap_err().kind(),
        ErrorKind::PreconditionFailed
    );

    let mut group = SceneGraph::new();
    group.add_child(Node::Group(Group::default()));
    assert!(!SaverStl::save_ok(&path, &group));

    let mut lines = SceneGraph::new();
    lines.add_child(Node::Shape(Shape {
        appearance: None,
        geometry: Some(Geometry::IndexedLineSet(IndexedLineSet::default())),
    }));
    assert!(!SaverStl::save_ok(&path, &lines));

    assert!(!SaverStl::save_ok(&path, &SceneGraph::new()));
    assert!(!path.exists());
}

#[test]
#[serial]
fn test_overwrite_is_logged() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("twice.stl");
    let log_path = tmp.path().join("save.log");
    log::install(LogFile::new(Some(log_path.to_str().unwrap()), false).unwrap());

    let scene = SceneGraph::from_face_set(triangle());
    SaverStl::save(&path, &scene).unwrap();
    SaverStl::save(&path, &scene).unwrap();
    drop(log::uninstall());

    let text = fs::read_to_string(&log_path).unwrap();
    assert_eq!(text.matches("Overwriting").count(), 1);
}
