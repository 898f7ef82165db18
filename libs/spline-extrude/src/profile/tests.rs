//! # Profile Tests

use super::*;
use approx::assert_relative_eq;

fn flat_strip() -> CrossSectionProfile {
    CrossSectionProfile::new(
        vec![
            ProfileVertex::new(DVec2::new(-2.0, 0.0), DVec2::Y, 0.0),
            ProfileVertex::new(DVec2::new(0.0, 0.0), DVec2::Y, 0.5),
            ProfileVertex::new(DVec2::new(2.0, 0.0), DVec2::Y, 1.0),
        ],
        vec![0, 1, 1, 2],
    )
    .unwrap()
}

#[test]
fn test_new_counts_and_edges() {
    let profile = flat_strip();
    assert_eq!(profile.vertex_count(), 3);
    assert_eq!(profile.edge_count(), 2);
    assert_eq!(profile.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    assert_relative_eq!(profile.perimeter(), 4.0);
}

#[test]
fn test_new_rejects_odd_index_count() {
    let vertices = flat_strip().vertices().to_vec();
    let err = CrossSectionProfile::new(vertices, vec![0, 1, 2]).unwrap_err();
    assert!(matches!(err, ExtrudeError::InvalidProfile { .. }));
}

#[test]
fn test_new_rejects_out_of_range_index() {
    let vertices = flat_strip().vertices().to_vec();
    let err = CrossSectionProfile::new(vertices, vec![0, 3]).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_empty_profile_is_valid() {
    let profile = CrossSectionProfile::new(Vec::new(), Vec::new()).unwrap();
    assert_eq!(profile.edge_count(), 0);
    assert_eq!(profile.perimeter(), 0.0);
}

#[test]
fn test_rectangle() {
    let profile = CrossSectionProfile::rectangle(4.0, 2.0).unwrap();
    assert_eq!(profile.vertex_count(), 8);
    assert_eq!(profile.edge_count(), 4);
    assert_relative_eq!(profile.perimeter(), 12.0);

    let vertices = profile.vertices();
    assert_eq!(vertices[0].point, DVec2::new(-2.0, -1.0));
    assert_eq!(vertices[0].normal, DVec2::NEG_Y);
    assert_eq!(vertices[3].normal, DVec2::X);
    assert_relative_eq!(vertices[1].u, 4.0 / 12.0);
    assert_relative_eq!(vertices[7].u, 1.0);
    // Corners are shared in position but not in normal.
    assert_eq!(vertices[1].point, vertices[2].point);
    assert_ne!(vertices[1].normal, vertices[2].normal);
}

#[test]
fn test_rectangle_rejects_bad_size() {
    assert!(CrossSectionProfile::rectangle(0.0, 1.0).is_err());
    assert!(CrossSectionProfile::rectangle(1.0, -1.0).is_err());
    assert!(CrossSectionProfile::rectangle(f64::NAN, 1.0).is_err());
}

#[test]
fn test_circle() {
    let profile = CrossSectionProfile::circle(5.0, 32).unwrap();
    assert_eq!(profile.vertex_count(), 33);
    assert_eq!(profile.edge_count(), 32);

    let first = profile.vertices()[0];
    let last = profile.vertices()[32];
    assert_relative_eq!(first.point.x, 5.0);
    assert_relative_eq!(first.point.y, 0.0);
    assert!(first.point.abs_diff_eq(last.point, 1e-9));
    assert_eq!(first.u, 0.0);
    assert_eq!(last.u, 1.0);

    // Inscribed polygon is slightly shorter than the circle.
    let circumference = std::f64::consts::TAU * 5.0;
    assert!(profile.perimeter() < circumference);
    assert!(profile.perimeter() > circumference * 0.99);

    for vertex in profile.vertices() {
        assert_relative_eq!(vertex.normal.length(), 1.0, epsilon = 1e-12);
        assert!(vertex.normal.abs_diff_eq(vertex.point / 5.0, 1e-12));
    }
}

#[test]
fn test_circle_rejects_bad_input() {
    assert!(CrossSectionProfile::circle(1.0, 2).is_err());
    assert!(CrossSectionProfile::circle(0.0, 8).is_err());
}

#[test]
fn test_serde_round_trip() {
    let profile = CrossSectionProfile::rectangle(2.0, 1.0).unwrap();
    let json = serde_json::to_string(&profile).unwrap();
    let restored: CrossSectionProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, profile);
}

#[test]
fn test_deserialize_revalidates() {
    let json = r#"{
        "vertices": [
            { "point": [0.0, 0.0], "normal": [0.0, 1.0], "u": 0.0 },
            { "point": [1.0, 0.0], "normal": [0.0, 1.0], "u": 1.0 }
        ],
        "line_indices": [0, 5]
    }"#;
    let err = serde_json::from_str::<CrossSectionProfile>(json).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
