//! # Extrusion Tests
//!
//! Buffer sizes, index ranges, ring placement and UV layout.

use super::*;
use crate::profile::ProfileVertex;
use approx::assert_relative_eq;
use bezier_spline::ControlPointMode;

/// Two-vertex flat strip, one edge, normal up.
fn strip(half_width: f64) -> CrossSectionProfile {
    CrossSectionProfile::new(
        vec![
            ProfileVertex::new(DVec2::new(-half_width, 0.0), DVec2::Y, 0.0),
            ProfileVertex::new(DVec2::new(half_width, 0.0), DVec2::Y, 1.0),
        ],
        vec![0, 1],
    )
    .unwrap()
}

fn curved_spline() -> BezierSpline {
    let mut spline = BezierSpline::default();
    spline.add_segment_to(DVec3::new(6.0, 0.0, 3.0));
    spline.add_segment_to(DVec3::new(9.0, 2.0, 0.0));
    spline
}

#[test]
fn test_buffer_sizes() {
    let spline = curved_spline();
    let profile = CrossSectionProfile::rectangle(2.0, 1.0).unwrap();
    let rings = 5;
    let mesh = build(&spline, &profile, rings).unwrap();

    let steps = rings as usize * spline.segment_count();
    assert_eq!(mesh.vertex_count(), steps * profile.vertex_count());
    assert_eq!(mesh.normals().len(), mesh.vertex_count());
    assert_eq!(mesh.uvs().len(), mesh.vertex_count());
    assert_eq!(
        mesh.indices_u32().len(),
        (steps - 1) * profile.edge_count() * 6
    );
}

#[test]
fn test_indices_in_range() {
    let spline = curved_spline();
    let profile = CrossSectionProfile::circle(1.0, 12).unwrap();
    let mesh = build(&spline, &profile, 8).unwrap();
    assert!(mesh.validate());
    let count = mesh.vertex_count() as u32;
    assert!(mesh.indices_u32().iter().all(|&i| i < count));
}

#[test]
fn test_triangle_layout() {
    let spline = BezierSpline::default();
    let mesh = build(&spline, &strip(1.0), 2).unwrap();
    // Two rings of two vertices, one edge.
    assert_eq!(mesh.triangles(), &[[0, 2, 3], [0, 3, 1]]);
}

#[test]
fn test_straight_spline_positions_and_normals() {
    let spline = BezierSpline::default();
    let mesh = build(&spline, &strip(1.0), 4).unwrap();

    // Path runs along +X from (1,0,0) to (4,0,0); profile x maps to -Z.
    let positions = mesh.positions();
    assert!(positions[0].abs_diff_eq(DVec3::new(1.0, 0.0, 1.0), 1e-9));
    assert!(positions[1].abs_diff_eq(DVec3::new(1.0, 0.0, -1.0), 1e-9));
    let last = positions.len() - 1;
    assert!(positions[last].abs_diff_eq(DVec3::new(4.0, 0.0, -1.0), 1e-9));
    for ring in 0..4 {
        assert_relative_eq!(positions[ring * 2].x, 1.0 + ring as f64, epsilon = 1e-9);
    }
    for normal in mesh.normals() {
        assert!(normal.abs_diff_eq(DVec3::Y, 1e-9));
    }
}

#[test]
fn test_uv_layout() {
    let spline = BezierSpline::default();
    let profile = strip(0.75);
    let mesh = build(&spline, &profile, 4).unwrap();

    let uvs = mesh.uvs();
    assert_eq!(uvs[0], DVec2::new(0.0, 0.0));
    assert_eq!(uvs[1].x, 1.0);

    // V at the last ring is spline length over perimeter: 3 / 1.5.
    let length = spline.approx_length_default();
    let expected = length / profile.perimeter();
    assert_relative_eq!(expected, 2.0, epsilon = 1e-9);
    assert_relative_eq!(uvs[uvs.len() - 1].y, expected, epsilon = 1e-12);
    assert_relative_eq!(uvs[uvs.len() - 2].y, expected, epsilon = 1e-12);

    // Monotonic along the path.
    for pair in uvs.chunks_exact(2).collect::<Vec<_>>().windows(2) {
        assert!(pair[1][0].y > pair[0][0].y);
    }
}

#[test]
fn test_zero_perimeter_falls_back_to_length() {
    let spline = BezierSpline::default();
    let profile = CrossSectionProfile::new(
        vec![ProfileVertex::new(DVec2::ZERO, DVec2::Y, 0.0)],
        vec![0, 0],
    )
    .unwrap();
    let mesh = build(&spline, &profile, 2).unwrap();
    let uvs = mesh.uvs();
    assert_relative_eq!(uvs[uvs.len() - 1].y, 3.0, epsilon = 1e-9);
    assert!(uvs.iter().all(|uv| uv.is_finite()));
}

#[test]
fn test_looped_spline() {
    let mut spline = curved_spline();
    spline.set_control_point_mode(6, ControlPointMode::Aligned).unwrap();
    spline.set_loop(true);
    let profile = CrossSectionProfile::rectangle(1.0, 1.0).unwrap();
    let mesh = build(&spline, &profile, 4).unwrap();

    let steps = 4 * spline.segment_count();
    assert_eq!(spline.segment_count(), 4);
    assert_eq!(mesh.vertex_count(), steps * 8);
    assert!(mesh.validate());

    // The last ring closes onto the first.
    let ring = profile.vertex_count();
    let positions = mesh.positions();
    for k in 0..ring {
        let first = positions[k];
        let last = positions[(steps - 1) * ring + k];
        assert!(first.abs_diff_eq(last, 1e-9), "vertex {k}: {first} vs {last}");
    }
}

#[test]
fn test_degenerate_spline_stays_finite() {
    let spline = BezierSpline::from_parts(
        vec![DVec3::ONE; 4],
        vec![ControlPointMode::Free; 2],
        false,
    )
    .unwrap();
    let mesh = build(&spline, &strip(1.0), 3).unwrap();
    assert!(mesh.positions().iter().all(|p| p.is_finite()));
    assert!(mesh.normals().iter().all(|n| n.is_finite()));
    assert!(mesh.uvs().iter().all(|uv| uv.is_finite()));
}

#[test]
fn test_vertical_spline_stays_finite() {
    let spline = BezierSpline::from_parts(
        vec![
            DVec3::ZERO,
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
            DVec3::new(0.0, 3.0, 0.0),
        ],
        vec![ControlPointMode::Free; 2],
        false,
    )
    .unwrap();
    let mesh = build(&spline, &strip(1.0), 2).unwrap();
    assert!(mesh.positions().iter().all(|p| p.is_finite()));
    // Profile x lands on the horizontal plane.
    assert_relative_eq!(mesh.positions()[0].y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_invalid_rings() {
    let spline = BezierSpline::default();
    let profile = strip(1.0);
    for rings in [0, 1, 33] {
        let err = build(&spline, &profile, rings).unwrap_err();
        assert!(matches!(err, ExtrudeError::InvalidParameter { .. }), "{rings}");
    }
    assert!(build(&spline, &profile, 2).is_ok());
    assert!(build(&spline, &profile, 32).is_ok());
}

#[test]
fn test_build_with_config_revalidates() {
    let spline = BezierSpline::default();
    let config = ExtrusionConfig {
        length_precision: 1,
        ..ExtrusionConfig::default()
    };
    assert!(build_with_config(&spline, &strip(1.0), &config).is_err());
}

#[test]
fn test_empty_profile_gives_empty_mesh() {
    let spline = BezierSpline::default();
    let profile = CrossSectionProfile::new(Vec::new(), Vec::new()).unwrap();
    let mesh = build(&spline, &profile, 4).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_profile_outline_at() {
    let spline = BezierSpline::default();
    let profile = CrossSectionProfile::rectangle(2.0, 2.0).unwrap();
    let outline = profile_outline_at(&spline, &profile, 0.5);
    assert_eq!(outline.len(), profile.edge_count());

    let center = spline.point(0.5);
    for (start, end) in &outline {
        // Square around the path, in the plane normal to +X.
        assert_relative_eq!(start.x, center.x, epsilon = 1e-9);
        assert_relative_eq!(end.x, center.x, epsilon = 1e-9);
        assert_relative_eq!(start.distance(*end), 2.0, epsilon = 1e-9);
    }
    // Consecutive edges connect.
    for pair in outline.windows(2) {
        assert!(pair[0].1.abs_diff_eq(pair[1].0, 1e-9));
    }
}

#[test]
fn test_builder_rebuild_swaps_buffers() {
    let mut spline = BezierSpline::default();
    let profile = strip(1.0);
    let mut builder = ExtrusionMeshBuilder::new(ExtrusionConfig::default());
    assert!(builder.buffers().is_empty());

    let first = builder.rebuild(&spline, &profile).unwrap().clone();
    assert_eq!(
        first.vertex_count(),
        config::constants::DEFAULT_RINGS_PER_SEGMENT as usize * 2
    );

    spline.add_segment();
    builder.rebuild(&spline, &profile).unwrap();
    assert_eq!(builder.buffers().vertex_count(), first.vertex_count() * 2);

    let snapshot = builder.snapshot();
    assert_eq!(&snapshot, builder.buffers());
}

#[test]
fn test_builder_keeps_buffers_on_error() {
    let spline = BezierSpline::default();
    let profile = strip(1.0);
    let mut builder = ExtrusionMeshBuilder::default();
    builder.rebuild(&spline, &profile).unwrap();
    let before = builder.snapshot();

    builder.set_config(ExtrusionConfig {
        rings_per_segment: 1,
        ..ExtrusionConfig::default()
    });
    assert!(builder.rebuild(&spline, &profile).is_err());
    assert_eq!(builder.buffers(), &before);
    assert_eq!(builder.config().rings_per_segment, 1);
}
