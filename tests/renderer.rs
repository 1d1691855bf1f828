//! End-to-end scenes through the full projection + rasterization pipeline

use glam::Vec3;
use termrast::{shapes, Mesh, Projection, RasterSettings, RenderMode, Renderer};

fn renderer_with(mesh: Mesh) -> Renderer {
    Renderer::new(40, 20, mesh, Projection::default(), RasterSettings::default())
        .expect("40x20 allocation")
}

/// One camera-facing triangle must light its projected interior and leave
/// the rest of the grid at the background glyph.
#[test]
fn single_triangle_scene() {
    let mut renderer = renderer_with(shapes::triangle());
    let frame = renderer.render(0.0);

    // Fully lit by the headlight: interior cells are the brightest glyph
    assert_eq!(frame.cell(20, 12), Some(b'#'));

    let lit: usize = frame.as_text().bytes().filter(|&c| c != b'.').count();
    assert!(lit > 30, "triangle interior should cover many cells: {lit}");
    assert!(frame.as_text().bytes().all(|c| c == b'.' || c == b'#'));

    // Far corners stay background
    for (x, y) in [(0, 0), (39, 0), (0, 19), (39, 19)] {
        assert_eq!(frame.cell(x, y), Some(b'.'), "corner ({x},{y})");
    }
}

/// The nearer of two overlapping triangles wins the overlap region no
/// matter which is submitted first.
#[test]
fn depth_test_beats_submission_order() {
    let tri = |dx: f32, z: f32| {
        vec![
            Vec3::new(-1.0 + dx, -1.0, z),
            Vec3::new(1.0 + dx, -1.0, z),
            Vec3::new(dx, 1.0, z),
        ]
    };
    // Near triangle centered, far one at the same shape shifted right so
    // part of it escapes occlusion. The near one faces straight back
    // (brightness 1.0 -> '#'); the far one is tilted so it shades to a
    // distinct glyph.
    let near = tri(0.0, 0.5);
    let far = tri(0.8, -0.5);
    let near_n = vec![Vec3::new(0.0, 0.0, -1.0); 3];
    let far_n = vec![Vec3::new(0.6, 0.0, -0.8); 3];

    let near_first = Mesh::new(
        [near.clone(), far.clone()].concat(),
        [near_n.clone(), far_n.clone()].concat(),
    )
    .unwrap();
    let far_first = Mesh::new([far, near].concat(), [far_n, near_n].concat()).unwrap();

    let mut a = renderer_with(near_first);
    let mut b = renderer_with(far_first);
    let fa = a.render(0.0).as_text().to_owned();
    let fb = b.render(0.0).as_text().to_owned();

    assert_eq!(fa, fb, "draw order must not affect the image");
    // A cell inside both triangles shows the near triangle's shading
    assert_eq!(fa.as_bytes()[12 * 40 + 24], b'#');
    // The far triangle still shows where the near one does not cover it
    assert!(fa.bytes().any(|c| c == b'8'));
}

/// Two triangles sharing a diagonal edge must tile a quad without gaps
/// (inclusive w == 0 edge rule).
#[test]
fn shared_edge_leaves_no_seam() {
    let corners = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
    ];
    let positions = vec![
        corners[0], corners[1], corners[2], // lower-right triangle
        corners[0], corners[2], corners[3], // upper-left triangle
    ];
    let normals = vec![Vec3::new(0.0, 0.0, -1.0); 6];
    let mut renderer = renderer_with(Mesh::new(positions, normals).unwrap());
    let frame = renderer.render(0.0);

    for y in 4..=16 {
        for x in 8..=32 {
            assert_ne!(frame.cell(x, y), Some(b'.'), "gap at ({x},{y})");
        }
    }
}

/// Tearing a session down and starting a fresh one leaks nothing: the new
/// buffer comes up cleared at the same dimensions.
#[test]
fn sessions_are_isolated() {
    let mut first = renderer_with(shapes::cube());
    let rendered = first.render(0.0);
    assert!(rendered.as_text().bytes().any(|c| c != b'.'));
    drop(first);

    let second = renderer_with(shapes::cube());
    let buf = second.buffer();
    assert_eq!(buf.width(), 40);
    assert_eq!(buf.height(), 20);
    assert!(buf.as_text().bytes().all(|c| c == b'.'));
}

/// At time zero only the cube's front face is visible: a solid bright
/// square facing the camera.
#[test]
fn cube_front_face_at_time_zero() {
    let mut renderer = renderer_with(shapes::cube());
    let frame = renderer.render(0.0);

    for y in 3..=17 {
        for x in 6..=34 {
            assert_eq!(frame.cell(x, y), Some(b'#'), "hole at ({x},{y})");
        }
    }
    for (x, y) in [(0, 0), (39, 19), (1, 10)] {
        assert_eq!(frame.cell(x, y), Some(b'.'));
    }
}

/// Rendering is a pure function of time.
#[test]
fn frames_are_deterministic() {
    let mut a = renderer_with(shapes::cube());
    let mut b = renderer_with(shapes::cube());
    let fa = a.render(1234.5).as_text().to_owned();
    assert_eq!(fa, b.render(1234.5).as_text());
    // And re-rendering the same time on a reused buffer matches too
    assert_eq!(fa, a.render(1234.5).as_text());
}

/// Incremental edge stepping and brute-force recomputation agree on a
/// whole animated scene, depths included.
#[test]
fn incremental_matches_recompute_on_cube() {
    let mut inc = renderer_with(shapes::cube());
    let mut brute = renderer_with(shapes::cube());
    brute.settings_mut().incremental = false;

    for time in [0.0, 333.0, 777.0, 4096.0] {
        let fa = inc.render(time).as_text().to_owned();
        let fb = brute.render(time).as_text().to_owned();
        assert_eq!(fa, fb, "image mismatch at time {time}");

        for y in 0..20 {
            for x in 0..40 {
                let da = inc.buffer().cell_depth(x, y).unwrap();
                let db = brute.buffer().cell_depth(x, y).unwrap();
                if da != f32::MAX || db != f32::MAX {
                    assert!((da - db).abs() < 1e-5, "depth mismatch at ({x},{y}), t={time}");
                }
            }
        }
    }
}

/// Wireframe mode draws edges only and never touches the depth grid.
#[test]
fn wireframe_is_depth_free() {
    let mut settings = RasterSettings::default();
    settings.mode = RenderMode::Wireframe;
    let mut renderer = Renderer::new(
        40,
        20,
        shapes::cube(),
        Projection::default(),
        settings,
    )
    .unwrap();
    let frame = renderer.render(500.0);

    assert!(frame.as_text().bytes().any(|c| c != b'.'));
    for y in 0..20 {
        for x in 0..40 {
            assert_eq!(frame.cell_depth(x, y), Some(f32::MAX));
        }
    }
}

/// Resize reallocates the grids and the next frame uses them.
#[test]
fn resize_takes_effect_next_frame() {
    let mut renderer = renderer_with(shapes::cube());
    renderer.render(0.0);
    renderer.resize(60, 30).unwrap();
    let frame = renderer.render(0.0);
    assert_eq!(frame.width(), 60);
    assert_eq!(frame.height(), 30);
    assert!(frame.as_text().bytes().any(|c| c == b'#'));
}
