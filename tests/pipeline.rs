use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use flatline::obj::parse_str;
use flatline::prelude::*;
use flatline::render::{line, RasterizerDispatcher, Rasterizer};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/tetrahedron.obj");
const INK: u32 = 0xFFFFFFFF;

fn lit(fb: &FrameBuffer) -> usize {
    fb.pixels().iter().filter(|&&p| p == INK).count()
}

#[test]
fn parser_agrees_with_tobj() {
    let model = Model::from_obj(FIXTURE).unwrap();

    let mut reader = BufReader::new(File::open(FIXTURE).unwrap());
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &tobj::LoadOptions::default(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .unwrap();
    assert_eq!(models.len(), 1);
    // tobj renumbers records in order of first use; the fixture is already in that order
    let reference = &models[0].mesh;

    let positions: Vec<f32> = model.vertices().iter().flat_map(|v| v.into_array()).collect();
    assert_eq!(positions, reference.positions);

    let normals: Vec<f32> = model.normals().iter().flat_map(|n| n.into_array()).collect();
    assert_eq!(normals, reference.normals);

    let texcoords: Vec<f32> = model
        .texture_coords()
        .iter()
        .flat_map(|t| [t.x(), t.y()])
        .collect();
    assert_eq!(texcoords, reference.texcoords);

    let as_u32 = |indices: [usize; 3]| indices.map(|i| i as u32);
    let coords: Vec<u32> = model.faces().iter().flat_map(|f| as_u32(f.coords)).collect();
    let texture: Vec<u32> = model.faces().iter().flat_map(|f| as_u32(f.texture)).collect();
    let normal: Vec<u32> = model.faces().iter().flat_map(|f| as_u32(f.normals)).collect();
    assert_eq!(coords, reference.indices);
    assert_eq!(texture, reference.texcoord_indices);
    assert_eq!(normal, reference.normal_indices);
}

#[test]
fn parses_the_minimal_triangle() {
    let model = parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/1/1 3/1/1\n").unwrap();
    assert_eq!(model.vertex_count(), 3);
    assert_eq!(model.face_count(), 1);
    assert_eq!(model.faces()[0].coords, [0, 1, 2]);
}

#[test]
fn unknown_directive_only_gives_an_empty_model() {
    let model = parse_str("vp 1 2 3\n").unwrap();
    assert_eq!(model.vertex_count(), 0);
    assert_eq!(model.face_count(), 0);
}

#[test]
fn shading_follows_the_light() {
    let model = Model::from_obj(FIXTURE).unwrap();

    let mut front = FrameBuffer::new(64, 64);
    let stats = surf(&model, &mut front, &Argb8888, Point3d::new(0.0, 0.0, -1.0));
    assert_eq!((stats.faces, stats.drawn, stats.culled), (4, 1, 3));

    let mut back = FrameBuffer::new(64, 64);
    let stats = surf(&model, &mut back, &Argb8888, Point3d::new(0.0, 0.0, 1.0));
    assert_eq!((stats.drawn, stats.culled), (2, 2));
    assert_ne!(front, back);
}

#[test]
fn wireframe_touches_every_projected_vertex() {
    let model = Model::from_obj(FIXTURE).unwrap();
    let mut fb = FrameBuffer::new(100, 100);
    let stats = mesh(&model, &mut fb, INK);
    assert_eq!(stats.drawn, 4);

    let viewport = flatline::render::Viewport::of(&fb, YAxis::Up);
    for v in model.vertices() {
        let p = viewport.project(v);
        assert_eq!(fb.pixel(p.x(), p.y()), Some(INK), "vertex {v} at {p}");
    }
}

#[test]
fn all_rasterizers_render_the_same_model() {
    let model = Model::from_obj(FIXTURE).unwrap();
    let light = DirectionalLight::new(Point3d::new(0.2, -0.4, -0.9));
    let images: Vec<FrameBuffer> = RasterizerType::ALL
        .iter()
        .map(|&kind| {
            let mut options = RenderOptions::new();
            options.set_rasterizer(kind);
            let mut fb = FrameBuffer::new(96, 96);
            Renderer::new(options).draw_shaded(&model, &mut fb, &Argb8888, &light);
            fb
        })
        .collect();
    assert!(images.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn right_triangle_fill_is_order_independent() {
    let corners = [Pixel::new(0, 0), Pixel::new(4, 0), Pixel::new(0, 4)];
    for kind in RasterizerType::ALL {
        let dispatcher = RasterizerDispatcher::new(kind);
        let mut reference: Option<FrameBuffer> = None;
        for order in [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
            let mut fb = FrameBuffer::new(16, 16);
            dispatcher.fill_triangle(&order.map(|i| corners[i]), &mut fb, INK);
            assert_eq!(fb.pixel(1, 1), Some(INK));
            assert_ne!(fb.pixel(10, 10), Some(INK));
            match &reference {
                None => reference = Some(fb),
                Some(expected) => assert_eq!(&fb, expected, "{kind} {order:?}"),
            }
        }
    }
}

#[test]
fn lines_are_symmetric() {
    let mut forward = FrameBuffer::new(32, 32);
    let mut backward = FrameBuffer::new(32, 32);
    line(2, 3, 29, 17, &mut forward, INK);
    line(29, 17, 2, 3, &mut backward, INK);
    assert_eq!(forward, backward);
    assert_eq!(lit(&forward), 28);
}

#[test]
fn png_export_round_trips() {
    let mut fb = FrameBuffer::new(24, 16);
    surf(&Model::cube(), &mut fb, &Argb8888, Point3d::new(0.0, 0.0, -1.0));
    fb.set_pixel(3, 2, Argb8888.map_rgb(10, 200, 30));

    let path: PathBuf = std::env::temp_dir().join(format!("flatline-roundtrip-{}.png", std::process::id()));
    fb.save_png(&Argb8888, &path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).ok();

    assert_eq!(decoded, fb.to_image(&Argb8888));
    assert_eq!(decoded.get_pixel(3, 2).0, [10, 200, 30, 255]);
}
