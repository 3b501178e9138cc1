use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatline::bench::{
    BarycentricRasterizer, FrameBuffer, HullRasterizer, Rasterizer, ScanlineRasterizer,
};
use flatline::colors::Argb8888;
use flatline::light::DirectionalLight;
use flatline::primitives::{Pixel, Point3d, ScreenTriangle};
use flatline::render::{RasterizerDispatcher, RenderOptions};
use flatline::{Model, RasterizerType, Renderer};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;
const COLOR: u32 = 0xFFFF0000;

fn triangle(points: [(i32, i32); 3]) -> ScreenTriangle {
    points.map(|(x, y)| Pixel::new(x, y))
}

fn small_triangle() -> ScreenTriangle {
    triangle([(100, 100), (120, 100), (110, 120)])
}

fn medium_triangle() -> ScreenTriangle {
    triangle([(100, 100), (300, 100), (200, 300)])
}

fn large_triangle() -> ScreenTriangle {
    triangle([(50, 50), (750, 100), (400, 550)])
}

fn thin_triangle() -> ScreenTriangle {
    triangle([(10, 10), (790, 590), (14, 12)])
}

fn bench_rasterizer<R: Rasterizer>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    id: &str,
    rasterizer: &R,
    name: &str,
    tri: &ScreenTriangle,
) {
    group.bench_with_input(BenchmarkId::new(id, name), tri, |b, tri| {
        let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| rasterizer.fill_triangle(black_box(tri), &mut fb, COLOR));
    });
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let barycentric = BarycentricRasterizer::new();
    let scanline = ScanlineRasterizer::new();
    let hull = HullRasterizer::new();

    for (name, tri) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
        ("thin", thin_triangle()),
    ] {
        bench_rasterizer(&mut group, "barycentric", &barycentric, name, &tri);
        bench_rasterizer(&mut group, "scanline", &scanline, name, &tri);
        bench_rasterizer(&mut group, "hull", &hull, name, &tri);
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // Generate a grid of small triangles
    let triangles: Vec<ScreenTriangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                triangle([(x, y), (x + 35, y), (x + 17, y + 25)])
            })
        })
        .collect();

    for kind in RasterizerType::ALL {
        let dispatcher = RasterizerDispatcher::new(kind);
        group.bench_function(format!("{kind}_400_triangles"), |b| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                for tri in &triangles {
                    dispatcher.fill_triangle(black_box(tri), &mut fb, COLOR);
                }
            });
        });
    }

    group.finish();
}

fn benchmark_shaded_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("shaded_cube");
    let cube = Model::cube();
    let light = DirectionalLight::new(Point3d::new(0.4, -0.3, -1.0));

    for kind in RasterizerType::ALL {
        let mut options = RenderOptions::new();
        options.set_rasterizer(kind);
        let renderer = Renderer::new(options);
        group.bench_function(BenchmarkId::new("surf", kind), |b| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| renderer.draw_shaded(black_box(&cube), &mut fb, &Argb8888, &light));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_shaded_cube
);
criterion_main!(benches);
