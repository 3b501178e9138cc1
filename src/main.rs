use std::path::PathBuf;

use flatline::colors::{self, Argb8888};
use flatline::prelude::*;
use flatline::window::{FrameLimiter, Window, WindowEvent, WINDOW_HEIGHT, WINDOW_WIDTH};
use log::info;

const USAGE: &str = "usage: flatline [model.obj] [--wireframe] [--snapshot out.png]";
const GRID_SPACING: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawMode {
    Wireframe,
    Shaded,
}

impl DrawMode {
    fn toggled(self) -> Self {
        match self {
            DrawMode::Wireframe => DrawMode::Shaded,
            DrawMode::Shaded => DrawMode::Wireframe,
        }
    }
}

struct Args {
    model: Option<PathBuf>,
    mode: DrawMode,
    snapshot: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        model: None,
        mode: DrawMode::Shaded,
        snapshot: None,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--wireframe" => parsed.mode = DrawMode::Wireframe,
            "--snapshot" => {
                let path = args.next().ok_or_else(|| format!("--snapshot needs a path\n{USAGE}"))?;
                parsed.snapshot = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}\n{USAGE}")),
            path if parsed.model.is_none() => parsed.model = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {extra}\n{USAGE}")),
        }
    }
    Ok(parsed)
}

fn draw(renderer: &Renderer, model: &Model, framebuffer: &mut FrameBuffer, mode: DrawMode, light: &DirectionalLight) {
    framebuffer.clear(colors::BACKGROUND);
    renderer.draw_grid(framebuffer, GRID_SPACING, colors::GRID);
    match mode {
        DrawMode::Wireframe => renderer.draw_wireframe(model, framebuffer, colors::WIREFRAME),
        DrawMode::Shaded => renderer.draw_shaded(model, framebuffer, &Argb8888, light),
    };
}

fn title(renderer: &Renderer, mode: DrawMode) -> String {
    format!("flatline - {mode:?} ({})", renderer.rasterizer_type())
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    let model = match &args.model {
        Some(path) => Model::from_obj(path).map_err(|e| e.to_string())?,
        None => Model::cube(),
    };
    info!(
        "loaded {}: {} vertices, {} faces",
        args.model
            .as_deref()
            .map_or_else(|| "built-in cube".into(), |p| p.display().to_string()),
        model.vertex_count(),
        model.face_count()
    );

    let mut renderer = Renderer::default();
    let light = DirectionalLight::default();
    let mut framebuffer = FrameBuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut mode = args.mode;

    if let Some(path) = &args.snapshot {
        draw(&renderer, &model, &mut framebuffer, mode, &light);
        framebuffer.save_png(&Argb8888, path).map_err(|e| e.to_string())?;
        info!("wrote {}", path.display());
        return Ok(());
    }

    let mut window = Window::new("flatline", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    window.set_title(&title(&renderer, mode))?;
    let mut limiter = FrameLimiter::new(&window);

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => framebuffer.resize(w, h),
            WindowEvent::ToggleMode => {
                mode = mode.toggled();
                window.set_title(&title(&renderer, mode))?;
            }
            WindowEvent::CycleRasterizer => {
                renderer.set_rasterizer(renderer.rasterizer_type().next());
                info!("rasterizer: {}", renderer.rasterizer_type());
                window.set_title(&title(&renderer, mode))?;
            }
            WindowEvent::None => {}
        }

        draw(&renderer, &model, &mut framebuffer, mode, &light);
        window.present(&framebuffer)?;
        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
