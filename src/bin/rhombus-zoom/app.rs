use std::ffi::CString;
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use log::{error, info, warn};

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use rhombus_zoom::checkerboard::Checkerboard;
use rhombus_zoom::clock::AnimationClock;
use rhombus_zoom::quad::QUAD;
use rhombus_zoom::{AnimationParameters, Phase};

use crate::gl_wrapper::geometry::{GBError, Geometry, GeometryBuilder, Primitive, VertexAttribute};
use crate::gl_wrapper::gl_string;
use crate::gl_wrapper::program::{PBError, Program, ProgramBuilder, Uniform};
use crate::gl_wrapper::renderer::GlRenderer;
use crate::gl_wrapper::texture::{Texture2D, TextureError, TextureFilter, TextureFormats};

const WINDOW_TITLE: &str = "Rhombus Zoom and Stretch";
const TEXTURE_UNIT: u8 = 0;

pub struct App {
    event_loop: EventLoop<()>,
    stage: Stage,
}

impl App {
    pub fn new(width: u32, height: u32, params: AnimationParameters) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(width, height)))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title(WINDOW_TITLE);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                configs
                    .reduce(|best, config| {
                        if config.num_samples() > best.num_samples() {
                            config
                        } else {
                            best
                        }
                    })
                    .expect("glutin offers at least one config")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| {
            CString::new(s)
                .map(|s| gl_display.get_proc_address(s.as_c_str()).cast())
                .unwrap_or(std::ptr::null())
        });

        info!(
            "OpenGL {} on {}",
            gl_string(gl::VERSION).unwrap_or_default(),
            gl_string(gl::RENDERER).unwrap_or_default()
        );

        if let Err(e) = gl_window
            .surface
            .set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            warn!("Could not enable vsync: {e}");
        }

        let stage = Stage::new(params, gl_context, gl_window)?;

        Ok(Self { event_loop, stage })
    }

    pub fn run(self) -> ! {
        let App {
            event_loop,
            mut stage,
        } = self;

        let clock = AnimationClock::start();
        let mut phase: Option<Phase> = None;

        event_loop.run(move |event, _window_target, control_flow| {
            control_flow.set_poll();
            match event {
                Event::MainEventsCleared => {
                    stage.gl_window.window.request_redraw();
                }
                Event::RedrawRequested(_) => {
                    let t = clock.elapsed();

                    let current = stage.params.phase(t);
                    if phase != Some(current) {
                        info!("{current:?} phase at t = {t:.3}s");
                        phase = Some(current);
                    }

                    stage.draw(t);

                    if let Err(e) = stage.gl_window.surface.swap_buffers(&stage.gl_context) {
                        error!("Could not present frame: {e}");
                        control_flow.set_exit_with_code(-1);
                    }
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => stage.resize(size),
                    WindowEvent::CloseRequested => control_flow.set_exit(),
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => control_flow.set_exit(),
                    _ => (),
                },
                _ => (),
            }
        })
    }
}

/// GL resources of the single quad, plus the context and window they live in.
///
/// Fields drop top to bottom: GL objects first, the window last.
struct Stage {
    quad: Geometry,
    program: Program,
    texture: Texture2D,
    uniforms: AnimationUniforms,
    gl_renderer: GlRenderer,
    params: AnimationParameters,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl Stage {
    fn new(
        params: AnimationParameters,
        gl_context: PossiblyCurrentContext,
        gl_window: GlWindow,
    ) -> Result<Self, AppError> {
        let quad = GeometryBuilder::new(&QUAD)
            .with_attribute(VertexAttribute::Vec2)
            .with_attribute(VertexAttribute::Vec2)
            .with_primitive(Primitive::TriangleStrip)
            .build()?;

        let program = ProgramBuilder::new(
            include_str!("gl_shaders/rhombus.vert.glsl"),
            include_str!("gl_shaders/checker.frag.glsl"),
        )
        .build()?;

        let board = Checkerboard::default();
        let texture = Texture2D::new(
            board.width(),
            board.height(),
            &board.to_rgb8(),
            TextureFormats::Rgb8,
            TextureFilter::Linear,
        )?;

        let uniforms = AnimationUniforms::locate(&program);

        let mut gl_renderer = GlRenderer::new();
        let (width, height): (u32, u32) = gl_window.window.inner_size().into();
        gl_renderer.resize(width, height);
        gl_renderer.use_program(&program);
        uniforms.texture.set_i32(TEXTURE_UNIT as i32);

        Ok(Self {
            quad,
            program,
            texture,
            uniforms,
            gl_renderer,
            params,
            gl_context,
            gl_window,
        })
    }

    fn draw(&mut self, t: f32) {
        self.gl_renderer.clear_color(0.0, 0.0, 0.0);

        self.gl_renderer.use_program(&self.program);
        self.texture.bind(TEXTURE_UNIT);
        self.uniforms.upload(t, &self.params);

        self.gl_renderer.draw(&self.quad, &self.program);
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        {
            self.gl_window
                .surface
                .resize(&self.gl_context, width, height);
            self.gl_renderer.resize(size.width, size.height);
        }
    }
}

struct AnimationUniforms {
    time: Uniform,
    zoom_duration: Uniform,
    stretch_duration: Uniform,
    start_skew: Uniform,
    texture: Uniform,
}

impl AnimationUniforms {
    fn locate(program: &Program) -> Self {
        Self {
            time: program.uniform("uTime"),
            zoom_duration: program.uniform("zoomDuration"),
            stretch_duration: program.uniform("stretchDuration"),
            start_skew: program.uniform("uStartSkew"),
            texture: program.uniform("tex"),
        }
    }

    fn upload(&self, t: f32, params: &AnimationParameters) {
        self.time.set_f32(t);
        self.zoom_duration.set_f32(params.zoom_duration());
        self.stretch_duration.set_f32(params.stretch_duration());
        self.start_skew.set_f32(params.start_skew());
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::ZeroSizedWindow)?,
            NonZeroU32::new(height).ok_or(AppError::ZeroSizedWindow)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create display: {0}")]
    Display(String),
    #[error("no window was created")]
    NoWindow,
    #[error("window has zero size")]
    ZeroSizedWindow,
    #[error("OpenGL error: {0}")]
    Context(#[from] glutin::error::Error),
    #[error(transparent)]
    Program(#[from] PBError),
    #[error(transparent)]
    Geometry(#[from] GBError),
    #[error(transparent)]
    Texture(#[from] TextureError),
}
