use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputEvent;
use crate::input::platform::WinitTranslator;
use crate::paint::Rgb;
use crate::render::{RenderCtx, RenderTarget, StreamRenderer};
use crate::scene::VertexStream;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// What the application wants on screen this frame.
pub struct FrameOutput {
    pub stream: VertexStream,
    pub clear: Rgb,
}

/// Application contract implemented by the studio layer.
pub trait App {
    /// Reduces one translated input event. Every handler runs to completion
    /// before the next event is processed; ordering is strictly FIFO.
    fn on_event(&mut self, event: &InputEvent) -> AppControl;

    /// Called once per redraw; returns the flattened scene to upload.
    fn frame(&mut self) -> FrameOutput;
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "linework".to_string(),
            initial_size: LogicalSize::new(900.0, 900.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState {
            config,
            app,
            translator: WinitTranslator::new(),
            window: None,
            gpu: None,
            renderer: StreamRenderer::new(),
            startup_error: None,
            exit_requested: false,
        };

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,
    translator: WinitTranslator,

    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    renderer: StreamRenderer,

    /// Window/GPU creation failure, surfaced after the loop exits.
    startup_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(window.clone()))
            .context("GPU initialization failed")?;

        log::info!(
            "window ready: {}x{} physical, surface format {:?}",
            gpu.size().width,
            gpu.size().height,
            gpu.surface_format()
        );

        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_mut() else { return };

        let mut frame = match gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                match gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => self.request_exit(event_loop),
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {}
                }
                return;
            }
        };

        let output = self.app.frame();
        let [r, g, b] = output.clear.to_linear();

        // Clear pass; dropped before the encoder moves into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("linework clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        {
            let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.renderer.render(&ctx, &mut target, &output.stream);
        }

        if let Some(window) = self.window.as_ref() {
            window.pre_present_notify();
        }
        gpu.submit(frame);
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init_window(event_loop) {
            log::error!("startup failed: {err:#}");
            self.startup_error = Some(err);
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if let Some(window) = self.window.as_ref() {
            if let Some(ev) = self.translator.translate(window, &event) {
                if self.app.on_event(&ev) == AppControl::Exit {
                    self.request_exit(event_loop);
                    return;
                }
                // The scene may have changed; repaint on demand.
                window.request_redraw();
            }
        }

        match event {
            WindowEvent::CloseRequested => self.request_exit(event_loop),

            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size);
                }
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(gpu), Some(window)) = (self.gpu.as_mut(), self.window.as_ref()) {
                    gpu.resize(window.inner_size());
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
