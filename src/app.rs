use std::{path::PathBuf, sync::Arc};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::{
    gfx::RenderEngine,
    input::InputState,
    scene::{compose_room, SceneState},
};

/// Startup options for the viewer.
pub struct ViewerConfig {
    /// Directory the material images are loaded from.
    pub texture_dir: PathBuf,
    pub window_size: (u32, u32),
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            texture_dir: PathBuf::from("textures"),
            window_size: (1200, 800),
        }
    }
}

pub struct ParlourApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: SceneState,
    input: InputState,
    config: ViewerConfig,
}

impl ParlourApp {
    /// Create a viewer with default settings
    pub fn new() -> Self {
        Self::with_config(ViewerConfig::default())
    }

    pub fn with_config(config: ViewerConfig) -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                scene: SceneState::new(),
                input: InputState::new(),
                config,
            },
        }
    }

    /// Run the viewer (consumes self and starts the event loop)
    pub fn run(mut self) {
        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl Default for ParlourApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.config.window_size;
        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title("parlour")
                .with_inner_size(winit::dpi::LogicalSize::new(width, height)),
        ) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let (width, height) = window_handle.inner_size().into();
            let window_clone = window_handle.clone();
            let texture_dir = self.config.texture_dir.clone();
            let renderer = pollster::block_on(async move {
                RenderEngine::new(window_clone, width, height, &texture_dir).await
            });

            match renderer {
                Ok(engine) => {
                    self.render_engine = Some(engine);
                    window_handle.request_redraw();
                }
                Err(err) => {
                    log::error!("cannot start renderer: {err}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        let Some(window) = self.window.as_ref() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if matches!(
                    key_event.physical_key,
                    PhysicalKey::Code(KeyCode::Escape)
                ) {
                    event_loop.exit();
                    return;
                }
                self.input.process_key_event(&key_event);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                // One tick: fold the input into the scene state, rebuild the
                // draw list, hand it to the GPU, and queue the next tick.
                self.scene.apply_input(&mut self.input);
                render_engine.update(&self.scene.camera, &self.scene.toggles);

                let draw_list = compose_room(&self.scene);
                render_engine.render_frame(&draw_list);

                window.request_redraw();
            }
            _ => (),
        }
    }
}
