use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orbit_camera::camera::ElementRect;
use orbit_camera::cli::{Cli, Command};
use orbit_camera::config::{replay, SessionConfig};
use orbit_camera::core::WinitCameraInput;
use orbit_camera::geometry::generate_sphere_geometry;
use orbit_camera::scene::{Scene, SceneEvent};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Replay { session, pretty } => run_replay(&session, pretty),
        Command::Icosphere { iterations } => {
            let sphere = generate_sphere_geometry(iterations);
            println!(
                "iterations={} vertices={} triangles={}",
                iterations,
                sphere.vertex_count(),
                sphere.triangle_count()
            );
            Ok(())
        }
        Command::Probe { session } => {
            let config = match session {
                Some(path) => SessionConfig::load(&path)?,
                None => SessionConfig::default(),
            };
            run_probe(config)
        }
    }
}

fn run_replay(path: &Path, pretty: bool) -> Result<()> {
    let session = SessionConfig::load(path)?;
    info!("Replaying {} events from {}", session.events.len(), path.display());

    for snapshot in replay(&session) {
        let line = if pretty {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        }
        .context("Failed to serialize snapshot")?;
        println!("{}", line);
    }
    Ok(())
}

fn run_probe(config: SessionConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = ProbeApp {
        window: None,
        scene: config.scene(),
        input: WinitCameraInput::new(),
    };

    println!("Orbit probe - drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct ProbeApp {
    window: Option<Window>,
    scene: Scene,
    input: WinitCameraInput,
}

impl ApplicationHandler for ProbeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let ElementRect { width, height, .. } = *self.scene.viewport();
        match event_loop.create_window(
            Window::default_attributes()
                .with_title("Orbit Probe")
                .with_inner_size(winit::dpi::PhysicalSize::new(width as u32, height as u32)),
        ) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                eprintln!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            other => {
                let Some(scene_event) = self.input.process_event(&other) else {
                    return;
                };
                let dragging = self.scene.camera().is_dragging();
                self.scene.handle(&scene_event);

                // Only report events that moved the camera.
                let moved = match scene_event {
                    SceneEvent::PointerMove { .. } => dragging,
                    SceneEvent::Wheel { .. } | SceneEvent::SetBounds { .. } => true,
                    _ => false,
                };
                if moved {
                    let camera = self.scene.camera();
                    let p = camera.position();
                    info!(
                        "azimuth={:.3} elevation={:.3} distance={:.1} eye=({:.2}, {:.2}, {:.2})",
                        camera.azimuth(),
                        camera.elevation(),
                        camera.distance(),
                        p[0],
                        p[1],
                        p[2]
                    );
                }
            }
        }
    }
}
