//! Session files: an initial camera, a viewport and a list of input events.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{ElementRect, OrbitCamera};
use crate::math::Vec3;
use crate::scene::{Scene, SceneEvent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub pivot: Vec3,
    pub distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    /// `[min, max]` elevation in radians; the camera default when absent.
    pub elevation_bounds: Option<[f32; 2]>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pivot: [0.0, 0.0, 0.0],
            distance: 40.0,
            azimuth: 0.0,
            elevation: 1.5,
            elevation_bounds: None,
        }
    }
}

impl CameraConfig {
    pub fn build(&self) -> OrbitCamera {
        let mut camera = OrbitCamera::new(self.pivot, self.distance, self.azimuth, self.elevation);
        if let Some([min, max]) = self.elevation_bounds {
            camera.set_bounds(min, max);
        }
        camera
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub camera: CameraConfig,
    pub viewport: ElementRect,
    pub events: Vec<SceneEvent>,
}

impl SessionConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse session JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid session file: {}", path.display()))
    }

    pub fn scene(&self) -> Scene {
        Scene::new(self.camera.build(), self.viewport)
    }
}

/// Camera state after one replayed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Index into the session's event list; `None` for the initial state.
    pub event: Option<usize>,
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
    pub position: Vec3,
    pub view_direction: Vec3,
    pub view_matrix: [f32; 16],
}

impl Snapshot {
    pub fn capture(scene: &Scene, event: Option<usize>) -> Self {
        let camera = scene.camera();
        Self {
            event,
            azimuth: camera.azimuth(),
            elevation: camera.elevation(),
            distance: camera.distance(),
            position: camera.position(),
            view_direction: camera.view_direction(),
            view_matrix: *camera.view_matrix(),
        }
    }
}

/// Run every event through a fresh scene, capturing the initial state and
/// the state after each event.
pub fn replay(session: &SessionConfig) -> Vec<Snapshot> {
    let mut scene = session.scene();
    let mut snapshots = Vec::with_capacity(session.events.len() + 1);
    snapshots.push(Snapshot::capture(&scene, None));
    for (index, event) in session.events.iter().enumerate() {
        scene.handle(event);
        snapshots.push(Snapshot::capture(&scene, Some(index)));
    }
    snapshots
}
