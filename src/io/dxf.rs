//! DXF rendering backend: the CAD-sketch consumer of the gear figure.
//! The ring profile becomes one closed lightweight polyline and every
//! other entity a native circle, each on its own layer so downstream
//! CAD tools can toggle them independently.

use crate::gear::{Circle, GearLayout};
use crate::io::IoError;
use dxf::entities::{Circle as DxfCircle, Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::{Drawing, LwPolylineVertex, Point};
use std::fs;
use std::path::Path as FilePath;

pub const LAYER_RING: &str = "RING";
pub const LAYER_ROLLERS: &str = "ROLLERS";
pub const LAYER_SEPARATOR: &str = "SEPARATOR";
pub const LAYER_WAVE_GEN: &str = "WAVE_GEN";
pub const LAYER_SHAFT: &str = "SHAFT";

impl GearLayout {
    /// Serialize the figure as a DXF drawing.
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        let mut drawing = Drawing::new();
        // The default R12 version predates LWPOLYLINE and would drop the
        // ring entity on save.
        drawing.header.version = AcadVersion::R2013;

        // The profile's last point repeats the first; the closed flag
        // covers that edge, so drop the duplicate.
        let mut ring = LwPolyline::default();
        for point in &self.profile[..self.profile.len() - 1] {
            #[allow(clippy::unnecessary_cast)]
            ring.vertices.push(LwPolylineVertex {
                x: point.x as f64,
                y: point.y as f64,
                ..Default::default()
            });
        }
        ring.set_is_closed(true);
        drawing.add_entity(on_layer(
            Entity::new(EntityType::LwPolyline(ring)),
            LAYER_RING,
        ));

        for roller in &self.rollers {
            drawing.add_entity(on_layer(circle_entity(roller), LAYER_ROLLERS));
        }
        for ring in self.separator.rings() {
            drawing.add_entity(on_layer(circle_entity(&ring), LAYER_SEPARATOR));
        }
        drawing.add_entity(on_layer(circle_entity(&self.wave_generator), LAYER_WAVE_GEN));
        drawing.add_entity(on_layer(circle_entity(&self.shaft_bore), LAYER_SHAFT));

        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }

    /// Serialize the figure and write it to `path`.
    pub fn save_dxf(&self, path: impl AsRef<FilePath>) -> Result<(), IoError> {
        let bytes = self.to_dxf()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

#[allow(clippy::unnecessary_cast)]
fn circle_entity(circle: &Circle) -> Entity {
    let center = Point::new(circle.center.x as f64, circle.center.y as f64, 0.0);
    Entity::new(EntityType::Circle(DxfCircle::new(
        center,
        circle.radius as f64,
    )))
}

fn on_layer(mut entity: Entity, layer: &str) -> Entity {
    entity.common.layer = layer.to_string();
    entity
}
