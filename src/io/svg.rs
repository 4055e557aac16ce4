//! SVG rendering backend: the 2D-visualization consumer of the gear
//! figure. Styling mirrors the conventional drawing: solid ring profile,
//! filled rollers, dashed separator, dash-dot wave generator, dotted
//! shaft bore, plus a small text legend.

use crate::float_types::Real;
use crate::gear::{Circle, GearLayout};
use crate::io::IoError;
use std::path::Path as FilePath;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle as SvgCircle, Group, Path, Text};

/// Free margin around the gear blank, in model units (mm).
const MARGIN: Real = 10.0;

const RING_COLOR: &str = "blue";
const ROLLER_COLOR: &str = "orange";
const SEPARATOR_COLOR: &str = "green";
const WAVE_GEN_COLOR: &str = "red";
const SHAFT_COLOR: &str = "purple";

impl GearLayout {
    /// Render the figure as a standalone SVG document.
    pub fn to_svg_string(&self) -> String {
        self.to_svg_document().to_string()
    }

    /// Render the figure and write it to `path`.
    pub fn save_svg(&self, path: impl AsRef<FilePath>) -> Result<(), IoError> {
        let document = self.to_svg_document();
        svg::save(path, &document)?;
        Ok(())
    }

    fn to_svg_document(&self) -> Document {
        let extent = self.params.outer_radius + MARGIN;
        let stroke_width = self.params.outer_radius / 120.0;

        // Model space is y-up; SVG is y-down. Draw the geometry inside a
        // flipped group so coordinates pass through untouched.
        let mut figure = Group::new().set("transform", "scale(1,-1)");

        // Cycloidal ring gear. The profile's last point repeats the
        // first; the close command covers that edge.
        let mut data = Data::new().move_to((self.profile[0].x, self.profile[0].y));
        for point in &self.profile[1..self.profile.len() - 1] {
            data = data.line_to((point.x, point.y));
        }
        figure = figure.add(
            Path::new()
                .set("fill", "none")
                .set("stroke", RING_COLOR)
                .set("stroke-width", stroke_width)
                .set("d", data.close()),
        );

        // Rollers
        for roller in &self.rollers {
            figure = figure.add(
                filled_circle(roller, ROLLER_COLOR).set("fill-opacity", 0.7),
            );
        }

        // Separator rings
        for ring in self.separator.rings() {
            figure = figure.add(
                outlined_circle(&ring, SEPARATOR_COLOR, stroke_width)
                    .set("stroke-dasharray", "6 4"),
            );
        }

        // Wave generator (eccentric) and shaft bore
        figure = figure.add(
            outlined_circle(&self.wave_generator, WAVE_GEN_COLOR, stroke_width)
                .set("stroke-dasharray", "10 4 2 4"),
        );
        figure = figure.add(
            outlined_circle(&self.shaft_bore, SHAFT_COLOR, stroke_width)
                .set("stroke-dasharray", "2 3"),
        );

        Document::new()
            .set(
                "viewBox",
                (-extent, -extent, 2.0 * extent, 2.0 * extent),
            )
            .add(figure)
            .add(legend(extent, stroke_width))
    }
}

fn filled_circle(circle: &Circle, color: &str) -> SvgCircle {
    SvgCircle::new()
        .set("cx", circle.center.x)
        .set("cy", circle.center.y)
        .set("r", circle.radius)
        .set("fill", color)
}

fn outlined_circle(circle: &Circle, color: &str, stroke_width: Real) -> SvgCircle {
    SvgCircle::new()
        .set("cx", circle.center.x)
        .set("cy", circle.center.y)
        .set("r", circle.radius)
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", stroke_width)
}

fn legend(extent: Real, stroke_width: Real) -> Group {
    let entries = [
        (RING_COLOR, "Cycloidal Ring Gear"),
        (ROLLER_COLOR, "Rollers"),
        (SEPARATOR_COLOR, "Separator"),
        (WAVE_GEN_COLOR, "Wave Generator"),
        (SHAFT_COLOR, "Input Shaft"),
    ];
    let font_size = 6.0 * stroke_width;
    let mut group = Group::new().set("font-family", "sans-serif").set(
        "font-size",
        font_size,
    );
    for (row, (color, label)) in entries.iter().enumerate() {
        group = group.add(
            Text::new(*label)
                .set("x", -extent + font_size)
                .set("y", -extent + font_size * (row as Real + 2.0))
                .set("fill", *color),
        );
    }
    group
}
