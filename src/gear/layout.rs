//! Assembly of the complete gear figure for rendering backends.

use super::profile::Circle;
use super::{GearParameters, SEPARATOR_WIDTH_FACTOR};
use crate::errors::ParameterError;
use crate::float_types::Real;
use geo::{Coord, LineString, Polygon, Rect, coord};
use nalgebra::Point2;

/// The separator annotation: two concentric rings centered on the roller
/// orbit. Purely a visualization/manufacturing band; nothing feeds back
/// into the profile math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorBand {
    pub inner_radius: Real,
    pub outer_radius: Real,
}

impl SeparatorBand {
    pub fn width(&self) -> Real {
        self.outer_radius - self.inner_radius
    }

    pub fn middle_radius(&self) -> Real {
        0.5 * (self.inner_radius + self.outer_radius)
    }

    /// Both rings as origin-centered circles, inner first.
    pub fn rings(&self) -> [Circle; 2] {
        let center = Point2::origin();
        [
            Circle {
                center,
                radius: self.inner_radius,
            },
            Circle {
                center,
                radius: self.outer_radius,
            },
        ]
    }
}

impl GearParameters {
    /// Separator band straddling the roller orbit, `2.2 × eccentricity`
    /// wide.
    pub fn separator_band(&self) -> SeparatorBand {
        let width = SEPARATOR_WIDTH_FACTOR * self.eccentricity;
        let middle = self.wave_generator_radius + self.roller_radius;
        SeparatorBand {
            inner_radius: middle - 0.5 * width,
            outer_radius: middle + 0.5 * width,
        }
    }

    /// The eccentric wave-generator core, offset from the ring center by
    /// the eccentricity — the offset is what drives the wave motion.
    pub fn wave_generator(&self) -> Circle {
        Circle {
            center: Point2::new(0.0, self.eccentricity),
            radius: self.wave_generator_radius,
        }
    }
}

/// Everything a rendering backend needs, computed in one pass: the closed
/// ring profile, the rollers, and the three annotation circles. Both
/// backends receive this same inert numeric data.
#[derive(Debug, Clone, PartialEq)]
pub struct GearLayout {
    pub params: GearParameters,
    /// Closed ring profile; last point repeats the first.
    pub profile: Vec<Point2<Real>>,
    pub rollers: Vec<Circle>,
    pub separator: SeparatorBand,
    pub wave_generator: Circle,
    /// Pass-through bore for the input shaft, centered at the origin.
    pub shaft_bore: Circle,
}

impl GearLayout {
    /// Build the full figure from derived parameters, a shaft diameter
    /// (pass-through, unrelated to the cycloidal math), and the profile
    /// sample count.
    ///
    /// # Errors
    /// [`ParameterError::NegativeShaftDiameter`] or any error of
    /// [`GearParameters::profile_points`].
    pub fn generate(
        params: GearParameters,
        input_shaft_diameter: Real,
        samples: usize,
    ) -> Result<Self, ParameterError> {
        if !input_shaft_diameter.is_finite() || input_shaft_diameter < 0.0 {
            return Err(ParameterError::NegativeShaftDiameter(input_shaft_diameter));
        }
        let profile = params.profile_points(samples)?;
        Ok(Self {
            profile,
            rollers: params.rollers(),
            separator: params.separator_band(),
            wave_generator: params.wave_generator(),
            shaft_bore: Circle {
                center: Point2::origin(),
                radius: 0.5 * input_shaft_diameter,
            },
            params,
        })
    }

    /// Ring profile as a closed `geo` polygon (no holes).
    pub fn ring_polygon(&self) -> Polygon<Real> {
        let coords: Vec<Coord<Real>> = self
            .profile
            .iter()
            .map(|p| coord! { x: p.x, y: p.y })
            .collect();
        Polygon::new(LineString::new(coords), vec![])
    }

    /// Axis-aligned bounds of the whole figure. The blank outer radius
    /// bounds every entity, including the lobed profile.
    pub fn bounding_rect(&self) -> Rect<Real> {
        let r = self.params.outer_radius;
        Rect::new(coord! { x: -r, y: -r }, coord! { x: r, y: r })
    }
}
