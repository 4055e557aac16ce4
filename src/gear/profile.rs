//! Closed-curve sampling of the lobed ring profile, and roller placement.

use super::GearParameters;
use crate::errors::ParameterError;
use crate::float_types::{Real, TAU};
use nalgebra::Point2;

/// A circle primitive: rollers, separator rings, wave generator, and the
/// shaft bore are all instances of this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2<Real>,
    pub radius: Real,
}

impl GearParameters {
    /// **Mathematical Foundation: Cycloidal Lobe Envelope**
    ///
    /// Samples the closed curve that forms the ring gear's lobed inner
    /// boundary: the envelope of a roller of radius `r` whose center rides
    /// the eccentric radial function of the wave generator.
    ///
    /// ### **Parametric Representation**
    /// Per sample angle θ ∈ [0, 2π), with eccentricity `e`, cavity count
    /// `k`, roller radius `r`, and wave-generator radius `w`:
    /// ```text
    /// s(θ) = √((r + w)² − (e·sin(kθ))²)     radial auxiliary term
    /// l(θ) = e·cos(kθ) + s(θ)               center-to-envelope distance
    /// ξ(θ) = atan2(e·k·sin(kθ), s(θ))       rolling-contact phase correction
    /// P(θ) = (l·sin θ + r·sin(θ + ξ),  l·cos θ + r·cos(θ + ξ))
    /// ```
    /// The radicand stays non-negative whenever `r + w ≥ e`, which
    /// [`GearParameters::derive`](super::GearParameters::derive)
    /// guarantees (`e = 0.4·r` and `w > 0`).
    ///
    /// ### **Sampling**
    /// θ sweeps a full 2π even though the lobing repeats every `2π/k`;
    /// the `k`-scaled terms inside produce the lobes. Keep `samples`
    /// at or above roughly `20·k` to avoid visible faceting;
    /// [`DEFAULT_PROFILE_SAMPLES`](super::DEFAULT_PROFILE_SAMPLES) is a
    /// safe default for typical roller counts.
    ///
    /// Returns `samples + 1` points with the first repeated as the last,
    /// closing the loop.
    ///
    /// # Errors
    /// [`ParameterError::TooFewSamples`] if `samples < 3` (a closed curve
    /// needs at least a triangle).
    pub fn profile_points(&self, samples: usize) -> Result<Vec<Point2<Real>>, ParameterError> {
        if samples < 3 {
            return Err(ParameterError::TooFewSamples {
                got: samples,
                min: 3,
            });
        }
        let mut points = Vec::with_capacity(samples + 1);
        for i in 0..samples {
            let theta = (i as Real / samples as Real) * TAU;
            points.push(self.profile_point(theta));
        }
        // close it
        points.push(points[0]);
        Ok(points)
    }

    /// Distance from the gear center to the lobe envelope at angle
    /// `theta`, before the roller-radius offset. Roller centers ride
    /// exactly on this function.
    pub fn profile_radius(&self, theta: Real) -> Real {
        self.radial_terms(theta).1
    }

    /// One roller per pocket at evenly spaced angles `θᵢ = i·2π/n`, each
    /// at radial offset `l(θᵢ)` so the roller sits exactly at the local
    /// profile radius for its angle.
    pub fn rollers(&self) -> Vec<Circle> {
        (0..self.roller_count)
            .map(|i| {
                let theta = (i as Real) * TAU / (self.roller_count as Real);
                let l = self.profile_radius(theta);
                Circle {
                    center: Point2::new(l * theta.sin(), l * theta.cos()),
                    radius: self.roller_radius,
                }
            })
            .collect()
    }

    // (s, l) of the envelope math; shared by the curve and the rollers.
    fn radial_terms(&self, theta: Real) -> (Real, Real) {
        let k = self.cavity_count as Real;
        let reach = self.roller_radius + self.wave_generator_radius;
        let wobble = self.eccentricity * (k * theta).sin();
        let s = (reach * reach - wobble * wobble).sqrt();
        let l = self.eccentricity * (k * theta).cos() + s;
        (s, l)
    }

    fn profile_point(&self, theta: Real) -> Point2<Real> {
        let k = self.cavity_count as Real;
        let (s, l) = self.radial_terms(theta);
        let xi = (self.eccentricity * k * (k * theta).sin()).atan2(s);
        Point2::new(
            l * theta.sin() + self.roller_radius * (theta + xi).sin(),
            l * theta.cos() + self.roller_radius * (theta + xi).cos(),
        )
    }
}
