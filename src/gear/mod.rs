//! Cycloidal wave-reduction gear ("harmonic drive"-style) geometry.
//!
//! Everything in this module tree is a pure function of four scalars:
//! roller diameter, roller count, a target outer diameter, and a sample
//! resolution. [`GearParameters::derive`] turns the first three into the
//! dependent radii; the submodules sample the lobed ring profile and
//! place the rollers, separator, wave generator, and shaft bore.

pub mod layout;
pub mod profile;

pub use layout::{GearLayout, SeparatorBand};
pub use profile::Circle;

use crate::errors::ParameterError;
use crate::float_types::{PI, Real};

/// Ratio of eccentricity to roller diameter (the "cycloidal modulus").
pub const CYCLOID_MODULUS: Real = 0.2;

/// Clearance factor keeping adjacent roller pockets from overlapping.
pub const POCKET_CLEARANCE: Real = 1.1;

/// Separator band width as a multiple of the eccentricity.
pub const SEPARATOR_WIDTH_FACTOR: Real = 2.2;

/// Default sample count for the ring profile. Comfortably above the
/// ~20 samples per lobe needed to avoid visible faceting at typical
/// roller counts (8–20).
pub const DEFAULT_PROFILE_SAMPLES: usize = 500;

/// The derived parameter set of one wave gear, immutable once computed.
///
/// `requested_outer_radius` keeps the caller's original request so a
/// consumer can tell when the minimum-size floor overrode it (see
/// [`GearParameters::outer_radius_raised`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearParameters {
    /// Roller diameter as supplied by the caller.
    pub roller_diameter: Real,
    /// Number of rollers as supplied by the caller.
    pub roller_count: usize,
    /// Half the roller diameter.
    pub roller_radius: Real,
    /// Eccentric offset driving the wave motion: `0.2 × roller_diameter`.
    pub eccentricity: Real,
    /// Number of lobes in the ring profile: `roller_count + 1`.
    pub cavity_count: usize,
    /// Smallest outer radius that keeps adjacent roller pockets apart.
    pub min_outer_radius: Real,
    /// Half the outer diameter the caller asked for, before flooring.
    pub requested_outer_radius: Real,
    /// Actual outer radius: `max(requested_outer_radius, min_outer_radius)`.
    pub outer_radius: Real,
    /// Radius of the eccentric wave-generator core.
    pub wave_generator_radius: Real,
}

impl GearParameters {
    /// Derive the full parameter set from the three defining scalars.
    ///
    /// The requested outer diameter is a lower-bound hint: when it is
    /// smaller than the geometric minimum, the minimum silently wins and
    /// the result is still a buildable gear. The substitution is visible
    /// through [`outer_radius_raised`](Self::outer_radius_raised).
    ///
    /// # Errors
    /// - [`ParameterError::TooFewRollers`] if `roller_count < 1`
    /// - [`ParameterError::NonPositiveRollerDiameter`] if
    ///   `roller_diameter` is zero, negative, or non-finite
    /// - [`ParameterError::NonFiniteTargetDiameter`] if
    ///   `target_outer_diameter` is NaN or infinite
    /// - [`ParameterError::InfeasibleWaveGenerator`] if the derived
    ///   wave-generator radius is not positive
    pub fn derive(
        roller_diameter: Real,
        roller_count: usize,
        target_outer_diameter: Real,
    ) -> Result<Self, ParameterError> {
        if roller_count < 1 {
            return Err(ParameterError::TooFewRollers {
                got: roller_count,
                min: 1,
            });
        }
        if !roller_diameter.is_finite() || roller_diameter <= 0.0 {
            return Err(ParameterError::NonPositiveRollerDiameter(roller_diameter));
        }
        if !target_outer_diameter.is_finite() {
            return Err(ParameterError::NonFiniteTargetDiameter(target_outer_diameter));
        }

        let roller_radius = 0.5 * roller_diameter;
        let eccentricity = CYCLOID_MODULUS * roller_diameter;
        let cavity_count = roller_count + 1;

        // Pocket spacing around the ring sets a hard floor on the outer
        // radius; below it, adjacent roller pockets would merge.
        let min_outer_radius = (POCKET_CLEARANCE * roller_diameter)
            / (PI / cavity_count as Real).sin()
            + 2.0 * eccentricity;
        let requested_outer_radius = 0.5 * target_outer_diameter;
        let outer_radius = requested_outer_radius.max(min_outer_radius);
        let wave_generator_radius = (outer_radius - 2.0 * eccentricity) - roller_diameter;

        // Unreachable once the floor has applied (the floor implies a
        // positive wave generator for every valid roller count), but the
        // invariant is what makes the profile radicand non-negative, so
        // it is enforced rather than assumed.
        if wave_generator_radius <= 0.0 {
            return Err(ParameterError::InfeasibleWaveGenerator(wave_generator_radius));
        }

        Ok(Self {
            roller_diameter,
            roller_count,
            roller_radius,
            eccentricity,
            cavity_count,
            min_outer_radius,
            requested_outer_radius,
            outer_radius,
            wave_generator_radius,
        })
    }

    /// True when the minimum-size floor overrode the requested outer
    /// radius.
    pub fn outer_radius_raised(&self) -> bool {
        self.requested_outer_radius < self.min_outer_radius
    }

    /// Stage reduction ratio. With one more lobe than rollers, one full
    /// wave-generator turn advances the ring by a single lobe, giving
    /// `roller_count : 1`.
    pub fn reduction_ratio(&self) -> Real {
        self.roller_count as Real
    }
}
