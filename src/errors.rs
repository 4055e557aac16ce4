//! Parameter validation errors

use crate::float_types::Real;

/// All the ways a gear parameter set can be rejected before any
/// geometry is produced.
///
/// The reference formulas happily divide by zero or take `sin` of a
/// degenerate angle; here every such input is caught up front so the
/// crate never hands back NaN or an inverted curve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// (NonPositiveRollerDiameter) Rollers must have physical extent
    #[error("roller diameter must be positive, got {0}")]
    NonPositiveRollerDiameter(Real),
    /// (TooFewRollers) At least one roller is needed to define the lobing
    #[error("at least {min} roller(s) required, got {got}")]
    TooFewRollers { got: usize, min: usize },
    /// (NonFiniteTargetDiameter) The outer-diameter hint must be a real number
    #[error("target outer diameter must be finite, got {0}")]
    NonFiniteTargetDiameter(Real),
    /// (InfeasibleWaveGenerator) The derived wave-generator radius collapsed to zero or below
    #[error("derived wave generator radius {0} is not positive; no physical gear exists for these inputs")]
    InfeasibleWaveGenerator(Real),
    /// (TooFewSamples) A closed profile needs at least a triangle's worth of samples
    #[error("profile sampling needs at least {min} samples, got {got}")]
    TooFewSamples { got: usize, min: usize },
    /// (NegativeShaftDiameter) The bore is pass-through but still must be a real circle
    #[error("input shaft diameter must be non-negative, got {0}")]
    NegativeShaftDiameter(Real),
}
