//! Test support library
//! Provides various helper functions & utilities for tests.

use wavegear::float_types::Real;

/// Absolute-difference comparison against an explicit tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
