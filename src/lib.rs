//! Geometry of a **cycloidal wave-reduction gear** (a "harmonic drive"-style
//! mechanism): an outer ring with lobed cavities, circular rollers, a
//! separator band, an eccentric wave generator, and a central shaft bore.
//!
//! The whole crate is a deterministic pure function from a handful of
//! scalars to inert geometric data: [`GearParameters::derive`] turns roller
//! diameter, roller count, and a target outer diameter into the dependent
//! radii, and [`GearLayout::generate`] samples the closed lobed profile and
//! places every circle. Rendering backends consume the layout without
//! feeding anything back.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render a [`GearLayout`] as a styled SVG document
//! - **dxf-io**: write a [`GearLayout`] as [DXF](https://en.wikipedia.org/wiki/AutoCAD_DXF) sketch entities
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod gear;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ParameterError;
pub use gear::{Circle, GearLayout, GearParameters, SeparatorBand};
