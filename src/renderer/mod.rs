//! Hand-off to the host renderer
//!
//! Meshes, materials and GPU submission live on the host side. This module
//! describes what to build and packs per-frame transforms into a uniform block.

pub mod descriptors;
pub mod uniforms;

pub use descriptors::{BodyDescriptor, RampDescriptor};
pub use uniforms::{FrameUniforms, Projection};
