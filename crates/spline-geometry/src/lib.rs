//! Translation from geometric control points into cubic polynomial
//! chains: characteristic matrices, segment chunking, the parametric
//! spline factory, arc-length tables, and the multi-axis curve facade
//! (spec §4.9–§4.12, §6).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod characteristic;
pub mod chunking;
pub mod curve;
pub mod factory;
pub mod length_table;

pub use curve::{
    create_basis_curve, create_bezier_curve, create_cardinal_curve, create_catmull_rom_curve,
    create_hermite_curve, Curve,
};
pub use factory::{
    basis_chunk_coefficients, bezier_chunk_coefficients, cardinal_chunk_coefficients,
    catmull_rom_chunk_coefficients, hermite_chunk_coefficients, SplineFamily,
};
