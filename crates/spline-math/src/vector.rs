//! `Vector2`/`Vector3`/`Vector4` — immutable fixed-size numeric tuples
//! carrying a precision attribute (spec §4.2).
//!
//! These mirror the teacher's `Array` newtype (indexing, `dot`, element
//! access) but are fixed at compile time since the spec's vectors are
//! always 2, 3, or 4 components — there is no dynamic-length case to
//! justify wrapping `nalgebra::DVector` here.

use crate::rounding::{min_precision, round};
use spline_core::{Precision, Real, PRECISION_DEFAULT};

macro_rules! define_vector {
    ($name:ident, $n:expr, [$($field:ident : $idx:expr),+ $(,)?], $ctor:ident) => {
        #[doc = concat!("An immutable ", stringify!($n), "-component numeric tuple.")]
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            components: [Real; $n],
            precision: Precision,
        }

        impl $name {
            /// Construct from explicit components, rounding each to `precision`.
            pub fn $ctor($($field: Real),+, precision: Precision) -> Self {
                let raw = [$($field),+];
                let mut components = [0.0; $n];
                for i in 0..$n {
                    components[i] = round(raw[i], precision);
                }
                Self { components, precision }
            }

            /// Construct with the default precision.
            pub fn make($($field: Real),+) -> Self {
                Self::$ctor($($field),+, PRECISION_DEFAULT)
            }

            /// Construct from an array, with the default precision.
            pub fn from_array(components: [Real; $n]) -> Self {
                let mut out = [0.0; $n];
                for i in 0..$n {
                    out[i] = round(components[i], PRECISION_DEFAULT);
                }
                Self { components: out, precision: PRECISION_DEFAULT }
            }

            /// This vector's precision.
            pub fn precision(&self) -> Precision {
                self.precision
            }

            /// Components in order, as an owned sequence.
            pub fn components(&self) -> [Real; $n] {
                self.components
            }

            $(
                #[doc = concat!("Component `", stringify!($field), "`.")]
                pub fn $field(&self) -> Real {
                    self.components[$idx]
                }
            )+

            /// Dot product. Output precision is the minimum of the operands'.
            pub fn dot(&self, other: &Self) -> Real {
                let raw: Real = self.components.iter().zip(other.components.iter()).map(|(a, b)| a * b).sum();
                round(raw, min_precision(self.precision, other.precision))
            }

            /// Whether every component equals the corresponding component of `other`.
            pub fn is_identical(&self, other: &Self) -> bool {
                self.components == other.components
            }
        }
    };
}

define_vector!(Vector2, 2, [v0: 0, v1: 1], new2);
define_vector!(Vector3, 3, [v0: 0, v1: 1, v2: 2], new3);
define_vector!(Vector4, 4, [v0: 0, v1: 1, v2: 2, v3: 3], new4);
