//! Angles of the equatorial coordinate system.
//!
//! An unconstrained [`Angle`] and the [`LimitedRangeAngle`] checked against
//! the closed range on every operation, with the ready to use kinds:
//! [`Declination`] (or [`Latitude`]), [`Longitude`] and [`RightAscension`].
//!
//! ```
//! use equatorial_types::{Declination, RangeError, RightAscension};
//!
//! let dec = Declination::new(-23.0, 26.0, 12.1).unwrap();
//! assert_eq!(dec.to_string(), "-23* 26' 12.1\"");
//!
//! let ra = RightAscension::new(11.0, 59.0, 0.0).unwrap();
//! let minute = RightAscension::new(0.0, 1.0, 0.0).unwrap();
//! assert_eq!((ra + minute).unwrap().value(), 12.0);
//!
//! assert_eq!(Declination::new(200.0, 0.0, 0.0), Err(RangeError::MaximumExceeded));
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
// use `Box` without fear
#![warn(box_pointers)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(indirect_structural_match)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_doc_code_examples)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(pointer_structural_match)]
#![warn(private_doc_tests)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    decimal_to_parts, degrees_to_seconds, format_degrees, format_hours, parse_to_decimal,
    to_decimal, Angle, AngleError, AngleRange, DivideByZeroError, FullTurn, LimitedRangeAngle,
    Notation, ParseAngleError, RangeError, SexagesimalParts,
};
pub use coord::{
    Declination, DeclinationRange, Latitude, Longitude, LongitudeRange, Ra, RightAscension,
    RightAscensionRange,
};

mod angle;
mod coord;
mod utils;
