#![forbid(unsafe_code)]

//! Length vocabulary for fluid typography.
//!
//! # Role in fluidtype
//! `fluidtype-core` owns the small, closed unit system the resolver works
//! in: [`Unit`] (`px`, `rem`, `em`), [`Length`], and the rounding and number
//! formatting rules every emitted CSS value follows. It has no knowledge of
//! presets or settings.
//!
//! # This crate provides
//! - [`Unit`] with explicit conversions through a root size.
//! - [`Length`] parsing (`"1.75rem".parse()`) and [`parse_length`], which
//!   coerces and rounds in one step.
//! - [`round_to_precision`] / [`format_number`] for stable CSS output.

pub mod length;
pub mod number;
pub mod unit;

pub use length::{Length, ParseLengthError, parse_length};
pub use number::{DEFAULT_PRECISION, format_number, round3, round_to_precision};
pub use unit::{DEFAULT_ROOT_SIZE_PX, Unit};
