//! Converto Core - Fundamental types
//!
//! This crate provides the types shared by the conversion engine and its
//! callers:
//! - `ConvertoError`: Structured errors that are reported, never thrown
//! - `parse_magnitude`: Text → finite `f64` (or nothing)
//! - `to_fixed` / `format_result`: Display rendering of converted values

mod error;
mod number;

pub use error::{ConvertoError, Severity, codes};
pub use number::{
    parse_number, parse_magnitude, to_fixed, format_result, format_history_entry,
    NumberError, RESULT_DIGITS, HISTORY_DIGITS,
};
