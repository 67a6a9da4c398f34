//! # Converter Core
//!
//! The conversion controller: everything between the form fields and the
//! rate API.
//!
//! ## Architecture
//!
//! - `input` - Keystroke-level filtering of raw form text
//! - `validator` - Ordered form validation rules
//! - `interpret` - Maps a raw rate response to a result or error
//! - `service` - Conversion service (validate → request → interpret), owns the in-flight flag
//!
//! The service is generic over `S: RateSource`, allowing the HTTP adapter
//! to be swapped for an in-memory source in tests.

pub mod input;
pub mod interpret;
pub mod service;
pub mod validator;


pub use service::{ConversionService, InFlight};
pub use validator::{ValidatedConversion, validate, validated};
