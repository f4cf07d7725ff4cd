//! Platform-independent logic for the portfolio effects layer.
//!
//! Everything in this crate is plain state and math: the animated
//! background scene, the typed-roles state machine, counters, the
//! key-sequence detector, pointer-motion helpers and form validation.
//! The `vitrine-web` crate owns the DOM and feeds these pieces per frame.

pub mod background;
pub mod color;
pub mod constants;
pub mod counter;
pub mod form;
pub mod motion;
pub mod sequence;
pub mod theme;
pub mod typer;

pub use background::*;
pub use color::*;
pub use theme::*;
