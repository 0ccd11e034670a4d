//! Embedded LMS reference data for UK-WHO, Trisomy-21, and Turner syndrome.
//!
//! Implements the [`growth_core::ReferenceEngine`] contract over age-indexed
//! LMS grids. The grids here are abridged: coarse age steps with linear
//! interpolation between them.

pub mod error;
pub mod lms;
pub mod registry;
pub mod table;

pub use error::ReferenceDataError;
pub use lms::LmsParams;
pub use registry::{Coverage, LmsRegistry};
pub use table::{LmsPoint, LmsTable};
