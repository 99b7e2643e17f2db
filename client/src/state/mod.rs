//! Client-side state for the availability picker.
//!
//! DESIGN
//! ======
//! Pure models with no browser dependencies, split by concern so components
//! can depend on small focused types and tests run natively.

pub mod calendar;
pub mod selection;
pub mod slots;
pub mod timezone;
