//! Static regulatory reference data: rating scales and weight tables.

pub mod rating;
pub mod weights;
