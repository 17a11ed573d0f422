//! Sorts that keep equal elements in their input order.

pub mod bubble;
pub mod cocktail;
pub mod insertion;
pub mod merge;
