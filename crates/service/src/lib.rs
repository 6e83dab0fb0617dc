//! Service layer providing sales operations on top of models.
//! - Separates request handling from data access.
//! - Reuses the entity and payload definitions in the `models` crate.

pub mod errors;
pub mod runtime;
pub mod sales;
#[cfg(test)]
pub mod test_support;
