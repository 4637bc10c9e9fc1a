//! Service layer providing the company workflows on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions and storage primitives in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod company;
pub mod seed;
#[cfg(test)]
pub mod test_support;
