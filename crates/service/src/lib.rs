//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules (ordering, existence checks, field validation)
//!   from data access behind per-entity repository traits.
//! - Reuses entity definitions in the `models` crate.
//! - Returns explicit error kinds; the HTTP boundary picks status codes.

pub mod category;
pub mod errors;
pub mod menu;
pub mod mock;
