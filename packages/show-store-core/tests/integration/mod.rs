//! Integration test suite for the show store.
//!
//! 1. Fixture seeding from disk
//! 2. CRUD lifecycle through the `ShowStore` interface
//! 3. Shared access from several threads

pub mod crud_tests;
pub mod fixture_tests;
pub mod shared_access_tests;
