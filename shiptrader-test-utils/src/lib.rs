//! Test harness for the shiptrader crates.
//!
//! Tests are written in two phases. [`TestBuilder`] declares the tables, database fixtures,
//! and mock feed endpoints a test needs; `build()` turns that into a [`TestContext`] holding
//! an in-memory SQLite connection and a running mockito server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::starship::factory, model::*, TestBuilder, TestContext, TestError,
    };
}
