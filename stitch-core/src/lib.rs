//! Core of Stitch: the parameter model, the driver traits, the positional binder and the
//! query assembly with its builders.
//!
//! Drivers implement [`Driver`], [`Connection`], [`Prepared`] and [`Callable`]. Callers
//! assemble SQL with [`QueryBuilder`] or [`InsertIntoBuilder`] and turn it into a bound
//! [`Statement`] with [`QueryAssembly::create_statement`].
mod as_parameter;
mod binder;
mod calendar;
mod connection;
mod driver;
mod error;
mod parameter;
mod prepared;
mod query;
mod sql_type;
mod util;
mod value;

pub use ::anyhow::Context as ErrorContext;
pub use as_parameter::*;
pub use binder::*;
pub use calendar::*;
pub use connection::*;
pub use driver::*;
pub use error::*;
pub use parameter::*;
pub use prepared::*;
pub use query::*;
pub use sql_type::*;
pub use util::*;
pub use value::*;

/// Result type.
pub type Result<T> = anyhow::Result<T>;
/// Error type.
pub type Error = anyhow::Error;
