use crate::{Calendar, Result, SqlType, Value};
use std::fmt::{Debug, Display};
use time::{Date, PrimitiveDateTime, Time};

/// A backend prepared statement accepting positional parameters.
///
/// # Binding Semantics
/// * Positions start from 1, in the order placeholders appear in the SQL text.
/// * Each setter replaces whatever was bound at that position before.
/// * A setter returns an error when the driver refuses the value (type mismatch, closed
///   statement, position out of range).
///
/// Statements supporting output parameters also implement [`Callable`] and expose it
/// through [`Prepared::as_callable`].
pub trait Prepared: Send + Display + Debug {
    /// Bind a string.
    fn set_string(&mut self, index: u64, value: &str) -> Result<()>;
    /// Bind a date without time.
    fn set_date(&mut self, index: u64, value: Date) -> Result<()>;
    /// Bind a time of the day.
    fn set_time(&mut self, index: u64, value: Time) -> Result<()>;
    /// Bind a timestamp without timezone.
    fn set_timestamp(&mut self, index: u64, value: PrimitiveDateTime) -> Result<()>;
    /// Bind the UTC `instant`, the calendar carries the timezone the value must keep.
    fn set_timestamp_with_calendar(
        &mut self,
        index: u64,
        instant: PrimitiveDateTime,
        calendar: Calendar,
    ) -> Result<()>;
    /// Generic binding, the driver infers the SQL type from the value.
    fn set_object(&mut self, index: u64, value: &Value) -> Result<()>;
    /// Clear all bound values.
    fn clear_parameters(&mut self) -> Result<()>;
    /// Output parameter registration capability, `None` unless the statement is callable.
    fn as_callable(&mut self) -> Option<&mut dyn Callable> {
        None
    }
}

/// A prepared statement invoking a stored procedure.
///
/// Implementors must also override [`Prepared::as_callable`] to return themselves.
pub trait Callable: Prepared {
    /// Declare the position as an output parameter of the given SQL type.
    fn register_out_parameter(&mut self, index: u64, sql_type: SqlType) -> Result<()>;
}
