use stitch::{Calendar, SqlType, Value};
use time::{Date, PrimitiveDateTime, Time};

/// Which connection method prepared a statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrepareMode {
    Plain,
    GeneratedKeys,
    Callable,
}

/// A setter call captured by a recording statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    String(String),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    TimestampWithCalendar(PrimitiveDateTime, Calendar),
    Object(Value),
    Out(SqlType),
}
