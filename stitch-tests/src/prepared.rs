use crate::{Binding, PrepareMode};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Display},
};
use stitch::{
    Calendar, Callable, Error, Prepared, Result, SqlType, Value, truncate_long,
};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Statement capturing the values bound to each position.
///
/// The number of positions is the number of `?` in the SQL text.
#[derive(Debug)]
pub struct RecordingPrepared {
    sql: String,
    mode: PrepareMode,
    placeholders: u64,
    bindings: BTreeMap<u64, Binding>,
    failing_positions: BTreeSet<u64>,
    closed: bool,
}

impl RecordingPrepared {
    pub(crate) fn new(sql: String, mode: PrepareMode, failing_positions: BTreeSet<u64>) -> Self {
        let placeholders = sql.matches('?').count() as u64;
        Self {
            sql,
            mode,
            placeholders,
            bindings: Default::default(),
            failing_positions,
            closed: false,
        }
    }
    pub fn sql(&self) -> &str {
        &self.sql
    }
    pub fn mode(&self) -> PrepareMode {
        self.mode
    }
    pub fn bindings(&self) -> &BTreeMap<u64, Binding> {
        &self.bindings
    }
    pub fn binding(&self, index: u64) -> Option<&Binding> {
        self.bindings.get(&index)
    }
    pub fn close(&mut self) {
        self.closed = true;
    }
    /// Read back the zoned timestamp bound at `index`, in the calendar it was bound with.
    pub fn get_offset_date_time(&self, index: u64) -> Result<OffsetDateTime> {
        match self.binding(index) {
            Some(Binding::TimestampWithCalendar(instant, calendar)) => calendar.localize(*instant),
            Some(Binding::Timestamp(value)) => Calendar::UTC.localize(*value),
            other => Err(Error::msg(format!(
                "Position {index} does not hold a timestamp: {other:?}"
            ))),
        }
    }

    fn record(&mut self, index: u64, binding: Binding) -> Result<()> {
        if self.closed {
            return Err(Error::msg("Statement is closed"));
        }
        if index == 0 || index > self.placeholders {
            return Err(Error::msg(format!(
                "Index {index} cannot be bound, the query has only {} parameters",
                self.placeholders
            )));
        }
        if self.failing_positions.contains(&index) {
            return Err(Error::msg(format!(
                "Type mismatch, {binding:?} is not accepted at position {index}"
            )));
        }
        log::trace!("Position {index} = {binding:?}");
        self.bindings.insert(index, binding);
        Ok(())
    }
}

impl Prepared for RecordingPrepared {
    fn set_string(&mut self, index: u64, value: &str) -> Result<()> {
        self.record(index, Binding::String(value.into()))
    }
    fn set_date(&mut self, index: u64, value: Date) -> Result<()> {
        self.record(index, Binding::Date(value))
    }
    fn set_time(&mut self, index: u64, value: Time) -> Result<()> {
        self.record(index, Binding::Time(value))
    }
    fn set_timestamp(&mut self, index: u64, value: PrimitiveDateTime) -> Result<()> {
        self.record(index, Binding::Timestamp(value))
    }
    fn set_timestamp_with_calendar(
        &mut self,
        index: u64,
        instant: PrimitiveDateTime,
        calendar: Calendar,
    ) -> Result<()> {
        self.record(index, Binding::TimestampWithCalendar(instant, calendar))
    }
    fn set_object(&mut self, index: u64, value: &Value) -> Result<()> {
        self.record(index, Binding::Object(value.clone()))
    }
    fn clear_parameters(&mut self) -> Result<()> {
        self.bindings.clear();
        Ok(())
    }
}

impl Display for RecordingPrepared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.sql))
    }
}

/// Callable statement capturing values and output parameter registrations.
#[derive(Debug)]
pub struct RecordingCallable {
    prepared: RecordingPrepared,
}

impl RecordingCallable {
    pub(crate) fn new(prepared: RecordingPrepared) -> Self {
        Self { prepared }
    }
    pub fn prepared(&self) -> &RecordingPrepared {
        &self.prepared
    }
    pub fn sql(&self) -> &str {
        self.prepared.sql()
    }
    pub fn bindings(&self) -> &BTreeMap<u64, Binding> {
        self.prepared.bindings()
    }
    pub fn binding(&self, index: u64) -> Option<&Binding> {
        self.prepared.binding(index)
    }
}

impl Prepared for RecordingCallable {
    fn set_string(&mut self, index: u64, value: &str) -> Result<()> {
        self.prepared.set_string(index, value)
    }
    fn set_date(&mut self, index: u64, value: Date) -> Result<()> {
        self.prepared.set_date(index, value)
    }
    fn set_time(&mut self, index: u64, value: Time) -> Result<()> {
        self.prepared.set_time(index, value)
    }
    fn set_timestamp(&mut self, index: u64, value: PrimitiveDateTime) -> Result<()> {
        self.prepared.set_timestamp(index, value)
    }
    fn set_timestamp_with_calendar(
        &mut self,
        index: u64,
        instant: PrimitiveDateTime,
        calendar: Calendar,
    ) -> Result<()> {
        self.prepared
            .set_timestamp_with_calendar(index, instant, calendar)
    }
    fn set_object(&mut self, index: u64, value: &Value) -> Result<()> {
        self.prepared.set_object(index, value)
    }
    fn clear_parameters(&mut self) -> Result<()> {
        self.prepared.clear_parameters()
    }
    fn as_callable(&mut self) -> Option<&mut dyn Callable> {
        Some(self)
    }
}

impl Callable for RecordingCallable {
    fn register_out_parameter(&mut self, index: u64, sql_type: SqlType) -> Result<()> {
        self.prepared.record(index, Binding::Out(sql_type))
    }
}

impl Display for RecordingCallable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.prepared, f)
    }
}
