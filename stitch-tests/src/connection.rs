use crate::{PrepareMode, RecordingCallable, RecordingDriver, RecordingPrepared};
use std::collections::BTreeSet;
use stitch::{Connection, Error, Result, truncate_long};

/// In memory connection recording every statement it prepares.
///
/// Failures can be injected: SQL containing a rejected fragment fails to prepare, a
/// closed connection refuses everything, statements fail to bind at the chosen positions.
#[derive(Default, Debug)]
pub struct RecordingConnection {
    driver: RecordingDriver,
    closed: bool,
    rejected: Vec<String>,
    failing_positions: BTreeSet<u64>,
    history: Vec<(PrepareMode, String)>,
}

impl RecordingConnection {
    pub fn new() -> Self {
        Default::default()
    }
    /// Refuse to prepare any SQL containing `fragment`.
    pub fn reject_sql(mut self, fragment: &str) -> Self {
        self.rejected.push(fragment.into());
        self
    }
    /// Statements prepared from now on refuse any value bound at `position`.
    pub fn fail_binding_at(mut self, position: u64) -> Self {
        self.failing_positions.insert(position);
        self
    }
    pub fn close(&mut self) {
        self.closed = true;
    }
    /// Every statement prepared so far, in order.
    pub fn history(&self) -> &[(PrepareMode, String)] {
        &self.history
    }

    fn prepare_statement(&mut self, sql: &str, mode: PrepareMode) -> Result<RecordingPrepared> {
        if self.closed {
            return Err(Error::msg("Connection is closed"));
        }
        if let Some(fragment) = self.rejected.iter().find(|v| sql.contains(v.as_str())) {
            return Err(Error::msg(format!(
                "Syntax error near `{fragment}` in `{}`",
                truncate_long!(sql)
            )));
        }
        log::debug!("Recording {mode:?} statement: {}", truncate_long!(sql));
        self.history.push((mode, sql.into()));
        Ok(RecordingPrepared::new(
            sql.into(),
            mode,
            self.failing_positions.clone(),
        ))
    }
}

impl Connection for RecordingConnection {
    type Driver = RecordingDriver;

    fn driver(&self) -> &Self::Driver {
        &self.driver
    }

    fn prepare(&mut self, sql: &str) -> Result<RecordingPrepared> {
        self.prepare_statement(sql, PrepareMode::Plain)
    }

    fn prepare_with_generated_keys(&mut self, sql: &str) -> Result<RecordingPrepared> {
        self.prepare_statement(sql, PrepareMode::GeneratedKeys)
    }

    fn prepare_call(&mut self, sql: &str) -> Result<RecordingCallable> {
        self.prepare_statement(sql, PrepareMode::Callable)
            .map(RecordingCallable::new)
    }
}
