use crate::{Driver, Result};

/// A live database handle able to prepare statements.
///
/// Preparation never executes anything. The returned statements are owned by the caller
/// who is also responsible for closing them (usually by dropping).
pub trait Connection {
    type Driver: Driver;

    fn driver(&self) -> &Self::Driver;

    /// Prepare a standard statement.
    fn prepare(&mut self, sql: &str) -> Result<<Self::Driver as Driver>::Prepared>;

    /// Prepare a statement that makes the generated keys available after execution.
    fn prepare_with_generated_keys(
        &mut self,
        sql: &str,
    ) -> Result<<Self::Driver as Driver>::Prepared>;

    /// Prepare a stored procedure call.
    fn prepare_call(&mut self, sql: &str) -> Result<<Self::Driver as Driver>::Callable>;
}
