use crate::{Callable, Connection, Prepared};
use std::fmt::Debug;

/// Backend connector naming the concrete handles of a driver.
pub trait Driver: Default + Debug {
    /// Concrete connection.
    type Connection: Connection<Driver = Self>;
    /// Prepared statement handle.
    type Prepared: Prepared;
    /// Callable statement handle.
    type Callable: Callable;

    /// Human-readable backend name.
    const NAME: &'static [&'static str];

    /// Driver name.
    fn name(&self) -> &'static str {
        Self::NAME[0]
    }
}
