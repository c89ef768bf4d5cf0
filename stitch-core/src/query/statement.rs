use crate::{Driver, Parameter, Result, bind_parameters};
use std::fmt::{self, Display};

/// Statement materialized from a [`QueryAssembly`](crate::QueryAssembly), ready to be executed.
#[derive(Debug)]
pub enum Statement<D: Driver> {
    /// Plain or generated keys statement.
    Prepared(D::Prepared),
    /// Stored procedure call.
    Callable(D::Callable),
}

impl<D: Driver> Statement<D> {
    pub fn is_callable(&self) -> bool {
        matches!(self, Statement::Callable(..))
    }
    /// Bind `parameters` starting from `position`, returns the next free position.
    pub fn bind(&mut self, parameters: &[Parameter], position: u64) -> Result<u64> {
        match self {
            Statement::Prepared(v) => bind_parameters(v, parameters, position),
            Statement::Callable(v) => bind_parameters(v, parameters, position),
        }
    }
    pub fn into_prepared(self) -> Option<D::Prepared> {
        match self {
            Statement::Prepared(v) => Some(v),
            Statement::Callable(..) => None,
        }
    }
    pub fn into_callable(self) -> Option<D::Callable> {
        match self {
            Statement::Prepared(..) => None,
            Statement::Callable(v) => Some(v),
        }
    }
}

impl<D: Driver> Display for Statement<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Prepared(v) => Display::fmt(v, f),
            Statement::Callable(v) => Display::fmt(v, f),
        }
    }
}
