mod insert_into;

pub use insert_into::*;

use crate::{Connection, Parameter, QueryAssembly, QueryKind, Result, Statement};
use std::fmt::Display;

/// Fluent entry point appending SQL fragments and parameters to a [`QueryAssembly`].
///
/// Every method consumes the builder and returns it, calls are appended in the order
/// they are made.
///
/// ```ignore
/// let query = QueryBuilder::call("{call add_user")
///     .params(params!["john", out::<i32>()], "(", ")}", ",")
///     .build();
/// assert_eq!(query.sql(), "{call add_user(?,?)}");
/// ```
#[derive(Default, Clone, Debug)]
pub struct QueryBuilder {
    pub(crate) assembly: QueryAssembly,
}

impl QueryBuilder {
    pub fn new(kind: QueryKind) -> Self {
        Self {
            assembly: QueryAssembly::new(kind),
        }
    }
    /// Plain statement starting with `sql`.
    pub fn plain(sql: &str) -> Self {
        Self::new(QueryKind::Plain).literal(sql)
    }
    /// Stored procedure call starting with `sql`.
    pub fn call(sql: &str) -> Self {
        Self::new(QueryKind::Call).literal(sql)
    }
    /// Insert statement targeting `table`.
    pub fn insert_into(table: &str) -> InsertIntoBuilder {
        InsertIntoBuilder::into(table)
    }
    pub fn kind(mut self, kind: QueryKind) -> Self {
        self.assembly.set_kind(kind);
        self
    }
    pub fn literal(mut self, text: &str) -> Self {
        self.assembly.push_literal(text);
        self
    }
    pub fn literals<I>(mut self, items: I, prefix: &str, suffix: &str, separator: &str) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.assembly.push_literals(items, prefix, suffix, separator);
        self
    }
    pub fn param(mut self, value: impl Into<Parameter>) -> Self {
        self.assembly.push_parameter(value);
        self
    }
    pub fn params<I>(mut self, values: I, prefix: &str, suffix: &str, separator: &str) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Parameter>,
    {
        self.assembly
            .push_parameters(values, prefix, suffix, separator);
        self
    }
    pub fn rows<R, I>(mut self, rows: R, prefix: &str, suffix: &str, separator: &str) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Into<Parameter>,
    {
        self.assembly
            .push_parameter_rows(rows, prefix, suffix, separator);
        self
    }
    pub fn get_assembly(&self) -> &QueryAssembly {
        &self.assembly
    }
    pub fn build(self) -> QueryAssembly {
        self.assembly
    }
    pub fn create_statement<C: Connection>(
        &self,
        connection: &mut C,
    ) -> Result<Statement<C::Driver>> {
        self.assembly.create_statement(connection)
    }
}

impl From<QueryBuilder> for QueryAssembly {
    fn from(value: QueryBuilder) -> Self {
        value.build()
    }
}
