use crate::{
    Connection, Error, ErrorContext, Parameter, ParameterList, QueryKind, Result, Statement,
    StatementError, separated_by, truncate_long,
};
use std::fmt::{self, Display, Write};

/// SQL text and parameters accumulated in lock step.
///
/// Every placeholder appended to the text is paired with the value bound to it, in the
/// same order. Both only grow. The SQL text is opaque: nothing here parses or validates
/// it.
///
/// ```ignore
/// let mut query = QueryAssembly::new(QueryKind::Plain);
/// query
///     .push_literal("select * from users where id in ")
///     .push_parameters([1, 2, 3], "(", ")", ",");
/// assert_eq!(query.sql(), "select * from users where id in (?,?,?)");
/// ```
#[derive(Default, Clone, Debug, PartialEq)]
pub struct QueryAssembly {
    sql: String,
    parameters: ParameterList,
    kind: QueryKind,
}

impl QueryAssembly {
    pub fn new(kind: QueryKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
    pub fn kind(&self) -> QueryKind {
        self.kind
    }
    pub fn set_kind(&mut self, kind: QueryKind) -> &mut Self {
        self.kind = kind;
        self
    }
    pub fn sql(&self) -> &str {
        &self.sql
    }
    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }
    pub fn into_parts(self) -> (String, ParameterList) {
        (self.sql, self.parameters)
    }

    /// Append raw SQL text.
    pub fn push_literal(&mut self, text: &str) -> &mut Self {
        self.sql.push_str(text);
        self
    }

    /// Append `prefix item1 separator item2 ... suffix` as raw SQL, nothing when `items` is empty.
    pub fn push_literals<I>(
        &mut self,
        items: I,
        prefix: &str,
        suffix: &str,
        separator: &str,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return self;
        }
        self.sql.push_str(prefix);
        separated_by(
            &mut self.sql,
            items,
            |out, v| {
                let _ = write!(out, "{v}");
            },
            separator,
        );
        self.sql.push_str(suffix);
        self
    }

    /// Append a single placeholder bound to `value`.
    pub fn push_parameter(&mut self, value: impl Into<Parameter>) -> &mut Self {
        self.sql.push('?');
        self.parameters.push(value);
        self
    }

    /// Append `prefix ?separator?... suffix`, one placeholder per value, and the values.
    ///
    /// Nothing is appended when `values` is empty.
    pub fn push_parameters<I>(
        &mut self,
        values: I,
        prefix: &str,
        suffix: &str,
        separator: &str,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Parameter>,
    {
        let len = self.parameters.len();
        self.parameters.extend(values);
        let added = self.parameters.len() - len;
        if added > 0 {
            self.write_placeholders(added, prefix, suffix, separator);
        }
        self
    }

    /// Append one placeholder group per row, rows are joined by a comma.
    ///
    /// Each row is recorded as a single nested group of the parameter list. Empty rows
    /// are skipped, nothing is appended when every row is empty.
    pub fn push_parameter_rows<R, I>(
        &mut self,
        rows: R,
        prefix: &str,
        suffix: &str,
        separator: &str,
    ) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Into<Parameter>,
    {
        let mut first = true;
        for row in rows {
            let row: ParameterList = row.into_iter().collect();
            if row.is_empty() {
                continue;
            }
            if !first {
                self.sql.push(',');
            }
            first = false;
            self.write_placeholders(row.len(), prefix, suffix, separator);
            self.parameters.push(row);
        }
        self
    }

    fn write_placeholders(&mut self, count: usize, prefix: &str, suffix: &str, separator: &str) {
        self.sql.push_str(prefix);
        separated_by(&mut self.sql, 0..count, |out, _| out.push('?'), separator);
        self.sql.push_str(suffix);
    }

    /// Prepare the statement on `connection` and bind every parameter, starting from position 1.
    ///
    /// The preparation mode follows the kind: [`QueryKind::Call`] prepares a callable
    /// statement, [`QueryKind::Insert`] a statement returning the generated keys, anything
    /// else a plain statement. Either the whole statement is returned bound, or an error
    /// is: a statement failing to bind is dropped.
    pub fn create_statement<C: Connection>(
        &self,
        connection: &mut C,
    ) -> Result<Statement<C::Driver>> {
        let kind = self.kind;
        log::debug!("Preparing {kind} statement: {}", truncate_long!(self.sql));
        let statement = match kind {
            QueryKind::Call => connection.prepare_call(&self.sql).map(Statement::Callable),
            QueryKind::Insert => connection
                .prepare_with_generated_keys(&self.sql)
                .map(Statement::Prepared),
            QueryKind::Plain => connection.prepare(&self.sql).map(Statement::Prepared),
        };
        let mut statement = statement.map_err(|source| {
            let error = Error::new(StatementError::Preparation {
                kind,
                sql: truncate_long!(self.sql).to_string(),
                source: source.into(),
            });
            log::error!("{:#}", error);
            error
        })?;
        statement.bind(&self.parameters, 1).with_context(|| {
            format!(
                "While binding the parameters of the {kind} statement `{}`",
                truncate_long!(self.sql)
            )
        })?;
        Ok(statement)
    }
}

impl Display for QueryAssembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.sql))
    }
}
