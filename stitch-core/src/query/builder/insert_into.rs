use crate::{Connection, Parameter, QueryAssembly, QueryBuilder, QueryKind, Result, Statement};

/// Builder of `insert into` statements, prepared requesting the generated keys.
///
/// ```ignore
/// let query = InsertIntoBuilder::into("users")
///     .columns(["name", "age"])
///     .values(params!["john", 42])
///     .build();
/// assert_eq!(query.sql(), "insert into users(name,age) values(?,?)");
/// ```
#[derive(Clone, Debug)]
pub struct InsertIntoBuilder {
    builder: QueryBuilder,
}

impl InsertIntoBuilder {
    /// Insert statement starting with the raw `sql` prefix.
    pub fn create(sql: &str) -> Self {
        Self {
            builder: QueryBuilder::new(QueryKind::Insert).literal(sql),
        }
    }
    /// Same as `create("insert into {table}")`.
    #[allow(clippy::should_implement_trait)]
    pub fn into(table: &str) -> Self {
        Self::create(&format!("insert into {table}"))
    }
    /// Append `(a,b,...)`, nothing when `names` is empty.
    pub fn columns<I>(self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            builder: self.builder.literals(
                names.into_iter().map(|v| v.as_ref().to_owned()),
                "(",
                ")",
                ",",
            ),
        }
    }
    /// Append ` values(?,?,...)` bound to `values`, nothing when `values` is empty.
    pub fn values<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Parameter>,
    {
        Self {
            builder: self.builder.params(values, " values(", ")", ","),
        }
    }
    /// Append ` values(?,?),(?,?)...`, each row is bound as one nested group.
    ///
    /// Empty rows are skipped, nothing is appended when every row is empty.
    pub fn rows<R, I>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Into<Parameter>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<Parameter>>())
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();
        if rows.is_empty() {
            return self;
        }
        Self {
            builder: self.builder.literal(" values").rows(rows, "(", ")", ","),
        }
    }
    pub fn get_assembly(&self) -> &QueryAssembly {
        self.builder.get_assembly()
    }
    pub fn build(self) -> QueryAssembly {
        self.builder.build()
    }
    pub fn create_statement<C: Connection>(
        &self,
        connection: &mut C,
    ) -> Result<Statement<C::Driver>> {
        self.builder.create_statement(connection)
    }
}

impl From<InsertIntoBuilder> for QueryAssembly {
    fn from(value: InsertIntoBuilder) -> Self {
        value.build()
    }
}
