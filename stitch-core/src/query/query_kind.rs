use std::fmt::{self, Display};

/// How a query must be prepared by the driver.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Standard prepared statement.
    #[default]
    Plain,
    /// Prepared statement requesting the generated keys.
    Insert,
    /// Callable statement, the only kind accepting output parameters.
    Call,
}

impl Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QueryKind::Plain => "plain",
            QueryKind::Insert => "insert",
            QueryKind::Call => "call",
        })
    }
}
