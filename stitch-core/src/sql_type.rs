use std::{
    any::{self, TypeId},
    fmt::{self, Display},
    hash::{Hash, Hasher},
};
use time::PrimitiveDateTime;

/// SQL type used when registering an output parameter on a callable statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SqlType {
    Varchar,
    Float,
    Integer,
    Timestamp,
    Boolean,
    /// Generic, driver defined, object type.
    Other,
}

impl SqlType {
    /// Conventional numeric type code.
    pub const fn code(&self) -> i32 {
        match self {
            SqlType::Varchar => 12,
            SqlType::Float => 6,
            SqlType::Integer => 4,
            SqlType::Timestamp => 93,
            SqlType::Boolean => 16,
            SqlType::Other => 2000,
        }
    }
}

impl Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SqlType::Varchar => "VARCHAR",
            SqlType::Float => "FLOAT",
            SqlType::Integer => "INTEGER",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Other => "OTHER",
        })
    }
}

/// Rust type expected back from an output parameter.
///
/// Build it with [`OutType::of`] (or the [`out`](crate::out) shortcut). The SQL type
/// registered with the driver comes from [`OutType::sql_type`]:
///
/// | Rust type                               | SQL type    |
/// |-----------------------------------------|-------------|
/// | `String`, `str`                         | `VARCHAR`   |
/// | `f32`                                   | `FLOAT`     |
/// | `i32`                                   | `INTEGER`   |
/// | `time::PrimitiveDateTime`               | `TIMESTAMP` |
/// | `bool`                                  | `BOOLEAN`   |
/// | anything else                           | `OTHER`     |
#[derive(Clone, Copy, Debug)]
pub struct OutType {
    id: TypeId,
    name: &'static str,
}

impl OutType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub fn sql_type(&self) -> SqlType {
        if self.is::<String>() || self.is::<str>() {
            SqlType::Varchar
        } else if self.is::<f32>() {
            SqlType::Float
        } else if self.is::<i32>() {
            SqlType::Integer
        } else if self.is::<PrimitiveDateTime>() {
            SqlType::Timestamp
        } else if self.is::<bool>() {
            SqlType::Boolean
        } else {
            SqlType::Other
        }
    }
}

impl PartialEq for OutType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OutType {}

impl Hash for OutType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for OutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn fixed_mapping() {
        assert_eq!(OutType::of::<String>().sql_type(), SqlType::Varchar);
        assert_eq!(OutType::of::<str>().sql_type(), SqlType::Varchar);
        assert_eq!(OutType::of::<f32>().sql_type(), SqlType::Float);
        assert_eq!(OutType::of::<i32>().sql_type(), SqlType::Integer);
        assert_eq!(
            OutType::of::<PrimitiveDateTime>().sql_type(),
            SqlType::Timestamp
        );
        assert_eq!(OutType::of::<bool>().sql_type(), SqlType::Boolean);
    }

    #[test]
    fn fallback() {
        struct Custom;
        assert_eq!(OutType::of::<Custom>().sql_type(), SqlType::Other);
        assert_eq!(OutType::of::<f64>().sql_type(), SqlType::Other);
        assert_eq!(OutType::of::<i64>().sql_type(), SqlType::Other);
        assert_eq!(OutType::of::<OffsetDateTime>().sql_type(), SqlType::Other);
        assert_eq!(SqlType::Other.code(), 2000);
    }

    #[test]
    fn identity() {
        assert_eq!(OutType::of::<i32>(), OutType::of::<i32>());
        assert_ne!(OutType::of::<i32>(), OutType::of::<u32>());
        assert!(OutType::of::<bool>().type_name().contains("bool"));
    }
}
