use crate::write_escaped;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::{Number, Value as JsonValue};
use std::fmt::{self, Display, Write};
use uuid::Uuid;

/// Raw scalar handed to the driver through its generic binding path.
///
/// The driver infers the SQL type from the variant.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    Varchar(String),
    Blob(Box<[u8]>),
    Uuid(Uuid),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(..) => "boolean",
            Value::Int8(..) => "int8",
            Value::Int16(..) => "int16",
            Value::Int32(..) => "int32",
            Value::Int64(..) => "int64",
            Value::UInt8(..) => "uint8",
            Value::UInt16(..) => "uint16",
            Value::UInt32(..) => "uint32",
            Value::UInt64(..) => "uint64",
            Value::Float32(..) => "float32",
            Value::Float64(..) => "float64",
            Value::Decimal(..) => "decimal",
            Value::Varchar(..) => "varchar",
            Value::Blob(..) => "blob",
            Value::Uuid(..) => "uuid",
        }
    }

    pub fn to_json(&self) -> JsonValue {
        fn float(v: f64) -> JsonValue {
            Number::from_f64(v)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(v.to_string()))
        }
        match self {
            Value::Null => JsonValue::Null,
            Value::Boolean(v) => JsonValue::Bool(*v),
            Value::Int8(v) => JsonValue::Number((*v).into()),
            Value::Int16(v) => JsonValue::Number((*v).into()),
            Value::Int32(v) => JsonValue::Number((*v).into()),
            Value::Int64(v) => JsonValue::Number((*v).into()),
            Value::UInt8(v) => JsonValue::Number((*v).into()),
            Value::UInt16(v) => JsonValue::Number((*v).into()),
            Value::UInt32(v) => JsonValue::Number((*v).into()),
            Value::UInt64(v) => JsonValue::Number((*v).into()),
            Value::Float32(v) => float(*v as _),
            Value::Float64(v) => float(*v),
            Value::Decimal(v) => match v.to_f64() {
                Some(v) => float(v),
                None => JsonValue::String(v.to_string()),
            },
            Value::Varchar(v) => JsonValue::String(v.clone()),
            Value::Blob(v) => JsonValue::Array(
                v.iter()
                    .map(|v| JsonValue::Number((*v).into()))
                    .collect(),
            ),
            Value::Uuid(v) => JsonValue::String(v.to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Int8(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt8(v) => write!(f, "{v}"),
            Value::UInt16(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Varchar(v) => {
                f.write_char('\'')?;
                write_escaped(&mut *f, v, '\'', "''");
                f.write_char('\'')
            }
            Value::Blob(v) => {
                f.write_str("X'")?;
                for b in v.iter() {
                    write!(f, "{b:02X}")?;
                }
                f.write_char('\'')
            }
            Value::Uuid(v) => write!(f, "'{v}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Int32(-7).to_string(), "-7");
        assert_eq!(Value::Varchar("it's".into()).to_string(), "'it''s'");
        assert_eq!(
            Value::Blob([0x0a, 0xff].into()).to_string(),
            "X'0AFF'"
        );
        assert_eq!(
            Value::Decimal(Decimal::from_str("12.50").unwrap()).to_string(),
            "12.50"
        );
    }

    #[test]
    fn null() {
        assert!(Value::default().is_null());
        assert!(!Value::Int8(0).is_null());
        assert!(!Value::Varchar(String::new()).is_null());
        assert_eq!(Value::default().type_name(), "null");
    }

    #[test]
    fn json() {
        assert_eq!(Value::Null.to_json(), json!(null));
        assert_eq!(Value::UInt64(u64::MAX).to_json(), json!(u64::MAX));
        assert_eq!(Value::Float64(1.5).to_json(), json!(1.5));
        assert_eq!(Value::Float64(f64::NAN).to_json(), json!("NaN"));
        assert_eq!(Value::Blob([1, 2].into()).to_json(), json!([1, 2]));
        assert_eq!(
            Value::Uuid(Uuid::nil()).to_json(),
            json!("00000000-0000-0000-0000-000000000000")
        );
    }
}
