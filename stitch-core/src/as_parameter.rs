#[cfg(feature = "chrono")]
use crate::{Error, ErrorContext, Result};
use crate::{OutType, Parameter, ParameterList, Value};
#[cfg(feature = "chrono")]
use chrono::{Datelike, Offset, Timelike};
use rust_decimal::Decimal;
use std::{borrow::Cow, collections::VecDeque};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

impl From<Value> for Parameter {
    fn from(value: Value) -> Self {
        Parameter::Value(value)
    }
}

macro_rules! impl_from_value {
    ($source:ty, $destination:path $(,)?) => {
        impl From<$source> for Value {
            fn from(value: $source) -> Self {
                $destination(value.into())
            }
        }
        impl From<$source> for Parameter {
            fn from(value: $source) -> Self {
                Parameter::Value(value.into())
            }
        }
    };
}

impl_from_value!(bool, Value::Boolean);
impl_from_value!(i8, Value::Int8);
impl_from_value!(i16, Value::Int16);
impl_from_value!(i32, Value::Int32);
impl_from_value!(i64, Value::Int64);
impl_from_value!(u8, Value::UInt8);
impl_from_value!(u16, Value::UInt16);
impl_from_value!(u32, Value::UInt32);
impl_from_value!(u64, Value::UInt64);
impl_from_value!(f32, Value::Float32);
impl_from_value!(f64, Value::Float64);
impl_from_value!(Decimal, Value::Decimal);
impl_from_value!(String, Value::Varchar);
impl_from_value!(&str, Value::Varchar);
impl_from_value!(Cow<'_, str>, Value::Varchar);
impl_from_value!(Box<[u8]>, Value::Blob);
impl_from_value!(&[u8], Value::Blob);
impl_from_value!(Uuid, Value::Uuid);

macro_rules! impl_from_temporal {
    ($source:ty, $destination:path $(,)?) => {
        impl From<$source> for Parameter {
            fn from(value: $source) -> Self {
                $destination(value)
            }
        }
    };
}

impl_from_temporal!(Date, Parameter::Date);
impl_from_temporal!(Time, Parameter::Time);
impl_from_temporal!(PrimitiveDateTime, Parameter::Timestamp);
impl_from_temporal!(OffsetDateTime, Parameter::TimestampWithTimezone);

impl From<OutType> for Parameter {
    fn from(value: OutType) -> Self {
        Parameter::Out(value)
    }
}

impl From<ParameterList> for Parameter {
    fn from(value: ParameterList) -> Self {
        Parameter::Group(value)
    }
}

impl<T: Into<Parameter>> From<Option<T>> for Parameter {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Parameter::Value(Value::Null),
        }
    }
}

macro_rules! impl_from_collection {
    ($list:ident) => {
        impl<T: Into<Parameter>> From<$list<T>> for Parameter {
            fn from(value: $list<T>) -> Self {
                Parameter::Group(value.into_iter().collect())
            }
        }
    };
}

impl_from_collection!(Vec);
impl_from_collection!(VecDeque);

impl<T: Into<Parameter>, const N: usize> From<[T; N]> for Parameter {
    fn from(value: [T; N]) -> Self {
        Parameter::Group(value.into_iter().collect())
    }
}

#[cfg(feature = "chrono")]
fn chrono_date(value: chrono::NaiveDate) -> Result<Date> {
    let month = time::Month::try_from(value.month() as u8)?;
    Date::from_calendar_date(value.year(), month, value.day() as _)
        .with_context(|| format!("Date {value} is out of the supported range"))
}

#[cfg(feature = "chrono")]
fn chrono_time(value: chrono::NaiveTime) -> Result<Time> {
    Time::from_hms_nano(
        value.hour() as _,
        value.minute() as _,
        value.second() as _,
        value.nanosecond() as _,
    )
    .with_context(|| format!("Time {value} is not representable, leap seconds are not supported"))
}

#[cfg(feature = "chrono")]
fn chrono_timestamp(value: chrono::NaiveDateTime) -> Result<PrimitiveDateTime> {
    Ok(PrimitiveDateTime::new(
        chrono_date(value.date())?,
        chrono_time(value.time())?,
    ))
}

#[cfg(feature = "chrono")]
fn chrono_fixed(value: chrono::DateTime<chrono::FixedOffset>) -> Result<OffsetDateTime> {
    let offset = time::UtcOffset::from_whole_seconds(value.offset().fix().local_minus_utc())?;
    Ok(chrono_timestamp(value.naive_local())?.assume_offset(offset))
}

#[cfg(feature = "chrono")]
fn chrono_utc(value: chrono::DateTime<chrono::Utc>) -> Result<OffsetDateTime> {
    Ok(chrono_timestamp(value.naive_utc())?.assume_utc())
}

#[cfg(feature = "chrono")]
macro_rules! impl_try_from_chrono {
    ($source:ty, $convert:path, $destination:path $(,)?) => {
        impl TryFrom<$source> for Parameter {
            type Error = Error;
            fn try_from(value: $source) -> Result<Self> {
                $convert(value).map($destination).map_err(|e| {
                    let error = e.context(format!(
                        "Could not convert {value:?} from {} into a parameter",
                        stringify!($source)
                    ));
                    log::error!("{:#}", error);
                    error
                })
            }
        }
    };
}

#[cfg(feature = "chrono")]
impl_try_from_chrono!(chrono::NaiveDate, chrono_date, Parameter::Date);
#[cfg(feature = "chrono")]
impl_try_from_chrono!(chrono::NaiveTime, chrono_time, Parameter::Time);
#[cfg(feature = "chrono")]
impl_try_from_chrono!(chrono::NaiveDateTime, chrono_timestamp, Parameter::Timestamp);
#[cfg(feature = "chrono")]
impl_try_from_chrono!(
    chrono::DateTime<chrono::FixedOffset>,
    chrono_fixed,
    Parameter::TimestampWithTimezone,
);
#[cfg(feature = "chrono")]
impl_try_from_chrono!(
    chrono::DateTime<chrono::Utc>,
    chrono_utc,
    Parameter::TimestampWithTimezone,
);
