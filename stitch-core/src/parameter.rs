use crate::{OutType, Value, print_date, print_timer, separated_by, write_escaped};
use serde_json::{Value as JsonValue, json};
use std::{
    borrow::Cow,
    fmt::{self, Display, Write},
    ops::Deref,
    slice,
};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Enumerated value bound by its symbolic name.
///
/// Usually derived with `#[derive(Symbolic)]`.
pub trait Symbolic {
    /// Declared name of the variant.
    fn symbol(&self) -> &'static str;
}

/// A single entry of a [`ParameterList`].
///
/// The variant alone decides how the value is bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// Raw scalar, bound through the driver's generic path.
    Value(Value),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    /// Bound as an UTC instant qualified by a calendar carrying the offset.
    TimestampWithTimezone(OffsetDateTime),
    /// Symbolic name of an enumerated value.
    Symbol(Cow<'static, str>),
    /// Nested group, flattened depth first when bound.
    Group(ParameterList),
    /// Output parameter declaration, callable statements only.
    Out(OutType),
}

impl Parameter {
    pub fn symbol(value: &impl Symbolic) -> Self {
        Parameter::Symbol(Cow::Borrowed(value.symbol()))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Parameter::Group(..))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            Parameter::Value(..) => "value",
            Parameter::Date(..) => "date",
            Parameter::Time(..) => "time",
            Parameter::Timestamp(..) => "timestamp",
            Parameter::TimestampWithTimezone(..) => "timestamp with time zone",
            Parameter::Symbol(..) => "symbol",
            Parameter::Group(..) => "group",
            Parameter::Out(..) => "out",
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Parameter::Value(v) => v.to_json(),
            Parameter::Symbol(v) => JsonValue::String(v.to_string()),
            Parameter::Group(v) => v.to_json(),
            Parameter::Out(v) => json!({ "out": v.type_name() }),
            _ => {
                let mut out = String::new();
                self.write_temporal(&mut out, "");
                JsonValue::String(out)
            }
        }
    }

    fn write_temporal(&self, out: &mut impl Write, quote: &str) {
        match self {
            Parameter::Date(v) => print_date(out, quote, v),
            Parameter::Time(v) => print_timer(out, quote, v),
            Parameter::Timestamp(v) => {
                let _ = out.write_str(quote);
                print_date(out, "", &v.date());
                let _ = out.write_char(' ');
                print_timer(out, "", &v.time());
                let _ = out.write_str(quote);
            }
            Parameter::TimestampWithTimezone(v) => {
                let _ = out.write_str(quote);
                print_date(out, "", &v.date());
                let _ = out.write_char(' ');
                print_timer(out, "", &v.time());
                let (h, m, _) = v.offset().as_hms();
                let sign = if v.offset().is_negative() { '-' } else { '+' };
                let _ = write!(out, "{sign}{:02}:{:02}", h.abs(), m.abs());
                let _ = out.write_str(quote);
            }
            _ => {}
        }
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Value(v) => v.fmt(f),
            Parameter::Symbol(v) => {
                f.write_char('\'')?;
                write_escaped(&mut *f, v, '\'', "''");
                f.write_char('\'')
            }
            Parameter::Group(v) => v.fmt(f),
            Parameter::Out(v) => write!(f, "OUT {v}"),
            _ => {
                self.write_temporal(f, "'");
                Ok(())
            }
        }
    }
}

/// Ordered, possibly nested, list of parameters.
///
/// Positions are assigned by flattening the list left to right, depth first, starting
/// from 1: `[a, [b, c], d]` binds `a` to 1, `b` to 2, `c` to 3 and `d` to 4.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ParameterList(Vec<Parameter>);

impl ParameterList {
    pub fn new() -> Self {
        Self(Vec::new())
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
    pub fn push(&mut self, value: impl Into<Parameter>) {
        self.0.push(value.into());
    }
    /// Leaf parameters in binding order.
    pub fn iter_flat(&self) -> FlatIter<'_> {
        FlatIter::new(&self.0)
    }
    /// Number of positions the list occupies once flattened.
    pub fn flat_len(&self) -> usize {
        self.iter_flat().count()
    }
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.0.iter().map(Parameter::to_json).collect())
    }
    pub fn into_inner(self) -> Vec<Parameter> {
        self.0
    }
}

impl Deref for ParameterList {
    type Target = [Parameter];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<P: Into<Parameter>> Extend<P> for ParameterList {
    fn extend<T: IntoIterator<Item = P>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<P: Into<Parameter>> FromIterator<P> for ParameterList {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<Parameter>> for ParameterList {
    fn from(value: Vec<Parameter>) -> Self {
        Self(value)
    }
}

impl IntoIterator for ParameterList {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = slice::Iter<'a, Parameter>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::from("[");
        separated_by(
            &mut out,
            self.0.iter(),
            |out, v| {
                let _ = write!(out, "{v}");
            },
            ", ",
        );
        out.push(']');
        f.write_str(&out)
    }
}

/// Depth first iterator over the leaves of a parameter list.
#[derive(Clone, Debug)]
pub struct FlatIter<'a> {
    stack: Vec<slice::Iter<'a, Parameter>>,
}

impl<'a> FlatIter<'a> {
    pub fn new(parameters: &'a [Parameter]) -> Self {
        Self {
            stack: vec![parameters.iter()],
        }
    }
}

impl<'a> Iterator for FlatIter<'a> {
    type Item = &'a Parameter;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Parameter::Group(group)) => self.stack.push(group.iter()),
                Some(v) => return Some(v),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Declare an output parameter of type `T`.
pub fn out<T: ?Sized + 'static>() -> Parameter {
    Parameter::Out(OutType::of::<T>())
}

#[macro_export]
/// Build a `Vec<Parameter>` out of heterogeneous values.
///
/// ```ignore
/// let values = params![1, "two", out::<i32>(), params![3, 4]];
/// ```
macro_rules! params {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::Parameter> =
            ::std::vec![$($crate::Parameter::from($value)),*];
        values
    }};
}
