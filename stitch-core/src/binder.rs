use crate::{
    Calendar, Error, FlatIter, OutType, Parameter, Prepared, Result, StatementError,
    truncate_long,
};

/// Bind `parameters` to `statement` starting from `position`, returns the next free position.
///
/// Nested groups are flattened depth first, sibling groups receive contiguous positions.
/// Output parameter declarations are checked before anything is bound: on a statement
/// that is not callable they fail with [`StatementError::InvalidParameterType`] and the
/// statement is left untouched. Any other failure stops the binding at the position that
/// failed, the values bound before it are left in place.
pub fn bind_parameters<P: Prepared + ?Sized>(
    statement: &mut P,
    parameters: &[Parameter],
    position: u64,
) -> Result<u64> {
    if statement.as_callable().is_none()
        && let Some((index, out)) = FlatIter::new(parameters)
            .zip(position..)
            .find_map(|(parameter, index)| match parameter {
                Parameter::Out(out) => Some((index, out)),
                _ => None,
            })
    {
        return Err(invalid_parameter_type(index, out));
    }
    bind_group(statement, parameters, position)
}

fn bind_group<P: Prepared + ?Sized>(
    statement: &mut P,
    parameters: &[Parameter],
    mut position: u64,
) -> Result<u64> {
    for parameter in parameters {
        let index = position;
        let result = match parameter {
            Parameter::Group(group) => {
                position = bind_group(statement, group, position)?;
                continue;
            }
            Parameter::Timestamp(v) => statement.set_timestamp(index, *v),
            Parameter::TimestampWithTimezone(v) => {
                let calendar = Calendar::from(v);
                Calendar::instant(v).and_then(|instant| {
                    statement.set_timestamp_with_calendar(index, instant, calendar)
                })
            }
            Parameter::Time(v) => statement.set_time(index, *v),
            Parameter::Date(v) => statement.set_date(index, *v),
            Parameter::Symbol(v) => statement.set_string(index, v),
            Parameter::Out(out) => match statement.as_callable() {
                Some(callable) => callable.register_out_parameter(index, out.sql_type()),
                None => return Err(invalid_parameter_type(index, out)),
            },
            Parameter::Value(v) => statement.set_object(index, v),
        };
        if let Err(source) = result {
            let error = Error::new(StatementError::Bind {
                position: index,
                value: format!(
                    "{} {}",
                    parameter.tag(),
                    truncate_long!(parameter.to_string(), true)
                ),
                source: source.into(),
            });
            log::error!("{:#}", error);
            return Err(error);
        }
        log::trace!("Bound {} {parameter} at position {index}", parameter.tag());
        position += 1;
    }
    Ok(position)
}

fn invalid_parameter_type(position: u64, out: &OutType) -> Error {
    let error = Error::new(StatementError::InvalidParameterType {
        position,
        type_name: out.type_name(),
    });
    log::error!("{:#}", error);
    error
}
