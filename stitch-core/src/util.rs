use std::fmt::Write;
use time::{Date, Time};

/// Length limit applied by [`truncate_long!`].
pub const TRUNCATE_LIMIT: usize = 497;

/// Largest char boundary of `value` not exceeding `limit`.
pub fn floor_char_boundary(value: &str, limit: usize) -> usize {
    if limit >= value.len() {
        return value.len();
    }
    let mut end = limit;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    end
}

#[macro_export]
/// Truncate long strings for logging and error messages purpose.
///
/// Returns a `format_args!` that yields at most 497 bytes from the start
/// of the input followed by `...` when truncation occurred. The cut never
/// splits a character.
///
/// If true is the second argument, it evaluates the first argument just once
/// and returns an owned `String`.
///
/// # Examples
/// ```ignore
/// use stitch_core::truncate_long;
/// let short = "select 1";
/// assert_eq!(format!("{}", truncate_long!(short)), "select 1");
/// let long = format!("select {}", "x".repeat(600));
/// assert!(format!("{}", truncate_long!(long)).ends_with("..."));
/// ```
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            &$query[..$crate::floor_char_boundary(&$query, $crate::TRUNCATE_LIMIT)].trim(),
            if $query.len() > $crate::TRUNCATE_LIMIT { "..." } else { "" },
        )
    };
    ($query:expr,true) => {{
        let query = $query;
        format!(
            "{}{}",
            &query[..$crate::floor_char_boundary(&query, $crate::TRUNCATE_LIMIT)].trim(),
            if query.len() > $crate::TRUNCATE_LIMIT { "..." } else { "" },
        )
    }};
}

/// Write an iterator of items separated by a delimiter into a string.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut first = true;
    for v in values {
        if !first {
            out.push_str(separator);
        }
        first = false;
        f(out, v);
    }
}

/// Write, escaping occurrences of `search` char with `replace` while copying into buffer.
pub fn write_escaped(out: &mut impl Write, value: &str, search: char, replace: &str) {
    let mut position = 0;
    for (i, c) in value.char_indices() {
        if c == search {
            let _ = out.write_str(&value[position..i]);
            let _ = out.write_str(replace);
            position = i + c.len_utf8();
        }
    }
    let _ = out.write_str(&value[position..]);
}

pub fn print_date(out: &mut impl Write, quote: &str, date: &Date) {
    let _ = write!(
        out,
        "{quote}{:04}-{:02}-{:02}{quote}",
        date.year(),
        date.month() as u8,
        date.day(),
    );
}

pub fn print_timer(out: &mut impl Write, quote: &str, time: &Time) {
    let mut subsecond = time.nanosecond();
    let mut width = 9;
    while width > 1 && subsecond % 10 == 0 {
        subsecond /= 10;
        width -= 1;
    }
    let _ = write!(
        out,
        "{quote}{:02}:{:02}:{:02}.{subsecond:0width$}{quote}",
        time.hour(),
        time.minute(),
        time.second(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn truncate() {
        let short = "select 1";
        assert_eq!(format!("{}", truncate_long!(short)), "select 1");
        let long = format!("select {}", "x".repeat(600));
        let logged = truncate_long!(long.clone(), true);
        assert!(logged.starts_with("select xxxx"));
        assert!(logged.ends_with("..."));
        assert_eq!(logged.len(), TRUNCATE_LIMIT + 3);
    }

    #[test]
    fn truncate_multibyte() {
        let long = "è".repeat(400);
        let logged = truncate_long!(long.as_str(), true);
        assert!(logged.ends_with("..."));
        assert!(logged.trim_end_matches("...").chars().all(|c| c == 'è'));
    }

    #[test]
    fn separated() {
        let mut out = String::new();
        separated_by(&mut out, ["a", "b", "c"], |out, v| out.push_str(v), ",");
        assert_eq!(out, "a,b,c");
        let mut out = String::from("(");
        separated_by(&mut out, Vec::<&str>::new(), |out, v| out.push_str(v), ",");
        assert_eq!(out, "(");
    }

    #[test]
    fn escaped() {
        let mut out = String::new();
        write_escaped(&mut out, "it's", '\'', "''");
        assert_eq!(out, "it''s");
    }

    #[test]
    fn temporal() {
        let mut out = String::new();
        print_date(&mut out, "'", &date!(2024 - 03 - 09));
        out.push(' ');
        print_timer(&mut out, "", &time!(08:05:01.25));
        assert_eq!(out, "'2024-03-09' 08:05:01.25");
    }
}
