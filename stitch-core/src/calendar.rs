use crate::{Error, Result};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Timezone aware calendar qualifying a timestamp bound as an UTC instant.
///
/// Binding a zoned timestamp sends the instant (expressed in UTC) together with the
/// calendar derived from its offset, the driver uses the calendar to build the value
/// without normalizing it to the server timezone. [`Calendar::localize`] recovers the
/// original timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Calendar {
    offset: UtcOffset,
}

impl Calendar {
    pub const UTC: Calendar = Calendar {
        offset: UtcOffset::UTC,
    };

    pub const fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Instant of `value` as an UTC wall clock timestamp.
    pub fn instant(value: &OffsetDateTime) -> Result<PrimitiveDateTime> {
        let utc = value.checked_to_offset(UtcOffset::UTC).ok_or_else(|| {
            Error::msg(format!("Timestamp {value} cannot be represented in UTC"))
        })?;
        Ok(PrimitiveDateTime::new(utc.date(), utc.time()))
    }

    /// Express the UTC `instant` in this calendar.
    pub fn localize(&self, instant: PrimitiveDateTime) -> Result<OffsetDateTime> {
        instant
            .assume_utc()
            .checked_to_offset(self.offset)
            .ok_or_else(|| {
                Error::msg(format!(
                    "Timestamp {instant} cannot be represented with offset {}",
                    self.offset
                ))
            })
    }
}

impl From<&OffsetDateTime> for Calendar {
    fn from(value: &OffsetDateTime) -> Self {
        Self::new(value.offset())
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::UTC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn instant_and_back() {
        let value = datetime!(2025-06-30 23:30:00 -05:00);
        let calendar = Calendar::from(&value);
        assert_eq!(calendar.offset(), offset!(-05:00));
        let instant = Calendar::instant(&value).unwrap();
        assert_eq!(instant, datetime!(2025-07-01 04:30:00));
        let back = calendar.localize(instant).unwrap();
        assert_eq!(back, value);
        assert_eq!(back.offset(), value.offset());
    }

    #[test]
    fn utc_is_identity() {
        let value = datetime!(2000-01-01 00:00:00 UTC);
        assert_eq!(
            Calendar::instant(&value).unwrap(),
            datetime!(2000-01-01 00:00:00)
        );
        assert_eq!(Calendar::from(&value), Calendar::UTC);
    }
}
