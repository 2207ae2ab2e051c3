use serde::{Serialize, Serializer};
use time::format_description::well_known::Iso8601;
use time::OffsetDateTime;

/// Serializes an optional timestamp as an ISO 8601 string, `None` as null.
pub fn serialize<S: Serializer>(
    time: &Option<OffsetDateTime>,
    s: S,
) -> Result<S::Ok, S::Error> {
    time.map(|t| t.format(&Iso8601::DEFAULT))
        .transpose()
        .map_err(serde::ser::Error::custom)?
        .serialize(s)
}
