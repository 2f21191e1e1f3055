use crate::error::CoreError;

/// All game identifiers are store-assigned MongoDB ObjectIds.
pub type DbId = bson::oid::ObjectId;

/// Parse a path segment into a [`DbId`].
///
/// Accepts the 24-character hex form the API hands out. Anything else is a
/// client mistake and maps to [`CoreError::InvalidIdentifier`], never to a
/// lookup miss.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    DbId::parse_str(raw).map_err(|_| {
        CoreError::InvalidIdentifier(format!(
            "'{raw}' is not a valid id (expected 24 hex characters)"
        ))
    })
}
