/// Errors raised by a [`GameStore`](crate::GameStore) backend.
///
/// Every variant is a backend fault. Lookup misses are not errors: they are
/// reported as `None` / `false` by the store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A MongoDB driver error (connectivity, command failure, decoding).
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// No backend could be established at startup.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store acknowledged an insert with an id that is not an ObjectId.
    #[error("Unexpected inserted id: {0}")]
    UnexpectedId(String),
}
