use crate::users::UserId;

/// Persistence abstraction for the single stored-location field on a user
/// record.
///
/// The service performs a plain read-then-decide-then-store sequence per
/// call; implementations own the isolation that keeps two concurrent updates
/// for the same user from losing one another's write.
pub trait LocationStore: Send + Sync {
    fn load(&self, user: &UserId) -> Result<Option<String>, LocationStoreError>;
    fn store(&self, user: &UserId, location: &str) -> Result<(), LocationStoreError>;
}

/// Error enumeration for location-store failures.
#[derive(Debug, thiserror::Error)]
pub enum LocationStoreError {
    #[error("user not found")]
    UnknownUser,
    #[error("location store unavailable: {0}")]
    Unavailable(String),
}
