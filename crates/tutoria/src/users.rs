//! User identity shared across marketplace modules.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a user account (student or tutor).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);
