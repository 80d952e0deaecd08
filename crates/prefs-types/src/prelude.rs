pub use crate::error::{Error, PrResult};
pub use crate::types::{OrgId, PrefScope, PrefValue, UserId, ValueType};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
