//! Shared response fragments.

use serde::{Deserialize, Serialize};

/// WordPress wraps rendered HTML fields (`title`, `content`, `excerpt`)
/// in an object with a single `rendered` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}
