//! Week entity - one of the 52 fixed planning buckets.

use serde::{Deserialize, Serialize};

/// A planning week, generated once by [`crate::core::calendar::generate_weeks`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// "W01" through "W52"
    pub id: String,
    /// English month name the week is reported under
    pub month: String,
}
