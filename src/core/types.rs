//! Strongly-typed wrappers for game concepts
//!
//! Newtypes instead of bare integers keep player ids from being mixed up
//! with hand indices or card counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique player identifier. Ids are positive and assigned at game init
/// in seat order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        debug_assert!(id > 0, "player ids are positive");
        PlayerId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
