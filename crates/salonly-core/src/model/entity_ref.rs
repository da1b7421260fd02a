// ── Reference-or-record union ──
//
// Backend responses populate related entities inconsistently: a booking
// may carry its employee as a bare id string or as a fully embedded
// record, depending on the endpoint. `EntityRef` makes that union
// explicit so it is resolved once at the conversion boundary instead of
// being re-checked at every use site.

use serde::{Deserialize, Serialize};

/// Types that expose a stable backend identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Either a bare entity id or the embedded entity itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef<T> {
    Record(T),
    Id(String),
}

impl<T: Identified> EntityRef<T> {
    /// The entity id, regardless of which form the backend sent.
    pub fn id(&self) -> &str {
        match self {
            Self::Record(entity) => entity.id(),
            Self::Id(id) => id,
        }
    }
}

impl<T> EntityRef<T> {
    /// The embedded record, if the backend populated one.
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Record(entity) => Some(entity),
            Self::Id(_) => None,
        }
    }
}

impl<T> From<String> for EntityRef<T> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}
