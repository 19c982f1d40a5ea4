//! The unit stored by every container.

use std::cmp::Ordering;

/// The integer identifier every container orders and hashes by.
pub type Key = i64;

/// An immutable keyed entity. Identity and ordering come from the key alone; the payload is
/// opaque to the containers.
///
/// # Examples
///
/// ```
/// use stepcount::Record;
///
/// let a = Record::new(7, "alice");
/// let b = Record::new(7, "bob");
///
/// assert_eq!(a.key(), 7);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record<P> {
    key: Key,
    payload: P,
}

impl<P> Record<P> {
    /// Builds a record. Ownership moves into whichever container later stores it.
    pub fn new(key: Key, payload: P) -> Self {
        Self { key, payload }
    }

    /// The record's key.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The data associated with the key.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consumes the record, yielding its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> PartialEq for Record<P> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<P> Eq for Record<P> {}

impl<P> PartialOrd for Record<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Record<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
