//! Response bodies: the create acknowledgment and the keyed row listing.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// `{"message": "..."}`.
#[derive(serde::Serialize, Debug, PartialEq)]
pub struct Acknowledgment {
    pub message: String,
}

/// `{"<key>": [row, ...]}`. Rows serialize straight from their structs so field order is kept.
#[derive(Debug)]
pub struct Listing<T> {
    pub key: &'static str,
    pub rows: Vec<T>,
}

impl<T: Serialize> Serialize for Listing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.rows)?;
        map.end()
    }
}
