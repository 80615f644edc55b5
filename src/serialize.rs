//! `serde` support: a [`Tai64`] is serialized as its hexadecimal label.

use {
    crate::timestamp::Tai64,
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
};

impl Serialize for Tai64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Tai64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Tai64::from_hex_string(&s).map_err(de::Error::custom)
    }
}
