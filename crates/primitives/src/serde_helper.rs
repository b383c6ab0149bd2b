//! Various serde utilities

/// serde functions for handling `u128` fee quantities.
///
/// Serializes as a `0x`-prefixed hex quantity, which every format can carry. Deserializes from a
/// plain integer, a decimal string or a hex quantity string, so values beyond the integer range of
/// formats like TOML can still be written as strings.
pub mod quantity {
    use serde::{de, Deserializer, Serializer};
    use std::fmt;

    /// Deserializes a `u128` from an integer, a decimal string or a `0x` hex string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor)
    }

    /// Serializes a `u128` as a `0x` hex string.
    pub fn serialize<S: Serializer>(value: &u128, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format!("{value:#x}"))
    }

    struct QuantityVisitor;

    impl de::Visitor<'_> for QuantityVisitor {
        type Value = u128;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a non-negative integer, a decimal string or a 0x hex quantity")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
            Ok(v.into())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
            u128::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<u128, E> {
            u128::try_from(v).map_err(|_| E::custom(format!("negative quantity {v}")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
            let parsed = match v.strip_prefix("0x").or_else(|| v.strip_prefix("0X")) {
                Some(hex) if !hex.is_empty() => u128::from_str_radix(hex, 16),
                Some(_) => return Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                None => v.parse::<u128>(),
            };
            parsed.map_err(|err| E::custom(format!("invalid quantity {v:?}: {err}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
    struct Value {
        #[serde(with = "super::quantity")]
        inner: u128,
    }

    #[test]
    fn test_quantity_from_toml_integer() {
        let val: Value = toml::from_str("inner = 1000").unwrap();
        assert_eq!(val.inner, 1000);
    }

    #[test]
    fn test_quantity_beyond_i64_as_string() {
        let val: Value = toml::from_str("inner = \"0xffffffffffffffffffffffffffffffff\"").unwrap();
        assert_eq!(val.inner, u128::MAX);

        let val: Value = toml::from_str("inner = \"18446744073709551616\"").unwrap();
        assert_eq!(val.inner, u64::MAX as u128 + 1);
    }

    #[test]
    fn test_quantity_serializes_as_hex() {
        let val = Value { inner: 1000 };
        let s = toml::to_string(&val).unwrap();
        assert_eq!(s.trim(), "inner = \"0x3e8\"");

        let deserialized: Value = toml::from_str(&s).unwrap();
        assert_eq!(val, deserialized);
    }

    #[test]
    fn test_quantity_rejects_negative_and_garbage() {
        assert!(toml::from_str::<Value>("inner = -1").is_err());
        assert!(toml::from_str::<Value>("inner = \"0x\"").is_err());
        assert!(toml::from_str::<Value>("inner = \"12gwei\"").is_err());
    }
}
