use core::fmt;

use serde_core::de::{Error, Visitor};
use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::access::Path;

// -----------------------------------------------------------------------------
// Path

impl Serialize for Path {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PathVisitor)
    }
}

struct PathVisitor;

impl Visitor<'_> for PathVisitor {
    type Value = Path;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a property address such as `pipeline.actors[1]`")
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Path::parse(v).map_err(E::custom)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::access::Path;

    #[test]
    fn path_is_a_string() {
        let path = Path::parse("pipeline.actors[1].get(0)").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#""pipeline.actors[1].get(0)""#);

        let paths: Vec<Path> = serde_json::from_str(r#"[".", "a.b[2]"]"#).unwrap();
        assert_eq!(paths, vec![Path::current(), Path::parse("a.b[2]").unwrap()]);
    }

    #[test]
    fn malformed_text_is_rejected() {
        let err = serde_json::from_str::<Path>(r#""a..b""#).unwrap_err();
        assert!(err.to_string().contains("a..b"));
        assert!(serde_json::from_str::<Path>("12").is_err());
    }
}
