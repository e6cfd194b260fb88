//! serde support
//!
//! Vectors serialize as `{ "length": n, "entries": [[i, v], ...] }`.
//! Deserialization rejects unsorted, duplicate or out-of-range indices.
//! The `fixed` flag is a property of the vector object and is not encoded.

use crate::vector::SparseVector;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use spvec_core::Element;

#[derive(Serialize)]
struct VectorStateRef<'a, T> {
    length: usize,
    entries: Vec<(usize, &'a T)>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VectorState<T> {
    length: usize,
    entries: Vec<(usize, T)>,
}

impl<T: Element + Serialize> Serialize for SparseVector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        VectorStateRef {
            length: self.length,
            entries: self.iter().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for SparseVector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let state = VectorState::<T>::deserialize(deserializer)?;
        let (indices, values): (Vec<usize>, Vec<T>) = state.entries.into_iter().unzip();
        SparseVector::from_parts(state.length, indices, values).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut v: SparseVector<i64> = SparseVector::with_length(6);
        v[4] = -8;
        v[1] = 2;

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"length":6,"entries":[[1,2],[4,-8]]}"#);

        let back: SparseVector<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert!(!back.is_fixed());
    }

    #[test]
    fn test_json_rejects_invalid_entries() {
        let unsorted = r#"{"length":6,"entries":[[4,1],[1,2]]}"#;
        assert!(serde_json::from_str::<SparseVector<i64>>(unsorted).is_err());

        let out_of_range = r#"{"length":3,"entries":[[3,1]]}"#;
        assert!(serde_json::from_str::<SparseVector<i64>>(out_of_range).is_err());
    }
}
