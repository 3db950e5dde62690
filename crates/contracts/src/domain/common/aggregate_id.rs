use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of the in-memory records
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>().map_err(|e| format!("Invalid u32: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_id_parsing() {
        assert_eq!(<u32 as AggregateId>::from_string("7"), Ok(7));
        assert!(<u32 as AggregateId>::from_string("seven").is_err());
        assert_eq!(7u32.as_string(), "7");
    }
}
