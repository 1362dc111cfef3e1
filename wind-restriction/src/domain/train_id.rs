//! Train identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid train identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train ID: {reason}")]
pub struct InvalidTrainId {
    reason: &'static str,
}

/// An operator-assigned train identifier, such as `BNSF-4521`.
///
/// Train IDs are opaque; the only validation is that they contain at least
/// one non-whitespace character.
///
/// # Examples
///
/// ```
/// use wind_restriction::domain::TrainId;
///
/// let id = TrainId::new("BNSF-4521".to_string()).unwrap();
/// assert_eq!(id.as_str(), "BNSF-4521");
///
/// // Blank identifiers are rejected
/// assert!(TrainId::new("".to_string()).is_err());
/// assert!(TrainId::new("   ".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrainId(String);

impl TrainId {
    /// Create a train ID from a string.
    ///
    /// Returns an error if the string is empty or only whitespace.
    pub fn new(s: String) -> Result<Self, InvalidTrainId> {
        if s.trim().is_empty() {
            return Err(InvalidTrainId {
                reason: "train ID cannot be blank",
            });
        }
        Ok(TrainId(s))
    }

    /// Returns the train ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrainId {
    type Error = InvalidTrainId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TrainId::new(s)
    }
}

impl From<TrainId> for String {
    fn from(id: TrainId) -> Self {
        id.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_ids() {
        assert!(TrainId::new("BNSF-4521".to_string()).is_ok());
        assert!(TrainId::new("UP-9083".to_string()).is_ok());
        assert!(TrainId::new("X".to_string()).is_ok());
    }

    #[test]
    fn reject_blank() {
        assert!(TrainId::new("".to_string()).is_err());
        assert!(TrainId::new(" \t".to_string()).is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = TrainId::new("CSX-1122".to_string()).unwrap();
        assert_eq!(format!("{}", id), "CSX-1122");
        assert_eq!(format!("{:?}", id), "TrainId(CSX-1122)");
    }

    #[test]
    fn deserialize_validates() {
        let id: TrainId = serde_json::from_str("\"UP-9083\"").unwrap();
        assert_eq!(id.as_str(), "UP-9083");

        let err = serde_json::from_str::<TrainId>("\"\"").unwrap_err();
        assert!(err.to_string().contains("train ID cannot be blank"));
    }

    #[test]
    fn serialize_as_string() {
        let id = TrainId::new("UP-9083".to_string()).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"UP-9083\"");
    }
}
