//! Identification result types.

use crate::db::SpeciesRecord;
use serde::{Deserialize, Serialize};

/// Identification mode selected by the caller.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Identify by calling the remote inference server.
    #[default]
    Online,
    /// Identify with the on-device classifier and bundled species table.
    Offline,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Unified species details produced by either identification backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDetails {
    /// Common display name of the species.
    pub name: String,

    /// Scientific name with naming authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,

    /// Local (Sinhala/Tamil) names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_names: Option<String>,

    /// Venom and medical-significance notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venom: Option<String>,

    /// General description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Global IUCN Red List status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conservation_status: Option<String>,

    /// Derived descriptive sentence about the species.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,

    /// First-aid or treatment notes, when the server provides them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,

    /// Taxonomic family, when the server provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Endemic status, when the server provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endemic_status: Option<String>,
}

impl SpeciesDetails {
    /// Build details from an offline reference record, synthesizing the
    /// fun-fact sentence from the record's taxonomic family.
    pub fn from_record(record: &SpeciesRecord) -> Self {
        Self {
            name: record.common_name.clone(),
            scientific_name: Some(record.scientific_name.clone()),
            local_names: record.local_names.clone(),
            venom: record.venom.clone(),
            description: Some(record.description.clone()),
            conservation_status: Some(record.conservation_status.clone()),
            fun_fact: Some(record.fun_fact()),
            treatment: None,
            family: Some(record.family.clone()),
            endemic_status: None,
        }
    }
}

/// Outcome of one identification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identification {
    /// The species was identified and full details are available.
    Found(SpeciesDetails),
    /// The classifier produced a label with no record in the offline
    /// database. The raw predicted label is still worth showing.
    NotFound {
        /// Label exactly as the classifier produced it.
        label: String,
    },
}

impl Identification {
    /// User-facing note accompanying the result, if any.
    ///
    /// A `NotFound` outcome carries both the predicted label and this
    /// message; callers may show either or both.
    pub fn note(&self) -> Option<String> {
        match self {
            Self::Found(_) => None,
            Self::NotFound { label } => Some(format!(
                "Details for \"{label}\" not found in offline database."
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_is_online() {
        assert_eq!(Mode::default(), Mode::Online);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("online".parse::<Mode>().ok(), Some(Mode::Online));
        assert_eq!("OFFLINE".parse::<Mode>().ok(), Some(Mode::Offline));
        assert!("hybrid".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trip() {
        assert_eq!(Mode::Offline.to_string(), "offline");
        assert_eq!(
            Mode::Online.to_string().parse::<Mode>().ok(),
            Some(Mode::Online)
        );
    }

    #[test]
    fn test_details_from_record_copies_all_fields() {
        let record = SpeciesRecord {
            common_name: "Indian Cobra".to_string(),
            scientific_name: "Naja naja (Linnaeus, 1758)".to_string(),
            local_names: Some("Naya / Nalla pambu".to_string()),
            venom: Some("Highly venomous.".to_string()),
            description: "A large hooded elapid.".to_string(),
            conservation_status: "Least Concern".to_string(),
            family: "Elapidae".to_string(),
        };

        let details = SpeciesDetails::from_record(&record);
        assert_eq!(details.name, "Indian Cobra");
        assert_eq!(
            details.scientific_name.as_deref(),
            Some("Naja naja (Linnaeus, 1758)")
        );
        assert_eq!(details.local_names.as_deref(), Some("Naya / Nalla pambu"));
        assert_eq!(details.venom.as_deref(), Some("Highly venomous."));
        assert_eq!(details.description.as_deref(), Some("A large hooded elapid."));
        assert_eq!(details.conservation_status.as_deref(), Some("Least Concern"));
        assert_eq!(
            details.fun_fact.as_deref(),
            Some("This species is from the 'Elapidae' family.")
        );
    }

    #[test]
    fn test_not_found_note_names_label() {
        let result = Identification::NotFound {
            label: "Banded Kukri".to_string(),
        };
        let note = result.note().unwrap();
        assert!(note.contains("Banded Kukri"));
        assert!(note.contains("not found in offline database"));
    }

    #[test]
    fn test_found_has_no_note() {
        let details = SpeciesDetails {
            name: "Rat Snake".to_string(),
            scientific_name: None,
            local_names: None,
            venom: None,
            description: None,
            conservation_status: None,
            fun_fact: None,
            treatment: None,
            family: None,
            endemic_status: None,
        };
        assert!(Identification::Found(details).note().is_none());
    }
}
