use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Engineering discipline offered on the registration form.
///
/// The wire format and the appended rows carry the short lowercase code
/// (`"cse"`, `"etc"`, ...); `label()` gives the name shown in the branch
/// selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Cse,
    Csse,
    Csce,
    Etc,
    Ee,
    Eee,
    Ecse,
    Me,
    Mce,
    Ce,
    It,
    Ae,
}

impl Branch {
    /// Every branch, in the order the selector lists them
    pub const ALL: [Branch; 12] = [
        Self::Cse,
        Self::Csse,
        Self::Csce,
        Self::Etc,
        Self::Ee,
        Self::Eee,
        Self::Ecse,
        Self::Me,
        Self::Mce,
        Self::Ce,
        Self::It,
        Self::Ae,
    ];

    /// Short code used on the wire and in appended rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cse => "cse",
            Self::Csse => "csse",
            Self::Csce => "csce",
            Self::Etc => "etc",
            Self::Ee => "ee",
            Self::Eee => "eee",
            Self::Ecse => "ecse",
            Self::Me => "me",
            Self::Mce => "mce",
            Self::Ce => "ce",
            Self::It => "it",
            Self::Ae => "ae",
        }
    }

    /// Human-readable discipline name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cse => "Computer Science",
            Self::Csse => "Computer Science and Systems Engineering",
            Self::Csce => "Computer Science and Communication Engineering",
            Self::Etc => "Electronics and Telecommunication Engineering",
            Self::Ee => "Electrical Engineering",
            Self::Eee => "Electronics and Electrical Engineering",
            Self::Ecse => "Electronics and Computer Science Engineering",
            Self::Me => "Mechanical Engineering",
            Self::Mce => "Mechatronics Engineering",
            Self::Ce => "Civil Engineering",
            Self::It => "Information Technology",
            Self::Ae => "Aerospace Engineering",
        }
    }
}

impl FromStr for Branch {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "cse" => Ok(Self::Cse),
            "csse" => Ok(Self::Csse),
            "csce" => Ok(Self::Csce),
            "etc" => Ok(Self::Etc),
            "ee" => Ok(Self::Ee),
            "eee" => Ok(Self::Eee),
            "ecse" => Ok(Self::Ecse),
            "me" => Ok(Self::Me),
            "mce" => Ok(Self::Mce),
            "ce" => Ok(Self::Ce),
            "it" => Ok(Self::It),
            "ae" => Ok(Self::Ae),
            _ => Err(CoreError::InvalidBranch {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
