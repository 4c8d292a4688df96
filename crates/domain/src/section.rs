//! Section identifiers — the six fixed regions of the page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownSectionError;

/// One of the page's fixed sections, in document order.
///
/// The lowercase label doubles as the DOM element id of the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Education,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section in document order. Also the scan order used to pick the
    /// active section.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Education,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// The element id / lowercase label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Capitalized label shown in the navigation bar.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSectionError(s.to_string()))
    }
}
