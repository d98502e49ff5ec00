use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age section a patrol competes in. Sections follow the Australian scouting
/// program; a competition may open entry to any subset of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoutSection {
    /// Joey Scouts, ages 5-7
    Joeys,
    /// Cub Scouts, ages 8-10
    Cubs,
    /// Scouts, ages 11-14
    Scouts,
    /// Venturer Scouts, ages 15-17
    Venturers,
    /// Rover Scouts, ages 18-25
    Rovers,
}

impl ScoutSection {
    /// All sections in program order (youngest first).
    pub const ALL: [ScoutSection; 5] = [
        ScoutSection::Joeys,
        ScoutSection::Cubs,
        ScoutSection::Scouts,
        ScoutSection::Venturers,
        ScoutSection::Rovers,
    ];

    /// Canonical section name as printed on scarves and schedules.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoutSection::Joeys => "Joeys",
            ScoutSection::Cubs => "Cubs",
            ScoutSection::Scouts => "Scouts",
            ScoutSection::Venturers => "Venturers",
            ScoutSection::Rovers => "Rovers",
        }
    }

    /// Short label for chips and badges.
    pub fn short_label(&self) -> &'static str {
        match self {
            ScoutSection::Joeys => "JOE",
            ScoutSection::Cubs => "CUB",
            ScoutSection::Scouts => "SCT",
            ScoutSection::Venturers => "VEN",
            ScoutSection::Rovers => "ROV",
        }
    }
}

impl fmt::Display for ScoutSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoutSection {
    type Err = String;

    /// Parse a section name. Accepts singular and plural forms in any case,
    /// which is how they show up in hand-edited rosters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "joey" | "joeys" | "joey scouts" => Ok(ScoutSection::Joeys),
            "cub" | "cubs" | "cub scouts" => Ok(ScoutSection::Cubs),
            "scout" | "scouts" => Ok(ScoutSection::Scouts),
            "venturer" | "venturers" | "venturer scouts" => Ok(ScoutSection::Venturers),
            "rover" | "rovers" | "rover scouts" => Ok(ScoutSection::Rovers),
            _ => Err(format!("Unknown scout section: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("Cubs".parse::<ScoutSection>(), Ok(ScoutSection::Cubs));
        assert_eq!("rover".parse::<ScoutSection>(), Ok(ScoutSection::Rovers));
        assert_eq!(
            " Venturer Scouts ".parse::<ScoutSection>(),
            Ok(ScoutSection::Venturers)
        );
        assert!("pioneers".parse::<ScoutSection>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for section in ScoutSection::ALL {
            let parsed: ScoutSection = section.to_string().parse().unwrap();
            assert_eq!(parsed, section);
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ScoutSection::Venturers).unwrap();
        assert_eq!(json, "\"venturers\"");
        let back: ScoutSection = serde_json::from_str("\"rovers\"").unwrap();
        assert_eq!(back, ScoutSection::Rovers);
    }
}
