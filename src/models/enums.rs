use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ComplaintType {
    ChestPain => "chest_pain",
    AbdominalPain => "abdominal_pain",
    BackPain => "back_pain",
    LimbPain => "limb_pain",
    Headache => "headache",
    General => "general",
});

str_enum!(BodyRegion {
    Head => "head",
    Neck => "neck",
    Chest => "chest",
    UpperAbdomen => "upper_abdomen",
    LowerAbdomen => "lower_abdomen",
    UpperBack => "upper_back",
    LowerBack => "lower_back",
    Arm => "arm",
    Leg => "leg",
});

str_enum!(BodySide {
    Left => "left",
    Right => "right",
    Center => "center",
});

str_enum!(Language {
    English => "en",
    Urdu => "ur",
});

str_enum!(QuestionCategory {
    Safety => "safety",
    Characterization => "characterization",
    Associated => "associated",
    Localization => "localization",
    Pattern => "pattern",
    Symptoms => "symptoms",
    Function => "function",
    Pain => "pain",
    History => "history",
    Risk => "risk",
    Exposure => "exposure",
});

/// Coarse stage of the intake conversation. Strictly forward:
/// Safety → Diagnostic → History → Complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntakePhase {
    Safety,
    Diagnostic,
    History,
    Complete,
}

impl IntakePhase {
    pub const COUNT: usize = 4;

    /// The phase that follows this one. Complete is terminal.
    pub fn next(&self) -> Self {
        match self {
            Self::Safety => Self::Diagnostic,
            Self::Diagnostic => Self::History,
            Self::History => Self::Complete,
            Self::Complete => Self::Complete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safety => "safety",
            Self::Diagnostic => "diagnostic",
            Self::History => "history",
            Self::Complete => "complete",
        }
    }
}

/// Reconciled urgency scale. The clinical four-level scale supplies the
/// actionable top (Immediate ≡ emergency); the patient five-level scale
/// contributes the Informational floor. Ordered: a later variant is
/// strictly less urgent, so `Ord` compares urgency via `rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Immediate,
    Urgent,
    SemiUrgent,
    NonUrgent,
    Informational,
}

impl UrgencyLevel {
    /// Higher rank = more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Immediate => 4,
            Self::Urgent => 3,
            Self::SemiUrgent => 2,
            Self::NonUrgent => 1,
            Self::Informational => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Urgent => "urgent",
            Self::SemiUrgent => "semi_urgent",
            Self::NonUrgent => "non_urgent",
            Self::Informational => "informational",
        }
    }
}

impl PartialOrd for UrgencyLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UrgencyLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn complaint_round_trip() {
        assert_eq!(ComplaintType::ChestPain.as_str(), "chest_pain");
        assert_eq!(
            ComplaintType::from_str("abdominal_pain").unwrap(),
            ComplaintType::AbdominalPain
        );
    }

    #[test]
    fn unknown_token_rejected() {
        let err = BodyRegion::from_str("torso").unwrap_err();
        assert!(matches!(err, ModelError::InvalidEnum { .. }));
    }

    #[test]
    fn phase_order_is_forward() {
        assert!(IntakePhase::Safety < IntakePhase::Diagnostic);
        assert!(IntakePhase::Diagnostic < IntakePhase::History);
        assert!(IntakePhase::History < IntakePhase::Complete);
    }

    #[test]
    fn complete_is_terminal() {
        assert_eq!(IntakePhase::Complete.next(), IntakePhase::Complete);
    }

    #[test]
    fn urgency_ordering_by_rank() {
        assert!(UrgencyLevel::Immediate > UrgencyLevel::Urgent);
        assert!(UrgencyLevel::Urgent > UrgencyLevel::SemiUrgent);
        assert!(UrgencyLevel::SemiUrgent > UrgencyLevel::NonUrgent);
        assert!(UrgencyLevel::NonUrgent > UrgencyLevel::Informational);
    }

    #[test]
    fn language_tokens() {
        assert_eq!(Language::English.as_str(), "en");
        assert_eq!(Language::Urdu.as_str(), "ur");
    }
}
