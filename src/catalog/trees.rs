//! Per-complaint intake trees: the ordered question ids each phase walks,
//! plus the minimum number of diagnostic answers needed before the
//! diagnostic phase may close.

use crate::models::ComplaintType;

/// Ordered question groupings for one complaint type.
#[derive(Debug)]
pub struct IntakeTree {
    pub safety: &'static [&'static str],
    pub diagnostic: &'static [&'static str],
    pub history: &'static [&'static str],
    /// Diagnostic answers required before the phase may close even if
    /// optional questions remain unasked.
    pub minimum_required: usize,
}

const SAFETY_SCREEN: &[&str] = &["q_breathing_difficulty", "q_consciousness", "q_severe_bleeding"];

const HISTORY_CORE: &[&str] = &[
    "q_medications",
    "q_allergies",
    "q_conditions",
    "q_smoking",
    "q_prior_episode",
];

static CHEST_PAIN: IntakeTree = IntakeTree {
    safety: SAFETY_SCREEN,
    diagnostic: &[
        "q_chief_complaint",
        "q_onset",
        "q_severity",
        "q_exertion",
        "q_nausea",
        "q_pattern",
    ],
    history: HISTORY_CORE,
    minimum_required: 4,
};

static ABDOMINAL_PAIN: IntakeTree = IntakeTree {
    safety: SAFETY_SCREEN,
    diagnostic: &[
        "q_chief_complaint",
        "q_onset",
        "q_severity",
        "q_nausea",
        "q_appetite",
        "q_bowel_change",
        "q_pattern",
    ],
    history: HISTORY_CORE,
    minimum_required: 4,
};

static BACK_PAIN: IntakeTree = IntakeTree {
    safety: SAFETY_SCREEN,
    diagnostic: &[
        "q_chief_complaint",
        "q_onset",
        "q_severity",
        "q_injury",
        "q_leg_weakness",
        "q_pattern",
    ],
    history: HISTORY_CORE,
    minimum_required: 4,
};

static LIMB_PAIN: IntakeTree = IntakeTree {
    safety: SAFETY_SCREEN,
    diagnostic: &[
        "q_chief_complaint",
        "q_onset",
        "q_severity",
        "q_injury",
        "q_movement",
    ],
    history: HISTORY_CORE,
    minimum_required: 3,
};

static HEADACHE: IntakeTree = IntakeTree {
    safety: SAFETY_SCREEN,
    diagnostic: &[
        "q_chief_complaint",
        "q_onset",
        "q_severity",
        "q_worst_ever",
        "q_vision",
        "q_nausea",
    ],
    history: HISTORY_CORE,
    minimum_required: 4,
};

static GENERAL: IntakeTree = IntakeTree {
    safety: SAFETY_SCREEN,
    diagnostic: &[
        "q_chief_complaint",
        "q_onset",
        "q_severity",
        "q_fever",
        "q_fatigue",
    ],
    history: HISTORY_CORE,
    minimum_required: 3,
};

/// Total lookup: every complaint type has a tree.
pub fn tree_for(complaint: ComplaintType) -> &'static IntakeTree {
    match complaint {
        ComplaintType::ChestPain => &CHEST_PAIN,
        ComplaintType::AbdominalPain => &ABDOMINAL_PAIN,
        ComplaintType::BackPain => &BACK_PAIN,
        ComplaintType::LimbPain => &LIMB_PAIN,
        ComplaintType::Headache => &HEADACHE,
        ComplaintType::General => &GENERAL,
    }
}
