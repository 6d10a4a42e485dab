//! Body-region question refinement: targeted follow-ups appended when
//! the patient localizes the complaint on the body map. A static, total
//! lookup keyed by (complaint, region[, side]) — unknown combinations
//! yield an empty list. Never mutates the session; the engine merges
//! the result into the question stream exactly once.

use crate::catalog::{AnswerKind, Bilingual, Question};
use crate::models::{BodyRegion, BodySide, ComplaintType, QuestionCategory};

static QR_RADIATION: Question = Question {
    id: "qr_radiation",
    prompt: Bilingual {
        en: "Does the pain spread to your arm, jaw, or neck?",
        ur: "کیا درد آپ کے بازو، جبڑے یا گردن کی طرف پھیلتا ہے؟",
    },
    kind: AnswerKind::YesNo,
    category: QuestionCategory::Localization,
    red_flag: true,
};

static QR_DIAPHORESIS: Question = Question {
    id: "qr_diaphoresis",
    prompt: Bilingual {
        en: "Are you sweating heavily or having cold sweats?",
        ur: "کیا آپ کو بہت زیادہ یا ٹھنڈے پسینے آ رہے ہیں؟",
    },
    kind: AnswerKind::YesNo,
    category: QuestionCategory::Symptoms,
    red_flag: true,
};

static QR_REBOUND: Question = Question {
    id: "qr_rebound",
    prompt: Bilingual {
        en: "Does the pain get much worse when you press on your belly and let go?",
        ur: "کیا پیٹ دبا کر چھوڑنے پر درد اچانک بڑھ جاتا ہے؟",
    },
    kind: AnswerKind::YesNo,
    category: QuestionCategory::Localization,
    red_flag: true,
};

static QR_FEVER: Question = Question {
    id: "qr_fever",
    prompt: Bilingual {
        en: "Do you have a fever along with the pain?",
        ur: "کیا درد کے ساتھ آپ کو بخار بھی ہے؟",
    },
    kind: AnswerKind::YesNo,
    category: QuestionCategory::Symptoms,
    red_flag: true,
};

static QR_SADDLE_NUMBNESS: Question = Question {
    id: "qr_saddle_numbness",
    prompt: Bilingual {
        en: "Do you feel numbness around your inner thighs or groin?",
        ur: "کیا آپ کی رانوں کے اندرونی حصے یا شرمگاہ کے آس پاس سن پن محسوس ہوتا ہے؟",
    },
    kind: AnswerKind::YesNo,
    category: QuestionCategory::Symptoms,
    red_flag: true,
};

static QR_BLADDER_CONTROL: Question = Question {
    id: "qr_bladder_control",
    prompt: Bilingual {
        en: "Have you lost control of your bladder or bowels?",
        ur: "کیا پیشاب یا پاخانے پر قابو ختم ہو گیا ہے؟",
    },
    kind: AnswerKind::YesNo,
    category: QuestionCategory::Function,
    red_flag: true,
};

static QR_SWELLING_WARMTH: Question = Question {
    id: "qr_swelling_warmth",
    prompt: Bilingual {
        en: "Is the leg swollen, warm, or red?",
        ur: "کیا ٹانگ سوجی ہوئی، گرم یا سرخ ہے؟",
    },
    kind: AnswerKind::YesNo,
    category: QuestionCategory::Symptoms,
    red_flag: true,
};

static QR_IMMOBILIZATION: Question = Question {
    id: "qr_immobilization",
    prompt: Bilingual {
        en: "Have you recently had surgery, a long journey, or been unable to move around?",
        ur: "کیا حال ہی میں آپ کی سرجری ہوئی، لمبا سفر کیا، یا آپ زیادہ دیر حرکت نہیں کر سکے؟",
    },
    kind: AnswerKind::YesNo,
    category: QuestionCategory::Risk,
    red_flag: true,
};

/// Region-specific follow-ups for a localized complaint.
pub fn refine(
    complaint: ComplaintType,
    region: BodyRegion,
    side: Option<BodySide>,
) -> Vec<&'static Question> {
    match (complaint, region, side) {
        // Cardiac screen: radiation and diaphoresis
        (ComplaintType::ChestPain, BodyRegion::Chest, _) => {
            vec![&QR_RADIATION, &QR_DIAPHORESIS]
        }
        // Appendicitis screen on the right lower quadrant
        (ComplaintType::AbdominalPain, BodyRegion::LowerAbdomen, Some(BodySide::Right)) => {
            vec![&QR_REBOUND, &QR_FEVER]
        }
        (ComplaintType::AbdominalPain, BodyRegion::LowerAbdomen, _) => vec![&QR_FEVER],
        // Cauda equina screen
        (ComplaintType::BackPain, BodyRegion::LowerBack, _) => {
            vec![&QR_SADDLE_NUMBNESS, &QR_BLADDER_CONTROL]
        }
        // Deep-vein thrombosis screen
        (ComplaintType::LimbPain, BodyRegion::Leg, _) => {
            vec![&QR_SWELLING_WARMTH, &QR_IMMOBILIZATION]
        }
        _ => Vec::new(),
    }
}

/// Look up a refined question by id across the whole table.
pub fn find_refined(id: &str) -> Option<&'static Question> {
    [
        &QR_RADIATION,
        &QR_DIAPHORESIS,
        &QR_REBOUND,
        &QR_FEVER,
        &QR_SADDLE_NUMBNESS,
        &QR_BLADDER_CONTROL,
        &QR_SWELLING_WARMTH,
        &QR_IMMOBILIZATION,
    ]
    .into_iter()
    .find(|q| q.id == id)
}
