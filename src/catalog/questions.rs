//! The base bilingual question set. Every prompt carries English and
//! Urdu text; ids are stable keys used by trees, sessions, and triage.

use super::{AnswerKind, Bilingual, Question};
use crate::models::QuestionCategory;

pub static QUESTIONS: &[Question] = &[
    // ── Safety screen ────────────────────────────────────
    Question {
        id: "q_breathing_difficulty",
        prompt: Bilingual {
            en: "Are you having difficulty breathing right now?",
            ur: "کیا آپ کو ابھی سانس لینے میں دشواری ہو رہی ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Safety,
        red_flag: true,
    },
    Question {
        id: "q_consciousness",
        prompt: Bilingual {
            en: "Have you fainted or lost consciousness today?",
            ur: "کیا آپ آج بے ہوش ہوئے ہیں یا غش کھایا ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Safety,
        red_flag: true,
    },
    Question {
        id: "q_severe_bleeding",
        prompt: Bilingual {
            en: "Do you have any heavy or uncontrolled bleeding?",
            ur: "کیا آپ کو بہت زیادہ یا نہ رکنے والا خون بہہ رہا ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Safety,
        red_flag: true,
    },
    // ── Shared diagnostic core ───────────────────────────
    Question {
        id: "q_chief_complaint",
        prompt: Bilingual {
            en: "Describe the problem that brought you here today.",
            ur: "آج آپ کس تکلیف کی وجہ سے آئے ہیں؟ تفصیل سے بتائیں۔",
        },
        kind: AnswerKind::ChiefComplaint,
        category: QuestionCategory::Characterization,
        red_flag: false,
    },
    Question {
        id: "q_onset",
        prompt: Bilingual {
            en: "When did this problem start?",
            ur: "یہ تکلیف کب شروع ہوئی؟",
        },
        kind: AnswerKind::Duration,
        category: QuestionCategory::Pattern,
        red_flag: false,
    },
    Question {
        id: "q_severity",
        prompt: Bilingual {
            en: "On a scale of 0 to 10, how severe is the pain right now?",
            ur: "صفر سے دس کے پیمانے پر، ابھی درد کی شدت کتنی ہے؟",
        },
        kind: AnswerKind::Severity,
        category: QuestionCategory::Pain,
        red_flag: false,
    },
    Question {
        id: "q_pattern",
        prompt: Bilingual {
            en: "Is the pain constant, or does it come and go?",
            ur: "کیا درد مسلسل رہتا ہے یا آتا جاتا ہے؟",
        },
        kind: AnswerKind::FreeText,
        category: QuestionCategory::Pattern,
        red_flag: false,
    },
    // ── Complaint-specific diagnostic ────────────────────
    Question {
        id: "q_exertion",
        prompt: Bilingual {
            en: "Does the pain get worse with physical effort?",
            ur: "کیا محنت یا چلنے پھرنے سے درد بڑھ جاتا ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Characterization,
        red_flag: false,
    },
    Question {
        id: "q_nausea",
        prompt: Bilingual {
            en: "Are you feeling nauseous, or have you vomited?",
            ur: "کیا آپ کو متلی ہو رہی ہے یا قے ہوئی ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Associated,
        red_flag: false,
    },
    Question {
        id: "q_appetite",
        prompt: Bilingual {
            en: "Have you lost your appetite?",
            ur: "کیا آپ کی بھوک ختم ہو گئی ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Associated,
        red_flag: false,
    },
    Question {
        id: "q_bowel_change",
        prompt: Bilingual {
            en: "Any recent change in your bowel habits?",
            ur: "کیا حال ہی میں آپ کے پاخانے کی عادت میں کوئی تبدیلی آئی ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Symptoms,
        red_flag: false,
    },
    Question {
        id: "q_injury",
        prompt: Bilingual {
            en: "Did the pain start after a fall or injury?",
            ur: "کیا یہ درد گرنے یا چوٹ لگنے کے بعد شروع ہوا؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Characterization,
        red_flag: false,
    },
    Question {
        id: "q_leg_weakness",
        prompt: Bilingual {
            en: "Do you have weakness or numbness in your legs?",
            ur: "کیا آپ کی ٹانگوں میں کمزوری یا سن پن ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Symptoms,
        red_flag: true,
    },
    Question {
        id: "q_movement",
        prompt: Bilingual {
            en: "Can you move the painful limb normally?",
            ur: "کیا آپ متاثرہ ہاتھ یا ٹانگ کو معمول کے مطابق حرکت دے سکتے ہیں؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Function,
        red_flag: false,
    },
    Question {
        id: "q_worst_ever",
        prompt: Bilingual {
            en: "Is this the worst headache of your life?",
            ur: "کیا یہ آپ کی زندگی کا شدید ترین سر درد ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Characterization,
        red_flag: true,
    },
    Question {
        id: "q_vision",
        prompt: Bilingual {
            en: "Have you noticed any changes in your vision?",
            ur: "کیا آپ کی نظر میں کوئی تبدیلی آئی ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Symptoms,
        red_flag: true,
    },
    Question {
        id: "q_fever",
        prompt: Bilingual {
            en: "Do you have a fever?",
            ur: "کیا آپ کو بخار ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Symptoms,
        red_flag: false,
    },
    Question {
        id: "q_fatigue",
        prompt: Bilingual {
            en: "Have you been feeling unusually tired or weak?",
            ur: "کیا آپ غیر معمولی تھکاوٹ یا کمزوری محسوس کر رہے ہیں؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Symptoms,
        red_flag: false,
    },
    // ── History ──────────────────────────────────────────
    Question {
        id: "q_medications",
        prompt: Bilingual {
            en: "Which medicines are you currently taking?",
            ur: "آپ اس وقت کون سی دوائیں لے رہے ہیں؟",
        },
        kind: AnswerKind::Medication,
        category: QuestionCategory::History,
        red_flag: false,
    },
    Question {
        id: "q_allergies",
        prompt: Bilingual {
            en: "Are you allergic to any medicines? Name them, or say none.",
            ur: "کیا آپ کو کسی دوا سے الرجی ہے؟ نام بتائیں، یا کہیں کوئی نہیں۔",
        },
        kind: AnswerKind::Medication,
        category: QuestionCategory::History,
        red_flag: false,
    },
    Question {
        id: "q_conditions",
        prompt: Bilingual {
            en: "Do you have any ongoing conditions, such as diabetes or high blood pressure?",
            ur: "کیا آپ کو کوئی پرانی بیماری ہے، جیسے شوگر یا بلڈ پریشر؟",
        },
        kind: AnswerKind::FreeText,
        category: QuestionCategory::History,
        red_flag: false,
    },
    Question {
        id: "q_smoking",
        prompt: Bilingual {
            en: "Do you smoke or use tobacco?",
            ur: "کیا آپ سگریٹ یا تمباکو استعمال کرتے ہیں؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::Risk,
        red_flag: false,
    },
    Question {
        id: "q_prior_episode",
        prompt: Bilingual {
            en: "Have you had this same problem before?",
            ur: "کیا آپ کو پہلے بھی یہی تکلیف ہو چکی ہے؟",
        },
        kind: AnswerKind::YesNo,
        category: QuestionCategory::History,
        red_flag: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert!(
                !QUESTIONS[i + 1..].iter().any(|o| o.id == q.id),
                "duplicate question id: {}",
                q.id
            );
        }
    }

    #[test]
    fn every_prompt_has_urdu_text() {
        for q in QUESTIONS {
            assert!(!q.prompt.en.is_empty(), "{} missing English", q.id);
            assert!(!q.prompt.ur.is_empty(), "{} missing Urdu", q.id);
        }
    }

    #[test]
    fn safety_questions_are_red_flagged() {
        for q in QUESTIONS
            .iter()
            .filter(|q| q.category == QuestionCategory::Safety)
        {
            assert!(q.red_flag, "{} should carry a red-flag marker", q.id);
        }
    }
}
