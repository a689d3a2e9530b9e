//! Legacy value normalizers
//!
//! Pure functions from legacy free text or integer codes to the canonical
//! enumerations. Every normalizer is total:
//! - subjects fall back to `Subject::Invalid` and log a warning
//! - everything else falls back to the configured `FallbackPolicy` member
//!
//! Subject mapping tables are public so that they can be inspected (and
//! tested) as data.

use crate::config::FallbackPolicy;
use peerview_common::enums::{
    NoteCompletionStatus, NoteReadStatus, NoteType, Subject, Term, ThreadType, Year,
};
use tracing::{debug, warn};

/// Subjects coerced to their junior college variant when `force_jc` is set
pub const FORCE_JC_SUBJECTS: &[(&str, Subject)] = &[
    ("Math", Subject::JCMathematicsH2),
    ("Computing", Subject::JCComputingH2),
    ("Physics", Subject::JCPhysicsH2),
    ("Chemistry", Subject::JCChemistryH2),
    ("Biology", Subject::JCBiologyH2),
    ("Geography", Subject::JCGeographyH2),
    ("History", Subject::JCHistoryH2),
    ("Elit", Subject::JCEnglishLiteratureH2),
    ("Clit", Subject::JCChineseLanguageAndLiteratureH2),
    ("GP", Subject::JCGeneralPaperH1),
    ("Econs", Subject::JCEconomicsH1),
];

/// Subjects with no level: secondary courses, plus JC courses offered at one level only
pub const SECONDARY_SUBJECTS: &[(&str, Subject)] = &[
    ("Math", Subject::SecMathematics),
    ("Computing", Subject::SecComputing),
    ("Physics", Subject::SecPhysics),
    ("Chemistry", Subject::SecChemistry),
    ("Biology", Subject::SecBiology),
    ("Geography", Subject::SecGeography),
    ("History", Subject::SecHistory),
    ("BSP", Subject::SecBiculturalStudies),
    ("Bicultural Studies", Subject::SecBiculturalStudies),
    ("Singapore Studies", Subject::SecSingaporeStudies),
    ("English", Subject::SecEnglishLanguage),
    ("Chinese", Subject::SecHigherChineseLanguage),
    ("Elit", Subject::SecEnglishLiterature),
    ("Clit", Subject::SecChineseLiterature),
    ("GP", Subject::JCGeneralPaperH1),
    ("CSC", Subject::JCChinaStudiesInChineseH2),
    ("Translation", Subject::JCTranslationH2),
    ("F-math", Subject::JCFurtherMathematicsH2),
];

pub const H1_SUBJECTS: &[(&str, Subject)] = &[
    ("Math", Subject::JCMathematicsH1),
    ("Chemistry", Subject::JCChemistryH1),
    ("GP", Subject::JCGeneralPaperH1),
    ("Econs", Subject::JCEconomicsH1),
    ("Elit", Subject::JCEnglishLiteratureH1),
];

pub const H2_SUBJECTS: &[(&str, Subject)] = &[
    ("Math", Subject::JCMathematicsH2),
    ("F-math", Subject::JCFurtherMathematicsH2),
    ("Computing", Subject::JCComputingH2),
    ("Physics", Subject::JCPhysicsH2),
    ("Chemistry", Subject::JCChemistryH2),
    ("Biology", Subject::JCBiologyH2),
    ("Geography", Subject::JCGeographyH2),
    ("History", Subject::JCHistoryH2),
    ("Econs", Subject::JCEconomicsH2),
    ("Elit", Subject::JCEnglishLiteratureH2),
    ("Clit", Subject::JCChineseLanguageAndLiteratureH2),
    ("CSC", Subject::JCChinaStudiesInChineseH2),
    ("Translation", Subject::JCTranslationH2),
];

pub const H3_SUBJECTS: &[(&str, Subject)] = &[
    ("Math", Subject::JCMathematicsH3),
    ("Physics", Subject::JCPhysicsH3),
    ("Chemistry", Subject::JCChemistryH3),
];

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Mapping table selected by a legacy level, `None` for unknown levels
pub fn subject_table_for_level(level: Option<&str>) -> Option<&'static [(&'static str, Subject)]> {
    match level {
        None => Some(SECONDARY_SUBJECTS),
        Some("H1") => Some(H1_SUBJECTS),
        Some("H2") => Some(H2_SUBJECTS),
        Some("H3") => Some(H3_SUBJECTS),
        Some(_) => None,
    }
}

/// Map a legacy subject display name and level to a canonical course
///
/// `level` is `None` for secondary courses (the legacy literal "NULL" must
/// already be converted). "Others" in any casing is always `OtherSubject`.
pub fn normalize_subject(name: &str, level: Option<&str>, force_jc: bool) -> Subject {
    if name.eq_ignore_ascii_case("others") {
        return Subject::OtherSubject;
    }

    if force_jc {
        if let Some(subject) = lookup(FORCE_JC_SUBJECTS, name) {
            return subject;
        }
        warn!("Could not find JC subject with subject: '{}', level: '{:?}'", name, level);
    }

    if let Some(subject) = subject_table_for_level(level).and_then(|t| lookup(t, name)) {
        return subject;
    }

    warn!("Could not find subject with subject: '{}', level: '{:?}'", name, level);
    Subject::Invalid
}

/// Map a `notetypes` display name; unknown names are the catch-all, silently
pub fn normalize_note_type(raw: &str, fallbacks: &FallbackPolicy) -> NoteType {
    match raw {
        "Document" => NoteType::GoogleDocument,
        "Folder" => NoteType::GoogleDriveFolder,
        "Slides" => NoteType::GoogleSlides,
        "Jupyter Notebook" => NoteType::JupyterNotebook,
        "Image" => NoteType::Image,
        "Video" => NoteType::Video,
        "Flashcards" => NoteType::Quizlet,
        "Notion" => NoteType::Notion,
        _ => fallbacks.note_type,
    }
}

pub fn normalize_year(raw: &str, fallbacks: &FallbackPolicy) -> Year {
    match raw {
        "Year 1" => Year::Sec1,
        "Year 2" => Year::Sec2,
        "Year 3" => Year::Sec3,
        "Year 4" => Year::Sec4,
        "JC 1" => Year::JC1,
        "JC 2" => Year::JC2,
        other => {
            debug!(value = other, fallback = ?fallbacks.year, "Year fallback applied");
            fallbacks.year
        }
    }
}

pub fn normalize_term(raw: &str, fallbacks: &FallbackPolicy) -> Term {
    match raw {
        "Term 1" => Term::Term1,
        "Term 2" => Term::Term2,
        "Term 3" => Term::Term3,
        "Term 4" => Term::Term4,
        other => {
            debug!(value = other, fallback = ?fallbacks.term, "Term fallback applied");
            fallbacks.term
        }
    }
}

pub fn normalize_completion_status(raw: &str, fallbacks: &FallbackPolicy) -> NoteCompletionStatus {
    match raw {
        "Planned" => NoteCompletionStatus::Planned,
        "Ongoing" => NoteCompletionStatus::Ongoing,
        "Completed" => NoteCompletionStatus::Completed,
        other => {
            debug!(
                value = other,
                fallback = ?fallbacks.completion_status,
                "Completion status fallback applied"
            );
            fallbacks.completion_status
        }
    }
}

pub fn normalize_read_status(code: i64, fallbacks: &FallbackPolicy) -> NoteReadStatus {
    match code {
        0 => NoteReadStatus::Unread,
        1 => NoteReadStatus::Reading,
        2 => NoteReadStatus::Read,
        other => {
            debug!(value = other, fallback = ?fallbacks.read_status, "Read status fallback applied");
            fallbacks.read_status
        }
    }
}

pub fn normalize_thread_type(code: i64, fallbacks: &FallbackPolicy) -> ThreadType {
    match code {
        0 => ThreadType::CollaborationRequest,
        1 => ThreadType::Comment,
        other => {
            debug!(value = other, fallback = ?fallbacks.thread_type, "Thread type fallback applied");
            fallbacks.thread_type
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_others_any_case() {
        for name in ["Others", "others", "OTHERS"] {
            assert_eq!(normalize_subject(name, None, false), Subject::OtherSubject);
            assert_eq!(normalize_subject(name, Some("H3"), true), Subject::OtherSubject);
        }
    }

    #[test]
    fn test_level_selects_table() {
        assert_eq!(normalize_subject("Math", None, false), Subject::SecMathematics);
        assert_eq!(normalize_subject("Math", Some("H1"), false), Subject::JCMathematicsH1);
        assert_eq!(normalize_subject("Math", Some("H2"), false), Subject::JCMathematicsH2);
        assert_eq!(normalize_subject("Math", Some("H3"), false), Subject::JCMathematicsH3);
    }

    #[test]
    fn test_single_level_jc_subjects_without_level() {
        assert_eq!(normalize_subject("GP", None, false), Subject::JCGeneralPaperH1);
        assert_eq!(normalize_subject("F-math", None, false), Subject::JCFurtherMathematicsH2);
        // Secondary variant wins for subjects taught at both schools
        assert_eq!(normalize_subject("Clit", None, false), Subject::SecChineseLiterature);
    }

    #[test]
    fn test_force_jc() {
        assert_eq!(normalize_subject("Math", None, true), Subject::JCMathematicsH2);
        assert_eq!(normalize_subject("Econs", Some("H2"), true), Subject::JCEconomicsH1);
        // Absent from the JC table: falls through to the level table
        assert_eq!(normalize_subject("English", None, true), Subject::SecEnglishLanguage);
    }

    #[test]
    fn test_unknown_pairs_are_invalid() {
        assert_eq!(normalize_subject("Physics", Some("H1"), false), Subject::Invalid);
        assert_eq!(normalize_subject("Phyiscs", None, false), Subject::Invalid);
        assert_eq!(normalize_subject("Math", Some("H4"), false), Subject::Invalid);
        assert_eq!(normalize_subject("", None, false), Subject::Invalid);
    }

    #[test]
    fn test_every_table_entry_maps_to_a_real_subject() {
        let levels: [(Option<&str>, &[(&str, Subject)]); 4] = [
            (None, SECONDARY_SUBJECTS),
            (Some("H1"), H1_SUBJECTS),
            (Some("H2"), H2_SUBJECTS),
            (Some("H3"), H3_SUBJECTS),
        ];
        for (level, table) in levels {
            for (name, expected) in table {
                let first = normalize_subject(name, level, false);
                assert_ne!(first, Subject::Invalid, "{} at {:?}", name, level);
                assert_eq!(first, *expected, "{} at {:?}", name, level);
                // Deterministic
                assert_eq!(normalize_subject(name, level, false), first);
            }
        }
    }

    #[test]
    fn test_note_type_table_and_catch_all() {
        let fallbacks = FallbackPolicy::default();
        assert_eq!(normalize_note_type("Document", &fallbacks), NoteType::GoogleDocument);
        assert_eq!(normalize_note_type("Flashcards", &fallbacks), NoteType::Quizlet);
        assert_eq!(normalize_note_type("Photos", &fallbacks), NoteType::Others);
    }

    #[test]
    fn test_fallbacks_follow_policy() {
        let legacy = FallbackPolicy::default();
        assert_eq!(normalize_year("Y4", &legacy), Year::Graduated);
        assert_eq!(normalize_term("Term 5", &legacy), Term::Term1);
        assert_eq!(normalize_completion_status("Abandoned", &legacy), NoteCompletionStatus::Completed);
        assert_eq!(normalize_read_status(9, &legacy), NoteReadStatus::Reading);
        assert_eq!(normalize_thread_type(-1, &legacy), ThreadType::CollaborationRequest);

        let custom = FallbackPolicy {
            term: Term::Term4,
            completion_status: NoteCompletionStatus::Planned,
            read_status: NoteReadStatus::Unread,
            ..FallbackPolicy::default()
        };
        assert_eq!(normalize_term("Term 5", &custom), Term::Term4);
        assert_eq!(normalize_completion_status("", &custom), NoteCompletionStatus::Planned);
        assert_eq!(normalize_read_status(3, &custom), NoteReadStatus::Unread);
    }

    #[test]
    fn test_in_table_values_ignore_policy() {
        let custom = FallbackPolicy {
            year: Year::Sec1,
            ..FallbackPolicy::default()
        };
        assert_eq!(normalize_year("JC 2", &custom), Year::JC2);
        assert_eq!(normalize_read_status(2, &custom), NoteReadStatus::Read);
        assert_eq!(normalize_thread_type(1, &custom), ThreadType::Comment);
    }
}
