//! Canonical enumerations of the PeerView schema
//!
//! Closed sets shared by everything that reads migrated data. String-valued
//! enumerations are stored by name, integer-valued ones by their code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Course a note or user preference refers to
///
/// `Sec*` members are secondary-school courses, `JC*` members are junior
/// college courses qualified by syllabus depth (H1/H2/H3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    SecCID,
    SecArt,
    SecAppreciationOfChineseCulture,
    SecMusic,
    SecDigitalLiteracy,
    SecConversationalMalay,
    SecFoodAndConsumerEducation,
    SecPhysicalEducation,
    SecMathematics,
    SecBiology,
    SecBiologyTalent,
    SecChemistry,
    SecChemistryTalent,
    SecPhysics,
    SecPhysicsTalent,
    SecComputing,
    SecEnglishLanguage,
    SecEnglishLiterature,
    SecHigherChineseLanguage,
    SecChineseLiterature,
    SecGeography,
    SecHistory,
    SecSingaporeStudies,
    SecBiculturalStudies,
    JCChinaStudiesInChineseH2,
    JCChineseLanguageAndLiteratureH2,
    JCEnglishLiteratureH1,
    JCEnglishLiteratureH2,
    JCEconomicsH1,
    JCEconomicsH2,
    JCGeographyH2,
    JCHistoryH2,
    JCTranslationH2,
    JCBiologyH2,
    JCComputingH2,
    JCChemistryH1,
    JCChemistryH2,
    JCChemistryH3,
    JCFurtherMathematicsH2,
    JCPhysicsH2,
    JCPhysicsH3,
    JCMathematicsH1,
    JCMathematicsH2,
    JCMathematicsH3,
    JCGeneralPaperH1,
    JCMotherTongueH1,
    JCProjectWorkH1,
    OtherSubject,
    NonAcademic,
    /// Sentinel for legacy values no mapping table covers
    Invalid,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::SecCID => "SecCID",
            Subject::SecArt => "SecArt",
            Subject::SecAppreciationOfChineseCulture => "SecAppreciationOfChineseCulture",
            Subject::SecMusic => "SecMusic",
            Subject::SecDigitalLiteracy => "SecDigitalLiteracy",
            Subject::SecConversationalMalay => "SecConversationalMalay",
            Subject::SecFoodAndConsumerEducation => "SecFoodAndConsumerEducation",
            Subject::SecPhysicalEducation => "SecPhysicalEducation",
            Subject::SecMathematics => "SecMathematics",
            Subject::SecBiology => "SecBiology",
            Subject::SecBiologyTalent => "SecBiologyTalent",
            Subject::SecChemistry => "SecChemistry",
            Subject::SecChemistryTalent => "SecChemistryTalent",
            Subject::SecPhysics => "SecPhysics",
            Subject::SecPhysicsTalent => "SecPhysicsTalent",
            Subject::SecComputing => "SecComputing",
            Subject::SecEnglishLanguage => "SecEnglishLanguage",
            Subject::SecEnglishLiterature => "SecEnglishLiterature",
            Subject::SecHigherChineseLanguage => "SecHigherChineseLanguage",
            Subject::SecChineseLiterature => "SecChineseLiterature",
            Subject::SecGeography => "SecGeography",
            Subject::SecHistory => "SecHistory",
            Subject::SecSingaporeStudies => "SecSingaporeStudies",
            Subject::SecBiculturalStudies => "SecBiculturalStudies",
            Subject::JCChinaStudiesInChineseH2 => "JCChinaStudiesInChineseH2",
            Subject::JCChineseLanguageAndLiteratureH2 => "JCChineseLanguageAndLiteratureH2",
            Subject::JCEnglishLiteratureH1 => "JCEnglishLiteratureH1",
            Subject::JCEnglishLiteratureH2 => "JCEnglishLiteratureH2",
            Subject::JCEconomicsH1 => "JCEconomicsH1",
            Subject::JCEconomicsH2 => "JCEconomicsH2",
            Subject::JCGeographyH2 => "JCGeographyH2",
            Subject::JCHistoryH2 => "JCHistoryH2",
            Subject::JCTranslationH2 => "JCTranslationH2",
            Subject::JCBiologyH2 => "JCBiologyH2",
            Subject::JCComputingH2 => "JCComputingH2",
            Subject::JCChemistryH1 => "JCChemistryH1",
            Subject::JCChemistryH2 => "JCChemistryH2",
            Subject::JCChemistryH3 => "JCChemistryH3",
            Subject::JCFurtherMathematicsH2 => "JCFurtherMathematicsH2",
            Subject::JCPhysicsH2 => "JCPhysicsH2",
            Subject::JCPhysicsH3 => "JCPhysicsH3",
            Subject::JCMathematicsH1 => "JCMathematicsH1",
            Subject::JCMathematicsH2 => "JCMathematicsH2",
            Subject::JCMathematicsH3 => "JCMathematicsH3",
            Subject::JCGeneralPaperH1 => "JCGeneralPaperH1",
            Subject::JCMotherTongueH1 => "JCMotherTongueH1",
            Subject::JCProjectWorkH1 => "JCProjectWorkH1",
            Subject::OtherSubject => "OtherSubject",
            Subject::NonAcademic => "NonAcademic",
            Subject::Invalid => "Invalid",
        }
    }
}

/// Kind of resource a note links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteType {
    GoogleDocument,
    GoogleDriveFolder,
    GoogleSlides,
    JupyterNotebook,
    Image,
    Video,
    Quizlet,
    Notion,
    /// Legitimate catch-all, not an error marker
    Others,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::GoogleDocument => "GoogleDocument",
            NoteType::GoogleDriveFolder => "GoogleDriveFolder",
            NoteType::GoogleSlides => "GoogleSlides",
            NoteType::JupyterNotebook => "JupyterNotebook",
            NoteType::Image => "Image",
            NoteType::Video => "Video",
            NoteType::Quizlet => "Quizlet",
            NoteType::Notion => "Notion",
            NoteType::Others => "Others",
        }
    }
}

/// School year a note was written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Year {
    Sec1,
    Sec2,
    Sec3,
    Sec4,
    JC1,
    JC2,
    Graduated,
}

impl Year {
    pub fn code(&self) -> i64 {
        match self {
            Year::Sec1 => 1,
            Year::Sec2 => 2,
            Year::Sec3 => 3,
            Year::Sec4 => 4,
            Year::JC1 => 5,
            Year::JC2 => 6,
            Year::Graduated => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Term1,
    Term2,
    Term3,
    Term4,
}

impl Term {
    pub fn code(&self) -> i64 {
        match self {
            Term::Term1 => 1,
            Term::Term2 => 2,
            Term::Term3 => 3,
            Term::Term4 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteCompletionStatus {
    Planned,
    Ongoing,
    Completed,
}

impl NoteCompletionStatus {
    pub fn code(&self) -> i64 {
        match self {
            NoteCompletionStatus::Planned => 1,
            NoteCompletionStatus::Ongoing => 2,
            NoteCompletionStatus::Completed => 3,
        }
    }
}

/// How far a user got through a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteReadStatus {
    Unread,
    Reading,
    Read,
}

impl NoteReadStatus {
    pub fn code(&self) -> i64 {
        match self {
            NoteReadStatus::Unread => 0,
            NoteReadStatus::Reading => 1,
            NoteReadStatus::Read => 2,
        }
    }
}

/// Kind of reading list; every account owns one list of each built-in kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingListType {
    UserDefined,
    Favorites,
    Reading,
    Read,
}

impl ReadingListType {
    pub fn code(&self) -> i64 {
        match self {
            ReadingListType::UserDefined => 0,
            ReadingListType::Favorites => 1,
            ReadingListType::Reading => 2,
            ReadingListType::Read => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreadType {
    CollaborationRequest,
    Comment,
}

impl ThreadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadType::CollaborationRequest => "CollaborationRequest",
            ThreadType::Comment => "Comment",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ThreadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
