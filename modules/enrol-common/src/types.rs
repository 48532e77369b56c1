use serde::{Deserialize, Serialize};

// --- Grades ---

/// School year of the enrolling student. Serialized as its display
/// label, which is also the value the form's select posts back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Kindy,
    #[serde(rename = "Year 1")]
    Year1,
    #[serde(rename = "Year 2")]
    Year2,
    #[serde(rename = "Year 3")]
    Year3,
    #[serde(rename = "Year 4")]
    Year4,
    #[serde(rename = "Year 5")]
    Year5,
    #[serde(rename = "Year 6")]
    Year6,
    #[serde(rename = "Year 7")]
    Year7,
    #[serde(rename = "Year 8")]
    Year8,
    #[serde(rename = "Year 9")]
    Year9,
    #[serde(rename = "Year 10")]
    Year10,
    #[serde(rename = "Year 11")]
    Year11,
    #[serde(rename = "Year 12")]
    Year12,
}

impl Grade {
    /// All grades in form order, Kindy first.
    pub const ALL: [Grade; 13] = [
        Grade::Kindy,
        Grade::Year1,
        Grade::Year2,
        Grade::Year3,
        Grade::Year4,
        Grade::Year5,
        Grade::Year6,
        Grade::Year7,
        Grade::Year8,
        Grade::Year9,
        Grade::Year10,
        Grade::Year11,
        Grade::Year12,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Kindy => "Kindy",
            Grade::Year1 => "Year 1",
            Grade::Year2 => "Year 2",
            Grade::Year3 => "Year 3",
            Grade::Year4 => "Year 4",
            Grade::Year5 => "Year 5",
            Grade::Year6 => "Year 6",
            Grade::Year7 => "Year 7",
            Grade::Year8 => "Year 8",
            Grade::Year9 => "Year 9",
            Grade::Year10 => "Year 10",
            Grade::Year11 => "Year 11",
            Grade::Year12 => "Year 12",
        }
    }

    /// Parse the exact form value back into a grade.
    pub fn from_label(label: &str) -> Option<Grade> {
        Grade::ALL.into_iter().find(|g| g.label() == label)
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// --- Enrolment lifecycle ---

/// Where an enrolment sits in the follow-up pipeline. The form only ever
/// writes `Pending`; later states are set by staff in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrolmentStatus {
    Pending,
    Contacted,
    Enrolled,
}

impl std::fmt::Display for EnrolmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrolmentStatus::Pending => write!(f, "pending"),
            EnrolmentStatus::Contacted => write!(f, "contacted"),
            EnrolmentStatus::Enrolled => write!(f, "enrolled"),
        }
    }
}

// --- Records ---

/// One enrolment submission, fully normalized, ready for the store.
/// Write-once: no id or versioning on this side, the store owns the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolmentRecord {
    pub student_first_name: String,
    pub student_last_name: String,
    pub parent_first_name: String,
    pub parent_last_name: String,
    pub parent_mobile: String,
    pub email_address: String,
    pub secondary_email_address: Option<String>,
    pub address: String,
    pub school: String,
    pub current_grade: Grade,
    pub status: EnrolmentStatus,
}

/// Raw field values as posted by the form, before any validation or
/// normalization. Field names match the form input names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEnrolment {
    #[serde(default)]
    pub student_first_name: String,
    #[serde(default)]
    pub student_last_name: String,
    #[serde(default)]
    pub parent_first_name: String,
    #[serde(default)]
    pub parent_last_name: String,
    #[serde(default)]
    pub parent_mobile: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub secondary_email_address: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub current_grade: String,
}

// --- Centers ---

/// Physical tutoring location the form was reached through. Routing
/// context only: not persisted with the record (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Center {
    Cabramatta,
    Liverpool,
}

impl Center {
    pub fn name(&self) -> &'static str {
        match self {
            Center::Cabramatta => "Cabramatta ABC",
            Center::Liverpool => "Liverpool Mr Pauls Tutoring",
        }
    }

    /// URL path this center's form is served at.
    pub fn path(&self) -> &'static str {
        match self {
            Center::Cabramatta => "/cabra",
            Center::Liverpool => "/liverpool",
        }
    }
}

impl std::fmt::Display for Center {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
