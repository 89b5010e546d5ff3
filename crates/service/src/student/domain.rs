use serde::{Deserialize, Serialize};

/// A student record. `id` is assigned by the caller and is the registry key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub major: String,
    pub gpa: f64,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>, major: impl Into<String>, gpa: f64) -> Self {
        Self { id, name: name.into(), major: major.into(), gpa }
    }

    /// Record placed in an empty registry when it is listed.
    pub fn sample() -> Self {
        Self::new(1, "sample1", "csc", 3.86)
    }
}

/// Body of a whole-record replace. Any `id` sent is ignored; the target id
/// comes from the caller.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StudentReplacement {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub major: String,
    pub gpa: f64,
}

impl StudentReplacement {
    pub fn into_student(self, id: i64) -> Student {
        Student { id, name: self.name, major: self.major, gpa: self.gpa }
    }
}

impl From<Student> for StudentReplacement {
    fn from(s: Student) -> Self {
        Self { id: Some(s.id), name: s.name, major: s.major, gpa: s.gpa }
    }
}
