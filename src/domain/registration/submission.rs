use serde::{Deserialize, Serialize};

use super::value_objects::MemberField;

/// Plain record of one member's field values
///
/// Values are `None` while the corresponding input is untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tg: Option<String>,
}

impl MemberRecord {
    /// Builds a record with every field set
    pub fn new(
        fio: impl Into<String>,
        program: impl Into<String>,
        email: impl Into<String>,
        tg: impl Into<String>,
    ) -> Self {
        Self {
            fio: Some(fio.into()),
            program: Some(program.into()),
            email: Some(email.into()),
            tg: Some(tg.into()),
        }
    }

    /// Returns the value of `field`, if set
    pub fn get(&self, field: MemberField) -> Option<&str> {
        match field {
            MemberField::Fio => self.fio.as_deref(),
            MemberField::Program => self.program.as_deref(),
            MemberField::Email => self.email.as_deref(),
            MemberField::Tg => self.tg.as_deref(),
        }
    }

    /// Converts the record into a spreadsheet row, in column order
    ///
    /// Missing values become empty cells.
    pub fn to_row(&self) -> Vec<String> {
        MemberField::ALL
            .iter()
            .map(|field| self.get(*field).unwrap_or_default().to_string())
            .collect()
    }
}

/// Team name plus ordered member records, sent to `POST /form`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSubmission {
    pub team: String,
    pub members: Vec<MemberRecord>,
}
