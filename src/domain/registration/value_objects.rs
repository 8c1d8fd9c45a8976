use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use uuid::Uuid;

// Browser `\s`: the regex crate's `\s` includes U+0085 and omits U+FEFF
const JS_WHITESPACE: &str = concat!(
    r"\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

static FIO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[а-яА-ЯЁё\-{}]{{3,70}}$", JS_WHITESPACE))
        .expect("fio pattern compiles")
});

// `\d` is spelled out as ASCII digits to keep browser semantics
static PROGRAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[a-zA-Zа-яА-ЯЁё0-9{}\-]{{2,70}}$", JS_WHITESPACE))
        .expect("program pattern compiles")
});

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]*@edu\.hse\.ru$").expect("email pattern compiles"));

static TG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[a-zA-Z0-9]*$").expect("tg pattern compiles"));

/// Minimum length of a team name, in UTF-16 code units
pub const TEAM_NAME_MIN_LEN: usize = 3;

/// A field of a member record
///
/// Each field carries its own validation rule:
///
/// | Field | Rule |
/// |---|---|
/// | `Fio` | Cyrillic letters, `ё`/`Ё`, hyphens, whitespace; 3 to 70 chars |
/// | `Program` | Latin or Cyrillic letters, digits, hyphens, whitespace; 2 to 70 chars |
/// | `Email` | alphanumeric local part (may be empty) at `edu.hse.ru` |
/// | `Tg` | `@` followed by zero or more alphanumerics |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberField {
    /// Full name
    Fio,
    /// Study program
    Program,
    /// University email
    Email,
    /// Telegram handle
    Tg,
}

impl MemberField {
    /// All fields in column order
    pub const ALL: [MemberField; 4] = [
        MemberField::Fio,
        MemberField::Program,
        MemberField::Email,
        MemberField::Tg,
    ];

    /// Position of the field in [`MemberField::ALL`]
    pub fn index(self) -> usize {
        match self {
            MemberField::Fio => 0,
            MemberField::Program => 1,
            MemberField::Email => 2,
            MemberField::Tg => 3,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            MemberField::Fio => &*FIO_PATTERN,
            MemberField::Program => &*PROGRAM_PATTERN,
            MemberField::Email => &*EMAIL_PATTERN,
            MemberField::Tg => &*TG_PATTERN,
        }
    }
}

impl fmt::Display for MemberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberField::Fio => write!(f, "fio"),
            MemberField::Program => write!(f, "program"),
            MemberField::Email => write!(f, "email"),
            MemberField::Tg => write!(f, "tg"),
        }
    }
}

/// Checks a raw value against the rule of `field`
///
/// # Example
/// ```
/// use hackathon_registration::domain::registration::value_objects::{validate_field, MemberField};
///
/// assert!(validate_field(MemberField::Email, "iiivanov@edu.hse.ru"));
/// assert!(!validate_field(MemberField::Email, "iiivanov@gmail.com"));
/// ```
pub fn validate_field(field: MemberField, value: &str) -> bool {
    field.pattern().is_match(value)
}

/// Checks a team name: no pattern, only a minimum length
///
/// Length is measured the way the browser measures it, in UTF-16 code units.
pub fn validate_team_name(name: &str) -> bool {
    name.encode_utf16().count() >= TEAM_NAME_MIN_LEN
}

/// Identifier of a member slot, stable for the lifetime of the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(Uuid);

impl SlotId {
    /// Generates a fresh slot identifier
    pub fn generate() -> Self {
        SlotId(Uuid::new_v4())
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Submission status owned by the form
///
/// # Status Transitions
/// ```text
/// Idle -> Pending -> Success
///            ^   \--> Error
///            \-------/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Nothing sent yet
    #[default]
    Idle,
    /// A submission is in flight
    Pending,
    /// The submission was stored; terminal
    Success,
    /// The last submission failed; may be retried
    Error,
}

impl SubmissionStatus {
    /// Checks if a transition from the current status to `next` is valid
    ///
    /// # Example
    /// ```
    /// use hackathon_registration::domain::registration::value_objects::SubmissionStatus;
    ///
    /// assert!(SubmissionStatus::Error.can_transition_to(SubmissionStatus::Pending));
    /// assert!(!SubmissionStatus::Success.can_transition_to(SubmissionStatus::Pending));
    /// ```
    pub fn can_transition_to(&self, next: SubmissionStatus) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, next),
            (Idle, Pending) | (Error, Pending) | (Pending, Success) | (Pending, Error)
        )
    }

    /// Text shown on the submit button
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Отправить",
            SubmissionStatus::Pending => "Отправляем...",
            SubmissionStatus::Success => "Отправлено!",
            SubmissionStatus::Error => "Ошибка!",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Pending => write!(f, "pending"),
            SubmissionStatus::Success => write!(f, "success"),
            SubmissionStatus::Error => write!(f, "error"),
        }
    }
}
