use super::submission::MemberRecord;
use super::value_objects::{validate_field, MemberField, SlotId};

/// State of a single text input
///
/// `errored` is cosmetic: it is set by a failed validation and cleared
/// when the input gains focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    value: Option<String>,
    errored: bool,
}

impl FieldInput {
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Current text; an untouched input reads as empty
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    pub fn is_errored(&self) -> bool {
        self.errored
    }

    pub fn mark_errored(&mut self) {
        self.errored = true;
    }

    pub fn focus(&mut self) {
        self.errored = false;
    }

    pub fn reset(&mut self) {
        self.value = None;
        self.errored = false;
    }
}

/// One member slot of the registration form
///
/// Owns the four inputs of a member and exposes the two capabilities the
/// form needs: [`MemberSlot::validate`] and [`MemberSlot::snapshot`].
///
/// # Example
/// ```
/// use hackathon_registration::domain::registration::member::MemberSlot;
/// use hackathon_registration::domain::registration::value_objects::MemberField;
///
/// let mut slot = MemberSlot::new();
/// slot.set(MemberField::Fio, "Иванов Иван");
/// slot.set(MemberField::Program, "ИВТ");
/// slot.set(MemberField::Email, "ivanov@edu.hse.ru");
/// slot.set(MemberField::Tg, "@ivanov");
///
/// assert!(slot.validate());
/// assert_eq!(slot.snapshot().tg.as_deref(), Some("@ivanov"));
/// ```
#[derive(Debug, Clone)]
pub struct MemberSlot {
    id: SlotId,
    inputs: [FieldInput; 4],
}

impl MemberSlot {
    /// Creates an empty slot with a fresh identifier
    pub fn new() -> Self {
        Self {
            id: SlotId::generate(),
            inputs: Default::default(),
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        self.inputs[field.index()].set(value);
    }

    pub fn input(&self, field: MemberField) -> &FieldInput {
        &self.inputs[field.index()]
    }

    pub fn is_errored(&self, field: MemberField) -> bool {
        self.input(field).is_errored()
    }

    /// Clears the error mark on `field`
    pub fn focus(&mut self, field: MemberField) {
        self.inputs[field.index()].focus();
    }

    /// Validates all four fields, marking each one that fails
    ///
    /// Every field is checked even after a failure, so all errors surface
    /// at once. Untouched fields are validated as empty strings.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;

        for field in MemberField::ALL {
            let input = &mut self.inputs[field.index()];
            if !validate_field(field, input.text()) {
                input.mark_errored();
                valid = false;
            }
        }

        valid
    }

    /// Current field values as a plain record
    pub fn snapshot(&self) -> MemberRecord {
        MemberRecord {
            fio: self.input(MemberField::Fio).value().map(str::to_string),
            program: self.input(MemberField::Program).value().map(str::to_string),
            email: self.input(MemberField::Email).value().map(str::to_string),
            tg: self.input(MemberField::Tg).value().map(str::to_string),
        }
    }

    /// Clears every value and error mark; the identifier is kept
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.reset();
        }
    }
}

impl Default for MemberSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_slot() -> MemberSlot {
        let mut slot = MemberSlot::new();
        slot.set(MemberField::Fio, "Иванов Иван Иванович");
        slot.set(MemberField::Program, "ИВТ");
        slot.set(MemberField::Email, "iiivanov@edu.hse.ru");
        slot.set(MemberField::Tg, "@iiivanov");
        slot
    }

    #[test]
    fn valid_slot_passes() {
        let mut slot = filled_slot();

        assert!(slot.validate());
        for field in MemberField::ALL {
            assert!(!slot.is_errored(field));
        }
    }

    #[test]
    fn untouched_slot_fails_on_every_field() {
        let mut slot = MemberSlot::new();

        assert!(!slot.validate());
        for field in MemberField::ALL {
            assert!(slot.is_errored(field), "{} should be errored", field);
        }
    }

    #[test]
    fn validation_marks_all_failing_fields() {
        let mut slot = filled_slot();
        slot.set(MemberField::Fio, "Ivan");
        slot.set(MemberField::Tg, "ivanov");

        assert!(!slot.validate());
        assert!(slot.is_errored(MemberField::Fio));
        assert!(!slot.is_errored(MemberField::Program));
        assert!(!slot.is_errored(MemberField::Email));
        assert!(slot.is_errored(MemberField::Tg));
    }

    #[test]
    fn empty_email_local_part_and_bare_at_pass() {
        let mut slot = filled_slot();
        slot.set(MemberField::Email, "@edu.hse.ru");
        slot.set(MemberField::Tg, "@");

        assert!(slot.validate());
    }

    #[test]
    fn focus_clears_error_mark() {
        let mut slot = MemberSlot::new();
        slot.validate();

        slot.focus(MemberField::Email);

        assert!(!slot.is_errored(MemberField::Email));
        assert!(slot.is_errored(MemberField::Fio));
    }

    #[test]
    fn validation_is_rerun_in_full() {
        let mut slot = filled_slot();
        slot.set(MemberField::Program, "!");
        assert!(!slot.validate());

        slot.set(MemberField::Program, "ПМИ");
        assert!(slot.validate());
    }

    #[test]
    fn snapshot_reports_untouched_fields_as_none() {
        let mut slot = MemberSlot::new();
        slot.set(MemberField::Fio, "Иванов Иван");

        let record = slot.snapshot();

        assert_eq!(record.fio.as_deref(), Some("Иванов Иван"));
        assert_eq!(record.program, None);
        assert_eq!(record.email, None);
        assert_eq!(record.tg, None);
    }

    #[test]
    fn reset_keeps_identifier() {
        let mut slot = filled_slot();
        let id = slot.id();
        slot.set(MemberField::Fio, "x");
        slot.validate();

        slot.reset();

        assert_eq!(slot.id(), id);
        assert_eq!(slot.snapshot(), MemberRecord::default());
        assert!(!slot.is_errored(MemberField::Fio));
    }
}
