use contracts::domain::banner::aggregate::{
    validate_link, validate_name, validate_texts, Banner, BannerDraft, FieldErrors,
};

/// Which popup flow the draft belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Scalar fields the popup edits directly. Text slots go through
/// [`BannerForm::set_text`] and [`BannerForm::add_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Link,
    Image,
}

/// Outcome of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

/// Draft and error state behind the create/edit popup.
///
/// Deliberately plain: the view model wraps it in a signal and the components
/// only ever go through these methods, so the whole popup lifecycle is
/// testable off the DOM.
#[derive(Debug, Clone)]
pub struct BannerForm {
    pub draft: BannerDraft,
    pub errors: FieldErrors,
    pub mode: FormMode,
}

impl BannerForm {
    /// Fresh draft with one blank text slot, ready for the create flow.
    pub fn for_create() -> Self {
        Self {
            draft: BannerDraft::empty(),
            errors: FieldErrors::default(),
            mode: FormMode::Create,
        }
    }

    /// Draft populated from an existing banner, ready for the edit flow.
    /// Looking the banner up is the caller's job; a missing id must keep the
    /// popup closed.
    pub fn for_edit(banner: &Banner) -> Self {
        Self {
            draft: BannerDraft::from_banner(banner),
            errors: FieldErrors::default(),
            mode: FormMode::Edit,
        }
    }

    /// Merge one scalar field into the draft and re-validate that field only.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => {
                self.draft.name = value;
                self.errors.name = validate_name(&self.draft.name);
            }
            Field::Link => {
                self.draft.link = value;
                self.errors.link = validate_link(&self.draft.link);
            }
            Field::Image => {
                // Never validated; the picker hands us an opaque URL.
                self.draft.image = Some(value);
            }
        }
    }

    /// Replace the text at `index` and re-validate the text lines.
    /// Out-of-range indices are ignored; slots only grow through
    /// [`BannerForm::add_text`].
    pub fn set_text(&mut self, index: usize, value: String) {
        if let Some(slot) = self.draft.texts.get_mut(index) {
            *slot = value;
            self.errors.texts = validate_texts(&self.draft.texts);
        }
    }

    /// Append one blank text slot. Blank slots are expected mid-edit, so no
    /// validation runs here.
    pub fn add_text(&mut self) {
        self.draft.texts.push(String::new());
    }

    /// Validate the whole draft. On `Rejected` the error map is refreshed and
    /// the popup stays open; on `Accepted` the draft is ready for the store.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = self.draft.validate();
        if self.errors.is_clean() {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::banner::aggregate::BannerId;

    fn valid_form() -> BannerForm {
        let mut form = BannerForm::for_create();
        form.set_field(Field::Name, "Banner".to_string());
        form.set_field(Field::Link, "http://example.com".to_string());
        form.set_text(0, "first line".to_string());
        form
    }

    #[test]
    fn create_flow_starts_with_one_blank_text_slot() {
        let form = BannerForm::for_create();
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.draft.texts, vec![String::new()]);
        assert!(form.errors.is_clean());
    }

    #[test]
    fn edit_flow_copies_the_banner_into_the_draft() {
        let banner = Banner::from_draft(
            BannerId::new(4),
            "2024-10-17".to_string(),
            &valid_form().draft,
        );
        let form = BannerForm::for_edit(&banner);

        assert_eq!(form.mode, FormMode::Edit);
        assert_eq!(form.draft.id, Some(BannerId::new(4)));
        assert_eq!(form.draft.name, banner.name);
        assert_eq!(form.draft.image.as_deref(), Some(banner.image.as_str()));
    }

    #[test]
    fn set_field_revalidates_only_that_field() {
        let mut form = BannerForm::for_create();
        form.set_field(Field::Name, "  ".to_string());

        assert!(!form.errors.name.is_empty());
        // link is just as blank, but untouched fields stay unreported
        assert!(form.errors.link.is_empty());

        form.set_field(Field::Name, "Banner".to_string());
        assert!(form.errors.name.is_empty());
    }

    #[test]
    fn set_text_ignores_out_of_range_indices() {
        let mut form = BannerForm::for_create();
        form.set_text(5, "lost".to_string());
        assert_eq!(form.draft.texts, vec![String::new()]);
    }

    #[test]
    fn add_text_then_set_last_keeps_the_length() {
        let mut form = valid_form();
        form.add_text();
        let len = form.draft.texts.len();

        form.set_text(len - 1, "x".to_string());
        assert_eq!(form.draft.texts.len(), len);
        assert_eq!(form.draft.texts.last().map(String::as_str), Some("x"));
    }

    #[test]
    fn submit_rejects_a_blank_name() {
        let mut form = valid_form();
        form.set_field(Field::Name, String::new());

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.errors.name, "Banner Name is required.");
        assert_eq!(form.errors.link, "");
        assert_eq!(form.errors.texts, "");
    }

    #[test]
    fn submit_rejects_all_blank_texts() {
        let mut form = valid_form();
        form.set_text(0, "   ".to_string());

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert!(!form.errors.texts.is_empty());
    }

    #[test]
    fn submit_accepts_a_valid_draft() {
        let mut form = valid_form();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.errors.is_clean());
    }
}
