use crate::domain::banner::form::{BannerForm, Field, FormMode, SubmitOutcome};
use crate::domain::banner::store::BannerStoreService;
use crate::shared::toast::ToastService;
use contracts::domain::banner::aggregate::Banner;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the banner details popup.
#[derive(Clone, Copy)]
pub struct BannerDetailsViewModel {
    pub form: RwSignal<BannerForm>,
    store: BannerStoreService,
    toasts: ToastService,
}

impl BannerDetailsViewModel {
    /// `banner` selects the flow: `Some` edits that record, `None` creates a
    /// new one. The caller has already resolved the id against the store.
    pub fn new(store: BannerStoreService, toasts: ToastService, banner: Option<&Banner>) -> Self {
        let form = match banner {
            Some(b) => BannerForm::for_edit(b),
            None => BannerForm::for_create(),
        };
        Self {
            form: RwSignal::new(form),
            store,
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.mode == FormMode::Edit)
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn set_text(&self, index: usize, value: String) {
        self.form.update(|f| f.set_text(index, value));
    }

    pub fn add_text(&self) {
        self.form.update(|f| f.add_text());
    }

    /// Validate and, when clean, push the draft into the store. `on_saved`
    /// runs only on success so the popup can close itself; a rejected draft
    /// keeps the popup open with the refreshed error map.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let mut accepted = false;
        self.form
            .update(|f| accepted = f.submit() == SubmitOutcome::Accepted);
        if !accepted {
            self.toasts.error("Please fix the errors before submitting.");
            return;
        }

        let form = self.form.get_untracked();
        match form.mode {
            FormMode::Edit => {
                let Some(id) = form.draft.id else {
                    log::error!("edit draft lost its banner id");
                    return;
                };
                match self.store.update(id, &form.draft) {
                    Ok(banner) => {
                        log::info!("updated banner {}", banner.id);
                        self.toasts.success("Banner updated successfully.");
                    }
                    Err(e) => {
                        log::error!("failed to update banner {}: {}", id, e);
                        self.toasts.error(&e);
                        return;
                    }
                }
            }
            FormMode::Create => {
                let banner = self.store.create(&form.draft);
                log::info!("created banner {}", banner.id);
                self.toasts.success("Banner created successfully.");
            }
        }

        (on_saved)(());
    }
}
