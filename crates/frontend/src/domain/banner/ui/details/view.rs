use super::view_model::BannerDetailsViewModel;
use crate::domain::banner::form::Field;
use crate::domain::banner::store::BannerStoreService;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::banner::aggregate::Banner;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;

#[component]
pub fn BannerDetails(
    banner: Option<Banner>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let store =
        use_context::<BannerStoreService>().expect("BannerStoreService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = BannerDetailsViewModel::new(store, toasts, banner.as_ref());

    // Keyed by slot index so typing in one slot does not rebuild the others.
    let text_slots = Memo::new(move |_| vm.form.with(|f| f.draft.texts.len()));
    let image = Memo::new(move |_| vm.form.with(|f| f.draft.image.clone()));

    view! {
        <div class="details-container banner-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Banner" } else { "Create Banner" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Banner Name"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.form.get().draft.name
                        on:input=move |ev| vm.set_field(Field::Name, event_target_value(&ev))
                    />
                    {move || {
                        let message = vm.form.get().errors.name;
                        (!message.is_empty()).then(|| view! { <span class="error">{message}</span> })
                    }}
                </div>

                <div class="form-group">
                    <label for="link">{"Link"}</label>
                    <input
                        type="text"
                        id="link"
                        prop:value=move || vm.form.get().draft.link
                        on:input=move |ev| vm.set_field(Field::Link, event_target_value(&ev))
                    />
                    {move || {
                        let message = vm.form.get().errors.link;
                        (!message.is_empty()).then(|| view! { <span class="error">{message}</span> })
                    }}
                </div>

                <div class="form-group">
                    <label>{"Texts"}</label>
                    <For
                        each=move || 0..text_slots.get()
                        key=|index| *index
                        children=move |index| {
                            view! {
                                <input
                                    type="text"
                                    prop:value=move || {
                                        vm.form.with(|f| f.draft.texts.get(index).cloned().unwrap_or_default())
                                    }
                                    on:input=move |ev| vm.set_text(index, event_target_value(&ev))
                                />
                            }
                        }
                    />
                    {move || {
                        let message = vm.form.get().errors.texts;
                        (!message.is_empty()).then(|| view! { <span class="error">{message}</span> })
                    }}
                    <button class="button button--secondary" on:click=move |_| vm.add_text()>
                        {icon("plus")}
                        {"Add Text"}
                    </button>
                </div>

                <div class="form-group">
                    <label for="image">{"Image"}</label>
                    <input
                        type="file"
                        id="image"
                        accept="image/*"
                        on:change=move |ev| {
                            let input = ev
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                            let Some(input) = input else { return };
                            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                                return;
                            };
                            match web_sys::Url::create_object_url_with_blob(&file) {
                                Ok(url) => vm.set_field(Field::Image, url),
                                Err(e) => log::error!("failed to create object URL: {e:?}"),
                            }
                        }
                    />
                    {move || {
                        image.get().map(|src| {
                            view! { <img class="banner-details__preview" src=src alt="banner" width="200" /> }
                        })
                    }}
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Close"}
                </button>
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                >
                    {icon("save")}
                    {"Save"}
                </button>
            </div>
        </div>
    }
}
