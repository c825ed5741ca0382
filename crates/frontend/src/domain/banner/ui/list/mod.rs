use crate::domain::banner::store::BannerStoreService;
use crate::domain::banner::ui::details::BannerDetails;
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;
use contracts::domain::banner::aggregate::{Banner, BannerId};
use leptos::prelude::*;
use std::rc::Rc;

/// Flattened row for the table. Keeps join/format logic out of the view.
#[derive(Clone, Debug)]
pub struct BannerListRow {
    pub id: BannerId,
    pub order: String,
    pub name: String,
    pub link: String,
    pub texts: String,
    pub date: String,
    pub image: String,
}

impl From<Banner> for BannerListRow {
    fn from(b: Banner) -> Self {
        Self {
            id: b.id,
            order: b.order,
            name: b.name,
            link: b.link,
            texts: b.texts.join(", "),
            date: b.date,
            image: b.image,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BannerList() -> impl IntoView {
    let store =
        use_context::<BannerStoreService>().expect("BannerStoreService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let modal = use_context::<ModalService>().expect("ModalService not found in context");

    let rows = move || {
        store
            .banners()
            .into_iter()
            .map(BannerListRow::from)
            .collect::<Vec<_>>()
    };

    // The popup owns the draft; the list only decides which flow to open.
    let open_details = move |banner: Option<Banner>| {
        modal.open(move |handle| {
            let banner = banner.clone();
            let on_saved = Rc::new(move |_| handle.close()) as Rc<dyn Fn(())>;
            let on_cancel = Rc::new(move |_| handle.close()) as Rc<dyn Fn(())>;

            view! { <BannerDetails banner=banner on_saved=on_saved on_cancel=on_cancel /> }
                .into_any()
        });
    };

    let handle_create = move || open_details(None);

    let handle_edit = move |id: BannerId| match store.get(id) {
        Some(banner) => open_details(Some(banner)),
        None => {
            log::error!("edit requested for missing banner {}", id);
            toasts.error("Banner not found.");
        }
    };

    let handle_delete = move |id: BannerId| {
        if !confirm("Are you sure you want to delete this banner?") {
            return;
        }
        if store.delete(id) {
            log::info!("deleted banner {}", id);
            toasts.success("Banner deleted successfully.");
        } else {
            toasts.error("Banner not found.");
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Banner Management"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create()>
                        {icon("plus")}
                        {"Add"}
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Banner ID"}</th>
                            <th class="table__header-cell">{"Order"}</th>
                            <th class="table__header-cell">{"Banner Name"}</th>
                            <th class="table__header-cell">{"Link"}</th>
                            <th class="table__header-cell">{"Texts"}</th>
                            <th class="table__header-cell">{"Registration Date"}</th>
                            <th class="table__header-cell">{"Image"}</th>
                            <th class="table__header-cell">{"Edit"}</th>
                            <th class="table__header-cell">{"Delete"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id = row.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{id.value()}</td>
                                    <td class="table__cell">{row.order}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.link}</td>
                                    <td class="table__cell">{row.texts}</td>
                                    <td class="table__cell">{row.date}</td>
                                    <td class="table__cell">
                                        <img src=row.image alt="banner" width="200" />
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--secondary"
                                            on:click=move |_| handle_edit(id)
                                        >
                                            {icon("edit")}
                                            {"Edit"}
                                        </button>
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--secondary button--danger"
                                            on:click=move |_| handle_delete(id)
                                        >
                                            {icon("delete")}
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
