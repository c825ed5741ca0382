use crate::domain::banner::store::BannerStoreService;
use crate::domain::banner::ui::list::BannerList;
use crate::shared::modal::{ModalHost, ModalService};
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the banner store and UI services to the whole app via context.
    provide_context(BannerStoreService::with_mock_data());
    provide_context(ModalService::new());
    provide_context(ToastService::new());

    view! {
        <BannerList />
        <ModalHost />
        <ToastHost />
    }
}
