use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 3000;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
struct ToastEntry {
    id: u64,
    level: ToastLevel,
    message: String,
}

/// Timed, non-blocking outcome notifications.
///
/// Replaces blocking alerts: operations report "created"/"updated"/"deleted"
/// (or an error) here and never wait on the user. Losing a toast has no
/// effect on the records themselves.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.push(ToastLevel::Error, message);
    }

    fn push(&self, level: ToastLevel, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|t| {
            t.push(ToastEntry {
                id,
                level,
                message: message.to_string(),
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            svc.dismiss(id);
        });
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|e| e.id != id));
    }
}

/// Renders the toast region at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-region">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let class = match entry.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    view! { <div class=class>{entry.message.clone()}</div> }
                }
            />
        </div>
    }
}
