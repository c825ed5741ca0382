use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

#[derive(Clone)]
struct ModalEntry {
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
}

/// A handle given to the modal content so it can close itself from inside
/// its own event handlers.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    svc: ModalService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred();
    }
}

/// Single-surface modal service.
///
/// The admin screen only ever shows one popup at a time, so this holds an
/// optional entry rather than a stack. Escape closes it (handled by
/// [`ModalHost`]).
#[derive(Clone, Copy)]
pub struct ModalService {
    current: RwSignal<Option<ModalEntry>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.with(|c| c.is_some())
    }

    /// Show a modal. `builder` receives a [`ModalHandle`] so the content can
    /// close itself. An already-open modal is replaced.
    pub fn open<F>(&self, builder: F)
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.current.set(Some(ModalEntry {
            builder: Arc::new(builder),
        }));
    }

    pub fn close(&self) {
        self.current.set(None);
    }

    /// Close on the next tick. Removing the modal synchronously from inside
    /// the originating DOM event dispatch drops a closure that is still
    /// running.
    pub fn close_deferred(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close();
        });
    }
}

/// Renders the active modal at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalService>()
        .expect("ModalService not provided in context (provide it in app root)");

    // Global Escape handler.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.close_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost is mounted once for the whole app lifetime; keep closure alive.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            {move || {
                svc.current.get().map(|entry| {
                    let handle = ModalHandle { svc };
                    let content = (entry.builder)(handle);
                    view! {
                        <div class="popup" on:click=move |_| svc.close_deferred()>
                            <div
                                class="popup-content"
                                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                            >
                                {content}
                            </div>
                        </div>
                    }
                })
            }}
        </Show>
    }
}
