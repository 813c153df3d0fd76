use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// How long a toast stays up before dismissing itself.
const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "alert",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Transient notifications. At most one toast is visible; a new one replaces
/// the current one and restarts the clock. The id keeps an earlier dismiss
/// timer from firing on its successor.
#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: RwSignal::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.current.set(Some(Toast {
            id,
            message: message.into(),
            kind,
        }));

        let service = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            service.dismiss_if(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    fn dismiss_if(&self, id: u64) {
        let is_current = self
            .current
            .with_untracked(|current| current.as_ref().map(|toast| toast.id) == Some(id));
        if is_current {
            self.current.set(None);
        }
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the currently visible toast, if any. Mounted once at the shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        {move || {
            toasts.current.get().map(|toast| {
                view! {
                    <div class=format!("toast {}", toast.kind.css_class()) role="status">
                        {icon(toast.kind.icon_name())}
                        <span class="toast-message">{toast.message.clone()}</span>
                        <button class="toast-close" on:click=move |_| toasts.dismiss()>
                            {icon("close")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
