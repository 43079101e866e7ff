//! 通知（Toast）服务
//!
//! 单条通知信号 + 3 秒自动消失，由 [`ToastHost`] 统一渲染。

use leptos::prelude::*;

/// 自动消失延迟
const DISMISS_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

/// 通知服务
///
/// `RwSignal` 实现 `Copy`，可以直接捕获进事件闭包。
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    fn push(&self, kind: ToastKind, text: impl Into<String>) {
        self.current.set(Some(Toast {
            kind,
            text: text.into(),
        }));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> ReadSignal<Option<Toast>> {
        self.current.read_only()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取通知服务
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

/// 通知渲染组件，挂在应用根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let current = toaster.current();

    // 出现新通知后定时清除
    Effect::new(move |_| {
        if current.get().is_some() {
            set_timeout(
                move || toaster.dismiss(),
                std::time::Duration::from_secs(DISMISS_SECS),
            );
        }
    });

    view! {
        <Show when=move || current.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    match current.get().map(|t| t.kind) {
                        Some(ToastKind::Error) => "alert alert-error shadow-lg",
                        _ => "alert alert-success shadow-lg",
                    }
                }>
                    <span>{move || current.get().map(|t| t.text).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let toaster = Toaster::new();
        assert!(toaster.current().get_untracked().is_none());

        toaster.error("boom");
        let toast = toaster.current().get_untracked().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, "boom");

        // 新通知覆盖旧通知
        toaster.success("ok");
        assert_eq!(
            toaster.current().get_untracked().unwrap().kind,
            ToastKind::Success
        );

        toaster.dismiss();
        assert!(toaster.current().get_untracked().is_none());
    }
}
