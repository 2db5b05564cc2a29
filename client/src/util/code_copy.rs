//! Copy-to-clipboard buttons for code blocks in rendered articles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Blog bodies are injected as raw HTML, so the buttons are attached with
//! direct DOM calls after injection rather than through the Leptos view tree.
//! The click cycle itself ([`copy_with_feedback`]) is environment-agnostic so
//! it can be driven by tests with a fake clipboard and an instant sleep.

#[cfg(test)]
#[path = "code_copy_test.rs"]
mod code_copy_test;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// How long the "copied" acknowledgment stays visible.
pub const COPIED_RESET_MS: u64 = 2000;

/// CSS class of the injected button; also marks already-enhanced blocks.
pub const COPY_BUTTON_CLASS: &str = "code-copy-button";

/// CSS class of the wrapper placed around each enhanced `<pre>`.
pub const CODE_BLOCK_CLASS: &str = "code-block";

/// Label state of one copy button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

impl CopyState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => COPY_LABEL,
            Self::Copied => COPIED_LABEL,
        }
    }
}

/// Text sink for copy buttons.
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Run one click: write `text`, show [`CopyState::Copied`], wait, revert.
///
/// Returns whether the clipboard write succeeded. On failure the label is
/// left untouched.
pub async fn copy_with_feedback<C, L, S, F>(clipboard: &C, text: &str, set_state: L, sleep: S) -> bool
where
    C: Clipboard + ?Sized,
    L: Fn(CopyState),
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    if let Err(e) = clipboard.write_text(text).await {
        log::warn!("clipboard write failed: {e}");
        return false;
    }
    set_state(CopyState::Copied);
    sleep(Duration::from_millis(COPIED_RESET_MS)).await;
    set_state(CopyState::Idle);
    true
}

/// [`Clipboard`] backed by `navigator.clipboard`.
#[cfg(feature = "hydrate")]
pub struct BrowserClipboard;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        let clipboard = web_sys::window()
            .and_then(|w| w.navigator().clipboard())
            .ok_or_else(|| "clipboard unavailable".to_owned())?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
}

/// Wrap every `<pre>` under `container` and attach a copy button to it.
///
/// Blocks that already sit in a [`CODE_BLOCK_CLASS`] wrapper are skipped, so
/// calling this again after a re-render is harmless.
#[cfg(feature = "hydrate")]
pub fn enhance_code_blocks(container: &web_sys::Element) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(blocks) = container.query_selector_all("pre") else {
        return;
    };

    for i in 0..blocks.length() {
        let Some(pre) = blocks.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let already_wrapped = pre
            .parent_element()
            .is_some_and(|p| p.class_list().contains(CODE_BLOCK_CLASS));
        if already_wrapped {
            continue;
        }
        let Some(parent) = pre.parent_node() else {
            continue;
        };
        let (Ok(wrapper), Ok(button)) = (document.create_element("div"), document.create_element("button")) else {
            continue;
        };
        wrapper.set_class_name(CODE_BLOCK_CLASS);
        button.set_class_name(COPY_BUTTON_CLASS);
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("aria-label", "Copy code to clipboard");
        button.set_text_content(Some(CopyState::Idle.label()));

        if parent.insert_before(&wrapper, Some(&pre)).is_err() {
            continue;
        }
        let _ = wrapper.append_child(&pre);
        let _ = wrapper.append_child(&button);

        let target = button.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let text = pre.text_content().unwrap_or_default();
            let label = target.clone();
            leptos::task::spawn_local(async move {
                copy_with_feedback(
                    &BrowserClipboard,
                    &text,
                    |state| label.set_text_content(Some(state.label())),
                    gloo_timers::future::sleep,
                )
                .await;
            });
        });
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}
