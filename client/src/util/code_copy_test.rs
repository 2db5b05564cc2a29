use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

struct FakeClipboard {
    fail: bool,
    written: RefCell<Vec<String>>,
}

impl FakeClipboard {
    fn working() -> Self {
        Self { fail: false, written: RefCell::new(Vec::new()) }
    }

    fn broken() -> Self {
        Self { fail: true, written: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        if self.fail {
            return Err("permission denied".to_owned());
        }
        self.written.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

/// Records every label change plus the label visible while sleeping.
#[derive(Clone, Default)]
struct LabelLog {
    labels: Rc<RefCell<Vec<&'static str>>>,
    during_sleep: Rc<RefCell<Vec<(&'static str, Duration)>>>,
}

impl LabelLog {
    fn current(&self) -> &'static str {
        self.labels.borrow().last().copied().unwrap_or(COPY_LABEL)
    }

    fn run(&self, clipboard: &FakeClipboard, text: &str) -> bool {
        let setter = self.clone();
        let sleeper = self.clone();
        block_on(copy_with_feedback(
            clipboard,
            text,
            move |state| setter.labels.borrow_mut().push(state.label()),
            move |d| {
                let seen = sleeper.current();
                sleeper.during_sleep.borrow_mut().push((seen, d));
                std::future::ready(())
            },
        ))
    }
}

// =============================================================
// CopyState
// =============================================================

#[test]
fn copy_state_defaults_to_idle_label() {
    assert_eq!(CopyState::default(), CopyState::Idle);
    assert_eq!(CopyState::Idle.label(), "Copy");
    assert_eq!(CopyState::Copied.label(), "Copied!");
}

// =============================================================
// copy_with_feedback
// =============================================================

#[test]
fn successful_copy_shows_copied_then_reverts_after_timeout() {
    let clipboard = FakeClipboard::working();
    let log = LabelLog::default();

    assert!(log.run(&clipboard, "cargo build"));

    assert_eq!(*clipboard.written.borrow(), vec!["cargo build".to_owned()]);
    assert_eq!(*log.labels.borrow(), vec![COPIED_LABEL, COPY_LABEL]);
    assert_eq!(
        *log.during_sleep.borrow(),
        vec![(COPIED_LABEL, Duration::from_millis(COPIED_RESET_MS))]
    );
}

#[test]
fn failed_copy_leaves_label_untouched() {
    let clipboard = FakeClipboard::broken();
    let log = LabelLog::default();

    assert!(!log.run(&clipboard, "text"));
    assert!(log.labels.borrow().is_empty());
    assert!(log.during_sleep.borrow().is_empty());
}

#[test]
fn each_block_cycles_independently() {
    let clipboard = FakeClipboard::working();
    let first = LabelLog::default();
    let second = LabelLog::default();

    assert!(first.run(&clipboard, "block one"));
    assert_eq!(second.current(), COPY_LABEL);
    assert!(second.run(&clipboard, "block two"));

    assert_eq!(*first.labels.borrow(), vec![COPIED_LABEL, COPY_LABEL]);
    assert_eq!(*second.labels.borrow(), vec![COPIED_LABEL, COPY_LABEL]);
    assert_eq!(
        *clipboard.written.borrow(),
        vec!["block one".to_owned(), "block two".to_owned()]
    );
}

#[test]
fn repeated_clicks_on_one_block_repeat_the_cycle() {
    let clipboard = FakeClipboard::working();
    let log = LabelLog::default();

    assert!(log.run(&clipboard, "x"));
    assert!(log.run(&clipboard, "x"));
    assert_eq!(*log.labels.borrow(), vec![COPIED_LABEL, COPY_LABEL, COPIED_LABEL, COPY_LABEL]);
}
