use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::comparison_slider::ComparisonSlider;
use crate::components::dom::{self, DocumentRoot, LockTarget, ScrollLock};
use crate::config;
use crate::content::WorkItem;
use crate::i18n::use_language;

/// Open/closed flag plus the index being shown. `len` is fixed for the
/// lifetime of the viewer and must be non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerState {
    open: bool,
    active: usize,
    len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    Open(usize),
    Next,
    Previous,
    Close,
}

impl ViewerState {
    pub fn new(len: usize) -> Self {
        Self {
            open: false,
            active: 0,
            len,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn apply(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::Open(index) => {
                self.open = true;
                self.active = index % self.len;
            }
            ViewerAction::Next if self.open => {
                self.active = (self.active + 1) % self.len;
            }
            ViewerAction::Previous if self.open => {
                self.active = (self.active + self.len - 1) % self.len;
            }
            ViewerAction::Close => self.open = false,
            ViewerAction::Next | ViewerAction::Previous => {}
        }
    }
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        log::debug!("Viewer {:?}: open={} index={}", action, next.open, next.active);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKey {
    Cancel,
    Forward,
    Backward,
}

impl ViewerKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ViewerKey::Cancel),
            "ArrowRight" => Some(ViewerKey::Forward),
            "ArrowLeft" => Some(ViewerKey::Backward),
            _ => None,
        }
    }

    pub fn action(self) -> ViewerAction {
        match self {
            ViewerKey::Cancel => ViewerAction::Close,
            ViewerKey::Forward => ViewerAction::Next,
            ViewerKey::Backward => ViewerAction::Previous,
        }
    }
}

/// Routes one key press to the viewer. Returns whether the key was handled.
pub fn handle_viewer_key(key: &str, dispatch: impl FnOnce(ViewerAction)) -> bool {
    match ViewerKey::from_key(key) {
        Some(k) => {
            dispatch(k.action());
            true
        }
        None => false,
    }
}

/// Keyboard shortcuts and the page scroll lock, held only while the viewer is
/// open. Dropping it undoes both.
pub struct OpenViewerGuard<L: LockTarget, K> {
    _keys: Option<K>,
    _scroll: Option<ScrollLock<L>>,
}

impl<L: LockTarget, K> OpenViewerGuard<L, K> {
    /// Nothing is acquired, and neither source is called, unless `open`.
    pub fn acquire(
        open: bool,
        lock_target: impl FnOnce() -> Option<L>,
        subscribe_keys: impl FnOnce() -> Option<K>,
    ) -> Option<Self> {
        if !open {
            return None;
        }
        Some(Self {
            _keys: subscribe_keys(),
            _scroll: lock_target().map(ScrollLock::acquire),
        })
    }
}

fn document_lock() -> Option<DocumentRoot> {
    DocumentRoot::get()
        .map_err(|e| log::warn!("Viewer could not lock page scroll: {}", e))
        .ok()
}

fn keydown_listener(dispatcher: UseReducerDispatcher<ViewerState>) -> Option<EventListener> {
    let window = dom::window()
        .map_err(|e| log::warn!("Viewer keyboard shortcuts unavailable: {}", e))
        .ok()?;
    Some(EventListener::new(&window, "keydown", move |e| {
        let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if handle_viewer_key(&key, |action| dispatcher.dispatch(action)) {
            e.prevent_default();
        }
    }))
}

#[hook]
pub fn use_viewer(len: usize) -> UseReducerHandle<ViewerState> {
    let viewer = use_reducer(|| ViewerState::new(len));
    {
        let dispatcher = viewer.dispatcher();
        use_effect_with_deps(
            move |open: &bool| {
                let guard =
                    OpenViewerGuard::acquire(*open, document_lock, || keydown_listener(dispatcher));
                move || drop(guard)
            },
            viewer.is_open(),
        );
    }
    viewer
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub items: &'static [WorkItem],
    pub viewer: UseReducerHandle<ViewerState>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let lang = use_language();
    let viewer = &props.viewer;
    if !viewer.is_open() {
        return html! {};
    }
    let Some(item) = props.items.get(viewer.active()) else {
        return html! {};
    };

    let send = |action: ViewerAction| {
        let viewer = viewer.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            viewer.dispatch(action);
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let title = lang.text(item.title());

    let media = match item {
        WorkItem::Single { image, .. } => html! {
            <img
                src={config::asset_url(image)}
                alt={title}
                class="w-full max-h-[80vh] object-contain bg-black/10 rounded-2xl shadow-2xl"
            />
        },
        WorkItem::Comparison { before, after, .. } => html! {
            <ComparisonSlider
                key={viewer.active()}
                before={config::asset_url(before)}
                after={config::asset_url(after)}
                label={title}
                class="w-full max-h-[80vh] rounded-2xl shadow-2xl"
            />
        },
    };

    html! {
        <div
            class="fixed inset-0 z-[100] bg-black/70 backdrop-blur-sm p-4 flex items-center justify-center"
            role="dialog"
            aria-modal="true"
            aria-label="Work preview"
            onclick={send(ViewerAction::Close)}
        >
            <div class="relative max-w-5xl w-full" onclick={stop}>
                {media}
                <div class="mt-3 bg-white/95 rounded-xl p-4 shadow flex items-start gap-3">
                    <div class="grow">
                        <div class="font-medium">{title}</div>
                        if let Some(location) = item.location() {
                            <div class="text-sm text-neutral-600">{lang.text(location)}</div>
                        }
                        if let Some(description) = item.description() {
                            <div class="text-sm text-neutral-600 mt-1">{lang.text(description)}</div>
                        }
                    </div>
                    <button
                        onclick={send(ViewerAction::Close)}
                        class="shrink-0 px-3 py-1 rounded-lg border hover:bg-neutral-50"
                        aria-label="Close"
                    >{"×"}</button>
                </div>
                <button
                    onclick={send(ViewerAction::Previous)}
                    class="absolute left-0 top-1/2 -translate-y-1/2 p-3 md:p-4 bg-white/90 rounded-full shadow hover:bg-white"
                    aria-label="Previous image"
                >{"‹"}</button>
                <button
                    onclick={send(ViewerAction::Next)}
                    class="absolute right-0 top-1/2 -translate-y-1/2 p-3 md:p-4 bg-white/90 rounded-full shadow hover:bg-white"
                    aria-label="Next image"
                >{"›"}</button>
            </div>
        </div>
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dom::tests::FakeRoot;
    use std::cell::Cell;

    /// Stands in for the window keydown listener.
    struct FakeKeys(Rc<Cell<bool>>);

    impl FakeKeys {
        fn subscribe(flag: &Rc<Cell<bool>>) -> Option<Self> {
            flag.set(true);
            Some(Self(flag.clone()))
        }
    }

    impl Drop for FakeKeys {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    type Guard = OpenViewerGuard<FakeRoot, FakeKeys>;

    /// The page side of the viewer: reducer state plus whatever the open guard
    /// currently holds. Yew tears the old guard down before building the next.
    struct Harness {
        state: Rc<ViewerState>,
        guard: Option<Guard>,
        root: FakeRoot,
        keys: Rc<Cell<bool>>,
    }

    impl Harness {
        fn new(len: usize) -> Self {
            let mut h = Self {
                state: Rc::new(ViewerState::new(len)),
                guard: None,
                root: FakeRoot::default(),
                keys: Rc::new(Cell::new(false)),
            };
            h.rerun();
            h
        }

        fn rerun(&mut self) {
            self.guard = None;
            let root = self.root.clone();
            let keys = self.keys.clone();
            self.guard = Guard::acquire(
                self.state.is_open(),
                move || Some(root),
                move || FakeKeys::subscribe(&keys),
            );
        }

        fn dispatch(&mut self, action: ViewerAction) {
            let was_open = self.state.is_open();
            self.state = self.state.clone().reduce(action);
            if self.state.is_open() != was_open {
                self.rerun();
            }
        }

        /// Keys reach the viewer only through a live subscription.
        fn press(&mut self, key: &str) -> bool {
            if !self.keys.get() {
                return false;
            }
            let mut action = None;
            let handled = handle_viewer_key(key, |a| action = Some(a));
            if let Some(a) = action {
                self.dispatch(a);
            }
            handled
        }

        fn unmount(&mut self) {
            self.guard = None;
        }
    }

    fn opened(len: usize, at: usize) -> ViewerState {
        let mut v = ViewerState::new(len);
        v.apply(ViewerAction::Open(at));
        v
    }

    #[test]
    fn starts_closed() {
        let v = ViewerState::new(4);
        assert!(!v.is_open());
    }

    #[test]
    fn n_steps_return_to_start_both_ways() {
        for len in 1..6 {
            for start in 0..len {
                let mut fwd = opened(len, start);
                let mut back = opened(len, start);
                for _ in 0..len {
                    fwd.apply(ViewerAction::Next);
                    back.apply(ViewerAction::Previous);
                }
                assert_eq!(fwd.active(), start);
                assert_eq!(back.active(), start);
            }
        }
    }

    #[test]
    fn next_and_previous_cancel_out() {
        for start in 0..4 {
            let mut v = opened(4, start);
            v.apply(ViewerAction::Next);
            v.apply(ViewerAction::Previous);
            assert_eq!(v.active(), start);
            v.apply(ViewerAction::Previous);
            v.apply(ViewerAction::Next);
            assert_eq!(v.active(), start);
        }
    }

    #[test]
    fn navigation_is_inert_while_closed() {
        let mut v = opened(4, 1);
        v.apply(ViewerAction::Close);
        v.apply(ViewerAction::Next);
        v.apply(ViewerAction::Previous);
        assert!(!v.is_open());
        assert_eq!(v.active(), 1);
    }

    #[test]
    fn keys_map_to_viewer_actions() {
        let mut seen = Vec::new();
        for key in ["Escape", "ArrowRight", "ArrowLeft", "Enter"] {
            if !handle_viewer_key(key, |a| seen.push(a)) {
                assert_eq!(key, "Enter");
            }
        }
        assert_eq!(seen, [ViewerAction::Close, ViewerAction::Next, ViewerAction::Previous]);
    }

    #[test]
    fn closed_guard_acquires_nothing() {
        let calls = Cell::new(0);
        let guard: Option<Guard> = Guard::acquire(
            false,
            || {
                calls.set(calls.get() + 1);
                None
            },
            || {
                calls.set(calls.get() + 1);
                None
            },
        );
        assert!(guard.is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn four_works_scenario() {
        let mut h = Harness::new(4);
        assert!(!h.root.locked.get());
        assert!(!h.keys.get());
        assert!(!h.press("ArrowRight"));

        h.dispatch(ViewerAction::Open(2));
        assert!(h.state.is_open());
        assert_eq!(h.state.active(), 2);
        assert!(h.root.locked.get());
        assert!(h.keys.get());

        assert!(h.press("ArrowRight"));
        assert_eq!(h.state.active(), 3);
        assert!(h.press("ArrowRight"));
        assert_eq!(h.state.active(), 0);

        assert!(h.press("Escape"));
        assert!(!h.state.is_open());
        assert!(!h.root.locked.get());
        assert!(!h.keys.get());

        assert!(!h.press("ArrowLeft"));
        assert_eq!(h.state.active(), 0);
    }

    #[test]
    fn lock_tracks_open_through_every_exit() {
        let mut h = Harness::new(3);

        // close button and backdrop
        h.dispatch(ViewerAction::Open(1));
        assert_eq!(h.root.locked.get(), h.state.is_open());
        h.dispatch(ViewerAction::Close);
        assert_eq!(h.root.locked.get(), h.state.is_open());

        // cancellation key
        h.dispatch(ViewerAction::Open(1));
        assert!(h.press("Escape"));
        assert!(!h.root.locked.get());

        // teardown while open
        h.dispatch(ViewerAction::Open(0));
        assert!(h.root.locked.get());
        h.unmount();
        assert!(!h.root.locked.get());
        assert!(!h.keys.get());
    }

    #[test]
    fn opening_twice_is_the_same_as_once() {
        let mut h = Harness::new(4);
        h.dispatch(ViewerAction::Open(1));
        let first = h.state.clone();
        h.dispatch(ViewerAction::Open(1));
        assert!(Rc::ptr_eq(&first, &h.state));
        assert!(h.root.locked.get());
        h.dispatch(ViewerAction::Close);
        assert!(!h.root.locked.get());
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let closed = Rc::new(ViewerState::new(3));
        let same = closed.clone().reduce(ViewerAction::Next);
        assert!(Rc::ptr_eq(&closed, &same));
        let open = same.reduce(ViewerAction::Open(2));
        assert_eq!(open.active(), 2);
    }
}
