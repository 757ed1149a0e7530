use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::components::dom::DomError;

pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One-way visibility flag. Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

pub enum RevealAction {
    Intersecting(bool),
    Force,
}

impl RevealState {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only for the observation that flips the flag.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            RevealAction::Intersecting(hit) => next.observe(hit),
            RevealAction::Force => next.observe(true),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Handles one batch of observer entries. The first intersecting entry
/// disconnects the observer, then fires the reveal.
fn on_entries(
    hits: impl IntoIterator<Item = bool>,
    disconnect: impl FnOnce(),
    enter: impl FnOnce(),
) -> bool {
    if !hits.into_iter().any(|hit| hit) {
        return false;
    }
    disconnect();
    enter();
    true
}

/// Watches one element and disconnects when dropped.
struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportWatch {
    fn start(target: &Element, on_enter: Callback<()>) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let hits = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| entry.is_intersecting());
                on_entries(hits, || observer.disconnect(), || on_enter.emit(()));
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Milliseconds to wait before the transition starts.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let state = use_reducer(RevealState::default);
    let node = use_node_ref();

    {
        let dispatcher = state.dispatcher();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let on_enter = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |_: ()| {
                        dispatcher.dispatch(RevealAction::Intersecting(true))
                    })
                };
                let watch = match node.cast::<Element>() {
                    Some(el) => match ViewportWatch::start(&el, on_enter) {
                        Ok(watch) => Some(watch),
                        Err(e) => {
                            log::warn!("Reveal observer unavailable, showing content: {}", e);
                            dispatcher.dispatch(RevealAction::Force);
                            None
                        }
                    },
                    None => {
                        dispatcher.dispatch(RevealAction::Force);
                        None
                    }
                };
                move || drop(watch)
            },
            (),
        );
    }

    let visibility = if state.revealed() {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-6"
    };
    let style = format!("transition-delay: {}ms;", props.delay);

    html! {
        <div
            ref={node}
            class={classes!(
                "transition-all",
                "duration-700",
                "ease-out",
                "transform",
                visibility,
                props.class.clone()
            )}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().revealed());
    }

    #[test]
    fn non_intersecting_entries_do_nothing() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.revealed());
    }

    #[test]
    fn flips_exactly_once_across_reentries() {
        let mut state = RevealState::default();
        let transitions = [true, false, true, false, true]
            .into_iter()
            .filter(|hit| state.observe(*hit))
            .count();
        assert_eq!(transitions, 1);
        assert!(state.revealed());
    }

    #[test]
    fn observer_disconnects_on_first_hit() {
        let connected = Cell::new(true);
        let mut state = RevealState::default();
        let mut enters = 0;
        let batches: [&[bool]; 4] = [&[false], &[false, true], &[true], &[true, true]];
        for batch in batches {
            // A disconnected observer delivers nothing further.
            if !connected.get() {
                continue;
            }
            on_entries(
                batch.iter().copied(),
                || connected.set(false),
                || {
                    enters += 1;
                    state.observe(true);
                },
            );
        }
        assert!(!connected.get());
        assert_eq!(enters, 1);
        assert!(state.revealed());
    }

    #[test]
    fn empty_batch_keeps_watching() {
        let connected = Cell::new(true);
        assert!(!on_entries(std::iter::empty(), || connected.set(false), || {}));
        assert!(connected.get());
    }

    #[test]
    fn reducer_keeps_same_state_after_reveal() {
        let first = Rc::new(RevealState::default()).reduce(RevealAction::Intersecting(true));
        assert!(first.revealed());
        let again = first.clone().reduce(RevealAction::Intersecting(false));
        assert!(Rc::ptr_eq(&first, &again));
        let forced = again.clone().reduce(RevealAction::Force);
        assert!(Rc::ptr_eq(&again, &forced));
    }
}
