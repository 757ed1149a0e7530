use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::components::dom;

pub const DEFAULT_POSITION: f64 = 50.0;

/// Percentage of the box lying left of `pointer_x`, saturating at both edges.
pub fn slider_position(pointer_x: f64, left: f64, width: f64) -> f64 {
    if width <= 0.0 || !width.is_finite() {
        return 0.0;
    }
    let offset = (pointer_x - left).clamp(0.0, width);
    offset / width * 100.0
}

/// Pointer x together with the box geometry read at the same event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub left: f64,
    pub width: f64,
}

impl PointerSample {
    fn position(self) -> f64 {
        slider_position(self.x, self.left, self.width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragAction {
    Press(PointerSample),
    Move(PointerSample),
    Release(PointerSample),
    Touch(PointerSample),
}

/// Boundary position plus whether a mouse button drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderDrag {
    position: f64,
    dragging: bool,
}

impl SliderDrag {
    pub fn new(initial: f64) -> Self {
        Self {
            position: initial.clamp(0.0, 100.0),
            dragging: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn apply(&mut self, action: DragAction) {
        match action {
            DragAction::Press(sample) => {
                self.dragging = true;
                self.position = sample.position();
            }
            DragAction::Move(sample) if self.dragging => {
                self.position = sample.position();
            }
            DragAction::Release(sample) if self.dragging => {
                self.position = sample.position();
                self.dragging = false;
            }
            DragAction::Touch(sample) => self.position = sample.position(),
            DragAction::Move(_) | DragAction::Release(_) => {}
        }
    }
}

impl Reducible for SliderDrag {
    type Action = DragAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn sample_in(node: &NodeRef, client_x: i32) -> Option<PointerSample> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(PointerSample {
        x: client_x as f64,
        left: rect.left(),
        width: rect.width(),
    })
}

#[derive(Properties, PartialEq)]
pub struct ComparisonSliderProps {
    pub before: AttrValue,
    pub after: AttrValue,
    pub label: AttrValue,
    #[prop_or(DEFAULT_POSITION)]
    pub initial: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ComparisonSlider)]
pub fn comparison_slider(props: &ComparisonSliderProps) -> Html {
    let initial = props.initial;
    let drag = use_reducer(move || SliderDrag::new(initial));
    let container = use_node_ref();

    // While the button is held, follow the pointer anywhere on the page so
    // positions past either edge still clamp to 0 or 100.
    {
        let dispatcher = drag.dispatcher();
        let container = container.clone();
        use_effect_with_deps(
            move |dragging: &bool| {
                let listeners = if *dragging {
                    match dom::window() {
                        Ok(window) => {
                            let on_move = {
                                let dispatcher = dispatcher.clone();
                                let container = container.clone();
                                EventListener::new(&window, "mousemove", move |e| {
                                    if let Some(e) = e.dyn_ref::<MouseEvent>() {
                                        if let Some(s) = sample_in(&container, e.client_x()) {
                                            dispatcher.dispatch(DragAction::Move(s));
                                        }
                                    }
                                })
                            };
                            let on_up = EventListener::new(&window, "mouseup", move |e| {
                                if let Some(e) = e.dyn_ref::<MouseEvent>() {
                                    if let Some(s) = sample_in(&container, e.client_x()) {
                                        dispatcher.dispatch(DragAction::Release(s));
                                    }
                                }
                            });
                            Some((on_move, on_up))
                        }
                        Err(e) => {
                            log::warn!("Slider drag tracking unavailable: {}", e);
                            None
                        }
                    }
                } else {
                    None
                };
                move || drop(listeners)
            },
            drag.is_dragging(),
        );
    }

    let onmousedown = {
        let drag = drag.clone();
        let container = container.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(s) = sample_in(&container, e.client_x()) {
                drag.dispatch(DragAction::Press(s));
            }
        })
    };

    let ontouch = {
        let drag = drag.clone();
        let container = container.clone();
        Callback::from(move |e: TouchEvent| {
            let sample = e
                .touches()
                .get(0)
                .and_then(|touch| sample_in(&container, touch.client_x()));
            if let Some(s) = sample {
                drag.dispatch(DragAction::Touch(s));
            }
        })
    };

    let p = drag.position();
    let before_clip = format!("clip-path: inset(0 {}% 0 0);", 100.0 - p);
    let handle_left = format!("left: {}%;", p);

    html! {
        <div
            ref={container}
            class={classes!(
                "relative",
                "select-none",
                "overflow-hidden",
                "cursor-ew-resize",
                "touch-pan-y",
                props.class.clone()
            )}
            role="img"
            aria-label={props.label.clone()}
            {onmousedown}
            ontouchstart={ontouch.clone()}
            ontouchmove={ontouch}
        >
            <img src={props.after.clone()} alt="" class="block w-full h-full object-cover" draggable="false" />
            <img
                src={props.before.clone()}
                alt=""
                class="absolute inset-0 w-full h-full object-cover"
                style={before_clip}
                draggable="false"
            />
            <div class="absolute inset-y-0 w-0.5 bg-white shadow pointer-events-none" style={handle_left}>
                <div class="absolute top-1/2 -translate-x-1/2 -translate-y-1/2 w-8 h-8 rounded-full bg-white shadow flex items-center justify-center text-xs text-neutral-700">
                    {"⇆"}
                </div>
            </div>
            <span class="absolute top-2 left-2 text-xs px-2 py-0.5 rounded bg-black/60 text-white pointer-events-none">{"Before"}</span>
            <span class="absolute top-2 right-2 text-xs px-2 py-0.5 rounded bg-black/60 text-white pointer-events-none">{"After"}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64) -> PointerSample {
        PointerSample {
            x,
            left: 0.0,
            width: 400.0,
        }
    }

    #[test]
    fn quarter_of_a_400px_box() {
        let left = 120.0;
        assert_eq!(slider_position(left + 100.0, left, 400.0), 25.0);
    }

    #[test]
    fn left_of_the_box_clamps_to_zero() {
        let left = 120.0;
        assert_eq!(slider_position(left - 50.0, left, 400.0), 0.0);
    }

    #[test]
    fn right_of_the_box_clamps_to_hundred() {
        assert_eq!(slider_position(900.0, 0.0, 400.0), 100.0);
    }

    #[test]
    fn inside_the_box_is_linear() {
        for x in [0.0, 40.0, 200.0, 333.0, 400.0] {
            let p = slider_position(10.0 + x, 10.0, 400.0);
            assert!((p - x / 4.0).abs() < 1e-9, "x={x} p={p}");
        }
    }

    #[test]
    fn collapsed_box_never_divides_by_zero() {
        assert_eq!(slider_position(50.0, 50.0, 0.0), 0.0);
    }

    #[test]
    fn starts_at_midpoint_and_clamps_seed() {
        assert_eq!(SliderDrag::new(DEFAULT_POSITION).position(), 50.0);
        assert_eq!(SliderDrag::new(140.0).position(), 100.0);
    }

    #[test]
    fn drag_past_right_edge_saturates() {
        let mut drag = SliderDrag::new(DEFAULT_POSITION);
        drag.apply(DragAction::Press(at(200.0)));
        drag.apply(DragAction::Move(at(380.0)));
        assert_eq!(drag.position(), 95.0);
        drag.apply(DragAction::Move(at(460.0)));
        assert_eq!(drag.position(), 100.0);
    }

    #[test]
    fn release_outside_applies_its_own_coordinate() {
        let mut drag = SliderDrag::new(DEFAULT_POSITION);
        drag.apply(DragAction::Press(at(20.0)));
        drag.apply(DragAction::Move(at(8.0)));
        drag.apply(DragAction::Release(at(-50.0)));
        assert_eq!(drag.position(), 0.0);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn moves_without_a_held_button_are_ignored() {
        let mut drag = SliderDrag::new(DEFAULT_POSITION);
        drag.apply(DragAction::Move(at(300.0)));
        drag.apply(DragAction::Release(at(300.0)));
        assert_eq!(drag.position(), 50.0);
    }

    #[test]
    fn touch_moves_the_boundary_directly() {
        let mut drag = SliderDrag::new(DEFAULT_POSITION);
        drag.apply(DragAction::Touch(at(100.0)));
        assert_eq!(drag.position(), 25.0);
        assert!(!drag.is_dragging());
    }
}
