use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use kurukuru_core::magnetic::{
    displacement, MagneticParams, Spring, DEFAULT_RADIUS_PX, DEFAULT_STRENGTH,
};

const FALLBACK_FRAME_DT_S: f32 = 1.0 / 60.0;

type MotionRef = Rc<RefCell<Motion>>;

struct Motion {
    spring_x: Spring,
    spring_y: Spring,
    pointer: Option<(f32, f32)>,
    frame: Option<AnimationFrame>,
    last_timestamp_ms: Option<f64>,
}

impl Motion {
    fn new() -> Self {
        Self {
            spring_x: Spring::default(),
            spring_y: Spring::default(),
            pointer: None,
            frame: None,
            last_timestamp_ms: None,
        }
    }

    fn dt_since(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_timestamp_ms {
            Some(last) if timestamp_ms > last => ((timestamp_ms - last) / 1000.0) as f32,
            _ => FALLBACK_FRAME_DT_S,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        dt
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MagneticProps {
    pub children: Html,
    #[prop_or(DEFAULT_STRENGTH)]
    pub strength: f32,
    #[prop_or(DEFAULT_RADIUS_PX)]
    pub radius: f32,
    #[prop_or_default]
    pub class: Classes,
}

/// Pulls its children toward a nearby cursor. The offset lives in component
/// state and is painted as a `translate3d`, so the pull never touches
/// layout. Measurement and spring stepping run inside a coalesced animation
/// frame: one pending frame at a time, dropped (and thereby cancelled) on
/// unmount, and frames stop rescheduling once the spring is at rest.
#[function_component(Magnetic)]
pub(crate) fn magnetic(props: &MagneticProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| (0.0f32, 0.0f32));
    let motion = use_mut_ref(Motion::new);

    {
        let node = node.clone();
        let offset = offset.clone();
        let motion = motion.clone();
        use_effect_with((props.strength, props.radius), move |&(strength, radius)| {
            let params = MagneticParams { radius, strength };
            let window = web_sys::window();
            let move_listener = window.as_ref().map(|window| {
                let motion = motion.clone();
                let node = node.clone();
                let offset = offset.clone();
                EventListener::new(window, "pointermove", move |event| {
                    let Some(event) = event.dyn_ref::<PointerEvent>() else {
                        return;
                    };
                    motion.borrow_mut().pointer =
                        Some((event.client_x() as f32, event.client_y() as f32));
                    schedule_frame(&motion, &node, &offset, params);
                })
            });
            // pointerleave does not bubble, so catch it in the capture phase
            // on the document when the cursor exits the page entirely.
            let leave_listener = window
                .as_ref()
                .and_then(|window| window.document())
                .map(|document| {
                    let motion = motion.clone();
                    let node = node.clone();
                    let offset = offset.clone();
                    EventListener::new_with_options(
                        &document,
                        "pointerleave",
                        EventListenerOptions {
                            phase: EventListenerPhase::Capture,
                            passive: true,
                        },
                        move |_| {
                            motion.borrow_mut().pointer = None;
                            schedule_frame(&motion, &node, &offset, params);
                        },
                    )
                });
            let motion = motion.clone();
            move || {
                drop(move_listener);
                drop(leave_listener);
                motion.borrow_mut().frame.take();
            }
        });
    }

    let (x, y) = *offset;
    html! {
        <div
            ref={node}
            class={classes!("magnetic", props.class.clone())}
            style={format!("transform: translate3d({x:.2}px, {y:.2}px, 0);")}
        >
            { props.children.clone() }
        </div>
    }
}

fn schedule_frame(
    motion: &MotionRef,
    node: &NodeRef,
    offset: &UseStateHandle<(f32, f32)>,
    params: MagneticParams,
) {
    if motion.borrow().frame.is_some() {
        return;
    }
    let motion_rc = motion.clone();
    let node = node.clone();
    let offset = offset.clone();
    let handle = request_animation_frame(move |timestamp_ms| {
        motion_rc.borrow_mut().frame.take();
        let (next, settled) = {
            let mut state = motion_rc.borrow_mut();
            let target = pull_target(&state, &node, params);
            let dt = state.dt_since(timestamp_ms);
            let x = state.spring_x.step(target.0, dt);
            let y = state.spring_y.step(target.1, dt);
            let settled = state.spring_x.settled(target.0) && state.spring_y.settled(target.1);
            if settled {
                state.spring_x.snap(target.0);
                state.spring_y.snap(target.1);
                state.last_timestamp_ms = None;
            }
            ((x, y), settled)
        };
        offset.set(next);
        if !settled {
            schedule_frame(&motion_rc, &node, &offset, params);
        }
    });
    motion.borrow_mut().frame = Some(handle);
}

fn pull_target(state: &Motion, node: &NodeRef, params: MagneticParams) -> (f32, f32) {
    let Some(pointer) = state.pointer else {
        return (0.0, 0.0);
    };
    let Some(element) = node.cast::<Element>() else {
        return (0.0, 0.0);
    };
    let rect = element.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        // Not rendered (or collapsed): nothing to pull.
        return (0.0, 0.0);
    }
    // The rect already carries the current translate; subtract it so the
    // pull is computed against the element's resting center.
    let center = (
        (rect.left() + rect.width() / 2.0) as f32 - state.spring_x.position(),
        (rect.top() + rect.height() / 2.0) as f32 - state.spring_y.position(),
    );
    displacement(pointer, center, &params)
}
