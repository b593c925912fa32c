use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, WheelEvent};
use yew::prelude::*;

/// Row height of one menu option, also the wheel's scroll quantum.
pub(crate) const OPTION_ITEM_HEIGHT_PX: f64 = 60.0;
/// Options kept visible around the highlight before fading out entirely.
pub(crate) const VISIBLE_COUNT: usize = 20;
/// Accumulated wheel delta that advances the selection by one row.
const WHEEL_STEP_DELTA: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MenuItem {
    pub id: AttrValue,
    pub title: AttrValue,
}

#[derive(Properties, PartialEq)]
pub(crate) struct WheelMenuProps {
    pub items: Vec<MenuItem>,
    pub selected_id: AttrValue,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub horizontal: bool,
}

/// The menu surface: a wheel-style selectable list. Scroll settles one row
/// per accumulated notch; a direct click selects immediately. The selected
/// id may briefly point outside `items` during optimistic updates, in which
/// case the first option keeps the highlight.
#[function_component(WheelMenu)]
pub(crate) fn wheel_menu(props: &WheelMenuProps) -> Html {
    let viewport = use_node_ref();
    let accumulated = use_mut_ref(|| 0.0f64);

    {
        let viewport = viewport.clone();
        let accumulated = accumulated.clone();
        let deps = (
            props.items.clone(),
            props.selected_id.clone(),
            props.on_select.clone(),
        );
        use_effect_with(deps, move |(items, selected_id, on_select)| {
            // Fresh selection, fresh accumulator: leftover momentum from the
            // previous selection must not skip rows.
            *accumulated.borrow_mut() = 0.0;
            let listener = viewport.cast::<Element>().map(|element| {
                let items = items.clone();
                let selected = selected_index(&items, selected_id);
                let on_select = on_select.clone();
                install_wheel_listener(&element, accumulated, move |steps| {
                    let next = step_selection(items.len(), selected, steps);
                    if next != selected {
                        on_select.emit(items[next].id.to_string());
                    }
                })
            });
            move || drop(listener)
        });
    }

    if props.items.is_empty() {
        return Html::default();
    }
    let selected = selected_index(&props.items, &props.selected_id);
    let track_style = format!("transform: translateY({}px);", wheel_offset_px(selected));

    html! {
        <div class={classes!("wheel", props.horizontal.then_some("wheel--horizontal"))}>
            <div class="wheel__viewport" ref={viewport}>
                <div class="wheel__highlight" aria-hidden="true"></div>
                <div class="wheel__track" style={track_style}>
                    { for props.items.iter().enumerate().map(|(index, item)| {
                        render_item(item, index, selected, &props.on_select)
                    }) }
                </div>
            </div>
        </div>
    }
}

fn render_item(
    item: &MenuItem,
    index: usize,
    selected: usize,
    on_select: &Callback<String>,
) -> Html {
    let distance = index.abs_diff(selected);
    let onclick = {
        let on_select = on_select.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.to_string()))
    };
    html! {
        <button
            type="button"
            key={item.id.to_string()}
            class={classes!("wheel__item", (distance == 0).then_some("wheel__item--active"))}
            style={format!(
                "height: {OPTION_ITEM_HEIGHT_PX}px; opacity: {:.2};",
                item_opacity(distance)
            )}
            {onclick}
        >
            <span class="wheel__label">{ item.title.clone() }</span>
        </button>
    }
}

/// Wheel events need `preventDefault` to keep the page itself from
/// scrolling, so the listener is attached manually as non-passive.
fn install_wheel_listener(
    element: &Element,
    accumulated: Rc<RefCell<f64>>,
    on_steps: impl Fn(i32) + 'static,
) -> EventListener {
    EventListener::new_with_options(
        element,
        "wheel",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event| {
            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            event.prevent_default();
            let mut acc = accumulated.borrow_mut();
            *acc += event.delta_y();
            let steps = steps_for_delta(*acc);
            if steps != 0 {
                *acc -= f64::from(steps) * WHEEL_STEP_DELTA;
                on_steps(steps);
            }
        },
    )
}

fn selected_index(items: &[MenuItem], selected_id: &str) -> usize {
    items
        .iter()
        .position(|item| item.id.as_str() == selected_id)
        .unwrap_or(0)
}

fn wheel_offset_px(index: usize) -> f64 {
    -((index as f64 + 0.5) * OPTION_ITEM_HEIGHT_PX)
}

fn steps_for_delta(accumulated: f64) -> i32 {
    (accumulated / WHEEL_STEP_DELTA).trunc() as i32
}

fn step_selection(len: usize, current: usize, steps: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let last = (len - 1) as i64;
    (current as i64 + i64::from(steps)).clamp(0, last) as usize
}

fn item_opacity(distance: usize) -> f64 {
    if distance == 0 {
        1.0
    } else if distance > VISIBLE_COUNT / 2 {
        0.0
    } else {
        (0.6 - 0.12 * (distance - 1) as f64).max(0.12)
    }
}
