use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use kurukuru_core::catalog;
use kurukuru_core::{
    motion_for, Direction, MotionPhase, NavController, NavOutcome, Section, SectionList,
    SiteConfig,
};

use crate::config;
use crate::magnetic::Magnetic;
use crate::router::{self, BrowserLocation};
use crate::viewer::{NextSection, SectionViewer};
use crate::wheel::{MenuItem, WheelMenu};

/// How long the exit pane stays mounted. The exit motion itself is
/// near-instant; this only has to outlive it.
const EXIT_PANE_TEARDOWN_MS: u32 = 80;

type SharedNav = Rc<RefCell<NavController<BrowserLocation>>>;

#[derive(Clone, PartialEq)]
struct NavView {
    active: Option<Section>,
    next: Option<NextSection>,
    direction: Direction,
    menu_open: bool,
}

fn snapshot(nav: &NavController<BrowserLocation>) -> NavView {
    NavView {
        active: nav.active_section().cloned(),
        next: nav.next_section().map(|section| NextSection {
            id: AttrValue::from(section.id.clone()),
            title: AttrValue::from(section.title.clone()),
        }),
        direction: nav.direction(),
        menu_open: nav.menu_open(),
    }
}

#[derive(Clone, PartialEq)]
struct LeavingPane {
    section: Section,
    direction: Direction,
}

/// Everything a navigation event has to touch: the controller, the rendered
/// snapshot (plus a live mirror that listeners installed once can read
/// without going stale), the exit pane, and the enter-pose flip.
#[derive(Clone)]
struct NavCtx {
    nav: SharedNav,
    view: UseStateHandle<NavView>,
    view_live: Rc<RefCell<NavView>>,
    leaving: UseStateHandle<Option<LeavingPane>>,
    entered: UseStateHandle<bool>,
    exit_timer: Rc<RefCell<Option<Timeout>>>,
    enter_frame: Rc<RefCell<Option<AnimationFrame>>>,
    content_ref: NodeRef,
}

impl NavCtx {
    fn publish(&self) {
        let fresh = snapshot(&self.nav.borrow());
        *self.view_live.borrow_mut() = fresh.clone();
        self.view.set(fresh);
    }

    fn apply(&self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Moved(direction) => {
                let previous = self.view_live.borrow().active.clone();
                if let Some(section) = previous {
                    self.leaving.set(Some(LeavingPane { section, direction }));
                    let leaving = self.leaving.clone();
                    let timer = Timeout::new(EXIT_PANE_TEARDOWN_MS, move || leaving.set(None));
                    // Replacing the slot cancels the timer of any navigation
                    // this one outran.
                    *self.exit_timer.borrow_mut() = Some(timer);
                }
                self.entered.set(false);
                flip_to_center(self.entered.clone(), self.enter_frame.clone());
                if let Some(element) = self.content_ref.cast::<Element>() {
                    element.set_scroll_top(0);
                }
                self.publish();
            }
            NavOutcome::SameSection => self.publish(),
            NavOutcome::UnknownId => {
                console::warn!("ignoring navigation to unknown section");
            }
        }
    }
}

/// Two frames, not one: the first guarantees the fresh pane was laid out in
/// its enter pose, the second flips it to center so the transition fires.
fn flip_to_center(entered: UseStateHandle<bool>, slot: Rc<RefCell<Option<AnimationFrame>>>) {
    let slot_outer = slot.clone();
    let handle = request_animation_frame(move |_| {
        let slot_inner = slot.clone();
        let handle = request_animation_frame(move |_| {
            slot_inner.borrow_mut().take();
            entered.set(true);
        });
        *slot.borrow_mut() = Some(handle);
    });
    *slot_outer.borrow_mut() = Some(handle);
}

fn pane_style(phase: &MotionPhase, animate: bool) -> String {
    let transition = if animate {
        format!(
            "transition: transform {dur}s {ease}, opacity {dur}s {ease};",
            dur = phase.duration_s,
            ease = phase.ease
        )
    } else {
        "transition: none;".to_string()
    };
    format!(
        "transform: translate3d(0, {y}px, 0); opacity: {op}; {transition}",
        y = phase.y,
        op = phase.opacity
    )
}

#[derive(Properties, PartialEq)]
pub(crate) struct PortfolioAppProps {
    pub sections: Vec<Section>,
    pub site: SiteConfig,
    #[prop_or_default]
    pub initial_section_id: Option<AttrValue>,
}

#[function_component(PortfolioApp)]
pub(crate) fn portfolio_app(props: &PortfolioAppProps) -> Html {
    let nav: SharedNav = {
        let sections = props.sections.clone();
        use_mut_ref(move || {
            let sections = SectionList::new(sections).unwrap_or_else(|err| {
                console::warn!("invalid section set:", err.to_string());
                SectionList::empty()
            });
            NavController::new(sections, BrowserLocation)
        })
    };
    let view = use_state(|| snapshot(&nav.borrow()));
    let view_live = use_mut_ref(|| (*view).clone());
    let leaving = use_state(|| None::<LeavingPane>);
    let entered = use_state(|| true);
    let exit_timer = use_mut_ref(|| None::<Timeout>);
    let enter_frame = use_mut_ref(|| None::<AnimationFrame>);
    let content_ref = use_node_ref();

    let ctx = NavCtx {
        nav,
        view: view.clone(),
        view_live,
        leaving: leaving.clone(),
        entered: entered.clone(),
        exit_timer,
        enter_frame,
        content_ref: content_ref.clone(),
    };

    {
        let ctx = ctx.clone();
        let initial = props.initial_section_id.clone();
        use_effect_with((), move |_| {
            {
                let mut controller = ctx.nav.borrow_mut();
                controller.initialize(initial.as_deref());
            }
            // First section shows without animation: there is nothing to
            // diff against yet.
            ctx.publish();
            let listener = router::on_popstate({
                let ctx = ctx.clone();
                move || {
                    let outcome = ctx.nav.borrow_mut().handle_external();
                    ctx.apply(outcome);
                }
            });
            let exit_timer = ctx.exit_timer.clone();
            let enter_frame = ctx.enter_frame.clone();
            move || {
                drop(listener);
                exit_timer.borrow_mut().take();
                enter_frame.borrow_mut().take();
            }
        });
    }

    let on_select = {
        let ctx = ctx.clone();
        Callback::from(move |id: String| {
            let outcome = ctx.nav.borrow_mut().navigate_to(&id);
            ctx.apply(outcome);
        })
    };
    let on_menu_toggle = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            ctx.nav.borrow_mut().toggle_menu();
            ctx.publish();
        })
    };

    let view_value = (*view).clone();
    let menu_open = view_value.menu_open;
    let menu_items: Vec<MenuItem> = props
        .sections
        .iter()
        .map(|section| MenuItem {
            id: AttrValue::from(section.id.clone()),
            title: AttrValue::from(section.title.clone()),
        })
        .collect();
    let selected_id = AttrValue::from(
        view_value
            .active
            .as_ref()
            .map(|section| section.id.clone())
            .unwrap_or_default(),
    );

    let motion = motion_for(view_value.direction);
    let enter_phase = if *entered { motion.center } else { motion.enter };
    let active_pane = match view_value.active.as_ref() {
        Some(section) => html! {
            <div key={section.id.clone()} class="pane" style={pane_style(&enter_phase, *entered)}>
                <SectionViewer
                    title={AttrValue::from(section.title.clone())}
                    description={section.description.clone().map(AttrValue::from)}
                    body_html={AttrValue::from(section.body.clone().unwrap_or_default())}
                    next={view_value.next.clone()}
                    on_next={on_select.clone()}
                />
            </div>
        },
        None => html! {
            <div class="content__empty">
                <p>{ props.site.text.empty_state.clone() }</p>
            </div>
        },
    };
    let leaving_pane = (*leaving).clone().map(|pane| {
        let phase = motion_for(pane.direction).exit;
        html! {
            <div
                key={format!("leaving-{}", pane.section.id)}
                class="pane pane--leaving"
                style={pane_style(&phase, true)}
            >
                <SectionViewer
                    title={AttrValue::from(pane.section.title.clone())}
                    description={pane.section.description.clone().map(AttrValue::from)}
                    body_html={AttrValue::from(pane.section.body.clone().unwrap_or_default())}
                />
            </div>
        }
    });

    let links: Html = props
        .site
        .user
        .links
        .iter()
        .map(|link| {
            html! {
                <Magnetic key={link.label.clone()} class={classes!("sidebar__link")} strength={0.4}>
                    <a href={link.href.clone()} target="_blank" rel="noreferrer">
                        { link.label.clone() }
                    </a>
                </Magnetic>
            }
        })
        .collect();

    html! {
        <div class="portfolio">
            <header class="mobile-header">
                <div class="identity">
                    <h1 class="identity__name">{ props.site.user.name.clone() }</h1>
                    <h2 class="identity__role">{ props.site.user.title.clone() }</h2>
                </div>
                <button
                    type="button"
                    class="mobile-header__toggle"
                    aria-label="Toggle menu"
                    onclick={on_menu_toggle}
                >
                    { if menu_open { "✕" } else { "☰" } }
                </button>
                <div class="mobile-header__wheel">
                    <WheelMenu
                        items={menu_items.clone()}
                        selected_id={selected_id.clone()}
                        on_select={on_select.clone()}
                        horizontal={true}
                    />
                </div>
            </header>
            if menu_open {
                <div class="mobile-overlay">
                    <WheelMenu
                        items={menu_items.clone()}
                        selected_id={selected_id.clone()}
                        on_select={on_select.clone()}
                    />
                </div>
            }
            <aside class="sidebar">
                <div class="identity">
                    <h1 class="identity__name">{ props.site.user.name.clone() }</h1>
                    <h2 class="identity__role">{ props.site.user.title.clone() }</h2>
                </div>
                <div class="sidebar__wheel">
                    <WheelMenu
                        items={menu_items}
                        selected_id={selected_id}
                        on_select={on_select}
                    />
                </div>
                <div class="sidebar__links">{ links }</div>
            </aside>
            <main class="content" ref={content_ref}>
                { for leaving_pane }
                { active_pane }
            </main>
        </div>
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let sections = use_memo((), |_| catalog::published_sections());
    let site = use_memo((), |_| config::site_config());
    {
        let title = site.text.title.clone();
        use_effect_with((), move |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                document.set_title(&title);
            }
            || ()
        });
    }
    html! {
        <PortfolioApp sections={(*sections).clone()} site={(*site).clone()} />
    }
}
