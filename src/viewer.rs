use yew::prelude::*;

use crate::magnetic::Magnetic;

const NEXT_ARROW_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 5v14"/><path d="m19 12-7 7-7-7"/></svg>"#;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NextSection {
    pub id: AttrValue,
    pub title: AttrValue,
}

#[derive(Properties, PartialEq)]
pub(crate) struct SectionViewerProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub body_html: AttrValue,
    #[prop_or_default]
    pub next: Option<NextSection>,
    #[prop_or_default]
    pub on_next: Callback<String>,
}

/// The content surface. `body_html` comes from the authoring catalog and is
/// injected as-is; the viewer trusts its source and never inspects it.
#[function_component(SectionViewer)]
pub(crate) fn section_viewer(props: &SectionViewerProps) -> Html {
    let next_block = match props.next.clone() {
        Some(next) => {
            let onclick = {
                let on_next = props.on_next.clone();
                let id = next.id.clone();
                Callback::from(move |_: MouseEvent| on_next.emit(id.to_string()))
            };
            html! {
                <div class="viewer__next">
                    <Magnetic strength={0.35}>
                        <button type="button" class="viewer__next-button" {onclick}>
                            <span>{ next.title }</span>
                            { Html::from_html_unchecked(AttrValue::from(NEXT_ARROW_SVG)) }
                        </button>
                    </Magnetic>
                </div>
            }
        }
        None => Html::default(),
    };

    html! {
        <article class="viewer">
            <h1 class="viewer__title">{ props.title.clone() }</h1>
            if let Some(description) = props.description.clone() {
                <p class="viewer__lede">{ description }</p>
            }
            <div class="viewer__body">
                { Html::from_html_unchecked(props.body_html.clone()) }
            </div>
            { next_block }
        </article>
    }
}
