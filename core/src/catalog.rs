use crate::section::{Section, SectionList, SectionListError};

/// Authored portfolio content. Entries mirror the authoring schema: `order`
/// controls menu placement (lower first, ties keep authoring order) and
/// unpublished entries never reach the menu.
#[derive(Clone, Copy, Debug)]
pub struct SectionCatalogEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub order: u32,
    pub published: bool,
    pub body_html: &'static str,
}

pub const DEFAULT_ORDER: u32 = 999;

pub const SECTION_CATALOG: &[SectionCatalogEntry] = &[
    SectionCatalogEntry {
        slug: "about",
        title: "About",
        description: "Social media marketer, storyteller, occasional meme scientist.",
        order: 1,
        published: true,
        body_html: r#"<p>I'm Jordin. For the last six years I've been building social
presences for brands that want to sound like people, not press releases.</p>
<p>I plan calendars, write the posts nobody can tell were planned, and read
the numbers afterwards so the next month is better than the last one.</p>
<p><strong>Home base:</strong> Portland, OR &mdash; <strong>working with:</strong>
consumer brands, studios, and the occasional nonprofit.</p>"#,
    },
    SectionCatalogEntry {
        slug: "campaigns",
        title: "Campaigns",
        description: "Launches and seasonal pushes I've run end to end.",
        order: 2,
        published: true,
        body_html: r#"<p>A selection of campaigns I owned from brief to wrap report:</p>
<ul>
<li><strong>Slow Roast Coffee &mdash; &ldquo;First Light&rdquo;</strong>: a 6-week
launch across three platforms. 2.4M organic impressions, 18% lift in
repeat orders.</li>
<li><strong>Fernhill Outfitters &mdash; trail diaries</strong>: UGC series with 40
creators. Cost per engagement dropped 61% against the paid baseline.</li>
<li><strong>City Bloom &mdash; spring planting week</strong>: community push that
tripled newsletter signups in ten days.</li>
</ul>
<p>Every campaign ships with a measurement plan before the first post goes
out. No vanity dashboards.</p>"#,
    },
    SectionCatalogEntry {
        slug: "content-studio",
        title: "Content Studio",
        description: "Formats, series, and the voice work behind them.",
        order: 3,
        published: true,
        body_html: r#"<p>Recurring formats I design and write:</p>
<ul>
<li>Short-form video scripts built around one idea per cut.</li>
<li>Carousel essays &mdash; the five-slide arc that actually gets saved.</li>
<li>Founder voice ghostwriting that survives a face-to-face meeting.</li>
</ul>
<p>I keep a living voice guide for every account: vocabulary, cadence,
the jokes we make and the ones we don't.</p>"#,
    },
    SectionCatalogEntry {
        slug: "analytics",
        title: "Analytics",
        description: "How I measure, and what I stopped measuring.",
        order: 4,
        published: true,
        body_html: r#"<p>Reporting that changes decisions, not slides:</p>
<ul>
<li>Weekly scorecards on reach, saves, and reply sentiment.</li>
<li>Cohort views of followers by acquisition campaign.</li>
<li>Creative postmortems: what the top posts shared, what the flops shared.</li>
</ul>
<p>I stopped reporting follower count as a headline metric in 2022 and
nobody has missed it.</p>"#,
    },
    SectionCatalogEntry {
        slug: "contact",
        title: "Contact",
        description: "",
        order: 5,
        published: true,
        body_html: r#"<p>The fastest way to reach me is email. I answer within a
business day, usually sooner.</p>
<p>If you have a launch date already, lead with it &mdash; calendars fill up
about eight weeks out.</p>"#,
    },
    SectionCatalogEntry {
        slug: "speaking",
        title: "Speaking",
        description: "Workshops and conference talks.",
        order: DEFAULT_ORDER,
        published: false,
        body_html: r#"<p>Draft &mdash; talk list for 2026 still in progress.</p>"#,
    },
];

pub fn section_by_slug(slug: &str) -> Option<&'static SectionCatalogEntry> {
    let trimmed = slug.trim();
    SECTION_CATALOG
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}

/// Published entries in menu order, mapped to the navigation model.
pub fn published_sections() -> Vec<Section> {
    let mut entries: Vec<&SectionCatalogEntry> = SECTION_CATALOG
        .iter()
        .filter(|entry| entry.published)
        .collect();
    entries.sort_by_key(|entry| entry.order);
    entries
        .into_iter()
        .map(|entry| Section {
            id: entry.slug.to_string(),
            title: entry.title.to_string(),
            description: (!entry.description.is_empty()).then(|| entry.description.to_string()),
            body: Some(entry.body_html.to_string()),
        })
        .collect()
}

pub fn published_section_list() -> Result<SectionList, SectionListError> {
    SectionList::new(published_sections())
}
