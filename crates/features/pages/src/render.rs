use crate::chrome::{PageMeta, SiteChrome};
use crate::error::{PagesError, PagesErrorExt};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tera::{Context, Tera};
use tracing::{debug, error};
use vitrine_domain::page::{Page, Section};

/// Every template ships inside the binary; there is nothing to deploy next
/// to it and nothing to miss at runtime.
const TEMPLATES: &[(&str, &str)] = &[
    ("page.html", include_str!("../templates/page.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
    ("sitemap.xml", include_str!("../templates/sitemap.xml")),
    ("partials/navbar.html", include_str!("../templates/partials/navbar.html")),
    ("partials/footer.html", include_str!("../templates/partials/footer.html")),
    ("sections/hero.html", include_str!("../templates/sections/hero.html")),
    ("sections/text_image.html", include_str!("../templates/sections/text_image.html")),
    ("sections/feature_grid.html", include_str!("../templates/sections/feature_grid.html")),
    ("sections/testimonials.html", include_str!("../templates/sections/testimonials.html")),
    ("sections/call_to_action.html", include_str!("../templates/sections/call_to_action.html")),
    ("sections/ticker.html", include_str!("../templates/sections/ticker.html")),
    ("sections/feature_slider.html", include_str!("../templates/sections/feature_slider.html")),
    (
        "sections/feature_spotlight.html",
        include_str!("../templates/sections/feature_spotlight.html"),
    ),
    ("sections/career_hero.html", include_str!("../templates/sections/career_hero.html")),
    ("sections/career_vision.html", include_str!("../templates/sections/career_vision.html")),
    (
        "sections/career_highlights.html",
        include_str!("../templates/sections/career_highlights.html"),
    ),
    (
        "sections/career_job_listings.html",
        include_str!("../templates/sections/career_job_listings.html"),
    ),
];

/// The section dispatcher and page composer.
///
/// Rendering a page walks its ordered section records, matches each record's
/// tag against the template registry, and hands every renderer only the
/// fields of its own variant. Unrecognized tags render nothing and keep
/// their neighbors' order intact.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Compiles the embedded template set.
    ///
    /// # Errors
    /// Returns [`PagesError::Template`] if any embedded template fails to
    /// parse; that is a build defect, not a runtime condition.
    pub fn new() -> Result<Self, PagesError> {
        let mut tera = Tera::default();
        tera.register_filter("rich_text", rich_text_filter);
        tera.add_raw_templates(TEMPLATES.to_vec()).context("Loading embedded templates")?;
        Ok(Self { tera })
    }

    /// Renders one section, or `None` for records with an unrecognized tag.
    ///
    /// # Errors
    /// Returns [`PagesError::Template`] when the matched template fails to
    /// render.
    pub fn render_section(&self, section: &Section) -> Result<Option<String>, PagesError> {
        let (template, context) = match section {
            Section::Hero(s) => {
                let mut context = section_context(s);
                context.insert("compact", &false);
                ("sections/hero.html", context)
            },
            Section::CatHero(s) => {
                let mut context = section_context(s);
                context.insert("compact", &true);
                ("sections/hero.html", context)
            },
            Section::TextImage(s) => ("sections/text_image.html", section_context(s)),
            Section::FeatureGrid(s) => ("sections/feature_grid.html", section_context(s)),
            Section::Testimonials(s) => ("sections/testimonials.html", section_context(s)),
            Section::CallToAction(s) => ("sections/call_to_action.html", section_context(s)),
            Section::Ticker(s) => ("sections/ticker.html", section_context(s)),
            Section::FeatureSlider(s) => ("sections/feature_slider.html", section_context(s)),
            Section::FeatureSpotlight(s) => {
                ("sections/feature_spotlight.html", section_context(s))
            },
            Section::CareerHero(s) => ("sections/career_hero.html", section_context(s)),
            Section::CareerVision(s) => ("sections/career_vision.html", section_context(s)),
            Section::CareerHighlights(s) => {
                ("sections/career_highlights.html", section_context(s))
            },
            Section::CareerJobListings(s) => {
                ("sections/career_job_listings.html", section_context(s))
            },
            Section::Unknown => {
                // Deliberate policy: unknown tags are skipped, not errors.
                debug!("Skipping section with unrecognized component tag");
                return Ok(None);
            },
        };

        self.tera.render(template, &context).map(Some).context("Rendering section")
    }

    /// Renders an ordered section list into ordered fragments. Unknown tags
    /// produce nothing; a renderer failure is logged and skipped so one bad
    /// block cannot blank the page.
    #[must_use]
    pub fn render_sections(&self, sections: &[Section]) -> Vec<String> {
        sections
            .iter()
            .filter_map(|section| match self.render_section(section) {
                Ok(fragment) => fragment,
                Err(e) => {
                    error!(component = section.component(), "Section render failed: {e}");
                    None
                },
            })
            .collect()
    }

    /// Renders the full document: layout by page type, chrome, and the
    /// section fragments in order.
    ///
    /// # Errors
    /// Returns [`PagesError::Template`] when the page layout fails to render.
    pub fn render_page(
        &self,
        page: &Page,
        meta: &PageMeta,
        chrome: &SiteChrome,
    ) -> Result<String, PagesError> {
        let fragments = self.render_sections(&page.sections);

        let mut context = Context::new();
        context.insert("page", page);
        context.insert("page_type", page.page_type.as_ref());
        context.insert("meta", meta);
        context.insert("chrome", chrome);
        context.insert("fragments", &fragments);

        self.tera.render("page.html", &context).context("Rendering page layout")
    }

    /// Renders the styled not-found document.
    ///
    /// # Errors
    /// Returns [`PagesError::Template`] when the template fails to render.
    pub fn render_not_found(
        &self,
        meta: &PageMeta,
        chrome: &SiteChrome,
    ) -> Result<String, PagesError> {
        let mut context = Context::new();
        context.insert("meta", meta);
        context.insert("chrome", chrome);

        self.tera.render("not_found.html", &context).context("Rendering not-found page")
    }

    /// Renders the sitemap from the slug list.
    ///
    /// # Errors
    /// Returns [`PagesError::Template`] when the template fails to render.
    pub fn render_sitemap(
        &self,
        base_url: &str,
        home_slug: &str,
        slugs: &[String],
    ) -> Result<String, PagesError> {
        let mut context = Context::new();
        context.insert("base_url", &base_url.trim_end_matches('/'));
        context.insert("home_slug", home_slug);
        context.insert("slugs", slugs);

        self.tera.render("sitemap.xml", &context).context("Rendering sitemap")
    }
}

fn section_context(section: &impl Serialize) -> Context {
    let mut context = Context::new();
    context.insert("section", section);
    context
}

/// Converts a CMS rich-text blocks value into minimal HTML. Paragraph and
/// heading blocks are kept; anything else contributes its plain text.
fn rich_text_filter(
    value: &Value,
    _args: &HashMap<String, Value>,
) -> tera::Result<Value> {
    Ok(Value::String(blocks_to_html(value)))
}

fn blocks_to_html(value: &Value) -> String {
    match value {
        Value::Array(blocks) => blocks.iter().filter_map(block_to_html).collect(),
        Value::String(text) if !text.is_empty() => {
            format!("<p>{}</p>", tera::escape_html(text))
        },
        _ => String::new(),
    }
}

fn block_to_html(block: &Value) -> Option<String> {
    let children = block.get("children")?.as_array()?;
    let text: String = children
        .iter()
        .filter_map(|child| child.get("text")?.as_str().map(tera::escape_html))
        .collect();

    if text.is_empty() {
        return None;
    }

    let tag = match block.get("type").and_then(Value::as_str) {
        Some("heading") => "h3",
        _ => "p",
    };
    Some(format!("<{tag}>{text}</{tag}>"))
}
