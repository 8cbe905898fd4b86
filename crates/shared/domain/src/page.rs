use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display};

/// One CMS page document: identity, metadata, and an ordered list of
/// [`Section`] records. Pages are fetched read-only and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Page {
    pub id: i64,
    pub document_id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub page_type: PageType,
    pub locale: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Which layout a page renders through.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PageType {
    Home,
    Personal,
    Business,
    Career,
}

/// Response envelope the CMS wraps every payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: ResponseMeta,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

/// One authored content block. The `__component` tag selects the variant;
/// exactly one variant's fields are valid per record.
///
/// Tags the registry does not know about deserialize as [`Section::Unknown`]
/// instead of failing the whole page, so one unrecognized block never takes
/// down a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__component")]
pub enum Section {
    #[serde(rename = "sections.hero")]
    Hero(HeroSection),
    #[serde(rename = "sections.cat-hero")]
    CatHero(HeroSection),
    #[serde(rename = "sections.text-image")]
    TextImage(TextImageSection),
    #[serde(rename = "sections.feature-grid")]
    FeatureGrid(FeatureGridSection),
    #[serde(rename = "sections.testimonials")]
    Testimonials(TestimonialsSection),
    #[serde(rename = "sections.call-to-action")]
    CallToAction(CallToActionSection),
    #[serde(rename = "sections.ticker")]
    Ticker(TickerSection),
    #[serde(rename = "sections.feature-slider")]
    FeatureSlider(FeatureSliderSection),
    #[serde(rename = "sections.feature-spotlight")]
    FeatureSpotlight(FeatureSpotlightSection),
    #[serde(rename = "sections.career-hero")]
    CareerHero(CareerHeroSection),
    #[serde(rename = "sections.career-vision")]
    CareerVision(CareerVisionSection),
    #[serde(rename = "sections.career-highlights")]
    CareerHighlights(CareerHighlightsSection),
    #[serde(rename = "sections.career-job-listings")]
    CareerJobListings(CareerJobListingsSection),
    #[serde(other)]
    Unknown,
}

impl Section {
    /// The wire tag of this record, or `"unknown"` for unrecognized blocks.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::Hero(_) => "sections.hero",
            Self::CatHero(_) => "sections.cat-hero",
            Self::TextImage(_) => "sections.text-image",
            Self::FeatureGrid(_) => "sections.feature-grid",
            Self::Testimonials(_) => "sections.testimonials",
            Self::CallToAction(_) => "sections.call-to-action",
            Self::Ticker(_) => "sections.ticker",
            Self::FeatureSlider(_) => "sections.feature-slider",
            Self::FeatureSpotlight(_) => "sections.feature-spotlight",
            Self::CareerHero(_) => "sections.career-hero",
            Self::CareerVision(_) => "sections.career-vision",
            Self::CareerHighlights(_) => "sections.career-highlights",
            Self::CareerJobListings(_) => "sections.career-job-listings",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// An uploaded image with the CMS's resized format ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsImage {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub formats: Option<ImageFormats>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ImageFormats {
    #[serde(default)]
    pub thumbnail: Option<ImageFormat>,
    #[serde(default)]
    pub small: Option<ImageFormat>,
    #[serde(default)]
    pub medium: Option<ImageFormat>,
    #[serde(default)]
    pub large: Option<ImageFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFormat {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ButtonLink {
    pub id: Value,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct HeroSection {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
    #[serde(default)]
    pub check_text: Option<String>,
    #[serde(default)]
    pub image: Option<CmsImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FeatureItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub icon: Option<CmsImage>,
    #[serde(default)]
    pub button: Option<ButtonLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TextImageSection {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub rich_text: Option<Value>,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
    #[serde(default)]
    pub button: Vec<ButtonLink>,
    #[serde(default)]
    pub image: Option<CmsImage>,
    #[serde(default)]
    pub reversed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FeatureGridSection {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialItem {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub quote: String,
    #[serde(default)]
    pub avatar: Option<CmsImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TestimonialsSection {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub testimonials: Vec<TestimonialItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CallToActionSection {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub image: Option<CmsImage>,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
    pub button_text: String,
    pub button_link: String,
    #[serde(default)]
    pub secondary_button_text: Option<String>,
    #[serde(default)]
    pub secondary_button_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<CmsImage>,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickerDirection {
    #[default]
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerSection {
    pub id: i64,
    #[serde(default)]
    pub items: Vec<TickerItem>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub direction: TickerDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SlideContent {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    #[serde(default)]
    pub image: Option<CmsImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FeatureSliderSection {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub background_image: Option<CmsImage>,
    #[serde(default)]
    pub slides: Vec<SlideContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FeatureSpotlightSection {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CareerHeroSection {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
    #[serde(default)]
    pub image: Option<CmsImage>,
    #[serde(default)]
    pub vision: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CareerVisionSection {
    pub id: i64,
    pub rich_text: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CareerHighlightItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub link_text: String,
    pub link_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CareerHighlightsSection {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<CmsImage>,
    #[serde(default)]
    pub highlights: Vec<CareerHighlightItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct JobPosition {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub department: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<Value>,
    #[serde(default)]
    pub application_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CareerJobListingsSection {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub positions: Vec<JobPosition>,
}
