use crate::page::CmsImage;
use serde::{Deserialize, Serialize};

/// Site-wide settings authored once in the CMS: navigation, footer, socials.
///
/// One instance is shared per process through the globals cache; readers only
/// ever see a complete value, never a partially updated one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub id: i64,
    pub document_id: String,
    pub site_name: String,
    #[serde(default)]
    pub favicon: Option<CmsImage>,
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    // The CMS schema capitalizes this one field.
    #[serde(default, rename = "FooterLinks")]
    pub footer_links: Vec<FooterLink>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl GlobalSettings {
    /// Footer links grouped by category, in first-seen category order.
    /// Links without a category land in the trailing unnamed group.
    #[must_use]
    pub fn footer_groups(&self) -> Vec<FooterGroup> {
        let mut groups: Vec<FooterGroup> = Vec::new();
        let mut uncategorized: Vec<FooterLink> = Vec::new();

        for link in &self.footer_links {
            match &link.category {
                Some(category) => {
                    match groups.iter_mut().find(|g| &g.category == category) {
                        Some(group) => group.links.push(link.clone()),
                        None => groups.push(FooterGroup {
                            category: category.clone(),
                            links: vec![link.clone()],
                        }),
                    }
                },
                None => uncategorized.push(link.clone()),
            }
        }

        if !uncategorized.is_empty() {
            groups.push(FooterGroup { category: String::new(), links: uncategorized });
        }
        groups
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: i64,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLink {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Footer links sharing one category heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterGroup {
    pub category: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: i64,
    pub platform: String,
    pub url: String,
}
