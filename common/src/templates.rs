//! Built-in starter templates offered when creating a press release.

use crate::listing::{Identified, paginate, total_pages};
use crate::model::press_release::NewPressRelease;
use crate::model::template::{Template, TemplateType};

/// Templates shown per page in the catalog and the picker.
pub const TEMPLATE_PAGE_SIZE: u32 = 6;

const PREVIEW_BASE: &str = "https://images.unsplash.com";

pub static CATALOG: [Template; 8] = [
    Template {
        id: "template-1",
        title: "Standard Press Release",
        description: "A traditional press release template suitable for general announcements",
        preview_image: "photo-1504711434969-e33886168f5c",
        kind: TemplateType::Standard,
        content: include_str!("../templates/standard.html"),
    },
    Template {
        id: "template-2",
        title: "Partnership Announcement",
        description: "Perfect for announcing new partnerships or collaborations",
        preview_image: "photo-1600880292203-757bb62b4baf",
        kind: TemplateType::Partnership,
        content: include_str!("../templates/partnership.html"),
    },
    Template {
        id: "template-3",
        title: "Product Launch",
        description: "Announce a new product or service launch",
        preview_image: "photo-1531545514256-b1400bc00f31",
        kind: TemplateType::ProductLaunch,
        content: include_str!("../templates/product_launch.html"),
    },
    Template {
        id: "template-4",
        title: "Award or Recognition",
        description: "Announce an award or industry recognition",
        preview_image: "photo-1614036417651-efe5912149d8",
        kind: TemplateType::Award,
        content: include_str!("../templates/award.html"),
    },
    Template {
        id: "template-5",
        title: "Event Announcement",
        description: "Announce an upcoming event or conference",
        preview_image: "photo-1540575467063-178a50c2df87",
        kind: TemplateType::Event,
        content: include_str!("../templates/event.html"),
    },
    Template {
        id: "template-6",
        title: "Market Expansion",
        description: "Announce expansion into new markets or regions",
        preview_image: "photo-1618044733300-9472054094ee",
        kind: TemplateType::Standard,
        content: include_str!("../templates/market_expansion.html"),
    },
    Template {
        id: "template-7",
        title: "Executive Appointment",
        description: "Announce new executive leadership appointment",
        preview_image: "photo-1541844053589-346841d0b34c",
        kind: TemplateType::Standard,
        content: include_str!("../templates/executive_appointment.html"),
    },
    Template {
        id: "template-8",
        title: "Joint Venture",
        description: "Announce a new joint venture between multiple organizations",
        preview_image: "photo-1521790797524-b2497295b8a0",
        kind: TemplateType::Partnership,
        content: include_str!("../templates/joint_venture.html"),
    },
];

/// Type filter of the catalog: everything, or a single family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateFilter {
    #[default]
    All,
    Only(TemplateType),
}

impl TemplateFilter {
    pub fn matches(&self, template: &Template) -> bool {
        match self {
            TemplateFilter::All => true,
            TemplateFilter::Only(kind) => template.kind == *kind,
        }
    }

    /// Parses a `<select>` value; anything unknown means `All`.
    pub fn parse(value: &str) -> Self {
        TemplateType::parse(value).map_or(TemplateFilter::All, TemplateFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFilter::All => "all",
            TemplateFilter::Only(kind) => kind.as_str(),
        }
    }
}

impl Template {
    /// Full URL of the card image.
    pub fn preview_url(&self) -> String {
        format!("{PREVIEW_BASE}/{}?q=80&w=1200&auto=format&fit=crop", self.preview_image)
    }
}

impl Identified for Template {
    fn id(&self) -> &str {
        self.id
    }
}

pub fn find(id: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|template| template.id == id)
}

pub fn filtered(filter: TemplateFilter) -> Vec<&'static Template> {
    CATALOG.iter().filter(|template| filter.matches(template)).collect()
}

/// One catalog page for `filter`, together with the page count.
pub fn page(filter: TemplateFilter, page: u32) -> (Vec<&'static Template>, u32) {
    let matching = filtered(filter);
    let pages = total_pages(matching.len() as u64, TEMPLATE_PAGE_SIZE);
    (paginate(&matching, page, TEMPLATE_PAGE_SIZE).to_vec(), pages)
}

impl NewPressRelease {
    /// Draft seeded with the template body, unmodified.
    pub fn from_template(template: &Template) -> Self {
        Self {
            content: Some(template.content.to_string()),
            template_id: Some(template.id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{from_markdown, markdown_from_html};

    #[test]
    fn catalog_has_eight_unique_templates() {
        let mut ids: Vec<_> = CATALOG.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert!(CATALOG.iter().all(|t| t.content.contains("[Company Name]")));
    }

    #[test]
    fn filter_by_type() {
        let partnership = filtered(TemplateFilter::Only(TemplateType::Partnership));
        let titles: Vec<_> = partnership.iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Partnership Announcement", "Joint Venture"]);
        assert_eq!(filtered(TemplateFilter::parse("standard")).len(), 3);
        assert_eq!(TemplateFilter::parse("all"), TemplateFilter::All);
    }

    #[test]
    fn pages_of_six() {
        let (first, pages) = page(TemplateFilter::All, 1);
        assert_eq!(first.len(), 6);
        assert_eq!(pages, 2);
        let (second, _) = page(TemplateFilter::All, 2);
        assert_eq!(second.len(), 2);
        let (only, pages) = page(TemplateFilter::Only(TemplateType::Award), 1);
        assert_eq!((only.len(), pages), (1, 1));
    }

    #[test]
    fn seeding_copies_content_exactly() {
        let template = find("template-5").unwrap();
        let draft = NewPressRelease::from_template(template);
        assert_eq!(draft.content.as_deref().map(str::as_bytes), Some(template.content.as_bytes()));
        assert_eq!(draft.template_id.as_deref(), Some("template-5"));
    }

    #[test]
    fn every_template_opens_with_its_headline() {
        for template in &CATALOG {
            let doc = from_markdown(&markdown_from_html(template.content));
            assert!(doc.title().starts_with("[Company Name]"), "{}", template.id);
        }
    }
}
