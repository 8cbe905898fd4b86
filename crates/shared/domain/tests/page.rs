use serde_json::json;
use vitrine_domain::page::{CmsResponse, Page, PageType, Section, TickerDirection};

fn page_document(sections: serde_json::Value) -> serde_json::Value {
    json!({
        "id": 7,
        "documentId": "doc-7",
        "title": "Home",
        "slug": "home-page",
        "pageType": "home",
        "locale": "en",
        "sections": sections,
        "createdAt": "2025-01-10T09:00:00Z",
        "updatedAt": "2025-02-01T12:30:00Z"
    })
}

#[test]
fn page_document_deserializes() {
    let raw = page_document(json!([
        {
            "__component": "sections.hero",
            "id": 1,
            "title": "Welcome",
            "subtitle": "A site",
            "buttonText": "Get started",
            "buttonLink": "/signup",
            "checkText": "No card required",
            "image": { "id": 3, "url": "/uploads/hero.png", "width": 1200, "height": 800 }
        },
        {
            "__component": "sections.ticker",
            "id": 2,
            "items": [ { "id": 1, "name": "Acme", "logo": null } ],
            "direction": "reverse"
        }
    ]));

    let page: Page = serde_json::from_value(raw).expect("page deserialize");
    assert_eq!(page.page_type, PageType::Home);
    assert_eq!(page.sections.len(), 2);

    let Section::Hero(hero) = &page.sections[0] else {
        panic!("expected hero, got {}", page.sections[0].component());
    };
    assert_eq!(hero.button_text.as_deref(), Some("Get started"));
    assert_eq!(hero.image.as_ref().map(|i| i.url.as_str()), Some("/uploads/hero.png"));

    let Section::Ticker(ticker) = &page.sections[1] else {
        panic!("expected ticker, got {}", page.sections[1].component());
    };
    assert_eq!(ticker.items.len(), 1);
    assert_eq!(ticker.direction, TickerDirection::Reverse);
}

#[test]
fn unrecognized_section_tag_becomes_unknown() {
    let raw = page_document(json!([
        { "__component": "sections.hero", "id": 1, "title": "T", "subtitle": "S" },
        { "__component": "sections.brand-new-widget", "id": 2, "anything": { "nested": true } },
        {
            "__component": "sections.career-job-listings",
            "id": 3,
            "title": "Open roles",
            "positions": [
                { "id": 9, "title": "Engineer", "location": "Remote", "department": "R&D" }
            ]
        }
    ]));

    let page: Page = serde_json::from_value(raw).expect("page deserialize");
    assert_eq!(page.sections.len(), 3, "unknown tags must not drop records at parse time");
    assert!(page.sections[0].is_known());
    assert!(!page.sections[1].is_known());
    assert!(page.sections[2].is_known());
    assert_eq!(page.sections[1].component(), "unknown");
}

#[test]
fn envelope_carries_pagination() {
    let raw = json!({
        "data": [ page_document(json!([])) ],
        "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 1 } }
    });

    let response: CmsResponse<Vec<Page>> = serde_json::from_value(raw).expect("envelope");
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.meta.pagination.expect("pagination").total, 1);
}

#[test]
fn envelope_meta_defaults_when_missing() {
    let raw = json!({ "data": [] });

    let response: CmsResponse<Vec<Page>> = serde_json::from_value(raw).expect("envelope");
    assert!(response.data.is_empty());
    assert!(response.meta.pagination.is_none());
}
