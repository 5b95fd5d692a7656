use arcflow_core::{Config, FlowParser};
use arcflow_record::Flow;

/// Recorded checkout flow: search, product, option, cart, decline, end screen
pub const CHECKOUT_FLOW: &str = r#"{
    "name": "Add a Scooter to Your Cart on Target.com",
    "steps": [
        {"type": "CHAPTER", "id": "c0", "title": "Add a Scooter to Your Cart"},
        {"type": "IMAGE", "id": "s1",
         "pageContext": {"url": "https://www.target.com/", "title": "Target : Expect More. Pay Less."},
         "clickContext": {"text": "What can we help you find? search", "elementType": "other"}},
        {"type": "IMAGE", "id": "s2",
         "pageContext": {"url": "https://www.target.com/", "title": "Target : Expect More. Pay Less."},
         "clickContext": {"text": "", "elementType": "other"},
         "hotspots": [{"label": "Type \"scooter\" into the search bar"}]},
        {"type": "VIDEO", "id": "v1"},
        {"type": "IMAGE", "id": "s3",
         "pageContext": {"url": "https://www.target.com/s?searchTerm=scooter", "title": "scooter : Target"},
         "clickContext": {"text": "Razor A Kick Scooter", "elementType": "image"}},
        {"type": "IMAGE", "id": "s4",
         "pageContext": {"url": "https://www.target.com/p/-/A-1?preselect=2", "title": "Razor A Kick Scooter"},
         "clickContext": {"text": "Blue", "elementType": "image"}},
        {"type": "IMAGE", "id": "s5",
         "pageContext": {"url": "https://www.target.com/p/-/A-1?preselect=2", "title": "Razor A Kick Scooter"},
         "clickContext": {"text": "Add to cart", "elementType": "button"}},
        {"type": "IMAGE", "id": "s6",
         "pageContext": {"url": "https://www.target.com/p/-/A-1?preselect=2", "title": "Razor A Kick Scooter"},
         "clickContext": {"text": "No thanks", "elementType": "button"}},
        {"type": "CHAPTER", "id": "c9", "title": "Thank you!"}
    ],
    "capturedEvents": [
        {"clickId": "s3", "timeMs": 1704112496789}
    ]
}"#;

pub fn checkout_flow() -> Flow {
    FlowParser::new(&Config::new())
        .parse_str(CHECKOUT_FLOW)
        .unwrap()
}
