//! End-to-end checks of a narrative session moving through eras.

use std::cell::RefCell;
use std::rc::Rc;

use anachronism_filter::{
    create_era_filter, AnachronismFilter, FilterMode, FilterOptions, MatchOrigin,
};
use era_context::{EraCatalog, MindsetContext, MindsetStore};

const ERAS: &str = r#"{
    "eras": [
        {
            "year": 1946,
            "era": "Vacuum Tubes",
            "known_technology": ["vacuum tube", "punched card"],
            "unknown_technology": ["transistor", "microprocessor"]
        },
        {
            "year": 1971,
            "era": "The Microprocessor Dawn",
            "known_technology": ["microprocessor", "teletype"],
            "unknown_technology": ["internet", "smartphone"]
        }
    ]
}"#;

fn session() -> (Rc<RefCell<MindsetStore>>, AnachronismFilter) {
    let store = Rc::new(RefCell::new(MindsetStore::new()));
    let filter = AnachronismFilter::new(store.clone());
    (store, filter)
}

#[test]
fn text_without_vocabulary_passes_through() {
    let (store, mut filter) = session();
    store
        .borrow_mut()
        .set_mindset(MindsetContext::new(1971).with_unknown("internet"));
    filter.add_custom_term("smartphone", 2007, None);

    for mode in [
        FilterMode::Analyze,
        FilterMode::Flag,
        FilterMode::Replace,
        FilterMode::Remove,
        FilterMode::Highlight,
    ] {
        let text = "The teletype clattered all night.";
        let result = filter.analyze(text, &FilterOptions::mode(mode));
        assert!(!result.has_anachronisms);
        assert_eq!(result.filtered, text);
    }
}

#[test]
fn narrative_moves_through_eras() {
    let catalog = EraCatalog::from_json_str(ERAS).unwrap();
    let (store, filter) = session();
    let text = "The transistor made the microprocessor possible.";
    let options = FilterOptions::mode(FilterMode::Flag);

    store
        .borrow_mut()
        .set_mindset(catalog.era_for_year(1950).unwrap().clone());
    let result = filter.analyze(text, &options);
    assert_eq!(result.anachronisms.len(), 2);
    assert!(result
        .anachronisms
        .iter()
        .all(|m| m.origin == MatchOrigin::UnknownTechnology));
    assert_eq!(
        result.filtered,
        "The [ANACHRONISM: transistor] made the [ANACHRONISM: microprocessor] possible."
    );

    store
        .borrow_mut()
        .set_mindset(catalog.era_for_year(1975).unwrap().clone());
    let result = filter.analyze(text, &options);
    assert!(!result.has_anachronisms);

    store.borrow_mut().clear_mindset();
    assert!(!filter.analyze(text, &options).has_anachronisms);
}

#[test]
fn custom_terms_override_era_vocabulary() {
    let (store, mut filter) = session();
    store
        .borrow_mut()
        .set_mindset(MindsetContext::new(1971).with_unknown("email"));

    assert!(filter.is_anachronism("email", None));

    // Email is "discovered" in 1971.
    filter.add_custom_term("email", 1971, Some("memo"));
    assert!(!filter.is_anachronism("email", None));
    assert!(filter.is_anachronism("email", Some(1970)));

    filter.clear_custom_terms();
    assert!(filter.is_anachronism("email", None));
}

#[test]
fn era_filter_rewrites_paragraph() {
    let filter = create_era_filter(1971);
    let text = "Ada opened her laptop, checked email, and searched the Internet for a personal computer.";

    let result = filter.analyze(text, &FilterOptions::mode(FilterMode::Highlight));
    let terms: Vec<_> = result.anachronisms.iter().map(|m| m.term.as_str()).collect();
    assert_eq!(terms, vec!["laptop", "Internet", "personal computer"]);
    assert_eq!(
        result.filtered,
        "Ada opened her **laptop**, checked email, and searched the **Internet** for a **personal computer**."
    );

    let replaced = filter.analyze(text, &FilterOptions::mode(FilterMode::Replace));
    assert_eq!(
        replaced.filtered,
        "Ada opened her portable terminal, checked email, and searched the ARPANET for a minicomputer."
    );

    let removed = filter.analyze(text, &FilterOptions::mode(FilterMode::Remove));
    assert_eq!(
        removed.filtered,
        "Ada opened her [...], checked email, and searched the [...] for a [...]."
    );
}

#[test]
fn result_serializes_for_presentation() {
    let filter = create_era_filter(1980);
    let result = filter.analyze("Plug in the USB stick.", &FilterOptions::default());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["has_anachronisms"], true);
    assert_eq!(json["anachronisms"][0]["term"], "USB");
    assert_eq!(json["anachronisms"][0]["position"], 12);
    assert_eq!(json["filtered"], "Plug in the USB stick.");
}
