use super::*;

#[test]
fn select_plan_targets_checkout_with_the_tier() {
    let PageIntent::Navigate { href, aux } = PageIntent::select_plan(PlanTier::ThreeMonth) else {
        panic!("expected navigation");
    };
    assert_eq!(href, "/checkout");
    assert_eq!(aux.as_ref().and_then(AuxData::plan), Some("3-Month"));
}

#[test]
fn page_intents_stay_distinct_from_chrome_intents() {
    let intent: UiIntent = PageIntent::Navigate {
        href: "/faq".into(),
        aux: None,
    }
    .into();
    assert_eq!(
        intent,
        UiIntent::Page(PageIntent::Navigate {
            href: "/faq".into(),
            aux: None,
        })
    );
    assert_eq!(intent.name(), "page_navigate");

    let modal = UiIntent::from(PageIntent::OpenGetStarted);
    assert_ne!(modal, UiIntent::OpenGetStarted);
    assert_eq!(modal.name(), "page_open_get_started");
}

#[test]
fn unknown_path_message_names_the_path() {
    let message = describe_navigation_failure(&NavigationError::UnknownPath("/careers".into()));
    assert!(message.contains("/careers"));
    assert!(message.contains("still on the previous page"));
}

#[test]
fn malformed_href_message_mentions_the_link() {
    let err = NavigationError::malformed("mailto:hello@res.ai", "unsupported scheme");
    assert!(describe_navigation_failure(&err).starts_with("Link could not be followed"));
}
