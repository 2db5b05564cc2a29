use super::*;

#[test]
fn toggle_opens_closes_and_switches() {
    assert_eq!(toggle_open(None, (0, 1)), Some((0, 1)));
    assert_eq!(toggle_open(Some((0, 1)), (0, 1)), None);
    assert_eq!(toggle_open(Some((0, 1)), (2, 0)), Some((2, 0)));
}

#[test]
fn categories_cover_the_help_topics() {
    let titles: Vec<_> = FAQ.iter().map(|c| c.title).collect();
    assert_eq!(
        titles,
        ["Getting Started", "How It Works", "Privacy & Security", "Pricing & Plans", "Troubleshooting"]
    );
    assert!(FAQ.iter().all(|c| !c.entries.is_empty()));
}

#[test]
fn answers_quote_current_pricing() {
    let all: Vec<_> = FAQ.iter().flat_map(|c| c.entries.iter()).map(|(_, a)| *a).collect();
    assert!(all.iter().any(|a| a.contains("$20/month")));
    assert!(all.iter().all(|a| !a.contains("$9.99")));
}
