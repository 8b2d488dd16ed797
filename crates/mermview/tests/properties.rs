//! Property tests for extraction, escaping and theme classification

use mermview::{blocks, escape_html, Theme};
use proptest::prelude::*;

/// Undo the three entities produced by `escape_html`
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn escape_round_trips(input in "[a-z<>& ;-]{0,40}") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert_eq!(escaped.matches("&amp;").count(), input.matches('&').count());
        prop_assert_eq!(unescape(&escaped), input);
    }

    #[test]
    fn extracts_every_block_in_order(bodies in prop::collection::vec("[a-zA-Z0-9 ;>-]{1,20}", 0..6)) {
        let markdown: String = bodies
            .iter()
            .map(|body| format!("Some prose.\n\n```mermaid\n  {}  \n```\n\n", body))
            .collect();

        let found: Vec<&str> = blocks(&markdown).collect();
        let expected: Vec<&str> = bodies.iter().map(|b| b.trim()).collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn unknown_theme_names_are_light(name in "[a-z]{0,12}") {
        prop_assume!(!["dark", "forest", "neutral", "dark2"].contains(&name.as_str()));
        prop_assert_eq!(Theme::classify(&name), Theme::Light);
    }

    #[test]
    fn dark_theme_names_ignore_case(
        index in 0usize..4,
        mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let name = ["dark", "forest", "neutral", "dark2"][index];
        let mixed: String = name
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(Theme::classify(&mixed), Theme::Dark);
    }
}
