//! Plain-text exports of a horoscope: the clipboard summary and the social
//! share intent.

use crate::config::CardConfig;
use crate::horoscope::Horoscope;
use crate::traits::format_score;

/// Full summary written to the clipboard.
///
/// Scores are the normalized values shown on the card.
pub fn clipboard_text(horoscope: &Horoscope, config: &CardConfig) -> String {
    let traits = horoscope.normalized_traits();
    format!(
        "✨ My Coding Horoscope for {date} ✨\n\n\
         {message}\n\n\
         🚀 Energy: {energy}/10\n\
         ✨ Charisma: {charisma}/10\n\
         🎨 Creativity: {creativity}/10\n\
         👥 Collaboration: {collaboration}/10\n\n\
         Generated by {product} - Get yours at {host}",
        date = horoscope.formatted_date(),
        message = horoscope.message,
        energy = format_score(traits.energy),
        charisma = format_score(traits.charisma),
        creativity = format_score(traits.creativity),
        collaboration = format_score(traits.collaboration),
        product = config.product_name,
        host = config.product_host,
    )
}

/// Short post text: message excerpt plus energy and charisma.
pub fn share_text(horoscope: &Horoscope, config: &CardConfig) -> String {
    let traits = horoscope.normalized_traits();
    let excerpt: String = horoscope
        .message
        .chars()
        .take(config.share_excerpt_chars)
        .collect();

    format!(
        "✨ My Coding Horoscope for today: {}... (Energy: {}/10, Charisma: {}/10)",
        excerpt,
        format_score(traits.energy),
        format_score(traits.charisma),
    )
}

/// Post-compose URL with the share text and canonical URL percent-encoded.
pub fn share_url(horoscope: &Horoscope, config: &CardConfig) -> String {
    format!(
        "{}?text={}&url={}",
        config.share_endpoint,
        urlencoding::encode(&share_text(horoscope, config)),
        urlencoding::encode(&config.canonical_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::horoscope::TraitScores;

    fn hello_world() -> Horoscope {
        Horoscope::new("2025-03-05", "Hello. World.", TraitScores::new(5.0, 6.0, 7.0, 8.0))
    }

    #[test]
    fn clipboard_text_matches_template() {
        let text = clipboard_text(&hello_world(), &CardConfig::default());
        let expected = "✨ My Coding Horoscope for March 5, 2025 ✨\n\
                        \n\
                        Hello. World.\n\
                        \n\
                        🚀 Energy: 5/10\n\
                        ✨ Charisma: 6/10\n\
                        🎨 Creativity: 7/10\n\
                        👥 Collaboration: 8/10\n\
                        \n\
                        Generated by AstroGit - Get yours at astrogit.vercel.app";
        assert_eq!(text, expected);
    }

    #[test]
    fn clipboard_text_uses_normalized_scores() {
        let horoscope = Horoscope::new(
            "2025-03-05",
            "x",
            TraitScores {
                energy: None,
                charisma: Some(12.0),
                creativity: Some(7.5),
                collaboration: Some(-1.0),
            },
        );
        let text = clipboard_text(&horoscope, &CardConfig::default());
        assert!(text.contains("🚀 Energy: 1/10\n"));
        assert!(text.contains("✨ Charisma: 10/10\n"));
        assert!(text.contains("🎨 Creativity: 7.5/10\n"));
        assert!(text.contains("👥 Collaboration: 1/10\n"));
    }

    #[test]
    fn share_text_truncates_to_excerpt() {
        let message = "a".repeat(250);
        let horoscope = Horoscope::new("2025-03-05", message, TraitScores::new(9.0, 3.0, 1.0, 1.0));
        let text = share_text(&horoscope, &CardConfig::default());
        let expected = format!(
            "✨ My Coding Horoscope for today: {}... (Energy: 9/10, Charisma: 3/10)",
            "a".repeat(100)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn share_text_counts_characters_not_bytes() {
        let message = "✨".repeat(120);
        let horoscope = Horoscope::new("2025-03-05", message, TraitScores::default());
        let text = share_text(&horoscope, &CardConfig::default());
        let excerpt = text
            .strip_prefix("✨ My Coding Horoscope for today: ")
            .and_then(|rest| rest.split("...").next())
            .unwrap();
        assert_eq!(excerpt.chars().count(), 100);
    }

    #[test]
    fn share_url_is_percent_encoded() {
        let horoscope = hello_world();
        let config = CardConfig::default();
        let url = share_url(&horoscope, &config);

        let query = url
            .strip_prefix("https://twitter.com/intent/tweet?text=")
            .unwrap();
        let (text, canonical) = query.split_once("&url=").unwrap();

        assert!(!text.contains(' '));
        assert_eq!(urlencoding::decode(text).unwrap(), share_text(&horoscope, &config));
        assert_eq!(canonical, "https%3A%2F%2Fastrogit.vercel.app");
    }

    #[test]
    fn share_url_follows_config() {
        let config = CardConfig {
            share_endpoint: "https://social.example/share".to_string(),
            canonical_url: "https://example.org".to_string(),
            ..CardConfig::default()
        };
        let url = share_url(&hello_world(), &config);
        assert!(url.starts_with("https://social.example/share?text="));
        assert!(url.ends_with("&url=https%3A%2F%2Fexample.org"));
    }
}
