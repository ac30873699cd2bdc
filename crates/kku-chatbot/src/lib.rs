//! # kku-chatbot
//!
//! Rule-based FAQ bot. Free text is matched against an ordered keyword table
//! ([`keywords::TOPIC_KEYWORDS`]); quick-reply buttons bypass matching.
//! There is no NLP: an unmatched message gets the default answer.

pub mod bot;
pub mod conversation;
pub mod keywords;
pub mod responses;
pub mod sessions;

pub use bot::ChatBot;
pub use conversation::{ChatMessage, Conversation};
pub use responses::Topic;
pub use sessions::SessionStore;

use kku_core::Locale;
use tracing::debug;

/// Topic that answers `message`, or [`Topic::Default`].
pub fn resolve_topic(message: &str) -> Topic {
    keywords::match_topic(message).unwrap_or(Topic::Default)
}

/// Answer free text in `locale`. Total: always returns a non-empty answer.
pub fn find_response(message: &str, locale: Locale) -> &'static str {
    let topic = resolve_topic(message);
    debug!(topic = topic.key(), %locale, "chatbot keyword match");
    topic.response().for_locale(locale)
}

/// Topic behind a quick-reply button; unknown buttons get [`Topic::Default`].
pub fn quick_reply_topic(key: &str) -> Topic {
    responses::QUICK_REPLIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, topic)| *topic)
        .unwrap_or(Topic::Default)
}

/// Answer a quick-reply button directly, without keyword matching.
pub fn quick_reply_response(key: &str, locale: Locale) -> &'static str {
    quick_reply_topic(key).response().for_locale(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scholarship_question_in_korean() {
        let reply = find_response("장학금 정보 알려주세요", Locale::Ko);
        assert_eq!(reply, Topic::Scholarships.response().ko);
    }

    #[test]
    fn test_visa_question_in_english() {
        let reply = find_response("tell me about visa", Locale::En);
        assert_eq!(reply, Topic::Visa.response().en);
    }

    #[test]
    fn test_other_locales_read_english() {
        for locale in [Locale::Vi, Locale::Ru, Locale::Th, Locale::Kk] {
            assert_eq!(
                find_response("visa", locale),
                Topic::Visa.response().en,
                "{locale}"
            );
        }
    }

    #[test]
    fn test_total_and_non_empty() {
        for input in ["", "   ", "???", "こんにちは", "\n\t", "zzzz"] {
            for locale in Locale::ALL {
                let reply = find_response(input, locale);
                assert!(!reply.is_empty());
            }
        }
        assert_eq!(find_response("", Locale::Ko), Topic::Default.response().ko);
        assert_eq!(find_response("", Locale::Uz), Topic::Default.response().en);
    }

    #[test]
    fn test_earlier_topic_wins() {
        let reply = find_response("장학금 그리고 비자", Locale::Ko);
        assert_eq!(reply, Topic::Scholarships.response().ko);
    }

    #[test]
    fn test_unreachable_topics_stay_unreachable() {
        // "tuition" belongs to the scholarships row; "application" to admissions.
        assert_eq!(resolve_topic("tuition fees"), Topic::Scholarships);
        assert_eq!(resolve_topic("application form"), Topic::Admissions);
    }

    #[test]
    fn test_quick_replies() {
        assert_eq!(
            quick_reply_response("visa", Locale::Ko),
            Topic::Visa.response().ko
        );
        assert_eq!(
            quick_reply_response("campus", Locale::Id),
            Topic::Campus.response().en
        );
        assert_eq!(quick_reply_topic("contact"), Topic::Default);
        assert_eq!(quick_reply_topic(""), Topic::Default);
    }

    #[test]
    fn test_every_response_has_both_languages() {
        let topics = [
            Topic::Admissions,
            Topic::Application,
            Topic::Scholarships,
            Topic::Tuition,
            Topic::Programs,
            Topic::English,
            Topic::Visa,
            Topic::Documents,
            Topic::Campus,
            Topic::Housing,
            Topic::Korea,
            Topic::Language,
            Topic::Contact,
            Topic::Default,
        ];
        for topic in topics {
            let r = topic.response();
            assert!(!r.ko.is_empty() && !r.en.is_empty(), "{}", topic.key());
        }
    }
}
