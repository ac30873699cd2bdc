use super::*;

#[test]
fn test_every_table_parses() {
    for locale in Locale::ALL {
        assert!(
            !dictionary(locale).key_paths().is_empty(),
            "{locale} table is empty or failed to parse"
        );
    }
}

#[test]
fn test_central_table_covers_every_locale_key() {
    let central = dictionary(FALLBACK_LOCALE);
    for locale in Locale::ALL {
        for path in dictionary(locale).key_paths() {
            assert!(
                central.contains(&path),
                "{locale} defines '{path}' which the central table lacks"
            );
        }
    }
}

#[test]
fn test_korean_is_complete() {
    assert!(missing_keys(Locale::Ko).is_empty(), "{:?}", missing_keys(Locale::Ko));
    assert!(missing_keys(Locale::En).is_empty());
}

#[test]
fn test_partial_locale_reports_missing_keys() {
    let missing = missing_keys(Locale::Tl);
    assert!(missing.contains(&"emergency.title".to_string()));
    assert!(!missing.contains(&"nav.home".to_string()));
}

#[test]
fn test_lookup_has_no_fallback() {
    assert_eq!(lookup(Locale::Ko, "hero.title"), Some("경국대학교에서 공부하세요"));
    assert_eq!(lookup(Locale::Tl, "emergency.title"), None);
}

#[test]
fn test_translator_falls_back_to_central_table() {
    let t = Translator::new(Locale::Tl);
    assert_eq!(t.text("emergency.title"), "Emergency Contacts");
    assert!(!t.is_translated("emergency.title"));
    assert_eq!(t.text("nav.preparation"), "Paghahanda");
}

#[test]
fn test_translator_unknown_path_degrades() {
    let t = Translator::new(Locale::Vi);
    assert_eq!(t.text("no.such.key"), "no.such.key");
    assert_eq!(t.text_or("no.such.key", "Fallback"), "Fallback");
    assert_eq!(t.text_or("emergency.title", "Fallback"), "Liên hệ Khẩn cấp");
    assert_eq!(t.get("no.such.key"), None);
}

#[test]
fn test_emergency_titles_per_locale() {
    let expected = [
        (Locale::Ko, "긴급 연락처"),
        (Locale::En, "Emergency Contacts"),
        (Locale::Vi, "Liên hệ Khẩn cấp"),
        (Locale::Th, "ติดต่อฉุกเฉิน"),
        (Locale::Id, "Kontak Darurat"),
        (Locale::Ms, "Hubungan Kecemasan"),
        (Locale::Tl, "Emergency Contacts"),
        (Locale::Kk, "Шұғыл байланыстар"),
        (Locale::Uz, "Favqulodda aloqalar"),
        (Locale::Ru, "Экстренные контакты"),
    ];
    for (locale, title) in expected {
        assert_eq!(Translator::new(locale).text("emergency.title"), title, "{locale}");
    }
}

#[test]
fn test_calendar_lists_have_fixed_lengths() {
    for locale in Locale::ALL {
        let t = Translator::new(locale);
        assert_eq!(t.list("calendar.monthNames").len(), 12, "{locale}");
        assert_eq!(t.list("calendar.dayNames").len(), 7, "{locale}");
    }
    assert!(Translator::new(Locale::En).list("hero.title").is_empty());
}
