// SPDX-License-Identifier: MPL-2.0
use comic_daily::app::config::{self, Config, FeedsConfig, GeneralConfig};
use comic_daily::i18n::I18n;
use comic_daily::news::service::FeedSource;
use comic_daily::news::{Edition, NewsId, NewsItem};
use comic_daily::ui::theming::ThemeMode;
use tempfile::tempdir;

fn story(n: usize) -> NewsItem {
    NewsItem::new(
        NewsId::new(format!("n{n}")).expect("valid id"),
        format!("Headline {n}"),
        "Summary",
        format!("https://example.com/{n}"),
        "wire",
    )
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("section-daily-strip"), "La Planche du Jour");
}

#[test]
fn cli_language_wins_over_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn every_locale_translates_the_page_keys() {
    let keys = [
        "masthead-title",
        "section-front-page",
        "section-daily-strip",
        "section-short-sketches",
        "section-archive",
        "error-press-jammed-title",
        "error-reload",
        "modal-copy-link",
        "subscribe-button",
        "notification-link-copied",
    ];
    let mut i18n = I18n::default();
    for locale in i18n.available_locales.clone() {
        i18n.set_locale(locale.clone());
        for key in keys {
            let text = i18n.tr(key);
            assert!(!text.starts_with("MISSING"), "{locale} lacks {key}");
        }
    }
}

#[test]
fn feed_sources_survive_a_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let config = Config {
        feeds: FeedsConfig {
            max_articles: Some(9),
            request_delay_ms: Some(0),
            sources: vec![FeedSource::new("local", "http://localhost/feed.xml")],
        },
        ..Config::default()
    };

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded.feeds.sources, config.feeds.sources);
    assert_eq!(loaded.feeds.max_articles(), 9);
}

#[test]
fn layout_places_stories_by_order() {
    let edition = Edition::new((0..11).map(story).collect());
    let page = edition.front_page();

    assert_eq!(page.hero().map(|i| i.id.as_str()), Some("n0"));
    let side: Vec<&str> = page.side().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(side, ["n1", "n2", "n3"]);
    assert_eq!(page.daily_strip().len(), 4);
    assert_eq!(page.archive().len(), 3);
    assert!(page.has_archive());
}

#[test]
fn archive_needs_more_than_eight_stories() {
    let edition = Edition::new((0..8).map(story).collect());
    assert!(!edition.front_page().has_archive());
    assert!(edition.front_page().archive().is_empty());
}

#[test]
fn short_edition_leaves_later_slots_empty() {
    let edition = Edition::new((0..2).map(story).collect());
    let page = edition.front_page();
    assert!(page.hero().is_some());
    assert_eq!(page.side().len(), 1);
    assert!(page.grid().is_empty());
}
