// SPDX-License-Identifier: MPL-2.0
use comic_daily::error::FetchError;
use comic_daily::news::service::{NewsService, StaticEdition};
use comic_daily::news::{NewsId, NewsItem};
use comic_daily::ui::front_page::{self, Event, LoadState, Message, State};

fn story(n: usize) -> NewsItem {
    NewsItem::new(
        NewsId::new(format!("s{n}")).expect("valid id"),
        format!("Story {n}"),
        "Summary",
        format!("https://example.com/{n}"),
        "wire",
    )
}

fn loaded(items: Vec<NewsItem>) -> State {
    let mut state = State::new(Vec::new());
    assert!(state.edition.begin_fetch());
    state.edition.finish_fetch(Ok(items));
    state
}

#[test]
fn starts_in_loading_state() {
    let state = State::new(vec!["HELLO".into()]);
    assert!(matches!(state.edition.load_state(), LoadState::Loading));
    assert!(state.edition.front_page().is_none());
}

#[test]
fn failed_fetch_suppresses_the_layout() {
    let mut state = State::new(Vec::new());
    state.edition.begin_fetch();
    state
        .edition
        .finish_fetch(Err(FetchError::Network("dns".into())));

    assert!(state.edition.front_page().is_none());
    assert!(state.edition.error().is_some());
    assert!(!state.edition.is_loading());
}

#[test]
fn selection_locks_and_close_unlocks() {
    let mut state = loaded((0..6).map(story).collect());

    front_page::update(&mut state, Message::SelectArticle(story(4).id));
    assert_eq!(state.edition.selected().map(|i| i.title.as_str()), Some("Story 4"));
    assert!(state.edition.is_scroll_locked());

    front_page::update(&mut state, Message::CloseArticle);
    assert!(state.edition.selected().is_none());
    assert!(!state.edition.is_scroll_locked());
}

#[test]
fn unknown_selection_is_ignored() {
    let mut state = loaded((0..3).map(story).collect());
    let event = front_page::update(&mut state, Message::SelectArticle(story(99).id));
    assert_eq!(event, Event::None);
    assert!(state.edition.selected().is_none());
    assert!(!state.edition.is_scroll_locked());
}

#[test]
fn reload_discards_the_previous_edition() {
    let mut state = loaded((0..3).map(story).collect());
    front_page::update(&mut state, Message::SelectArticle(story(0).id));

    assert_eq!(front_page::update(&mut state, Message::Reload), Event::Reload);
    assert!(state.edition.is_loading());
    assert!(state.edition.selected().is_none());
    assert!(!state.edition.is_scroll_locked());
}

#[test]
fn duplicate_ids_keep_the_first_story() {
    let mut twin = story(1);
    twin.title = "Impostor".into();
    let state = loaded(vec![story(0), story(1), twin]);

    let edition = state.edition.edition().expect("edition ready");
    assert_eq!(edition.len(), 2);
    assert_eq!(edition.items()[1].title, "Story 1");
}

#[tokio::test]
async fn sample_edition_renders_every_section() {
    let items = StaticEdition::sample().fetch().await.expect("sample never fails");
    let state = loaded(items);

    let page = state.edition.front_page().expect("edition ready");
    assert!(page.hero().is_some());
    assert_eq!(page.side().len(), 3);
    assert_eq!(page.daily_strip().len(), 4);
    assert!(page.has_archive());
}
