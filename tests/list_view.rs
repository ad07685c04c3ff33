//! Character list behavior: fetching, paging, debounced search and location
//! synchronization.

mod common;

use charbrowser::api::RequestContext;
use charbrowser::app::{LoadPhase, Screen};
use charbrowser::ui::{Body, NO_RESULTS};
use charbrowser::{Action, AppState, Event};
use common::*;
use serde_json::json;

fn list(state: &AppState) -> &charbrowser::app::ListView {
    match &state.screen {
        Screen::List(list) => list,
        other => panic!("expected list screen, got {other:?}"),
    }
}

fn type_text(state: &mut AppState, text: &str) -> usize {
    send(state, Event::FocusSearch);
    text.chars()
        .map(|c| send(state, Event::Char(c)))
        .filter(|actions| actions == &vec![Action::ArmTimer(DEBOUNCE)])
        .count()
}

#[test]
fn mount_fetches_query_from_location() {
    let (state, actions) = mount("/?page=2&name=morty");

    assert_eq!(
        fetches(&actions),
        vec![(
            format!("{API}/character?page=2&name=morty"),
            RequestContext::CharacterPage { view: 1, name: "morty".into(), page: 2 }
        )]
    );
    assert_eq!(list(&state).phase, LoadPhase::Loading);
    assert!(matches!(viewmodel(&state).body, Body::Spinner(ref s) if s.label == "spinner"));
}

#[test]
fn invalid_page_in_location_loads_first_page() {
    let (_, actions) = mount("/?page=banana");
    assert_eq!(fetches(&actions)[0].0, format!("{API}/character?page=1&name="));
}

#[test]
fn loaded_page_renders_table_with_pager() {
    let (mut state, actions) = mount("/");
    respond(
        &mut state,
        &actions,
        200,
        &page(vec![character(1, "Rick Sanchez", &[]), character(2, "Morty Smith", &[])], 42, Some("n"), None),
    );

    assert_eq!(list(&state).phase, LoadPhase::Loaded);
    let Body::Table(table) = viewmodel(&state).body else {
        panic!("expected table");
    };
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].cells[2].text, "Rick Sanchez");
    assert_eq!(table.rows[0].link, "/character/1");
    assert_eq!(table.page_label, "Page 1 of 42");
    assert!(table.next_enabled);
    assert!(!table.prev_enabled);
    assert_eq!(table.empty_message, None);
}

#[test]
fn empty_results_show_no_results_with_disabled_pager() {
    let (mut state, actions) = mount("/?name=zzz");
    respond(&mut state, &actions, 404, &json!({ "error": "There is nothing here" }));

    let Body::Table(table) = viewmodel(&state).body else {
        panic!("expected table");
    };
    assert_eq!(table.empty_message, Some(NO_RESULTS));
    assert_eq!(NO_RESULTS, "No results.");
    assert!(table.rows.is_empty());
    assert!(!table.prev_enabled);
    assert!(!table.next_enabled);

    assert!(send(&mut state, Event::NextPage).is_empty());
    assert!(send(&mut state, Event::PrevPage).is_empty());
}

#[test]
fn undecodable_body_degrades_to_empty_table() {
    let (mut state, actions) = mount("/");
    send(
        &mut state,
        Event::FetchResolved {
            context: fetches(&actions)[0].1.clone(),
            status: 200,
            body: b"<html>bad gateway</html>".to_vec(),
            url: fetches(&actions)[0].0.clone(),
        },
    );

    let list = list(&state);
    assert_eq!(list.phase, LoadPhase::Loaded);
    assert!(!list.has_next && !list.has_prev);
    assert!(matches!(viewmodel(&state).body, Body::Table(ref t) if t.empty_message.is_some()));
}

#[test]
fn paging_pushes_location_and_refetches() {
    let (mut state, actions) = mount("/");
    respond(&mut state, &actions, 200, &page(vec![character(1, "Rick", &[])], 3, Some("n"), None));

    let actions = send(&mut state, Event::NextPage);
    assert_eq!(fetches(&actions)[0].0, format!("{API}/character?page=2&name="));
    assert_eq!(state.router.current(), "/?page=2");

    respond(&mut state, &actions, 200, &page(vec![character(21, "Summer", &[])], 3, Some("n"), Some("p")));
    let actions = send(&mut state, Event::PrevPage);
    assert_eq!(fetches(&actions)[0].0, format!("{API}/character?page=1&name="));
    assert_eq!(state.router.current(), "/?page=1");
}

#[test]
fn typing_is_shown_immediately_but_committed_after_debounce() {
    let (mut state, actions) = mount("/?page=3");
    respond(&mut state, &actions, 200, &page(vec![character(1, "Rick", &[])], 5, Some("n"), Some("p")));

    assert_eq!(type_text(&mut state, "rick"), 4);
    assert_eq!(list(&state).search_input, "rick");
    assert_eq!(list(&state).search_text, "");
    assert_eq!(list(&state).page, 3);
    assert!(matches!(viewmodel(&state).search_bar, Some(ref bar) if bar.query == "rick" && bar.is_focused));

    for _ in 0..3 {
        assert!(send(&mut state, Event::TimerElapsed).is_empty());
        assert_eq!(state.router.current(), "/?page=3");
    }

    let actions = send(&mut state, Event::TimerElapsed);
    assert_eq!(
        fetches(&actions),
        vec![(
            format!("{API}/character?page=1&name=rick"),
            RequestContext::CharacterPage { view: 1, name: "rick".into(), page: 1 }
        )]
    );
    assert_eq!(state.router.current(), "/?page=1&name=rick");
    assert_eq!(list(&state).search_text, "rick");
}

#[test]
fn clearing_search_omits_name_from_location() {
    let (mut state, actions) = mount("/?page=1&name=rick");
    respond(&mut state, &actions, 200, &page(vec![character(1, "Rick", &[])], 1, None, None));

    send(&mut state, Event::FocusSearch);
    for _ in 0..4 {
        send(&mut state, Event::Backspace);
    }
    assert!(send(&mut state, Event::Backspace).is_empty());
    for _ in 0..3 {
        send(&mut state, Event::TimerElapsed);
    }
    let actions = send(&mut state, Event::TimerElapsed);

    assert_eq!(fetches(&actions)[0].0, format!("{API}/character?page=1&name="));
    assert_eq!(state.router.current(), "/?page=1");
}

#[test]
fn retyping_the_committed_search_does_not_refetch() {
    let (mut state, _) = mount("/?page=1&name=rick");
    send(&mut state, Event::FocusSearch);
    send(&mut state, Event::Backspace);
    send(&mut state, Event::Char('k'));

    send(&mut state, Event::TimerElapsed);
    assert!(send(&mut state, Event::TimerElapsed).is_empty());
    assert_eq!(state.router.entries().len(), 1);
}

#[test]
fn later_resolution_wins_even_for_an_older_query() {
    let (mut state, initial) = mount("/");
    type_text(&mut state, "m");
    let search = send(&mut state, Event::TimerElapsed);
    assert_eq!(fetches(&search)[0].0, format!("{API}/character?page=1&name=m"));

    respond(&mut state, &search, 200, &page(vec![character(2, "Morty Smith", &[])], 1, None, None));
    assert_eq!(list(&state).phase, LoadPhase::Loading);

    respond(&mut state, &initial, 200, &page(vec![character(1, "Rick Sanchez", &[])], 42, Some("n"), None));
    assert_eq!(list(&state).phase, LoadPhase::Loaded);
    assert_eq!(list(&state).data.as_ref().unwrap().items[0].name, "Rick Sanchez");
    assert!(list(&state).has_next);
}

#[test]
fn page_from_a_replaced_list_is_dropped() {
    let (mut state, actions) = mount("/");
    respond(&mut state, &actions, 200, &page(vec![character(1, "Rick", &[])], 3, Some("n"), None));

    let second_page = send(&mut state, Event::NextPage);
    let remount = send(&mut state, Event::HistoryBack);
    assert_eq!(state.router.current(), "/");
    assert_eq!(
        fetches(&remount)[0].1,
        RequestContext::CharacterPage { view: 2, name: String::new(), page: 1 }
    );

    let stale = page(vec![character(21, "Summer", &[])], 3, Some("n"), Some("p"));
    let actions = respond(&mut state, &second_page, 200, &stale);
    assert!(actions.is_empty());
    assert_eq!(list(&state).phase, LoadPhase::Loading);
    assert!(list(&state).data.is_none());

    respond(&mut state, &remount, 200, &page(vec![character(1, "Rick", &[])], 3, Some("n"), None));
    assert_eq!(list(&state).phase, LoadPhase::Loaded);
    assert_eq!(list(&state).data.as_ref().unwrap().items[0].name, "Rick");
    assert_eq!(list(&state).page, 1);
}

#[test]
fn enter_opens_selected_character() {
    let (mut state, actions) = mount("/");
    respond(
        &mut state,
        &actions,
        200,
        &page(vec![character(1, "Rick", &[]), character(2, "Morty", &[])], 1, None, None),
    );

    send(&mut state, Event::KeyDown);
    let actions = send(&mut state, Event::OpenSelected);
    assert_eq!(state.router.current(), "/character/2");
    assert_eq!(fetches(&actions)[0].0, format!("{API}/character/2"));

    let actions = send(&mut state, Event::HistoryBack);
    assert_eq!(state.router.current(), "/");
    assert_eq!(fetches(&actions)[0].0, format!("{API}/character?page=1&name="));
}

#[test]
fn search_highlights_committed_query_in_names() {
    let (mut state, actions) = mount("/?name=rick");
    respond(&mut state, &actions, 200, &page(vec![character(1, "Rick Sanchez", &[])], 1, None, None));

    let Body::Table(table) = viewmodel(&state).body else {
        panic!("expected table");
    };
    assert_eq!(table.rows[0].cells[2].highlight_ranges, vec![(0, 4)]);
}
