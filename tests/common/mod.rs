//! Shared fixtures for driving the plugin through `handle_event`.

#![allow(dead_code)]

use charbrowser::api::{ApiEndpoints, RequestContext};
use charbrowser::domain::Router;
use charbrowser::ui::{Theme, UIViewModel};
use charbrowser::{handle_event, Action, AppState, Event};
use serde_json::{json, Value};
use std::time::Duration;

pub const API: &str = "https://api.test/api";
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// A state mounted at `location`, with the mount actions.
pub fn mount(location: &str) -> (AppState, Vec<Action>) {
    let mut state = AppState::new(
        ApiEndpoints::from_root(API).unwrap(),
        Router::new(location),
        Theme::default(),
        DEBOUNCE,
    );
    let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
    (state, actions)
}

pub fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

/// Requests among `actions`.
pub fn fetches(actions: &[Action]) -> Vec<(String, RequestContext)> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::Fetch(request) => Some((request.url.clone(), request.context.clone())),
            _ => None,
        })
        .collect()
}

/// Resolves the single fetch in `actions` with `status` and `body`.
pub fn respond(state: &mut AppState, actions: &[Action], status: u16, body: &Value) -> Vec<Action> {
    let [(url, context)] = fetches(actions).try_into().expect("exactly one fetch");
    send(
        state,
        Event::FetchResolved {
            context,
            status,
            body: serde_json::to_vec(body).unwrap(),
            url,
        },
    )
}

pub fn viewmodel(state: &AppState) -> UIViewModel {
    state.compute_viewmodel(40, 120)
}

pub fn character(id: u32, name: &str, episodes: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://api.test/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://api.test/api/location/3" },
        "image": format!("https://api.test/api/character/avatar/{id}.jpeg"),
        "episode": episodes,
    })
}

pub fn page(results: Vec<Value>, pages: u32, next: Option<&str>, prev: Option<&str>) -> Value {
    json!({
        "info": { "count": results.len(), "pages": pages, "next": next, "prev": prev },
        "results": results,
    })
}
