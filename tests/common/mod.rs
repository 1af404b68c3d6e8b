//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use pokedex::api::{CatalogClient, ClientOptions};
use pokedex::catalog::{Ability, Record, Sprites, Stat};
use pokedex::config::Config;
use pokedex::ui::app::App;
use std::time::Duration;

pub fn record(id: u32, name: &str, types: &[&str]) -> Record {
    Record {
        id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        types: types.iter().map(|t| t.to_string()).collect(),
        stats: vec![
            Stat {
                name: "hp".to_string(),
                base: 45,
                effort: 0,
            },
            Stat {
                name: "speed".to_string(),
                base: 90,
                effort: 2,
            },
        ],
        abilities: vec![
            Ability {
                name: "static".to_string(),
                hidden: false,
            },
            Ability {
                name: "lightning-rod".to_string(),
                hidden: true,
            },
        ],
        sprites: Sprites {
            front: Some(format!("https://img/{id}.png")),
            artwork: None,
        },
    }
}

/// A small mixed roster, deliberately not in id order.
pub fn sample_roster() -> Vec<Record> {
    vec![
        record(6, "charizard", &["fire", "flying"]),
        record(1, "bulbasaur", &["grass", "poison"]),
        record(4, "charmander", &["fire"]),
        record(16, "pidgey", &["normal", "flying"]),
        record(25, "pikachu", &["electric"]),
        record(7, "squirtle", &["water"]),
    ]
}

pub fn make_app() -> App {
    App::new(&Config::default())
}

pub fn client_for(base_url: String, timeout: Duration, max_concurrent: usize) -> CatalogClient {
    CatalogClient::new(ClientOptions {
        base_url,
        request_timeout: timeout,
        connect_timeout: Duration::from_secs(2),
        max_concurrent,
    })
    .expect("build client")
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}
