//! In-memory bus used by the integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use playerbar::services::{BusClient, MediaError, PlayerId, mpris::PLAYER_INTERFACE};
use zbus::zvariant::{OwnedValue, Value};

pub const SPOTIFY: &str = "org.mpris.MediaPlayer2.spotify";
pub const SPOTIFY_INSTANCE: &str = "org.mpris.MediaPlayer2.spotify.instance123";

#[derive(Debug, Default)]
pub struct FakeState {
    pub names: Vec<String>,
    pub bus_down: bool,
    pub title: String,
    pub artists: Vec<String>,
    pub album: String,
    pub track_number: Option<i32>,
    pub status: String,
    pub fail_properties: bool,
    pub malformed_metadata: bool,
    pub fail_methods: bool,
    pub calls: Vec<(String, String)>,
}

/// Bus whose state tests change between ticks through a shared handle
#[derive(Debug, Clone, Default)]
pub struct FakeBus {
    state: Rc<RefCell<FakeState>>,
}

fn failure(reason: &str) -> zbus::Error {
    zbus::Error::Failure(reason.to_string())
}

impl FakeBus {
    pub fn with_names(names: &[&str]) -> Self {
        let bus = Self::default();
        bus.state.borrow_mut().names = names.iter().map(|n| n.to_string()).collect();
        bus
    }

    /// A bus with one player playing "A,B - T"
    pub fn playing() -> Self {
        let bus = Self::with_names(&["org.freedesktop.DBus", SPOTIFY, SPOTIFY_INSTANCE]);
        bus.set_track("T", &["A", "B"]);
        bus.set_status("Playing");
        bus
    }

    pub fn set_names(&self, names: &[&str]) {
        self.state.borrow_mut().names = names.iter().map(|n| n.to_string()).collect();
    }

    pub fn set_track(&self, title: &str, artists: &[&str]) {
        let mut state = self.state.borrow_mut();
        state.title = title.to_string();
        state.artists = artists.iter().map(|a| a.to_string()).collect();
    }

    pub fn set_status(&self, status: &str) {
        self.state.borrow_mut().status = status.to_string();
    }

    pub fn update(&self, change: impl FnOnce(&mut FakeState)) {
        change(&mut self.state.borrow_mut());
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.state.borrow().calls.clone()
    }

    fn metadata(state: &FakeState) -> OwnedValue {
        if state.malformed_metadata {
            return Value::from("garbage").try_to_owned().unwrap();
        }

        let mut map: HashMap<&str, Value<'static>> = HashMap::new();
        map.insert("xesam:title", Value::from(state.title.clone()));
        map.insert("xesam:album", Value::from(state.album.clone()));
        map.insert("xesam:artist", Value::from(state.artists.clone()));
        if let Some(track) = state.track_number {
            map.insert("xesam:trackNumber", Value::from(track));
        }

        Value::Dict(map.into())
            .try_to_owned()
            .unwrap()
    }
}

impl BusClient for FakeBus {
    fn list_names(&self) -> Result<Vec<String>, MediaError> {
        let state = self.state.borrow();
        if state.bus_down {
            return Err(MediaError::Discovery(failure("bus unreachable")));
        }
        Ok(state.names.clone())
    }

    fn get_property(
        &self,
        service: &PlayerId,
        interface: &str,
        property: &str,
    ) -> Result<OwnedValue, MediaError> {
        let state = self.state.borrow();
        let known = state.names.iter().any(|n| n == service.bus_name());

        if state.fail_properties || !known || interface != PLAYER_INTERFACE {
            return Err(MediaError::PropertyRead {
                player: service.clone(),
                interface: interface.to_string(),
                property: property.to_string(),
                source: failure("service unknown"),
            });
        }

        match property {
            "Metadata" => Ok(Self::metadata(&state)),
            "PlaybackStatus" => Ok(Value::from(state.status.clone())
                .try_to_owned()
                .unwrap()),
            other => Err(MediaError::PropertyRead {
                player: service.clone(),
                interface: interface.to_string(),
                property: other.to_string(),
                source: failure("no such property"),
            }),
        }
    }

    fn call_method(
        &self,
        service: &PlayerId,
        interface: &str,
        method: &str,
    ) -> Result<(), MediaError> {
        let mut state = self.state.borrow_mut();
        state
            .calls
            .push((service.bus_name().to_string(), method.to_string()));

        if state.fail_methods {
            return Err(MediaError::MethodCall {
                player: service.clone(),
                interface: interface.to_string(),
                method: method.to_string(),
                source: failure("service unknown"),
            });
        }
        Ok(())
    }
}

