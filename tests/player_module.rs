//! Integration tests for the player module update cycle and input handling.

#![allow(clippy::unwrap_used)]

mod common;

use common::{FakeBus, SPOTIFY, SPOTIFY_INSTANCE};
use playerbar::{
    config::PlayerConfig,
    module::{ModuleError, ModuleState, MouseButton, PlayerModule, WidgetKind},
};

fn config() -> PlayerConfig {
    PlayerConfig::default()
}

fn concise() -> PlayerConfig {
    PlayerConfig {
        concise_controls: true,
        ..PlayerConfig::default()
    }
}

fn state_of(module: &PlayerModule<FakeBus>, kind: WidgetKind) -> Option<String> {
    module
        .widget(kind)
        .and_then(|w| w.state())
        .map(str::to_string)
}

mod setup {
    use super::*;

    #[test]
    fn selects_longest_player_name() {
        let module = PlayerModule::new(FakeBus::playing(), &config()).unwrap();

        assert_eq!(module.player().unwrap().bus_name(), SPOTIFY_INSTANCE);
        assert_eq!(module.state(), ModuleState::Active);
    }

    #[test]
    fn hidden_until_first_poll() {
        let module = PlayerModule::new(FakeBus::playing(), &config()).unwrap();

        assert!(module.hidden());
        assert_eq!(module.song(), "");
    }

    #[test]
    fn widgets_follow_layout_order() {
        let config = PlayerConfig {
            layout: "next,pause,song,previous".to_string(),
            ..PlayerConfig::default()
        };

        let module = PlayerModule::new(FakeBus::playing(), &config).unwrap();
        let names: Vec<&str> = module.widgets().iter().map(|w| w.name()).collect();

        assert_eq!(names, vec!["next", "pause", "song", "previous"]);
    }

    #[test]
    fn unknown_layout_token_fails_setup() {
        let config = PlayerConfig {
            layout: "song,player.bogus".to_string(),
            ..PlayerConfig::default()
        };

        let err = PlayerModule::new(FakeBus::playing(), &config)
            .err()
            .unwrap();

        assert!(matches!(&err, ModuleError::UnknownWidget { token } if token == "player.bogus"));
    }

    #[test]
    fn unknown_placeholder_fails_setup_without_player() {
        let config = PlayerConfig {
            format: "{artist} - {genre}".to_string(),
            ..PlayerConfig::default()
        };

        let result = PlayerModule::new(FakeBus::default(), &config);

        assert!(matches!(
            result,
            Err(ModuleError::UnknownPlaceholder { name }) if name == "genre"
        ));
    }

    #[test]
    fn concise_controls_bind_song_widget() {
        let with = PlayerModule::new(FakeBus::playing(), &concise()).unwrap();
        let without = PlayerModule::new(FakeBus::playing(), &config()).unwrap();

        assert_eq!(with.widget(WidgetKind::Song).unwrap().bindings().len(), 3);
        assert_eq!(without.widget(WidgetKind::Song).unwrap().bindings().len(), 0);
    }
}

mod polling {
    use super::*;

    #[test]
    fn renders_song_and_states() {
        let mut module = PlayerModule::new(FakeBus::playing(), &config()).unwrap();

        module.update();

        assert_eq!(module.song(), "A,B - T");
        assert!(!module.hidden());
        assert_eq!(module.state(), ModuleState::Active);

        let song = module.widget(WidgetKind::Song).unwrap();
        assert_eq!(song.full_text(), "A,B - T");
        assert_eq!(song.state(), Some("song"));
        assert_eq!(state_of(&module, WidgetKind::Pause).as_deref(), Some("playing"));
        assert_eq!(state_of(&module, WidgetKind::Previous).as_deref(), Some("prev"));
        assert_eq!(state_of(&module, WidgetKind::Next).as_deref(), Some("next"));
    }

    #[test]
    fn anything_but_playing_is_paused() {
        let bus = FakeBus::playing();
        let mut module = PlayerModule::new(bus.clone(), &config()).unwrap();

        for status in ["Paused", "Stopped", "Buffering", ""] {
            bus.set_status(status);
            module.update();

            assert_eq!(
                state_of(&module, WidgetKind::Pause).as_deref(),
                Some("paused"),
                "status {status:?}"
            );
        }

        bus.set_status("Playing");
        module.update();
        assert_eq!(state_of(&module, WidgetKind::Pause).as_deref(), Some("playing"));
    }

    #[test]
    fn track_changes_show_on_next_tick() {
        let bus = FakeBus::playing();
        let mut module = PlayerModule::new(bus.clone(), &config()).unwrap();
        module.update();

        bus.set_track("Other", &["C"]);
        module.update();

        assert_eq!(module.song(), "C - Other");
    }

    #[test]
    fn repeated_failures_stay_hidden_then_recover() {
        let bus = FakeBus::playing();
        let mut module = PlayerModule::new(bus.clone(), &config()).unwrap();
        module.update();
        assert!(!module.hidden());

        bus.update(|s| s.fail_properties = true);
        for _ in 0..5 {
            module.update();

            assert_eq!(module.song(), "");
            assert!(module.hidden());
            assert_eq!(module.state(), ModuleState::Errored);
        }

        bus.update(|s| s.fail_properties = false);
        module.update();

        assert_eq!(module.song(), "A,B - T");
        assert!(!module.hidden());
        assert_eq!(module.state(), ModuleState::Active);
    }

    #[test]
    fn malformed_metadata_hides_module() {
        let bus = FakeBus::playing();
        let mut module = PlayerModule::new(bus.clone(), &config()).unwrap();
        module.update();

        bus.update(|s| s.malformed_metadata = true);
        module.update();

        assert!(module.hidden());
        assert_eq!(module.state(), ModuleState::Errored);
        assert_eq!(module.widget(WidgetKind::Song).unwrap().full_text(), "");
    }

    #[test]
    fn vanished_player_is_not_replaced_without_reset() {
        let bus = FakeBus::playing();
        let mut module = PlayerModule::new(bus.clone(), &config()).unwrap();
        module.update();

        bus.set_names(&[SPOTIFY]);
        module.update();

        assert!(module.hidden());
        assert_eq!(module.player().unwrap().bus_name(), SPOTIFY_INSTANCE);

        module.reset();
        module.update();

        assert_eq!(module.player().unwrap().bus_name(), SPOTIFY);
        assert_eq!(module.song(), "A,B - T");
    }

    #[test]
    fn empty_render_counts_as_hidden() {
        let config = PlayerConfig {
            format: "{album}".to_string(),
            ..PlayerConfig::default()
        };
        let mut module = PlayerModule::new(FakeBus::playing(), &config).unwrap();

        module.update();

        assert!(module.hidden());
        assert_eq!(module.state(), ModuleState::Active);
    }

    #[test]
    fn track_number_is_rendered() {
        let bus = FakeBus::playing();
        bus.update(|s| s.track_number = Some(4));
        let config = PlayerConfig {
            format: "{trackNumber}. {title}".to_string(),
            ..PlayerConfig::default()
        };
        let mut module = PlayerModule::new(bus, &config).unwrap();

        module.update();

        assert_eq!(module.song(), "4. T");
    }
}

mod discovery {
    use super::*;

    #[test]
    fn no_player_keeps_looking_every_tick() {
        let bus = FakeBus::with_names(&["org.freedesktop.DBus"]);
        bus.set_track("T", &["A"]);
        bus.set_status("Paused");
        let mut module = PlayerModule::new(bus.clone(), &config()).unwrap();

        assert_eq!(module.state(), ModuleState::NoPlayer);
        for _ in 0..3 {
            module.update();
            assert_eq!(module.state(), ModuleState::NoPlayer);
            assert!(module.hidden());
        }

        bus.set_names(&["org.freedesktop.DBus", SPOTIFY]);
        module.update();

        assert_eq!(module.state(), ModuleState::Active);
        assert_eq!(module.player().unwrap().bus_name(), SPOTIFY);
        assert_eq!(module.song(), "A - T");
        assert_eq!(state_of(&module, WidgetKind::Pause).as_deref(), Some("paused"));
    }

    #[test]
    fn unreachable_bus_is_not_fatal() {
        let bus = FakeBus::playing();
        bus.update(|s| s.bus_down = true);

        let mut module = PlayerModule::new(bus.clone(), &config()).unwrap();
        module.update();

        assert_eq!(module.state(), ModuleState::NoPlayer);
        assert!(module.hidden());

        bus.update(|s| s.bus_down = false);
        module.update();

        assert_eq!(module.state(), ModuleState::Active);
        assert!(!module.hidden());
    }

    #[test]
    fn ignored_players_are_skipped() {
        let config = PlayerConfig {
            ignored_players: vec!["instance".to_string()],
            ..PlayerConfig::default()
        };

        let module = PlayerModule::new(FakeBus::playing(), &config).unwrap();

        assert_eq!(module.player().unwrap().bus_name(), SPOTIFY);
    }
}

mod input {
    use super::*;

    #[test]
    fn control_widgets_send_their_command() {
        let bus = FakeBus::playing();
        let module = PlayerModule::new(bus.clone(), &config()).unwrap();

        assert!(module.handle_input("previous", MouseButton::Left));
        assert!(module.handle_input("pause", MouseButton::Left));
        assert!(module.handle_input("next", MouseButton::Left));

        let methods: Vec<String> = bus.calls().into_iter().map(|(_, m)| m).collect();
        assert_eq!(methods, vec!["Previous", "PlayPause", "Next"]);
    }

    #[test]
    fn song_is_display_only_by_default() {
        let bus = FakeBus::playing();
        let module = PlayerModule::new(bus.clone(), &config()).unwrap();

        assert!(!module.handle_input("song", MouseButton::Left));
        assert!(!module.handle_input("song", MouseButton::WheelUp));
        assert!(bus.calls().is_empty());
    }

    #[test]
    fn concise_controls_on_song() {
        let bus = FakeBus::playing();
        let module = PlayerModule::new(bus.clone(), &concise()).unwrap();

        module.handle_input("song", MouseButton::Left);
        module.handle_input("song", MouseButton::WheelUp);
        module.handle_input("song", MouseButton::WheelDown);

        let methods: Vec<String> = bus.calls().into_iter().map(|(_, m)| m).collect();
        assert_eq!(methods, vec!["PlayPause", "Next", "Previous"]);
    }

    #[test]
    fn unbound_buttons_and_widgets_do_nothing() {
        let bus = FakeBus::playing();
        let module = PlayerModule::new(bus.clone(), &config()).unwrap();

        assert!(!module.handle_input("pause", MouseButton::WheelUp));
        assert!(!module.handle_input("volume", MouseButton::Left));
        assert!(bus.calls().is_empty());
    }

    #[test]
    fn commands_target_player_chosen_at_setup() {
        let bus = FakeBus::with_names(&[SPOTIFY]);
        let module = PlayerModule::new(bus.clone(), &config()).unwrap();

        bus.set_names(&[SPOTIFY, SPOTIFY_INSTANCE]);
        module.handle_input("next", MouseButton::Left);

        assert_eq!(bus.calls()[0].0, SPOTIFY);
    }

    #[test]
    fn reset_retargets_commands() {
        let bus = FakeBus::with_names(&[SPOTIFY]);
        let mut module = PlayerModule::new(bus.clone(), &config()).unwrap();

        bus.set_names(&[SPOTIFY, SPOTIFY_INSTANCE]);
        module.reset();
        module.handle_input("next", MouseButton::Left);

        assert_eq!(bus.calls()[0].0, SPOTIFY_INSTANCE);
    }

    #[test]
    fn failed_dispatch_is_silent() {
        let bus = FakeBus::playing();
        bus.update(|s| s.fail_methods = true);
        let module = PlayerModule::new(bus.clone(), &config()).unwrap();

        assert!(module.handle_input("pause", MouseButton::Left));
        assert_eq!(bus.calls().len(), 1);
    }

    #[test]
    fn no_player_means_no_dispatch() {
        let bus = FakeBus::default();
        let module = PlayerModule::new(bus.clone(), &config()).unwrap();

        assert!(!module.handle_input("pause", MouseButton::Left));
        assert!(bus.calls().is_empty());
    }
}
