//! Zellij plugin entry point.
//!
//! Translates Zellij events into [`almostevery::Event`]s, runs them through the
//! application layer, and performs the resulting [`Action`]s against the host
//! API. Everything that does not need the host lives in the library crate.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use almostevery::worker::{DomainLoaderWorker, WorkerMessage, WorkerResponse};
use almostevery::{handle_event, Action, Config, Event};

register_plugin!(State);
register_worker!(DomainLoaderWorker, domain_loader_worker, DOMAIN_LOADER_WORKER);

/// Name shared by the worker registration and its custom messages.
const WORKER_NAME: &str = "domain_loader";

/// Context key marking `run_command` calls made to open a URL.
const OPEN_URL_CONTEXT: &str = "open_url";

struct State {
    app: almostevery::AppState,
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: almostevery::initialize(&config),
            config,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        almostevery::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = almostevery::initialize(&config);
        self.config = config;

        request_permission(&[
            PermissionType::ChangeApplicationState,
            PermissionType::RunCommands,
            PermissionType::FullHdAccess,
        ]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::CustomMessage,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let _span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(&self.app, key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                match Self::map_command_result_event(exit_code, &stderr, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => self.map_permission_result(status),
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        // Layout changes have to reach the scroll state before drawing.
        self.dispatch(&Event::Resize { rows, cols });
        almostevery::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(app: &almostevery::AppState, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::MoveDown),
                BareKey::Char('p') => Some(Event::MoveUp),
                _ => None,
            };
        }
        if key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        Some(match key.bare_key {
            BareKey::Down => Event::MoveDown,
            BareKey::Up => Event::MoveUp,
            BareKey::PageDown => Event::PageDown,
            BareKey::PageUp => Event::PageUp,
            BareKey::Home => Event::Home,
            BareKey::End => Event::End,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Backspace => Event::Backspace,
            BareKey::Esc if app.query().is_empty() => Event::Close,
            BareKey::Esc => Event::ClearQuery,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        let delta = |lines: usize| isize::try_from(lines).unwrap_or(isize::MAX);
        match mouse {
            Mouse::ScrollDown(lines) => Some(Event::Scroll { delta: delta(lines) }),
            Mouse::ScrollUp(lines) => Some(Event::Scroll { delta: -delta(lines) }),
            Mouse::LeftClick(line, _col) => usize::try_from(line).ok().map(|line| Event::Click { line }),
            _ => None,
        }
    }

    fn map_permission_result(&self, status: PermissionStatus) -> Event {
        match status {
            PermissionStatus::Granted => Event::PermissionsGranted {
                domain_path: self.config.domain_path().to_string_lossy().into_owned(),
            },
            PermissionStatus::Denied => Event::PermissionsDenied,
        }
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn map_command_result_event(
        exit_code: Option<i32>,
        stderr: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let url = context.get(OPEN_URL_CONTEXT)?;
        if exit_code == Some(0) {
            tracing::debug!(url = %url, "url opened");
            return None;
        }

        let stderr = String::from_utf8_lossy(stderr);
        Some(Event::OpenFailed {
            error: format!("{url}: exit code {exit_code:?}: {}", stderr.trim()),
        })
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(WORKER_NAME.to_string()),
                name: WORKER_NAME.to_string(),
                payload,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => self.post_worker_message(message),
            Action::OpenUrl { url } => {
                let mut context = BTreeMap::new();
                context.insert(OPEN_URL_CONTEXT.to_string(), url.clone());
                run_command(&[self.config.open_command.as_str(), url.as_str()], context);
            }
        }
    }
}
