//! Event handling and state transition logic.
//!
//! The plugin shim translates Zellij events into [`Event`]s and feeds them to
//! [`handle_event`], which mutates [`AppState`] and returns whether the pane
//! needs a re-render plus the side effects to perform.
//!
//! Query edits recompute the filtered view before `handle_event` returns, so
//! the next render always reflects the latest keystroke.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, pane changes, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Empties the query.
    ClearQuery,
    /// Hides the pane.
    Close,

    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    Home,
    End,

    /// Mouse wheel, in lines. Positive scrolls down.
    Scroll {
        delta: isize,
    },
    /// Left click at a 0-based pane line.
    Click {
        line: usize,
    },
    /// Opens the selected domain.
    OpenSelected,

    /// The pane was drawn at a new size.
    Resize {
        rows: usize,
        cols: usize,
    },

    /// Host permissions granted; the list can now be requested from `domain_path`.
    PermissionsGranted {
        domain_path: String,
    },
    PermissionsDenied,

    WorkerResponse(WorkerResponse),

    /// The opener command exited unsuccessfully.
    OpenFailed {
        error: String,
    },
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
///
/// # Errors
///
/// Reserved for handlers that can fail; every current event is infallible.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => Ok((state.push_char(*c), vec![])),
        Event::Backspace => Ok((state.pop_char(), vec![])),
        Event::ClearQuery => Ok((state.clear_query(), vec![])),
        Event::Close => Ok((false, vec![Action::CloseFocus])),
        Event::MoveDown => Ok((state.move_selection_down(), vec![])),
        Event::MoveUp => Ok((state.move_selection_up(), vec![])),
        Event::PageDown => Ok((state.page_down(), vec![])),
        Event::PageUp => Ok((state.page_up(), vec![])),
        Event::Home => Ok((state.select_first(), vec![])),
        Event::End => Ok((state.select_last(), vec![])),
        Event::Scroll { delta } => Ok((state.scroll_by(*delta), vec![])),
        Event::Click { line } => match state.click(*line) {
            Some(url) => {
                tracing::debug!(url = %url, "row clicked");
                Ok((true, vec![Action::OpenUrl { url }]))
            }
            None => Ok((false, vec![])),
        },
        Event::OpenSelected => {
            let Some(url) = state.selected_url() else {
                tracing::debug!("nothing selected to open");
                return Ok((false, vec![]));
            };
            tracing::debug!(url = %url, "opening selected domain");
            Ok((false, vec![Action::OpenUrl { url }]))
        }
        Event::Resize { rows, cols } => Ok((state.resize(*rows, *cols), vec![])),
        Event::PermissionsGranted { domain_path } => {
            if !state.request_load() {
                return Ok((false, vec![]));
            }
            tracing::debug!(path = %domain_path, "requesting domain list");
            Ok((false, vec![Action::PostToWorker(WorkerMessage::load_domains(domain_path.clone()))]))
        }
        Event::PermissionsDenied => {
            tracing::warn!("permissions denied - domain list cannot be read");
            Ok((state.fail_loading("Permission to read the domain list was denied"), vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::DomainsLoaded { domains, source } => {
                tracing::debug!(source = %source, domain_count = domains.len(), "worker delivered domain list");
                Ok((state.finish_loading(domains.clone()), vec![]))
            }
            WorkerResponse::Error { message } => Ok((state.fail_loading(message), vec![])),
        },
        Event::OpenFailed { error } => {
            tracing::warn!(error = %error, "failed to open url");
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ListOptions, LoadState};
    use crate::ui::Theme;

    fn state() -> AppState {
        let mut state = AppState::new(Theme::default(), ListOptions::default())
            .with_shuffler(|_: &mut [String]| {});
        handle_event(&mut state, &Event::Resize { rows: 20, cols: 80 }).unwrap();
        state
    }

    fn loaded(domains: &[&str]) -> Event {
        Event::WorkerResponse(WorkerResponse::DomainsLoaded {
            domains: domains.iter().map(|d| (*d).to_string()).collect(),
            source: "/host/vercel-domain-list.txt".to_string(),
        })
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn view(state: &AppState) -> Vec<String> {
        state
            .browser()
            .map(|b| b.iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn list_is_requested_once_after_permissions() {
        let mut state = state();
        let granted = Event::PermissionsGranted {
            domain_path: "/host/vercel-domain-list.txt".to_string(),
        };

        let (_, actions) = handle_event(&mut state, &granted).unwrap();
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::LoadDomains {
                path: "/host/vercel-domain-list.txt".to_string(),
                trace_context: None,
            })]
        );

        let (_, actions) = handle_event(&mut state, &granted).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn denied_permissions_fail_the_load() {
        let mut state = state();
        assert!(handle_event(&mut state, &Event::PermissionsDenied).unwrap().0);
        assert!(matches!(state.load, LoadState::Failed(_)));
    }

    #[test]
    fn worker_list_makes_the_browser_ready() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &loaded(&["a.vercel.app", "b.vercel.app"])).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(matches!(state.load, LoadState::Ready(_)));
        assert_eq!(state.item_count(), 2);
    }

    #[test]
    fn worker_error_fails_the_load() {
        let mut state = state();
        let event = Event::WorkerResponse(WorkerResponse::Error {
            message: "Failed to load domain list".to_string(),
        });
        assert!(handle_event(&mut state, &event).unwrap().0);
        assert!(matches!(state.load, LoadState::Failed(_)));
    }

    #[test]
    fn rapid_query_updates_leave_only_the_last_view() {
        let mut state = state();
        handle_event(
            &mut state,
            &loaded(&["vercel-demo", "venus", "verve", "other"]),
        )
        .unwrap();

        type_str(&mut state, "verc");
        assert_eq!(state.query(), "verc");
        assert_eq!(view(&state), vec!["vercel-demo".to_string()]);

        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.query(), "ve");
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn escape_clears_then_closes() {
        let mut state = state();
        handle_event(&mut state, &loaded(&["foo.vercel.app", "bar.vercel.app"])).unwrap();
        type_str(&mut state, "foo");

        let (render, actions) = handle_event(&mut state, &Event::ClearQuery).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.item_count(), 2);

        let (_, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn enter_opens_the_selected_domain() {
        let mut state = state();
        handle_event(&mut state, &loaded(&["foo.vercel.app", "bar.vercel.app"])).unwrap();
        handle_event(&mut state, &Event::MoveDown).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenUrl {
                url: "https://bar.vercel.app".to_string()
            }]
        );
    }

    #[test]
    fn enter_with_no_match_does_nothing() {
        let mut state = state();
        handle_event(&mut state, &loaded(&["foo.vercel.app"])).unwrap();
        type_str(&mut state, "zzz");

        let (render, actions) = handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn clicking_a_row_opens_it() {
        let mut state = state();
        handle_event(&mut state, &loaded(&["foo.vercel.app", "bar.vercel.app"])).unwrap();

        // Second list line.
        let (render, actions) = handle_event(&mut state, &Event::Click { line: 10 }).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::OpenUrl {
                url: "https://bar.vercel.app".to_string()
            }]
        );
        assert_eq!(state.selected_domain(), Some("bar.vercel.app"));
    }

    #[test]
    fn typing_before_load_is_ignored() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn open_failure_does_not_render() {
        let mut state = state();
        let event = Event::OpenFailed {
            error: "xdg-open: not found".to_string(),
        };
        assert_eq!(handle_event(&mut state, &event).unwrap(), (false, vec![]));
    }
}
