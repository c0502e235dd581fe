//! Keyboard capture for the search strip and query submission.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::explorer::runtime::BackendHandle;
use crate::explorer::state::ExplorerState;

/// The live input buffer; distinct from the state's submitted query.
#[derive(Resource, Default)]
pub struct SearchInput {
    pub buffer: String,
}

/// Accumulates typed characters into the search buffer and submits on
/// Enter. Input is inert while the agent is thinking; `begin_thinking`
/// also refuses a second submission, so a queued Enter cannot start a
/// concurrent resolution.
pub fn search_input_system(
    mut input: ResMut<SearchInput>,
    mut state: ResMut<ExplorerState>,
    handle: Res<BackendHandle>,
    mut keyboard_events: EventReader<KeyboardInput>,
) {
    for event in keyboard_events.read() {
        if !event.state.is_pressed() {
            continue;
        }
        if state.is_agent_thinking() {
            continue;
        }

        match &event.logical_key {
            Key::Character(text) => {
                // control chords arrive as characters too; ignore them
                if text.chars().all(|c| !c.is_control()) {
                    input.buffer.push_str(text);
                }
            }
            Key::Space => input.buffer.push(' '),
            Key::Backspace => {
                input.buffer.pop();
            }
            Key::Escape => {
                if state.is_panel_open() {
                    state.close_panel();
                } else {
                    input.buffer.clear();
                }
            }
            Key::Enter => {
                let query = input.buffer.trim().to_string();
                if query.is_empty() {
                    continue;
                }
                if let Some(seq) = state.begin_thinking(&query) {
                    tracing::debug!(seq, %query, "submitting query");
                    handle.spawn_decide(seq, query);
                    input.buffer.clear();
                }
            }
            _ => {}
        }
    }
}
