// src/update.rs
//
// Pure reducer: applies a `Message` to `AppState` and returns the commands the
// DOM layer has to run.  Nothing here touches `web_sys`.
//
use crate::messages::{Command, Message, NavSource};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::Navigate { path, source } => {
            let resolved = state.routes().resolve(&path);

            // Same path again: keep the mounted page as it is.
            if source != NavSource::Initial
                && state.has_mounted()
                && resolved.path == state.current_path()
            {
                return commands;
            }

            if source == NavSource::Link {
                commands.push(Command::PushHistory(resolved.path.clone()));
            }

            let page = resolved.page;
            state.set_location(resolved.path, page);

            commands.push(Command::MountPage(page));
            commands.push(Command::MarkActiveLink(page));
            commands.push(Command::SetTitle(
                state.config().document_title(page.title()),
            ));
        }
    }

    commands
}
