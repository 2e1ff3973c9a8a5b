//!
//! app.rs
//! Main loop
//!
//!
//! At start-up the session is open and the App renders the root page:
//!
//! App {
//!
//!     should_quit: false,
//!     session: EditorSession,                 // editor, card file, entity states
//!     page: Some(PageView),                   // root page
//!     rows: Vec<Row>,                         // the page flattened into rows
//!     selected: first selectable row,
//!
//! }
//!
//!
//! Each pass waits at most 100 ms for input:
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))    // draw
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {
//!         let msg = handle_event(event, &app);        // key → message
//!         update::update(&mut app, msg)               // message → state
//!     }
//!     session.sync_changes()                      // emitted roots back into the editor
//!     if app.save_requested { update::save().await }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

pub async fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        if app.session.sync_changes() > 0 {
            app.refresh();
        }

        if app.save_requested {
            update::save(app).await;
        }
    }

    Ok(())
}
