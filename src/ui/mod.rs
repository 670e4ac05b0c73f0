//! Terminal UI: renders the board, translates key events into column drops,
//! and owns the end-of-round message and play-again flow.

mod app;
mod game_view;

pub use app::App;
