//! Terminal UI: translates key presses and mouse clicks into moves and draws
//! the board, current player, and end-of-game notice.

mod app;
pub mod game_view;
pub mod input;
pub mod notice;

pub use app::App;
pub use notice::end_notice;
