//! Win and draw detection rules.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
