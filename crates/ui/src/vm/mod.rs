mod game_vm;
mod markdown_vm;
mod time_fmt;

pub use game_vm::{Feedback, GameIntent, GameVm, StageCardVm};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use time_fmt::format_elapsed;
