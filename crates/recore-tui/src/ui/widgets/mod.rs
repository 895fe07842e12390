//! Reusable widgets for the recore TUI.

mod button;
mod card_grid;
mod footer;
mod navbar;
mod search_bar;
pub mod status_bar;
pub mod text_input;

pub use button::{Button, ButtonKind};
pub use card_grid::{Card, CardGrid};
pub use footer::{Footer, RIGHTS_NOTICE};
pub use navbar::Navbar;
pub use search_bar::{SearchBar, SEARCH_TITLE};
pub use status_bar::{KeyHint, StatusBar};
pub use text_input::{TextInput, TextInputState};
