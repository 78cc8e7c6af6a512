pub mod builder;
pub mod html;
pub mod narration;
pub mod screen;
pub mod text;

pub use builder::build_timeline;
pub use narration::{Narrator, NullNarrator};
pub use screen::{AllowedResponses, Screen, ScreenContent};
