pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod key_value;
pub mod list_item;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceClose};
pub use heading::Heading;
pub use key_value::KeyValue;
pub use list_item::{ListItem, ListMarker};
pub use table::Table;
pub use thematic_break::ThematicBreak;
