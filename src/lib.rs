pub mod builder;
pub mod commit;
pub mod conf;
pub mod entry;
pub mod error;
pub mod info;
pub mod listing;
pub mod node;
pub mod picker;
pub mod selection;

mod define;
pub use define::*;
