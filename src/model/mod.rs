//! Data model for table input and extracted records.
//!
//! Input side: a [`Document`] of [`Page`]s, each holding the [`Table`]s an
//! upstream extractor recovered. Output side: [`ValveItem`] records wrapped
//! in an [`ItemList`].

mod document;
mod item;
mod page;
mod table;

pub use document::Document;
pub use item::{ItemList, ValveItem};
pub use page::Page;
pub use table::{RawCell, Table, TableRow};
