// src/widget/mod.rs

pub mod card;
pub mod record_list;
pub mod symbol_entry;

pub use card::SymbolCard;
pub use record_list::RecordList;
pub use symbol_entry::SymbolEntry;
