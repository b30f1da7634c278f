pub mod decode;
pub mod export_table;
pub mod info;
pub mod resolve;
pub mod select;
