// src/gui/components/mod.rs
pub mod instance_table;
pub mod result_view;
pub mod status_bar;
pub mod url_bar;
