pub mod forms;
pub mod header;
pub mod output_panel;
pub mod tab_bar;
