pub mod lora_panel;
pub mod preset_bar;

pub use lora_panel::LoraPanel;
pub use preset_bar::PresetBar;
