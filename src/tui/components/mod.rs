// TUI components - reusable UI elements

pub mod certificates;
pub mod constellation;
pub mod experience;
pub mod eyes;
pub mod logs_panel;
pub mod skills;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
