pub mod completions_cmd;
pub mod config_cmd;
pub mod detect;
pub mod doctor;
pub mod filters_cmd;
pub mod onboard;
