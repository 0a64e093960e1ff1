pub mod api_url;
pub mod config_cmd;
pub mod count;
pub mod format;
