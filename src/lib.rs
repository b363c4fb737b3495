mod app;
pub mod components;
pub mod conf;

pub use app::{App, AppProps};
pub use components::theme::prelude::*;
pub use conf::SwitchConf;
