pub use gloo_console as console;
pub use std::rc::Rc;
pub use stylist::css;
pub use stylist::yew::{styled_component, Global};
pub use yew::prelude::*;
