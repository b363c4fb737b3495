use theme_switch::{App, AppProps, SwitchConf};

fn main() {
    let conf = SwitchConf::derive();
    yew::Renderer::<App>::with_props(AppProps { conf }).render();
}
