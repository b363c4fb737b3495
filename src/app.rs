use crate::components::imports::*;
use crate::components::theme::prelude::*;
use crate::conf::SwitchConf;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub conf: SwitchConf,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let SwitchConf {
        attribute,
        btn_type,
    } = props.conf;

    html! {
        <WithTheme>
            <ThemeStyles/>
            <ThemeSwitch attribute={attribute} btn_type={btn_type}/>
            <CurrentTheme/>
        </WithTheme>
    }
}

// reads and flips the theme through the context, the switch follows
#[function_component(CurrentTheme)]
fn current_theme() -> Html {
    let handle = use_theme();
    let onclick = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.toggle())
    };

    html! {
        <p class="theme-current">
            { format!("Current theme: {}", handle.theme) }
            <button {onclick} type="button">{ "Flip" }</button>
        </p>
    }
}
