// Server-side renders of the widget. Nothing here reaches for browser APIs:
// the switch only resolves after the first render, which never happens on the server.

use theme_switch::*;
use yew::prelude::*;
use yew::ServerRenderer;

async fn render_button<COMP>(theme: Theme) -> String
where
    COMP: BaseComponent<Properties = ButtonProps>,
{
    ServerRenderer::<COMP>::with_props(move || ButtonProps {
        theme,
        onactivate: Callback::noop(),
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn switch_renders_nothing_before_resolution() {
    for btn_type in [ButtonKind::WithSystem, ButtonKind::LightIcon] {
        let rendered = ServerRenderer::<ThemeSwitch>::with_props(move || ThemeSwitchProps {
            attribute: ThemeAttribute::Class,
            btn_type,
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(rendered, "");
    }
}

#[function_component]
fn SwitchUnderProvider() -> Html {
    html! {
        <WithTheme>
            <ThemeSwitch/>
        </WithTheme>
    }
}

#[tokio::test]
async fn switch_under_provider_renders_nothing_before_resolution() {
    let rendered = ServerRenderer::<SwitchUnderProvider>::new()
        .hydratable(false)
        .render()
        .await;

    assert_eq!(rendered, "");
}

#[tokio::test]
async fn dark_button_markup() {
    let rendered = render_button::<Dark>(Theme::Light).await;

    assert!(rendered.starts_with("<button"));
    assert!(rendered.contains(r#"id="theme-dark""#));
    assert!(rendered.contains(r#"aria-label="light mode""#));
    assert!(rendered.contains(r#"type="button""#));
    assert!(rendered.contains("Dark"));
    assert!(rendered.contains("<title>Dark Icon</title>"));
}

#[tokio::test]
async fn light_and_system_buttons_markup() {
    let light = render_button::<Light>(Theme::Dark).await;
    assert!(light.contains(r#"id="theme-light""#));
    assert!(light.contains(r#"aria-label="dark mode""#));
    assert!(light.contains("<title>Light Icon</title>"));

    let system = render_button::<System>(Theme::Dark).await;
    assert!(system.contains(r#"id="theme-system""#));
    assert!(system.contains(r#"aria-label="dark mode""#));
    assert!(system.contains("<title>System Icon</title>"));
}

#[tokio::test]
async fn combined_button_tooltip_names_the_other_theme() {
    let when_dark = render_button::<DarkLight>(Theme::Dark).await;
    assert!(when_dark.contains(r#"id="dark-light""#));
    assert!(when_dark.contains("To Light"));
    assert!(!when_dark.contains("To Dark"));

    let when_light = render_button::<DarkLight>(Theme::Light).await;
    assert!(when_light.contains("To Dark"));
    assert!(when_light.contains("<title>Dark Light Icon</title>"));
}

#[tokio::test]
async fn picker_renders_system_light_dark_in_order() {
    let rendered = ServerRenderer::<WithSystem>::with_props(|| WithSystemProps {
        theme: Theme::Dark,
        onsystem: Callback::noop(),
        onlight: Callback::noop(),
        ondark: Callback::noop(),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(rendered.starts_with(r#"<div class="theme-picker">"#));
    assert_eq!(rendered.matches("<button").count(), 3);

    let position = |id: &str| rendered.find(&format!(r#"id="{id}""#)).unwrap();
    assert!(position("theme-system") < position("theme-light"));
    assert!(position("theme-light") < position("theme-dark"));
}

async fn render_switch_buttons(btn_type: ButtonKind, theme: Theme) -> String {
    ServerRenderer::<SwitchButtons>::with_props(move || SwitchButtonsProps {
        btn_type,
        theme,
        callbacks: SwitchCallbacks {
            toggle_theme: Callback::noop(),
            toggle_light: Callback::noop(),
            toggle_dark: Callback::noop(),
            toggle_system: Callback::noop(),
        },
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn light_icon_switch_renders_one_combined_button() {
    let rendered = render_switch_buttons(ButtonKind::LightIcon, Theme::Dark).await;

    assert_eq!(rendered.matches("<button").count(), 1);
    assert!(rendered.contains(r#"id="dark-light""#));
    assert!(!rendered.contains("theme-picker"));
    assert!(rendered.contains("To Light"));
}

#[tokio::test]
async fn with_system_switch_renders_the_picker() {
    let rendered = render_switch_buttons(ButtonKind::WithSystem, Theme::Light).await;

    assert!(rendered.starts_with(r#"<div class="theme-picker">"#));
    assert_eq!(rendered.matches("<button").count(), 3);
    assert!(!rendered.contains(r#"id="dark-light""#));
    assert_eq!(rendered.matches(r#"aria-label="light mode""#).count(), 3);
}

#[function_component]
fn ThemeReader() -> Html {
    let handle = use_theme();
    html! { <span>{ handle.theme.to_string() }</span> }
}

#[function_component]
fn ReaderUnderProvider() -> Html {
    html! {
        <WithTheme>
            <ThemeReader/>
        </WithTheme>
    }
}

#[tokio::test]
async fn provider_starts_with_light() {
    let rendered = ServerRenderer::<ReaderUnderProvider>::new()
        .hydratable(false)
        .render()
        .await;

    assert_eq!(rendered, "<span>light</span>");
}

#[tokio::test]
async fn hook_without_provider_starts_with_light() {
    let rendered = ServerRenderer::<ThemeReader>::new()
        .hydratable(false)
        .render()
        .await;

    assert_eq!(rendered, "<span>light</span>");
}
