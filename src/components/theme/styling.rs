use super::themes::{Palette, Theme};
use crate::components::imports::*;

// Palettes are selected by the `data-theme` attribute or the theme class
// the switch puts on the document root.
#[styled_component]
pub fn ThemeStyles() -> Html {
    let light = Palette::from(Theme::Light);
    let dark = Palette::from(Theme::Dark);

    let global_style = css!(
        "
            [data-theme=light] body, .light body {
                background-color: ${light_bg_color};
                color: ${light_text_color};
            }

            [data-theme=dark] body, .dark body {
                background-color: ${dark_bg_color};
                color: ${dark_text_color};
            }

            [data-theme=light] .theme-picker, .light .theme-picker {
                background-color: ${light_contrast_bg_color};
            }

            [data-theme=dark] .theme-picker, .dark .theme-picker {
                background-color: ${dark_contrast_bg_color};
            }

            .theme-picker {
                display: flex;
                flex-direction: row;
                gap: 0.75rem;
                padding: 0.5rem;
                max-width: max-content;
                border-radius: 0.375rem;
                box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
            }

            .theme-btn {
                display: flex;
                align-items: center;
                justify-content: center;
                background: none;
                border: none;
                color: inherit;
                cursor: pointer;
                transition: opacity .3s ease-in;
            }

            .theme-btn:hover {
                opacity: 0.9;
            }

            [data-theme=light] .theme-btn:hover, .light .theme-btn:hover {
                color: ${light_accent_color};
            }

            [data-theme=dark] .theme-btn:hover, .dark .theme-btn:hover {
                color: ${dark_accent_color};
            }

            .theme-btn__group {
                position: relative;
                display: inline-flex;
            }

            .theme-btn__tooltip {
                display: none;
                position: absolute;
                bottom: calc(100% + 0.5rem);
                left: 50%;
                transform: translateX(-50%);
                padding: 0.25rem 1rem;
                border-radius: 0.25rem;
                font-size: 0.75rem;
                white-space: nowrap;
                background-color: ${tooltip_bg_color};
                color: ${tooltip_text_color};
            }

            .theme-btn__group:hover .theme-btn__tooltip {
                display: block;
            }

            .theme-btn__tooltip-arrow {
                position: absolute;
                left: 0;
                top: 100%;
                height: 0.5rem;
                width: 100%;
                fill: ${tooltip_bg_color};
            }
        ",
        light_bg_color = light.bg_color,
        light_text_color = light.text_color,
        light_contrast_bg_color = light.contrast_bg_color,
        light_accent_color = light.accent_color,
        dark_bg_color = dark.bg_color,
        dark_text_color = dark.text_color,
        dark_contrast_bg_color = dark.contrast_bg_color,
        dark_accent_color = dark.accent_color,
        tooltip_bg_color = dark.tooltip_bg_color,
        tooltip_text_color = dark.tooltip_text_color,
    );

    html! {
        <Global css={global_style}/>
    }
}
