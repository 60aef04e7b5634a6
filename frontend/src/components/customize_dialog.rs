//! Color, roughness and metalness for the displayed model.
//!
//! Like the options dialog, edits only reach the viewer on "Apply".

use common::i18n::Text;
use common::model::material::MaterialSettings;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::contexts::LanguageContext;
use crate::tops_sheet::YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct CustomizeDialogProps {
    pub open: bool,
    pub settings: MaterialSettings,
    pub on_apply: Callback<MaterialSettings>,
    pub on_close: Callback<()>,
}

#[function_component(CustomizeDialog)]
pub fn customize_dialog(props: &CustomizeDialogProps) -> Html {
    let language = use_context::<LanguageContext>()
        .map(|ctx| ctx.language)
        .unwrap_or_default();
    let draft = use_state(|| props.settings.clone());

    {
        let draft = draft.clone();
        use_effect_with((props.settings.clone(), props.open), move |(settings, _)| {
            draft.set(settings.clone());
        });
    }

    let on_color = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = input_of(&event) {
                draft.set((*draft).clone().with_color(&input.value()));
            }
        })
    };
    let on_roughness = {
        let draft = draft.clone();
        Callback::from(move |value: f64| draft.set((*draft).clone().with_roughness(value)))
    };
    let on_metalness = {
        let draft = draft.clone();
        Callback::from(move |value: f64| draft.set((*draft).clone().with_metalness(value)))
    };

    let on_apply = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit((*draft).clone()))
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <YwMaterialTopSheet
            open={props.open}
            on_close={props.on_close.clone()}
            title={language.t(Text::CustomizeTitle).to_string()}
        >
            <label class="field">
                <span class="field-label customize-color">
                    { language.t(Text::CustomizeColor) }
                    <span class="color-swatch" style={format!("background-color: {}", draft.color)} />
                </span>
                <input type="color" value={draft.color.clone()} oninput={on_color} />
            </label>
            { slider(language.t(Text::CustomizeRoughness), draft.roughness, on_roughness) }
            { slider(language.t(Text::CustomizeMetalness), draft.metalness, on_metalness) }
            <div class="dialog-actions">
                <button type="button" class="secondary-button" onclick={on_cancel}>
                    { language.t(Text::CustomizeCancel) }
                </button>
                <button type="button" class="primary-button" onclick={on_apply}>
                    { language.t(Text::CustomizeApply) }
                </button>
            </div>
        </YwMaterialTopSheet>
    }
}

fn input_of(event: &InputEvent) -> Option<HtmlInputElement> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
}

/// A `0..=1` range input with its value printed next to the label.
fn slider(label: &str, value: f64, on_change: Callback<f64>) -> Html {
    let oninput = Callback::from(move |event: InputEvent| {
        if let Some(input) = input_of(&event) {
            on_change.emit(input.value_as_number());
        }
    });

    html! {
        <label class="field">
            <span class="field-label slider-label">
                { label }
                <span class="slider-value">{ slider_text(value) }</span>
            </span>
            <input type="range" min="0" max="1" step="0.01" value={value.to_string()} {oninput} />
        </label>
    }
}

fn slider_text(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::slider_text;

    #[test]
    fn slider_values_show_two_decimals() {
        assert_eq!(slider_text(0.5), "0.50");
        assert_eq!(slider_text(1.0), "1.00");
        assert_eq!(slider_text(0.126), "0.13");
    }
}
