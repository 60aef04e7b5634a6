//! Generation options, split into a basic and an advanced tab.
//!
//! Edits stay local to the dialog until "Apply Settings" hands them to the
//! parent; closing the sheet any other way discards them.

use common::i18n::{Language, Text};
use common::model::generation::{
    ConditionMode, GenerationOptions, GeometryFormat, Material, Quality, Tier,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::contexts::LanguageContext;
use crate::tops_sheet::YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct OptionsDialogProps {
    pub open: bool,
    pub options: GenerationOptions,
    pub on_apply: Callback<GenerationOptions>,
    pub on_close: Callback<()>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Basic,
    Advanced,
}

#[function_component(OptionsDialog)]
pub fn options_dialog(props: &OptionsDialogProps) -> Html {
    let language = use_context::<LanguageContext>()
        .map(|ctx| ctx.language)
        .unwrap_or_default();
    let draft = use_state(|| props.options.clone());
    let tab = use_state(|| Tab::Basic);

    {
        let draft = draft.clone();
        use_effect_with((props.options.clone(), props.open), move |(options, _)| {
            draft.set(options.clone());
        });
    }

    let edit = |apply: fn(&mut GenerationOptions, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let on_apply = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit((*draft).clone()))
    };
    let tab_button = |target: Tab, label: Text| {
        let tab = tab.clone();
        let active = *tab == target;
        html! {
            <button
                class={classes!("tab", active.then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| tab.set(target))}
            >
                { language.t(label) }
            </button>
        }
    };

    let basic = html! {
        <div class="options-grid">
            { choice(
                language.t(Text::OptionsQuality),
                Quality::ALL,
                draft.quality,
                |q| q.as_str(),
                |q| language.t(q.label()).to_string(),
                edit(|o, v| if let Some(q) = Quality::parse(&v) { o.quality = q }),
            ) }
            { choice(
                language.t(Text::OptionsFormat),
                GeometryFormat::ALL,
                draft.geometry_file_format,
                |f| f.as_str(),
                |f| f.as_str().to_uppercase(),
                edit(|o, v| if let Some(f) = GeometryFormat::parse(&v) { o.geometry_file_format = f }),
            ) }
            { toggle(
                language,
                Text::OptionsUseHyper,
                Text::OptionsUseHyperDesc,
                draft.use_hyper,
                edit(|o, v| o.use_hyper = v == "true"),
            ) }
            { toggle(
                language,
                Text::OptionsTaPose,
                Text::OptionsTaPoseDesc,
                draft.ta_pose,
                edit(|o, v| o.ta_pose = v == "true"),
            ) }
        </div>
    };

    let advanced = html! {
        <div class="options-grid">
            { choice(
                language.t(Text::OptionsConditionMode),
                ConditionMode::ALL,
                draft.condition_mode,
                |m| m.as_str(),
                |m| language.t(m.label()).to_string(),
                edit(|o, v| if let Some(m) = ConditionMode::parse(&v) { o.condition_mode = m }),
            ) }
            { choice(
                language.t(Text::OptionsMaterial),
                Material::ALL,
                draft.material,
                |m| m.as_str(),
                |m| m.as_str().to_string(),
                edit(|o, v| if let Some(m) = Material::parse(&v) { o.material = m }),
            ) }
            { choice(
                language.t(Text::OptionsTier),
                Tier::ALL,
                draft.tier,
                |t| t.as_str(),
                |t| language.t(t.label()).to_string(),
                edit(|o, v| if let Some(t) = Tier::parse(&v) { o.tier = t }),
            ) }
        </div>
    };

    html! {
        <YwMaterialTopSheet
            open={props.open}
            on_close={props.on_close.clone()}
            title={language.t(Text::OptionsTitle).to_string()}
        >
            <div class="tabs">
                { tab_button(Tab::Basic, Text::OptionsBasic) }
                { tab_button(Tab::Advanced, Text::OptionsAdvanced) }
            </div>
            { if *tab == Tab::Basic { basic } else { advanced } }
            <button class="primary-button wide" onclick={on_apply}>
                { language.t(Text::OptionsApply) }
            </button>
        </YwMaterialTopSheet>
    }
}

/// A labelled `<select>` over every variant of an option enum. The callback
/// receives the wire value of the picked variant.
fn choice<T: Copy + PartialEq>(
    label: &str,
    all: &[T],
    current: T,
    wire: impl Fn(T) -> &'static str,
    display: impl Fn(T) -> String,
    on_pick: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |event: Event| {
        if let Some(select) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        {
            on_pick.emit(select.value());
        }
    });

    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <select {onchange}>
                { for all.iter().map(|option| html! {
                    <option value={wire(*option)} selected={*option == current}>
                        { display(*option) }
                    </option>
                }) }
            </select>
        </label>
    }
}

fn toggle(language: Language, label: Text, description: Text, checked: bool, on_toggle: Callback<String>) -> Html {
    let onchange = Callback::from(move |event: Event| {
        if let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        {
            on_toggle.emit(input.checked().to_string());
        }
    });

    html! {
        <label class="toggle-card">
            <div>
                <span class="field-label">{ language.t(label) }</span>
                <p class="field-hint">{ language.t(description) }</p>
            </div>
            <input type="checkbox" {checked} {onchange} />
        </label>
    }
}
