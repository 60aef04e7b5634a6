//! `<model-viewer>` wrapper and the element methods the page calls.
//!
//! The web component is loaded by `index.html`; Rust only sets attributes on
//! it and calls `activateAR()`, `toDataURL()` and the scene-graph material
//! setters through `Reflect`.

use common::model::material::MaterialSettings;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

use crate::contexts::ThemeContext;

#[derive(Properties, PartialEq)]
pub struct ModelViewerProps {
    /// Same-origin URL of the GLB, `None` while there is nothing to show.
    pub src: Option<AttrValue>,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub alt: Option<AttrValue>,
}

#[function_component(ModelViewer)]
pub fn model_viewer(props: &ModelViewerProps) -> Html {
    let backdrop = use_context::<ThemeContext>()
        .map(|theme| theme.pick("viewer-dark", "viewer-light"))
        .unwrap_or("viewer-dark");

    let Some(src) = props.src.clone() else {
        return html! {
            <div class={classes!("viewer", "viewer-placeholder", backdrop)}>
                <div class="placeholder-cube" />
            </div>
        };
    };

    html! {
        <div class={classes!("viewer", backdrop)}>
            <model-viewer
                ref={props.node_ref.clone()}
                src={src}
                alt={props.alt.clone().unwrap_or_else(|| AttrValue::from("3D model"))}
                camera-controls=""
                auto-rotate=""
                ar=""
                ar-modes="webxr scene-viewer quick-look"
                shadow-intensity="1"
                class="model-viewer"
            />
        </div>
    }
}

fn viewer(node_ref: &NodeRef) -> Result<Element, JsValue> {
    node_ref
        .cast::<Element>()
        .ok_or_else(|| JsValue::from_str("viewer is not mounted"))
}

fn invoke(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    match args {
        [] => method.call0(target),
        [first] => method.call1(target, first),
        _ => method.apply(target, &args.iter().collect::<Array>()),
    }
}

fn call_method(node_ref: &NodeRef, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    invoke(&viewer(node_ref)?.into(), name, args)
}

/// Starts the AR session of the mounted viewer.
pub fn activate_ar(node_ref: &NodeRef) -> Result<(), JsValue> {
    call_method(node_ref, "activateAR", &[]).map(drop)
}

/// PNG data URL of the current frame.
pub fn capture_thumbnail(node_ref: &NodeRef) -> Result<String, JsValue> {
    call_method(node_ref, "toDataURL", &[JsValue::from_str("image/png")])?
        .as_string()
        .ok_or_else(|| JsValue::from_str("toDataURL returned no string"))
}

/// Sets base color, metalness and roughness on every material of the loaded
/// model. Returns how many materials were changed.
pub fn apply_material(node_ref: &NodeRef, settings: &MaterialSettings) -> Result<u32, JsValue> {
    let model = Reflect::get(&viewer(node_ref)?.into(), &JsValue::from_str("model"))?;
    if model.is_undefined() || model.is_null() {
        return Err(JsValue::from_str("model is not loaded"));
    }
    let materials = Array::from(&Reflect::get(&model, &JsValue::from_str("materials"))?);
    let color: Array = settings
        .base_color_factor()
        .iter()
        .map(|channel| JsValue::from_f64(*channel))
        .collect();

    for material in materials.iter() {
        let pbr = Reflect::get(&material, &JsValue::from_str("pbrMetallicRoughness"))?;
        invoke(&pbr, "setBaseColorFactor", &[color.clone().into()])?;
        invoke(&pbr, "setMetallicFactor", &[JsValue::from_f64(settings.metalness)])?;
        invoke(&pbr, "setRoughnessFactor", &[JsValue::from_f64(settings.roughness)])?;
    }
    Ok(materials.length())
}
