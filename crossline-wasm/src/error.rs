use crossline::config::ConfigError;
use crate::interop::{new_obj, set_kv};
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_button(got: i16) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("invalid_button", "button must be 0:primary, 1:auxiliary, 2:secondary", Some(d.into()))
}

pub fn config(e: &ConfigError) -> JsValue {
    let d = new_obj();
    match e {
        ConfigError::Parse(_) => {}
        ConfigError::NonFinite { param } => set_kv(&d, "param", &JsValue::from_str(param)),
        ConfigError::OutOfRange { param, min, max, got } => {
            set_kv(&d, "param", &JsValue::from_str(param));
            set_kv(&d, "min", &JsValue::from_f64(*min));
            set_kv(&d, "max", &JsValue::from_f64(*max));
            set_kv(&d, "got", &JsValue::from_f64(*got));
        }
        ConfigError::InvalidColor { param, got } => {
            set_kv(&d, "param", &JsValue::from_str(param));
            set_kv(&d, "got", &JsValue::from_str(got));
        }
    }
    err(e.code(), e.to_string(), Some(d.into()))
}
