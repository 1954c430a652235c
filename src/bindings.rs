//! JavaScript facade over [`PreviewStore`].
//!
//! Actions come in as plain JS objects shaped like the Redux actions the
//! forms already dispatch (`{ type, platform, title }` and friends).  State
//! goes out as plain objects, `null` for unset optionals.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::RouterConfig;
use crate::macros::debug_log;
use crate::error::RouterError;
use crate::reducers::social_preview::{router_for, social_previews_router};
use crate::state::{PreviewStore, Store};

fn to_js_error(err: RouterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

#[wasm_bindgen]
pub struct SocialPreviewStore {
    inner: PreviewStore,
}

#[wasm_bindgen]
impl SocialPreviewStore {
    /// Store with the stock Facebook and Twitter partitions.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SocialPreviewStore, JsValue> {
        let router = social_previews_router().map_err(to_js_error)?;
        Ok(Self {
            inner: Store::new(router),
        })
    }

    /// Store with an explicit list of platform names.
    #[wasm_bindgen(js_name = withPlatforms)]
    pub fn with_platforms(platforms: js_sys::Array) -> Result<SocialPreviewStore, JsValue> {
        let names = platforms
            .iter()
            .map(|value| {
                value
                    .as_string()
                    .ok_or_else(|| JsValue::from_str("platform names must be strings"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let router = router_for(names.iter().map(String::as_str)).map_err(to_js_error)?;
        Ok(Self {
            inner: Store::new(router),
        })
    }

    /// Store built from a JSON config string, e.g. `{"platforms": ["facebook"]}`.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(raw: &str) -> Result<SocialPreviewStore, JsValue> {
        let router = RouterConfig::from_json(raw)
            .and_then(|config| config.router())
            .map_err(to_js_error)?;
        Ok(Self {
            inner: Store::new(router),
        })
    }

    /// Applies an action object.  Returns true when a partition changed;
    /// anything that cannot be read as an action is ignored.
    pub fn dispatch(&mut self, action: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(action) {
            Ok(raw) => self.inner.dispatch_json(&raw),
            Err(e) => {
                debug_log!("Ignoring non-JSON action: {}", e);
                false
            }
        }
    }

    /// The whole composite state as `{ [platform]: preview }`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.state())
    }

    /// One platform's preview, or `undefined` if it is not registered.
    pub fn partition(&self, platform: &str) -> Result<JsValue, JsValue> {
        match self.inner.state().get(platform) {
            Some(preview) => to_js(preview),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    pub fn platforms(&self) -> js_sys::Array {
        self.inner
            .router()
            .platforms()
            .map(JsValue::from_str)
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.inner.version() as f64
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn action(json: serde_json::Value) -> JsValue {
        to_js(&json).unwrap()
    }

    #[wasm_bindgen_test]
    fn dispatch_round_trips_through_js() {
        let mut store = SocialPreviewStore::new().unwrap();
        assert!(store.dispatch(action(serde_json::json!({
            "type": "SET_TITLE",
            "platform": "twitter",
            "title": "T1",
        }))));

        let twitter: serde_json::Value =
            serde_wasm_bindgen::from_value(store.partition("twitter").unwrap()).unwrap();
        assert_eq!(twitter["title"], "T1");
        assert_eq!(twitter["image"]["bytes"], serde_json::Value::Null);
        assert_eq!(store.version(), 1.0);
    }

    #[wasm_bindgen_test]
    fn garbage_is_a_no_op() {
        let mut store = SocialPreviewStore::new().unwrap();
        assert!(!store.dispatch(JsValue::from_f64(3.0)));
        assert!(!store.dispatch(JsValue::UNDEFINED));
        assert!(store.partition("mastodon").unwrap().is_undefined());
    }

    #[wasm_bindgen_test]
    fn rejects_duplicate_platforms() {
        let platforms = js_sys::Array::of2(&"facebook".into(), &"facebook".into());
        assert!(SocialPreviewStore::with_platforms(platforms).is_err());
        let store = SocialPreviewStore::from_config(r#"{"platforms":["linkedin"]}"#).unwrap();
        assert_eq!(store.platforms().length(), 1);
    }
}
