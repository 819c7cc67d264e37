//! JavaScript bindings, enabled with the `wasm` feature.
//!
//! Requests and routes cross the boundary as plain JS objects with the same
//! camelCase shape as the JSON form. Generation is synchronous here; the
//! browser host owns any loading delay it wants to show.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::SynthConfig;
use crate::models::RouteRequest;
use crate::synthesis::RouteSynthesizer;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

/// Generates a route set for `request`.
///
/// `seed` makes the result reproducible; without it the RNG is seeded from
/// the platform's entropy source.
#[wasm_bindgen(js_name = generateRoutes)]
pub fn generate_routes(request: JsValue, seed: Option<u32>) -> Result<JsValue, JsValue> {
    generate_with(RouteSynthesizer::default(), request, seed)
}

/// Like [`generate_routes`], with a partial configuration object whose
/// missing fields take their defaults.
#[wasm_bindgen(js_name = generateRoutesWithConfig)]
pub fn generate_routes_with_config(
    request: JsValue,
    config: JsValue,
    seed: Option<u32>,
) -> Result<JsValue, JsValue> {
    let config: SynthConfig = serde_wasm_bindgen::from_value(config).map_err(js_error)?;
    let synth = RouteSynthesizer::new(config).map_err(js_error)?;
    generate_with(synth, request, seed)
}

fn generate_with(
    synth: RouteSynthesizer,
    request: JsValue,
    seed: Option<u32>,
) -> Result<JsValue, JsValue> {
    let request: RouteRequest = serde_wasm_bindgen::from_value(request).map_err(js_error)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(u64::from(seed)),
        None => StdRng::from_os_rng(),
    };
    let routes = synth.generate(&request, &mut rng).map_err(js_error)?;
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    routes.serialize(&serializer).map_err(js_error)
}
