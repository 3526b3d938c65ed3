use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Build an `IntersectionObserver` whose callback receives each entry's
/// target and intersecting flag, in the order the browser reports them.
///
/// The callback closure is leaked: observers in this crate live for the
/// page's lifetime and detach targets individually via `unobserve`.
pub fn observer(
    threshold: f64,
    root_margin: &str,
    mut on_entry: impl FnMut(&web::IntersectionObserver, web::Element, bool) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                on_entry(&obs, entry.target(), entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let obs = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    Ok(obs)
}

pub fn observe_all(obs: &web::IntersectionObserver, targets: &[web::HtmlElement]) {
    for t in targets {
        obs.observe(t);
    }
}
