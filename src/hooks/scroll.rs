use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Current vertical scroll offset of the window.
///
/// Registers a single `scroll` listener for the calling component and
/// removes it when the component unmounts. The value is read once at mount
/// so consumers start consistent with wherever the page already sits.
#[hook]
pub fn use_scroll_y() -> f64 {
    let offset = use_state(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_reads = window.clone();

                offset.set(window.scroll_y().unwrap_or(0.0));

                let scroll_callback = Closure::wrap(Box::new(move || {
                    offset.set(window_for_reads.scroll_y().unwrap_or(0.0));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    *offset
}
