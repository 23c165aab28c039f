use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::motion::Latch;

/// One-shot viewport visibility for a single element.
///
/// Attach the returned `NodeRef` to the element to watch. The flag flips to
/// `true` the first time the element intersects the viewport and never
/// resets; the observer is disconnected as soon as that happens, so an
/// element that later leaves and re-enters does not animate again.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let entered = use_state(|| false);
    let gate = use_mut_ref(Latch::new);

    {
        let node = node.clone();
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let mut live: Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let crossed = entries.iter().any(|entry| {
                                entry
                                    .unchecked_into::<IntersectionObserverEntry>()
                                    .is_intersecting()
                            });
                            if crossed && gate.borrow_mut().set() {
                                entered.set(true);
                                // no further observation needed once revealed
                                observer.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    if let Ok(observer) =
                        IntersectionObserver::new(callback.as_ref().unchecked_ref())
                    {
                        observer.observe(&element);
                        live = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, _callback)) = live {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    (node, *entered)
}
