//! Live camera surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The camera feed is a multipart JPEG stream rendered by a plain `<img>`.
//! The image element is created imperatively once the container is in the
//! DOM, so SSR and hydration only ever see the empty container. After the
//! first frame loads, the rendered size is measured on the next animation
//! frame and handed to `on_ready` (once per load generation). A zero size is
//! re-measured on later frames until layout settles or the frame budget runs
//! out.
//!
//! Unmounting the player closes the stream: the `src` is dropped, the image
//! is removed, and its handlers are detached.

#[cfg(test)]
#[path = "video_player_test.rs"]
mod video_player_test;

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::util::rect::SurfaceBounds;

/// Inline style for the player container.
///
/// A hidden player keeps its stream open but takes no layout space.
pub fn container_style(hidden: bool) -> &'static str {
    if hidden { "visibility: hidden; height: 0; overflow: hidden;" } else { "" }
}

#[component]
pub fn VideoPlayer(
    #[prop(optional)] on_ready: Option<Callback<SurfaceBounds>>,
    #[prop(optional)] hidden: bool,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let loaded = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ClientConfig>();
        let url = config.video_stream_url();
        let (teardown_tx, teardown_rx) = futures::channel::oneshot::channel();
        let mut pending = Some(teardown_rx);

        Effect::new(move |_| {
            let Some(el) = container.get() else {
                return;
            };
            if let Some(teardown) = pending.take() {
                browser::attach_stream(&el, &url, loaded, on_ready, teardown);
            }
        });
        on_cleanup(move || crate::net::connection::signal_teardown(teardown_tx));
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = on_ready;

    view! {
        <div class="video-player" style=container_style(hidden)>
            <Show when=move || !hidden && !loaded.get()>
                <div class="video-player__placeholder">
                    <Loading size="lg"/>
                    <p>"Loading video stream..."</p>
                </div>
            </Show>
            <div class="video-player__surface" node_ref=container></div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{HtmlDivElement, HtmlImageElement};

    use crate::net::connection::{Closable, ConnectionSlot, hold_until_teardown};
    use crate::state::surface::SurfaceLoad;
    use crate::util::rect::SurfaceBounds;

    struct ImageStream {
        image: HtmlImageElement,
        container: HtmlDivElement,
        load: Rc<RefCell<SurfaceLoad>>,
        on_load: Option<Closure<dyn FnMut()>>,
        on_error: Option<Closure<dyn FnMut()>>,
    }

    impl Closable for ImageStream {
        fn close(&mut self) {
            self.load.borrow_mut().retire();
            self.image.set_onload(None);
            self.image.set_onerror(None);
            if let Err(e) = self.image.remove_attribute("src") {
                log::debug!("failed to clear video src: {e:?}");
            }
            self.image.remove();
            self.container.set_inner_html("");
            self.on_load = None;
            self.on_error = None;
        }
    }

    /// Create the stream image under `container` and keep it alive until
    /// `teardown` fires.
    pub fn attach_stream(
        container: &HtmlDivElement,
        url: &str,
        loaded: RwSignal<bool>,
        on_ready: Option<Callback<SurfaceBounds>>,
        teardown: oneshot::Receiver<()>,
    ) {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                log::error!("failed to create video image: {e:?}");
                return;
            }
        };
        image.set_cross_origin(Some("anonymous"));
        image.set_class_name("video-player__image");
        image.set_alt("Live camera feed");

        let load = Rc::new(RefCell::new(SurfaceLoad::default()));
        let generation = load.borrow_mut().begin();

        let on_load = Closure::<dyn FnMut()>::new({
            let image = image.clone();
            let container = container.clone();
            let load = Rc::clone(&load);
            move || {
                if !load.borrow_mut().mark_loaded(generation) {
                    return;
                }
                if image.parent_node().is_none() {
                    if let Err(e) = container.append_child(&image) {
                        log::error!("failed to mount video image: {e:?}");
                        return;
                    }
                }
                loaded.set(true);
                if let Some(on_ready) = on_ready {
                    measure_next_frame(image.clone(), Rc::clone(&load), generation, on_ready, 0);
                }
            }
        });
        let on_error = Closure::<dyn FnMut()>::new(|| {
            log::warn!("video stream failed to load");
        });
        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        image.set_src(url);

        let slot = ConnectionSlot::new();
        slot.install(ImageStream {
            image,
            container: container.clone(),
            load,
            on_load: Some(on_load),
            on_error: Some(on_error),
        });
        leptos::task::spawn_local(async move {
            if hold_until_teardown(&slot, teardown).await {
                log::debug!("video stream closed");
            }
        });
    }

    fn measure_next_frame(
        image: HtmlImageElement,
        load: Rc<RefCell<SurfaceLoad>>,
        generation: u64,
        on_ready: Callback<SurfaceBounds>,
        attempt: u32,
    ) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let measure = Closure::once_into_js(move || {
            let rect = image.get_bounding_client_rect();
            let report = load.borrow_mut().take_report(generation, rect.width(), rect.height());
            if let Some(bounds) = report {
                log::debug!("video surface ready: {}x{}", bounds.width(), bounds.height());
                on_ready.run(bounds);
                return;
            }
            let next = load.borrow().next_attempt(generation, attempt);
            match next {
                Some(next) => measure_next_frame(image, load, generation, on_ready, next),
                None if load.borrow().awaiting_report(generation) => {
                    log::warn!("video surface still zero-sized after {attempt} frames");
                }
                None => {}
            }
        });
        if let Err(e) = window.request_animation_frame(measure.unchecked_ref()) {
            log::warn!("failed to schedule video measurement: {e:?}");
        }
    }
}
