use std::time::Duration;

use js_sys::Date;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::Element;

use crate::{DEFAULT_ELEMENT_ID, DEFAULT_REFRESH_INTERVAL, clock_text, interval_millis};

/// Clock bound to one page element.
///
/// Freeing the handle from JS (or dropping it in Rust) clears the interval.
#[wasm_bindgen]
pub struct PageClock {
    element: Element,
    refresh_ms: i32,
    interval: Option<Interval>,
}

struct Interval {
    id: i32,
    // Must outlive the JS timer that calls it.
    _callback: Closure<dyn FnMut()>,
}

/// Attach a clock to the `time` element, refreshing every 5 seconds.
///
/// Resolves to `undefined` when the page has no such element.
#[wasm_bindgen]
pub fn initialize() -> Result<Option<PageClock>, JsValue> {
    attach(DEFAULT_ELEMENT_ID, DEFAULT_REFRESH_INTERVAL)
}

/// Attach a clock to a custom element id and refresh interval.
#[wasm_bindgen(js_name = initializeWith)]
pub fn initialize_with(element_id: &str, refresh_ms: u32) -> Result<Option<PageClock>, JsValue> {
    attach(element_id, Duration::from_millis(u64::from(refresh_ms)))
}

fn attach(element_id: &str, refresh: Duration) -> Result<Option<PageClock>, JsValue> {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
    else {
        return Ok(None);
    };

    let mut clock = PageClock {
        element,
        refresh_ms: interval_millis(refresh),
        interval: None,
    };
    clock.start()?;

    Ok(Some(clock))
}

#[wasm_bindgen]
impl PageClock {
    /// Write the current local time into the element.
    pub fn render(&self) -> String {
        render_into(&self.element)
    }

    /// Render now and every refresh interval after. Restarts a running clock.
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.stop();
        self.render();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let element = self.element.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            render_into(&element);
        });

        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            self.refresh_ms,
        )?;

        self.interval = Some(Interval {
            id,
            _callback: callback,
        });

        Ok(())
    }

    /// Clear the refresh interval. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take()
            && let Some(window) = web_sys::window()
        {
            window.clear_interval_with_handle(interval.id);
        }
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

impl Drop for PageClock {
    fn drop(&mut self) {
        self.stop();
    }
}

fn render_into(element: &Element) -> String {
    let now = Date::new_0();
    let text = clock_text(now.get_hours(), now.get_minutes()).unwrap_or_default();
    element.set_text_content(Some(&text));
    text
}
