//! Thin wrappers over browser globals.
//!
//! TRADE-OFFS
//! ==========
//! Every helper has an SSR fallback so shared component code can call them
//! unconditionally; server rendering simply sees "no browser".

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Current calendar year from the browser clock.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Origin (`scheme://host[:port]`) of the current page.
pub fn current_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
