use crate::constants::SHAKE_ANIMATION;
use pursuit_core::Surface;
use web_sys as web;

/// Global side effects applied to `document.body`. Clearing removes our
/// property entirely so the page's own value shows through again.
pub struct DomSurface {
    body: web::HtmlElement,
}

impl DomSurface {
    pub fn new(body: web::HtmlElement) -> Self {
        Self { body }
    }

    fn set_or_clear(&self, property: &str, value: Option<&str>) {
        let style = self.body.style();
        let result = match value {
            Some(v) => style.set_property(property, v),
            None => style.remove_property(property).map(|_| ()),
        };
        if let Err(e) = result {
            log::warn!("[surface] body {} update failed: {:?}", property, e);
        }
    }
}

impl Surface for DomSurface {
    fn set_native_cursor_hidden(&mut self, hidden: bool) {
        self.set_or_clear("cursor", hidden.then_some("none"));
    }

    fn set_screen_shake(&mut self, active: bool) {
        self.set_or_clear("animation", active.then_some(SHAKE_ANIMATION));
    }
}
