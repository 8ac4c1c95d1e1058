use crate::constants::{DRIP_COLUMNS, ROOT_ID, WAVE_LAYERS};
use crate::dom;
use crate::style;
use pursuit_core::{Message, RenderSnapshot};
use web_sys as web;

/// Fixed-position DOM nodes the snapshot is drawn into. Created once on mount
/// and removed on unmount; each frame only rewrites inline styles.
pub struct DomRenderer {
    root: web::HtmlElement,
    segments: Vec<web::HtmlElement>,
    backdrop: web::HtmlElement,
    drips: Vec<web::HtmlElement>,
    waves: Vec<web::HtmlElement>,
    message: web::HtmlElement,
    title: web::HtmlElement,
    subtitle: web::HtmlElement,
    shown_message: Option<Message>,
    removed: bool,
}

impl DomRenderer {
    pub fn new(
        document: &web::Document,
        body: &web::HtmlElement,
        trail_len: usize,
    ) -> anyhow::Result<Self> {
        let root = dom::create_div(document, "pursuit")?;
        root.set_id(ROOT_ID);

        let keyframes = document
            .create_element("style")
            .map_err(|e| anyhow::anyhow!("create style: {:?}", e))?;
        keyframes.set_text_content(Some(style::KEYFRAMES_CSS));
        dom::append(&root, &keyframes)?;

        let backdrop = dom::create_div(document, "pursuit-backdrop")?;
        dom::append(&root, &backdrop)?;

        let mut drips = Vec::with_capacity(DRIP_COLUMNS);
        for _ in 0..DRIP_COLUMNS {
            let el = dom::create_div(document, "pursuit-drip")?;
            dom::append(&root, &el)?;
            drips.push(el);
        }
        let mut waves = Vec::with_capacity(WAVE_LAYERS);
        for _ in 0..WAVE_LAYERS {
            let el = dom::create_div(document, "pursuit-wave")?;
            dom::append(&root, &el)?;
            waves.push(el);
        }

        let mut segments = Vec::with_capacity(trail_len);
        for i in 0..trail_len {
            let class = if i == 0 { "pursuit-leader" } else { "pursuit-smoke" };
            let el = dom::create_div(document, class)?;
            dom::append(&root, &el)?;
            segments.push(el);
        }

        let message = dom::create_div(document, "pursuit-message")?;
        let title = dom::create_div(document, "pursuit-message-title")?;
        let subtitle = dom::create_div(document, "pursuit-message-subtitle")?;
        dom::append(&message, &title)?;
        dom::append(&message, &subtitle)?;
        dom::append(&root, &message)?;

        dom::append(body, &root)?;
        log::info!("[render] overlay attached with {} segments", trail_len);

        let mut renderer = Self {
            root,
            segments,
            backdrop,
            drips,
            waves,
            message,
            title,
            subtitle,
            shown_message: None,
            removed: false,
        };
        renderer.hide_all();
        Ok(renderer)
    }

    pub fn draw(&mut self, snap: &RenderSnapshot) {
        if self.removed {
            return;
        }
        let d = &snap.directive;
        let show_creature = snap.visible && d.creature_visible;
        let len = snap.trail.len();
        for (i, (el, seg)) in self
            .segments
            .iter()
            .zip(snap.trail.segments())
            .enumerate()
        {
            dom::set_style(el, &style::segment_style(seg, i, len, show_creature));
        }

        dom::set_style(&self.backdrop, &style::backdrop_style(d, snap.pointer));
        for (i, el) in self.drips.iter().enumerate() {
            dom::set_style(el, &style::drip_style(i, d));
        }
        for (i, el) in self.waves.iter().enumerate() {
            dom::set_style(el, &style::wave_style(i, d));
        }

        if self.shown_message != d.message {
            // Restyling restarts the CSS animation; only touch it on change.
            self.title.set_text_content(d.message.map(Message::text));
            self.subtitle
                .set_text_content(d.message.and_then(Message::subtitle));
            dom::set_style(&self.message, &style::message_style(d));
            dom::set_style(&self.subtitle, &style::subtitle_style(d.message));
            self.shown_message = d.message;
        }
    }

    /// Detach every node. Safe to call more than once.
    pub fn remove(&mut self) {
        if self.removed {
            return;
        }
        self.root.remove();
        self.removed = true;
        log::info!("[render] overlay removed");
    }

    fn hide_all(&mut self) {
        for el in self
            .segments
            .iter()
            .chain(&self.drips)
            .chain(&self.waves)
            .chain([&self.backdrop, &self.message])
        {
            dom::set_style(el, "display:none");
        }
    }
}

impl Drop for DomRenderer {
    fn drop(&mut self) {
        self.remove();
    }
}
