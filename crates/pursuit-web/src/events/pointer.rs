use crate::dom::Listener;
use crate::frame::Clock;
use crate::surface::DomSurface;
use anyhow::anyhow;
use pursuit_core::{PointerSample, PursuitEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub engine: Rc<RefCell<PursuitEngine<DomSurface>>>,
    pub clock: Clock,
}

/// Register pointer listeners. Dropping the returned listeners unregisters
/// them.
pub fn wire_pointer_handlers(
    w: &PointerWiring,
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Vec<Listener>> {
    let page = document
        .document_element()
        .ok_or_else(|| anyhow!("no document element"))?;
    Ok(vec![
        wire_pointermove(w, window)?,
        wire_visibility(w, &page, "pointerenter", true)?,
        wire_visibility(w, &page, "pointerleave", false)?,
    ])
}

fn wire_pointermove(w: &PointerWiring, window: &web::Window) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::add(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let sample = PointerSample::new(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w.clock.now_ms(),
        );
        match w.engine.try_borrow_mut() {
            Ok(mut engine) => engine.pointer_move(sample),
            Err(_) => log::warn!("[pointer] engine busy, move dropped"),
        }
    })
}

fn wire_visibility(
    w: &PointerWiring,
    page: &web::Element,
    kind: &'static str,
    inside: bool,
) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::add(page, kind, move |_ev: web::Event| {
        if let Ok(mut engine) = w.engine.try_borrow_mut() {
            if inside {
                engine.pointer_enter();
            } else {
                engine.pointer_leave();
            }
        }
    })
}
