use anyhow::anyhow;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since mount, shared by pointer handlers and the frame loop so
/// both feed the engine timestamps on the same basis.
#[derive(Clone, Copy)]
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop that can be stopped.
///
/// The callback re-arms itself each frame and records the pending request id;
/// [`AnimationLoop::stop`] cancels that request and drops the callback, which
/// also breaks the callback's reference to itself.
pub struct AnimationLoop {
    window: web::Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let pending_tick = pending.clone();
        let callback_tick = callback.clone();
        let window_tick = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            pending_tick.set(None);
            on_frame();
            if let Some(cb) = callback_tick.borrow().as_ref() {
                match window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_tick.set(Some(id)),
                    Err(e) => log::error!("[frame] request_animation_frame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = match callback.borrow().as_ref() {
            Some(cb) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow!("request_animation_frame: {:?}", e))?,
            None => return Err(anyhow!("frame callback missing")),
        };
        pending.set(Some(id));
        log::debug!("[frame] loop started");

        Ok(Self {
            window,
            pending,
            callback,
        })
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        if self.callback.borrow_mut().take().is_some() {
            log::debug!("[frame] loop stopped");
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
