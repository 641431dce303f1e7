use crate::constants::STATS_INTERVAL_SEC;
use crate::core::Sketch;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sketch: Rc<RefCell<Sketch>>,
    pub gpu: render::Compositor,

    pub last_instant: Instant,
    pub stats_frames: u32,
    pub stats_elapsed: f32,
}

impl FrameContext {
    pub fn new(sketch: Rc<RefCell<Sketch>>, gpu: render::Compositor) -> Self {
        Self {
            sketch,
            gpu,
            last_instant: Instant::now(),
            stats_frames: 0,
            stats_elapsed: 0.0,
        }
    }

    /// One display refresh: pointer check, both render passes, then decay.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut sketch = self.sketch.borrow_mut();
        if let Some(i) = sketch.track_pointer() {
            log::trace!("[ripple] activated {}", i);
        }

        match self.gpu.render(&sketch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }

        sketch.decay();

        self.stats_frames += 1;
        self.stats_elapsed += dt_sec;
        if self.stats_elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] fps={:.1} visible={}",
                self.stats_frames as f32 / self.stats_elapsed,
                sketch.pool.visible_count()
            );
            self.stats_frames = 0;
            self.stats_elapsed = 0.0;
        }
    }
}

/// requestAnimationFrame chain gated by a play flag.
///
/// While paused the tick returns without rescheduling, so the chain stops;
/// `resume` starts exactly one new chain.
#[derive(Clone)]
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pub paused: Rc<RefCell<bool>>,
    running: Rc<RefCell<bool>>,
}

impl FrameLoop {
    pub fn new(frame_ctx: FrameContext) -> Self {
        let frame_ctx = Rc::new(RefCell::new(frame_ctx));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let paused = Rc::new(RefCell::new(false));
        let running = Rc::new(RefCell::new(false));

        let tick_clone = tick.clone();
        let paused_tick = paused.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if *paused_tick.borrow() {
                *running_tick.borrow_mut() = false;
                return;
            }
            frame_ctx.borrow_mut().frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                request_frame(cb);
            }
        }) as Box<dyn FnMut()>));

        Self {
            tick,
            paused,
            running,
        }
    }

    pub fn is_playing(&self) -> bool {
        !*self.paused.borrow()
    }

    pub fn resume(&self) {
        *self.paused.borrow_mut() = false;
        if *self.running.borrow() {
            return;
        }
        *self.running.borrow_mut() = true;
        if let Some(cb) = self.tick.borrow().as_ref() {
            request_frame(cb);
        }
    }

    pub fn stop(&self) {
        *self.paused.borrow_mut() = true;
    }

    /// Flip play state; returns `true` when now playing.
    pub fn toggle(&self) -> bool {
        if self.is_playing() {
            self.stop();
            false
        } else {
            self.resume();
            true
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
