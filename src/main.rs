//! Twin Dials entry point
//!
//! Handles platform-specific initialization and wires the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use twin_dials::platform::AnimationFrameScheduler;
    use twin_dials::platform::web::FrameCallback;
    use twin_dials::renderer::{MeshCanvas, RenderState, SceneStyle, draw_scene};
    use twin_dials::sim::{DialId, DialLayout};
    use twin_dials::{Driver, Settings};

    /// App instance holding all state
    struct App {
        driver: Driver<AnimationFrameScheduler>,
        render_state: Option<RenderState>,
        mesh: MeshCanvas,
        style: SceneStyle,
        settings: Settings,
    }

    impl App {
        fn on_frame(&mut self, handle: i32) {
            if self.driver.on_frame(handle) {
                self.render();
            }
        }

        fn start(&mut self) {
            self.driver.start();
            self.update_labels();
            self.render();
        }

        /// Speed button: change one dial and retrace from zero
        fn change_speed(&mut self, id: DialId, delta: i32) {
            self.driver.set_increment(id, delta);
            self.settings
                .remember_increment(id, self.driver.increment(id));
            self.settings.save();
            self.update_labels();
            self.render();
        }

        fn restart(&mut self) {
            self.driver.reset();
            self.render();
        }

        /// Render the current frame
        fn render(&mut self) {
            draw_scene(&mut self.mesh, self.driver.state(), &self.style);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.mesh.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update speed labels in DOM
        fn update_labels(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let labels = [
                ("speed-label1", "Left", DialId::First),
                ("speed-label2", "Right", DialId::Second),
            ];
            for (element_id, side, dial) in labels {
                if let Some(el) = document.get_element_by_id(element_id) {
                    let text = format!("{} Speed: {}", side, self.driver.increment(dial));
                    el.set_text_content(Some(&text));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Twin Dials starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let layout = DialLayout::from_canvas_size(width, height);
        log::info!(
            "Canvas {}x{}, dial radius {}",
            width,
            height,
            layout.radius
        );

        let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
            let weak = weak.clone();
            let on_frame: FrameCallback = Rc::new(move |handle, _time| {
                if let Some(app) = weak.upgrade() {
                    app.borrow_mut().on_frame(handle);
                }
            });
            let scheduler = AnimationFrameScheduler::new(window.clone(), on_frame);
            RefCell::new(App {
                driver: Driver::new(settings.simulation_config(layout), scheduler),
                render_state: None,
                mesh: MeshCanvas::new(),
                style: SceneStyle::from_settings(&settings, dpr as f32),
                settings: settings.clone(),
            })
        });

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_speed_buttons(app.clone());
        setup_reset_controls(app.clone());

        // Start frame loop
        app.borrow_mut().start();

        log::info!("Twin Dials running!");
    }

    fn setup_speed_buttons(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let buttons = [
            ("increase-button1", DialId::First, 1),
            ("decrease-button1", DialId::First, -1),
            ("increase-button2", DialId::Second, 1),
            ("decrease-button2", DialId::Second, -1),
        ];

        for (element_id, dial, delta) in buttons {
            let Some(btn) = document.get_element_by_id(element_id) else {
                log::warn!("Missing control #{}", element_id);
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().change_speed(dial, delta);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_controls(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Reset button (optional in the page)
        if let Some(btn) = document.get_element_by_id("reset-button") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if matches!(event.key().as_str(), "r" | "R") {
                    app.borrow_mut().restart();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

/// Frames delivered before a headless run gives up on closure
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAME_CAP: u64 = 100_000;

/// Trace one figure headlessly and log how it ended
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "twin-dials", version, about)]
struct Cli {
    /// Degrees per tick for the first dial (horizontal projection)
    #[arg(requires = "second", allow_negative_numbers = true)]
    first: Option<i32>,

    /// Degrees per tick for the second dial (vertical projection)
    #[arg(allow_negative_numbers = true)]
    second: Option<i32>,

    /// Keep tracing after the figure closes
    #[arg(long)]
    no_halt: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl Cli {
    fn apply(&self, settings: &mut twin_dials::Settings) {
        if let (Some(first), Some(second)) = (self.first, self.second) {
            settings.first_increment = first as f32;
            settings.second_increment = second as f32;
        }
        if self.no_halt {
            settings.halt_on_closure = false;
        }
    }
}

/// One-line outcome of a headless run
#[cfg(not(target_arch = "wasm32"))]
fn run_summary<S: twin_dials::platform::FrameScheduler>(
    driver: &twin_dials::Driver<S>,
    frames: u64,
) -> String {
    use twin_dials::sim::{DialId, LoopPhase};

    let first = driver.increment(DialId::First);
    let second = driver.increment(DialId::Second);
    let mut summary = match driver.phase() {
        LoopPhase::Halted => format!(
            "Figure for increments {} / {} closed after {} ticks ({} segments)",
            first,
            second,
            driver.state().time_ticks,
            driver.traced_segments().count()
        ),
        LoopPhase::Running => format!(
            "Figure for increments {} / {} still open after {} frames",
            first,
            second,
            frames + 1
        ),
    };
    if let Some((min, max)) = driver.state().trace.bounds() {
        summary.push_str(&format!(
            ", bounds ({:.2}, {:.2}) - ({:.2}, {:.2})",
            min.x, min.y, max.x, max.y
        ));
    }
    summary
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use twin_dials::platform::ManualScheduler;
    use twin_dials::sim::DialLayout;
    use twin_dials::{Driver, Settings};

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Twin Dials (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let mut settings = Settings::load();
    cli.apply(&mut settings);

    let layout = DialLayout::for_size(400.0);
    let mut driver = Driver::new(settings.simulation_config(layout), ManualScheduler::new());
    driver.start();
    let frames = driver.run_frames(HEADLESS_FRAME_CAP);

    log::info!("{}", run_summary(&driver, frames));
}


#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
