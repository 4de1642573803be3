// Wayland integration module
// Hosts the fold widget on a layer-shell surface via smithay-client-toolkit

use crate::raster::Canvas;
use crate::style::FoldStyle;
use crate::text::LabelPainter;
use crate::wgpu_renderer::WgpuRenderer;
use crate::widget::{FoldTurnWidget, PointerPhase};
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use smithay_client_toolkit::{
    compositor::{CompositorHandler, CompositorState},
    delegate_compositor, delegate_keyboard, delegate_layer, delegate_output, delegate_pointer,
    delegate_registry, delegate_seat, delegate_shm,
    output::{OutputHandler, OutputState},
    registry::{ProvidesRegistryState, RegistryState},
    registry_handlers,
    seat::{
        keyboard::{KeyEvent, KeyboardHandler, Keysym, Modifiers},
        pointer::{PointerEvent, PointerEventKind, PointerHandler},
        Capability, SeatHandler, SeatState,
    },
    shell::{
        wlr_layer::{
            Anchor, KeyboardInteractivity, Layer, LayerShell, LayerShellHandler, LayerSurface,
            LayerSurfaceConfigure,
        },
        WaylandSurface,
    },
    shm::{
        slot::{Buffer, SlotPool},
        Shm, ShmHandler,
    },
};
use wayland_client::{
    globals::registry_queue_init,
    protocol::{wl_keyboard, wl_output, wl_pointer, wl_seat, wl_shm, wl_surface},
    Connection, Proxy, QueueHandle,
};

/// Minimum surface size
const MIN_SIZE: u32 = 50;

/// Maximum surface size to prevent buffer allocation failures
const MAX_SIZE: u32 = 4096;

/// Main Wayland application state
struct WaylandApp {
    // Registry state
    registry_state: RegistryState,
    // Seat state for input handling
    seat_state: SeatState,
    // Output state for display info
    output_state: OutputState,
    // Shared memory for buffer allocation
    shm: Shm,
    // Layer shell for overlay windows
    layer_shell: LayerShell,
    // Compositor state
    compositor_state: CompositorState,

    // Wayland display pointer (for GPU rendering)
    display_ptr: *mut std::ffi::c_void,

    // The fold widget and its text painter
    widget: FoldTurnWidget,
    painter: LabelPainter,
    should_exit: bool,

    // Surface and buffer management
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    buffer: Option<Buffer>,
    width: u32,
    height: u32,
    configured: bool,

    // GPU rendering
    use_gpu: bool,
    gpu_renderer: Option<WgpuRenderer>,
    gpu_initialized: bool,
    // Size at which the label texture was last rasterized
    labels_uploaded_size: (u32, u32),
}

impl WaylandApp {
    /// Create a new Wayland application
    #[allow(clippy::too_many_arguments)]
    fn new(
        registry_state: RegistryState,
        seat_state: SeatState,
        output_state: OutputState,
        shm: Shm,
        layer_shell: LayerShell,
        compositor_state: CompositorState,
        display_ptr: *mut std::ffi::c_void,
        style: FoldStyle,
        use_gpu: bool,
    ) -> Self {
        Self {
            registry_state,
            seat_state,
            output_state,
            shm,
            layer_shell,
            compositor_state,
            display_ptr,
            widget: FoldTurnWidget::new(style),
            painter: LabelPainter::new(),
            should_exit: false,
            layer_surface: None,
            pool: None,
            buffer: None,
            width: 0,
            height: 0,
            configured: false,
            use_gpu,
            gpu_renderer: None,
            gpu_initialized: false,
            labels_uploaded_size: (0, 0),
        }
    }

    /// Initialize GPU renderer from Wayland surface
    fn init_gpu_renderer(&mut self) {
        if self.gpu_initialized {
            return;
        }

        let layer_surface = match &self.layer_surface {
            Some(ls) => ls,
            None => {
                warn!("Cannot init GPU: no layer surface");
                return;
            }
        };

        // Raw pointers from the Wayland objects; ObjectId::as_ptr needs
        // the wayland-backend client_system feature
        let wl_surface = layer_surface.wl_surface();
        let surface_ptr = wl_surface.id().as_ptr() as *mut std::ffi::c_void;
        let display_ptr = self.display_ptr;

        if display_ptr.is_null() {
            warn!("Display pointer is null, falling back to CPU rendering");
            self.use_gpu = false;
            return;
        }

        info!("Initializing GPU renderer ({}x{})", self.width, self.height);

        match WgpuRenderer::new(display_ptr, surface_ptr, self.width, self.height) {
            Ok(renderer) => {
                self.gpu_renderer = Some(renderer);
                self.gpu_initialized = true;
                info!("GPU renderer initialized successfully");
            }
            Err(e) => {
                warn!("Failed to initialize GPU renderer: {:?}", e);
                warn!("Falling back to CPU rendering");
                self.use_gpu = false;
            }
        }
    }

    /// Draw the widget to the surface
    fn draw(&mut self, _qh: &QueueHandle<Self>) {
        if !self.configured {
            return;
        }

        if self.layer_surface.is_none() {
            return;
        }

        // Try GPU rendering first if enabled
        if self.use_gpu && self.gpu_renderer.is_some() {
            if self.draw_gpu() {
                return;
            }
            // Fall back to CPU rendering if GPU fails
            warn!("GPU rendering failed, falling back to CPU");
        }

        self.draw_cpu();
    }

    /// Draw using GPU (wgpu)
    fn draw_gpu(&mut self) -> bool {
        // Rasterize the label overlay whenever the surface size changed
        if self.labels_uploaded_size != (self.width, self.height) {
            let mut pixels = vec![0u8; (self.width * self.height * 4) as usize];
            let mut canvas = Canvas::new(&mut pixels, self.width, self.height);
            self.widget.render_labels(&mut canvas, &mut self.painter);

            let renderer = match self.gpu_renderer.as_mut() {
                Some(r) => r,
                None => return false,
            };
            if let Err(e) = renderer.upload_labels(&pixels, self.width, self.height) {
                warn!("Failed to upload label texture: {:?}", e);
                return false;
            }
            self.labels_uploaded_size = (self.width, self.height);
        }

        let scene = crate::wgpu_renderer::fold_scene(&self.widget);
        let card = self.widget.style().card_color;

        let renderer = match self.gpu_renderer.as_mut() {
            Some(r) => r,
            None => return false,
        };
        renderer.resize(self.width, self.height);

        match renderer.render(card, &scene) {
            Ok(true) => {
                if let Some(ref layer_surface) = self.layer_surface {
                    layer_surface.wl_surface().commit();
                }
                self.widget.mark_drawn();
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!("GPU render error: {:?}", e);
                false
            }
        }
    }

    /// Draw using CPU (shared memory buffer)
    fn draw_cpu(&mut self) {
        // Clamp surface size to prevent buffer allocation failures
        self.width = self.width.clamp(MIN_SIZE, MAX_SIZE);
        self.height = self.height.clamp(MIN_SIZE, MAX_SIZE);

        let width = self.width;
        let height = self.height;

        // 4 bytes per pixel for ARGB
        let stride = width as i32 * 4;
        let buffer_size = (stride * height as i32) as usize;

        // Initialize pool if needed
        if self.pool.is_none() {
            match SlotPool::new(buffer_size, &self.shm) {
                Ok(pool) => self.pool = Some(pool),
                Err(e) => {
                    error!(
                        "Failed to create slot pool: {}. Buffer size: {} bytes",
                        e, buffer_size
                    );
                    return;
                }
            }
        }

        let pool = self.pool.as_mut().unwrap();

        // Resize pool if needed
        if pool.len() < buffer_size {
            if let Err(e) = pool.resize(buffer_size) {
                error!("Failed to resize pool to {} bytes: {}", buffer_size, e);
                self.pool = None;
                return;
            }
        }

        // Create buffer
        let (buffer, canvas_bytes) = match pool.create_buffer(
            width as i32,
            height as i32,
            stride,
            wl_shm::Format::Argb8888,
        ) {
            Ok(buf) => buf,
            Err(e) => {
                error!("Failed to create buffer {}x{}: {}", width, height, e);
                return;
            }
        };

        let mut canvas = Canvas::new(canvas_bytes, width, height);
        self.widget.render(&mut canvas, &mut self.painter);

        // Attach and commit
        let layer_surface = self.layer_surface.as_ref().unwrap();
        let surface = layer_surface.wl_surface();
        if let Err(e) = buffer.attach_to(surface) {
            error!("Failed to attach buffer: {}", e);
            return;
        }
        surface.damage_buffer(0, 0, width as i32, height as i32);
        surface.commit();

        self.buffer = Some(buffer);
        self.widget.mark_drawn();
    }
}

// Implement required traits for smithay-client-toolkit

impl CompositorHandler for WaylandApp {
    fn scale_factor_changed(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _new_factor: i32,
    ) {
        debug!("Scale factor changed");
    }

    fn transform_changed(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _new_transform: wl_output::Transform,
    ) {
        debug!("Transform changed");
    }

    fn frame(
        &mut self,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _time: u32,
    ) {
        if self.widget.needs_redraw() {
            self.draw(qh);
        }
    }

    fn surface_enter(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _output: &wl_output::WlOutput,
    ) {
    }

    fn surface_leave(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _surface: &wl_surface::WlSurface,
        _output: &wl_output::WlOutput,
    ) {
    }
}

impl OutputHandler for WaylandApp {
    fn output_state(&mut self) -> &mut OutputState {
        &mut self.output_state
    }

    fn new_output(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _output: wl_output::WlOutput,
    ) {
        debug!("New output detected");
    }

    fn update_output(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _output: wl_output::WlOutput,
    ) {
        debug!("Output updated");
    }

    fn output_destroyed(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _output: wl_output::WlOutput,
    ) {
        debug!("Output destroyed");
    }
}

impl LayerShellHandler for WaylandApp {
    fn closed(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _layer: &LayerSurface) {
        info!("Layer surface closed");
        self.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
        _layer: &LayerSurface,
        configure: LayerSurfaceConfigure,
        _serial: u32,
    ) {
        debug!("Layer surface configured: {:?}", configure);

        if configure.new_size.0 > 0 && configure.new_size.0 != self.width {
            self.width = configure.new_size.0;
        }
        if configure.new_size.1 > 0 && configure.new_size.1 != self.height {
            self.height = configure.new_size.1;
        }

        self.configured = true;
        self.widget.set_bounds(self.width, self.height);

        // Initialize GPU renderer if requested and not yet initialized
        if self.use_gpu && !self.gpu_initialized {
            self.init_gpu_renderer();
        }

        // Draw initial frame
        self.draw(qh);
    }
}

impl SeatHandler for WaylandApp {
    fn seat_state(&mut self) -> &mut SeatState {
        &mut self.seat_state
    }

    fn new_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("New seat");
    }

    fn new_capability(
        &mut self,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
        seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        debug!("New capability: {:?}", capability);

        if capability == Capability::Keyboard {
            if let Err(e) = self.seat_state.get_keyboard(qh, &seat, None) {
                error!("Failed to get keyboard: {}", e);
            }
        }
        if capability == Capability::Pointer {
            if let Err(e) = self.seat_state.get_pointer(qh, &seat) {
                error!("Failed to get pointer: {}", e);
            }
        }
    }

    fn remove_capability(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _seat: wl_seat::WlSeat,
        _capability: Capability,
    ) {
        debug!("Capability removed");
    }

    fn remove_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("Seat removed");
    }
}

impl KeyboardHandler for WaylandApp {
    fn enter(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _surface: &wl_surface::WlSurface,
        _serial: u32,
        _raw: &[u32],
        _keysyms: &[Keysym],
    ) {
        debug!("Keyboard entered surface");
    }

    fn leave(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _surface: &wl_surface::WlSurface,
        _serial: u32,
    ) {
        debug!("Keyboard left surface");
    }

    fn press_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        debug!("Key pressed: {:?}", event.keysym);

        // Close on Escape or Q key
        if event.keysym == Keysym::Escape || event.keysym == Keysym::q {
            info!("Exit key pressed");
            self.should_exit = true;
        }
    }

    fn release_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        _event: KeyEvent,
    ) {
    }

    fn update_modifiers(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        _modifiers: Modifiers,
        _layout: u32,
    ) {
    }
}

impl PointerHandler for WaylandApp {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let (x, y) = event.position;
            let phase = match event.kind {
                PointerEventKind::Press { .. } => Some(PointerPhase::Press),
                PointerEventKind::Motion { .. } => Some(PointerPhase::Motion),
                PointerEventKind::Release { .. } => Some(PointerPhase::Release),
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered");
                    None
                }
                PointerEventKind::Leave { .. } => {
                    // Last fold point persists after the pointer leaves
                    debug!("Pointer left");
                    None
                }
                PointerEventKind::Axis { .. } => None,
            };

            if let Some(phase) = phase {
                self.widget.handle_pointer(phase, x, y);
            }
        }

        if self.widget.needs_redraw() {
            self.draw(qh);
        }
    }
}

impl ShmHandler for WaylandApp {
    fn shm_state(&mut self) -> &mut Shm {
        &mut self.shm
    }
}

impl ProvidesRegistryState for WaylandApp {
    fn registry(&mut self) -> &mut RegistryState {
        &mut self.registry_state
    }

    registry_handlers![OutputState, SeatState];
}

// Delegate macros
delegate_compositor!(WaylandApp);
delegate_output!(WaylandApp);
delegate_layer!(WaylandApp);
delegate_seat!(WaylandApp);
delegate_keyboard!(WaylandApp);
delegate_pointer!(WaylandApp);
delegate_shm!(WaylandApp);
delegate_registry!(WaylandApp);

/// Run the Wayland application
pub fn run(style: FoldStyle, width: u32, height: u32, use_gpu: bool) -> Result<()> {
    info!("Connecting to Wayland display");

    // Connect to Wayland display
    let conn = Connection::connect_to_env().context("Failed to connect to Wayland display")?;

    // Initialize registry and event queue
    let (globals, mut event_queue) =
        registry_queue_init(&conn).context("Failed to initialize registry")?;
    let qh = event_queue.handle();

    // Initialize required globals
    let compositor_state =
        CompositorState::bind(&globals, &qh).context("Failed to bind compositor")?;
    let layer_shell = LayerShell::bind(&globals, &qh).context("Failed to bind layer shell")?;
    let shm = Shm::bind(&globals, &qh).context("Failed to bind shm")?;

    // Get the display pointer for GPU rendering
    let display_ptr = conn.backend().display_ptr() as *mut std::ffi::c_void;

    // Create application state
    let mut app = WaylandApp::new(
        RegistryState::new(&globals),
        SeatState::new(&globals, &qh),
        OutputState::new(&globals, &qh),
        shm,
        layer_shell,
        compositor_state,
        display_ptr,
        style,
        use_gpu,
    );

    // Dispatch once to get output info
    event_queue.roundtrip(&mut app)?;

    let width = width.clamp(MIN_SIZE, MAX_SIZE);
    let height = height.clamp(MIN_SIZE, MAX_SIZE);

    // Center the card on the primary output
    let (display_width, display_height) = get_display_dimensions(&app.output_state);
    let margin_left = (display_width.saturating_sub(width) / 2) as i32;
    let margin_top = (display_height.saturating_sub(height) / 2) as i32;
    info!("Display dimensions: {}x{}", display_width, display_height);

    app.width = width;
    app.height = height;

    // Create the layer surface
    let surface = app.compositor_state.create_surface(&qh);
    let layer_surface =
        app.layer_shell
            .create_layer_surface(&qh, surface, Layer::Overlay, Some("rfold"), None);

    // Configure the layer surface with anchoring for positioning
    layer_surface.set_anchor(Anchor::TOP | Anchor::LEFT);
    layer_surface.set_margin(margin_top, 0, 0, margin_left);
    layer_surface.set_size(width, height);
    layer_surface.set_keyboard_interactivity(KeyboardInteractivity::OnDemand);

    // Commit the surface to trigger configure
    layer_surface.commit();

    app.layer_surface = Some(layer_surface);

    info!("Starting event loop");
    info!("Controls: drag near the bottom-right corner to peel, Esc/q to quit");

    // Main event loop
    loop {
        event_queue.blocking_dispatch(&mut app)?;

        if app.should_exit {
            info!("Exiting application");
            break;
        }
    }

    Ok(())
}

/// Get display dimensions from the output state
fn get_display_dimensions(output_state: &OutputState) -> (u32, u32) {
    for output in output_state.outputs() {
        if let Some(info) = output_state.info(&output) {
            if let Some(mode) = info.modes.iter().find(|m| m.current) {
                return (mode.dimensions.0 as u32, mode.dimensions.1 as u32);
            }
            if let Some(mode) = info.modes.first() {
                return (mode.dimensions.0 as u32, mode.dimensions.1 as u32);
            }
        }
    }
    (1920, 1080)
}
