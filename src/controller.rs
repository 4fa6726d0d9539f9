//! High-level controller for Slint-hosted diagram editors.
//!
//! [`EditorController`] wires a shared [`EditorSession`] and [`SceneSurface`]
//! to Slint callbacks: toolbar selection, pointer events, and surface
//! geometry reports all arrive here, get translated to surface-local
//! coordinates, and leave as synced scene models.
//!
//! # Example
//!
//! ```ignore
//! use slint_automaton_editor::EditorController;
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = EditorController::new(800.0, 600.0);
//!
//!     // Scene models the .slint markup renders with `for` loops
//!     let circles = Rc::new(VecModel::<StateCircle>::default());
//!     ctrl.scene().borrow_mut().bind_circle_model(circles.clone(), |c| StateCircle {
//!         x: c.x, y: c.y, radius: c.radius, fill: c.fill, outline: c.outline,
//!     });
//!     window.set_state_circles(ModelRc::from(circles));
//!
//!     // Toolbar and pointer events
//!     window.on_select_tool(ctrl.select_tool_callback());
//!     window.on_surface_left_click(ctrl.left_click_callback());
//!     window.on_surface_right_click(ctrl.right_click_callback());
//!     window.on_surface_double_click(ctrl.double_click_callback());
//!     window.on_surface_pointer_move(ctrl.pointer_move_callback());
//!
//!     // Surface geometry reports
//!     window.on_surface_moved({
//!         let ctrl = ctrl.clone();
//!         move |x, y| ctrl.handle_surface_origin(x, y)
//!     });
//!     window.on_surface_resized({
//!         let ctrl = ctrl.clone();
//!         move |w, h| ctrl.handle_surface_resize(w, h)
//!     });
//!
//!     ctrl.refresh();
//!     window.run().unwrap();
//! }
//! ```

use slint::SharedString;
use std::cell::RefCell;
use std::rc::Rc;

use crate::scene::SceneSurface;
use crate::session::EditorSession;
use crate::tools::Tool;

/// Controller that shares one editing session across Slint callbacks.
///
/// Pointer events arrive in the host component's coordinates; the
/// controller subtracts the drawing surface's reported origin so the
/// session only ever sees surface-local positions. Every mutating event
/// ends with a scene model sync, so bound Slint models always show the
/// frame the session just drew.
///
/// Right clicks reach the session as plain clicks: the host markup is
/// expected to claim the event and keep the platform context menu shut.
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct EditorController {
    session: Rc<RefCell<EditorSession>>,
    scene: Rc<RefCell<SceneSurface>>,
    origin_x: Rc<RefCell<f32>>,
    origin_y: Rc<RefCell<f32>>,
}

impl EditorController {
    /// Create a controller with an empty session and a surface of the
    /// given extent.
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            session: Rc::new(RefCell::new(EditorSession::new())),
            scene: Rc::new(RefCell::new(SceneSurface::new(surface_width, surface_height))),
            origin_x: Rc::new(RefCell::new(0.0)),
            origin_y: Rc::new(RefCell::new(0.0)),
        }
    }

    /// Shared access to the session.
    pub fn session(&self) -> Rc<RefCell<EditorSession>> {
        self.session.clone()
    }

    /// Shared access to the recorded scene, for binding models.
    pub fn scene(&self) -> Rc<RefCell<SceneSurface>> {
        self.scene.clone()
    }

    /// The currently active tool.
    pub fn active_tool(&self) -> Tool {
        self.session.borrow().tool()
    }

    /// Activate a tool directly, bypassing the name parsing of the
    /// toolbar callback.
    pub fn set_tool(&self, tool: Tool) {
        self.session.borrow_mut().set_tool(tool);
    }

    /// Redraw the scene from the current model and push it into every
    /// bound Slint model. Call once after wiring, and whenever the model
    /// was changed outside the pointer callbacks.
    pub fn refresh(&self) {
        let session = self.session.borrow();
        let mut scene = self.scene.borrow_mut();
        session.redraw(&mut *scene);
        scene.sync_models();
    }

    // === Direct handlers ===

    /// Handle a toolbar selection by name.
    ///
    /// Unknown names are logged and ignored; the active tool stays as it
    /// was.
    pub fn handle_select_tool(&self, name: &str) {
        match Tool::from_name(name) {
            Ok(tool) => self.session.borrow_mut().set_tool(tool),
            Err(err) => tracing::warn!("toolbar: {err}"),
        }
    }

    /// Handle a left click at host-component coordinates.
    pub fn handle_left_click(&self, x: f32, y: f32) {
        let (sx, sy) = self.to_surface(x, y);
        self.session
            .borrow_mut()
            .left_click(sx, sy, &mut *self.scene.borrow_mut());
        self.scene.borrow().sync_models();
    }

    /// Handle a right click at host-component coordinates.
    pub fn handle_right_click(&self, x: f32, y: f32) {
        let (sx, sy) = self.to_surface(x, y);
        self.session
            .borrow_mut()
            .right_click(sx, sy, &mut *self.scene.borrow_mut());
        self.scene.borrow().sync_models();
    }

    /// Handle a double click at host-component coordinates. Reserved; the
    /// session discards it today.
    pub fn handle_double_click(&self, x: f32, y: f32) {
        let (sx, sy) = self.to_surface(x, y);
        self.session
            .borrow_mut()
            .double_click(sx, sy, &mut *self.scene.borrow_mut());
        self.scene.borrow().sync_models();
    }

    /// Handle pointer movement at host-component coordinates.
    pub fn handle_pointer_move(&self, x: f32, y: f32) {
        let (sx, sy) = self.to_surface(x, y);
        self.session
            .borrow_mut()
            .pointer_move(sx, sy, &mut *self.scene.borrow_mut());
        self.scene.borrow().sync_models();
    }

    /// Record where the drawing surface sits inside the host component.
    /// Raw event coordinates have this origin subtracted before dispatch.
    pub fn handle_surface_origin(&self, x: f32, y: f32) {
        *self.origin_x.borrow_mut() = x;
        *self.origin_y.borrow_mut() = y;
    }

    /// Resize the drawing surface and redraw it at the new extent.
    pub fn handle_surface_resize(&self, width: f32, height: f32) {
        self.scene.borrow_mut().set_size(width, height);
        self.refresh();
    }

    // === Callback factories ===

    /// Returns a callback for the toolbar's tool selection.
    pub fn select_tool_callback(&self) -> impl Fn(SharedString) {
        let controller = self.clone();
        move |name| controller.handle_select_tool(name.as_str())
    }

    /// Returns a callback for left clicks on the editing area.
    pub fn left_click_callback(&self) -> impl Fn(f32, f32) {
        let controller = self.clone();
        move |x, y| controller.handle_left_click(x, y)
    }

    /// Returns a callback for right clicks on the editing area.
    ///
    /// The host markup must claim the right press itself so no platform
    /// context menu opens over the surface.
    pub fn right_click_callback(&self) -> impl Fn(f32, f32) {
        let controller = self.clone();
        move |x, y| controller.handle_right_click(x, y)
    }

    /// Returns a callback for double clicks on the editing area.
    pub fn double_click_callback(&self) -> impl Fn(f32, f32) {
        let controller = self.clone();
        move |x, y| controller.handle_double_click(x, y)
    }

    /// Returns a callback for pointer movement over the editing area.
    pub fn pointer_move_callback(&self) -> impl Fn(f32, f32) {
        let controller = self.clone();
        move |x, y| controller.handle_pointer_move(x, y)
    }

    fn to_surface(&self, x: f32, y: f32) -> (f32, f32) {
        (x - *self.origin_x.borrow(), y - *self.origin_y.borrow())
    }
}

impl Default for EditorController {
    /// A controller for an 800x600 surface at origin.
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
