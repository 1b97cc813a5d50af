//! Screens, their views, and the shared tab bar.
//!
//! Views are cheap cloneable handles (`Rc<RefCell<..>>`) so the animator can
//! mutate transform state while the coordinator keeps ownership of the stack,
//! all on one thread.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use glissade_graphics::{GraphicsLayer, Rect, Size};

use crate::artifacts::Overlay;
use crate::metrics::{SHADOW_OPACITY, SHADOW_WIDTH};

pub type ScreenId = u64;

/// Per-screen layout and behavior flags, owned by the host and read-only to
/// the transition machinery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenFlags {
    /// The screen shows with the navigation bar hidden.
    pub hides_navigation_bar: bool,
    /// Content is laid out under the top bar.
    pub extends_under_top_bar: bool,
    /// Content is laid out under the bottom bar.
    pub extends_under_bottom_bar: bool,
    /// Pushing this screen hides the shared tab bar.
    pub push_hides_tab_bar: bool,
    /// The screen opts out of the interactive pop gesture.
    pub interactive_pop_disabled: bool,
}

/// One entry of the navigation stack.
pub struct Screen {
    id: ScreenId,
    pub flags: ScreenFlags,
    view: ScreenView,
}

impl Screen {
    pub fn new(id: ScreenId, flags: ScreenFlags, frame: Rect) -> Self {
        Self {
            id,
            flags,
            view: ScreenView::new(frame),
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn view(&self) -> &ScreenView {
        &self.view
    }
}

/// Drop shadow along a view's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeftEdgeShadow {
    pub rect: Rect,
    pub opacity: f32,
}

struct ViewState {
    frame: Rect,
    layer: GraphicsLayer,
    clips_to_bounds: bool,
    shadow: Option<LeftEdgeShadow>,
    overlays: SmallVec<[Overlay; 2]>,
}

/// Cloneable handle to a screen's view state.
#[derive(Clone)]
pub struct ScreenView {
    inner: Rc<RefCell<ViewState>>,
}

impl ScreenView {
    pub fn new(frame: Rect) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewState {
                frame,
                layer: GraphicsLayer::IDENTITY,
                clips_to_bounds: true,
                shadow: None,
                overlays: SmallVec::new(),
            })),
        }
    }

    pub fn frame(&self) -> Rect {
        self.inner.borrow().frame
    }

    pub fn set_frame(&self, frame: Rect) {
        self.inner.borrow_mut().frame = frame;
    }

    pub fn layer(&self) -> GraphicsLayer {
        self.inner.borrow().layer
    }

    pub fn set_translation_x(&self, translation_x: f32) {
        self.inner.borrow_mut().layer.translation_x = translation_x;
    }

    pub fn reset_layer(&self) {
        self.inner.borrow_mut().layer = GraphicsLayer::IDENTITY;
    }

    pub fn clips_to_bounds(&self) -> bool {
        self.inner.borrow().clips_to_bounds
    }

    pub fn set_clips_to_bounds(&self, clips: bool) {
        self.inner.borrow_mut().clips_to_bounds = clips;
    }

    /// Attaches the standard left-edge drop shadow, sized to the view's
    /// current height.
    pub fn add_left_edge_shadow(&self) {
        let mut state = self.inner.borrow_mut();
        let rect = Rect::new(-SHADOW_WIDTH, 0.0, SHADOW_WIDTH, state.frame.height);
        state.shadow = Some(LeftEdgeShadow {
            rect,
            opacity: SHADOW_OPACITY,
        });
    }

    pub fn shadow(&self) -> Option<LeftEdgeShadow> {
        self.inner.borrow().shadow
    }

    pub fn add_overlay(&self, overlay: Overlay) {
        self.inner.borrow_mut().overlays.push(overlay);
    }

    pub fn remove_overlay(&self, overlay: &Overlay) {
        self.inner
            .borrow_mut()
            .overlays
            .retain(|existing| !existing.same_as(overlay));
    }

    pub fn overlays(&self) -> Vec<Overlay> {
        self.inner.borrow().overlays.iter().cloned().collect()
    }

    pub fn same_view(&self, other: &ScreenView) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

struct TabBarState {
    bounds: Size,
    hidden: bool,
    alpha: f32,
}

/// Shared tab bar handle. One per coordinator at most; screens influence its
/// effective visibility through [`ScreenFlags::push_hides_tab_bar`].
#[derive(Clone)]
pub struct TabBar {
    inner: Rc<RefCell<TabBarState>>,
}

impl TabBar {
    pub fn new(bounds: Size) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TabBarState {
                bounds,
                hidden: false,
                alpha: 1.0,
            })),
        }
    }

    pub fn bounds(&self) -> Size {
        self.inner.borrow().bounds
    }

    pub fn is_hidden(&self) -> bool {
        self.inner.borrow().hidden
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.inner.borrow_mut().hidden = hidden;
    }

    pub fn alpha(&self) -> f32 {
        self.inner.borrow().alpha
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.inner.borrow_mut().alpha = alpha;
    }

    /// Effective hiddenness for a specific screen.
    pub fn is_hidden_for(&self, flags: &ScreenFlags) -> bool {
        self.is_hidden() || flags.push_hides_tab_bar
    }
}

/// A screen with no tab bar at all counts as hiding it.
pub fn tab_bar_hidden_for(tab_bar: Option<&TabBar>, flags: &ScreenFlags) -> bool {
    match tab_bar {
        Some(bar) => bar.is_hidden_for(flags),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_matches_view_height() {
        let view = ScreenView::new(Rect::new(0.0, 0.0, 320.0, 568.0));
        view.add_left_edge_shadow();
        let shadow = view.shadow().unwrap();
        assert_eq!(shadow.rect, Rect::new(-4.0, 0.0, 4.0, 568.0));
        assert_eq!(shadow.opacity, 0.2);
    }

    #[test]
    fn missing_tab_bar_counts_as_hidden() {
        let flags = ScreenFlags::default();
        assert!(tab_bar_hidden_for(None, &flags));
    }

    #[test]
    fn push_hides_tab_bar_hides_it_per_screen() {
        let bar = TabBar::new(Size::new(320.0, 49.0));
        let mut flags = ScreenFlags::default();
        assert!(!tab_bar_hidden_for(Some(&bar), &flags));

        flags.push_hides_tab_bar = true;
        assert!(tab_bar_hidden_for(Some(&bar), &flags));

        flags.push_hides_tab_bar = false;
        bar.set_hidden(true);
        assert!(tab_bar_hidden_for(Some(&bar), &flags));
    }
}
