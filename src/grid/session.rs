//! The grid session: sole owner of the item store, viewport and focus.

use tracing::{debug, info};

use super::{
    animation::{Animator, Clock, FrameHandle, FrameScheduler, FrameSlot, MonotonicClock},
    geometry::{ItemRect, Size},
    item::{ItemIndex, ItemStore},
    layout::{FlowLayout, LayoutParams, RowIndex},
    navigation::{Direction, Navigator},
    paint::{paint_grid, Surface},
    scroll::{ScrollPolicy, ViewportState},
};

/// Whether a state change needs to be painted.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    Needed,
    Skip,
}

/// Session settings derived from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub layout: LayoutParams,
    pub viewport_height: f64,
    pub policy: ScrollPolicy,
    /// Animation duration; `None` scrolls instantly.
    pub animation_ms: Option<f64>,
    /// Answer rectangle lookups from a precomputed [`RowIndex`].
    pub row_index: bool,
}

pub struct GridSession<C = MonotonicClock, S = FrameSlot> {
    store: ItemStore,
    params: LayoutParams,
    navigator: Navigator,
    row_index: Option<RowIndex>,
    viewport: ViewportState,
    /// `None` only for an empty store.
    focus: Option<ItemIndex>,
    policy: ScrollPolicy,
    animator: Option<Animator>,
    clock: C,
    scheduler: S,
}

impl<C: Clock, S: FrameScheduler> GridSession<C, S> {
    pub fn new(store: ItemStore, config: SessionConfig, clock: C, scheduler: S) -> Self {
        let params = config.layout;
        let navigator = Navigator::new(&store, params.viewport_width);
        let row_index = config
            .row_index
            .then(|| RowIndex::build(&FlowLayout::new(&store, params)));
        let focus = (!store.is_empty()).then_some(0);

        info!(
            items = store.len(),
            columns_per_row = navigator.columns_per_row(),
            policy = ?config.policy,
            animated = config.animation_ms.is_some(),
            "Grid session created"
        );

        Self {
            navigator,
            row_index,
            viewport: ViewportState::new(Size::new(params.viewport_width, config.viewport_height)),
            focus,
            policy: config.policy,
            animator: config.animation_ms.map(Animator::new),
            params,
            store,
            clock,
            scheduler,
        }
    }

    pub const fn layout(&self) -> FlowLayout<'_> {
        FlowLayout::new(&self.store, self.params)
    }

    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    pub const fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub const fn focused(&self) -> Option<ItemIndex> {
        self.focus
    }

    pub const fn policy(&self) -> ScrollPolicy {
        self.policy
    }

    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub const fn row_index(&self) -> Option<&RowIndex> {
        self.row_index.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.as_ref().is_some_and(Animator::is_running)
    }

    pub const fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Placement of `index`, from the row index when one was built.
    pub fn rect_of(&self, index: ItemIndex) -> Option<ItemRect> {
        let layout = self.layout();
        match &self.row_index {
            Some(rows) => rows.rect_of(&layout, index),
            None => layout.rect_of(index),
        }
    }

    /// Move the focus one step and scroll the new item into view.
    ///
    /// While an animation is running, the move starts from its target index
    /// and offset, and the new animation starts from the offset on screen.
    pub fn navigate(&mut self, direction: Direction) -> Repaint {
        let Some(focused) = self.focus else {
            debug!(?direction, "Ignoring navigation on an empty grid");
            return Repaint::Skip;
        };

        let (from_index, from_offset) = self
            .animator
            .as_ref()
            .and_then(Animator::current)
            .map_or((focused, self.viewport.offset), |animation| {
                (animation.target_index, animation.target_offset)
            });

        let next = self.navigator.next_index(from_index, direction);
        if next == from_index {
            return Repaint::Skip;
        }
        let Some(rect) = self.rect_of(next) else {
            return Repaint::Skip;
        };
        let target = self
            .policy
            .scroll_into_view(&rect, from_offset, self.viewport.size);

        if let Some(animator) = &mut self.animator {
            let now = self.clock.now_ms();
            animator.start(&mut self.scheduler, now, self.viewport.offset, target, next);
            Repaint::Skip
        } else {
            self.focus = Some(next);
            self.viewport.offset = target;
            Repaint::Needed
        }
    }

    /// Deliver a scheduled frame to the animator.
    pub fn on_frame(&mut self, frame: FrameHandle) -> Repaint {
        let Some(animator) = self.animator.as_mut() else {
            return Repaint::Skip;
        };
        let now = self.clock.now_ms();
        let Some(tick) = animator.tick(&mut self.scheduler, frame, now) else {
            return Repaint::Skip;
        };

        self.focus = Some(tick.focus);
        self.viewport.offset = tick.offset;
        Repaint::Needed
    }

    /// Paint the current state onto `surface`.
    pub fn paint(&self, surface: &mut impl Surface) -> usize {
        let focus = self.focus.and_then(|index| self.rect_of(index));
        paint_grid(surface, &self.layout(), &self.viewport, focus)
    }

    /// Release the pending frame, if any.
    pub fn teardown(&mut self) {
        if let Some(animator) = &mut self.animator {
            animator.cancel(&mut self.scheduler);
        }
        debug!("Grid session torn down");
    }
}
