//! Application state for the TUI.

use std::mem;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{self, Constraint, Layout},
    Frame,
};
use tracing::debug;

use super::widgets::{
    grid_view::GridView,
    help_menu::{HelpMenu, HelpMenuWidget},
    status_bar::{StatusBar, StatusBarInput, StatusBarWidget},
    InteractiveStatefulWidget,
};
use crate::{
    config::GridArgs,
    error::{Error, Result},
    grid::{Direction, FrameSlot, GridSession, MonotonicClock, Repaint, RowIndex, Size},
};

/// Application state.
pub struct App {
    session: GridSession<MonotonicClock, FrameSlot>,
    help: HelpMenu,
    status: StatusBar,
    /// Whether app should exit.
    pub should_exit: bool,
    /// Whether the next loop iteration has to draw.
    redraw: bool,
}

impl App {
    /// Build the session for a terminal of `terminal` size.
    pub fn new(args: &GridArgs, terminal: layout::Size) -> Result<Self> {
        args.validate()?;
        let viewport = viewport_for(terminal)?;
        let store = args.build_store()?;
        let session = GridSession::new(
            store,
            args.session_config(viewport),
            MonotonicClock::default(),
            FrameSlot::default(),
        );
        Ok(Self {
            session,
            help: HelpMenu::default(),
            status: StatusBar::default(),
            should_exit: false,
            redraw: true,
        })
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Resize(width, height) => {
                debug!(width, height, "Ignoring terminal resize");
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if HelpMenuWidget::handle_event(&mut self.help, key) {
            self.redraw = true;
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_exit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('?') => {
                self.help.toggle();
                self.redraw = true;
            }
            code => {
                if let Some(direction) = direction_for(code) {
                    let repaint = self.session.navigate(direction);
                    self.mark(repaint);
                }
            }
        }
    }

    /// Whether the animator is waiting for a frame.
    pub fn has_pending_frame(&self) -> bool {
        self.session.scheduler().pending().is_some()
    }

    /// Deliver the pending frame, if any.
    pub fn on_frame(&mut self) {
        if let Some(frame) = self.session.scheduler_mut().take_due() {
            let repaint = self.session.on_frame(frame);
            self.mark(repaint);
        }
    }

    fn mark(&mut self, repaint: Repaint) {
        if repaint == Repaint::Needed {
            self.redraw = true;
        }
    }

    /// Consume the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        mem::take(&mut self.redraw)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [grid_area, status_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        frame.render_widget(GridView::new(&self.session), grid_area);

        let input = self.status_input();
        StatusBarWidget::update_state(&mut self.status, input);
        frame.render_stateful_widget(StatusBarWidget, status_area, &mut self.status);

        if self.help.is_visible() {
            frame.render_stateful_widget(HelpMenuWidget, frame.area(), &mut self.help);
        }
    }

    fn status_input(&self) -> StatusBarInput {
        let focused = self.session.focused();
        StatusBarInput {
            focused,
            item_count: self.session.store().len(),
            row: focused
                .and_then(|index| self.session.rect_of(index))
                .map(|rect| rect.row),
            row_count: self.session.row_index().map(RowIndex::row_count),
            offset: self.session.viewport().offset,
            policy: self.session.policy(),
            animating: self.session.is_animating(),
        }
    }

    /// Release the pending animation frame before the event loop exits.
    pub fn teardown(&mut self) {
        self.session.teardown();
    }
}

/// Grid viewport for a terminal, leaving the last line to the status bar.
pub fn viewport_for(terminal: layout::Size) -> Result<Size> {
    if terminal.width == 0 || terminal.height < 2 {
        return Err(Error::Viewport {
            width: terminal.width,
            height: terminal.height,
        });
    }
    Ok(Size::new(
        f64::from(terminal.width),
        f64::from(terminal.height - 1),
    ))
}

const fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
        _ => None,
    }
}
