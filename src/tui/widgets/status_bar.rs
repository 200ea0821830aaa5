//! Status bar with keybindings and the current focus and scroll position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::{theme::Theme, InteractiveStatefulWidget};
use crate::grid::{ItemIndex, Offset, ScrollPolicy};

/// Input for updating status bar state.
pub struct StatusBarInput {
    pub focused: Option<ItemIndex>,
    pub item_count: usize,
    pub row: Option<usize>,
    pub row_count: Option<usize>,
    pub offset: Offset,
    pub policy: ScrollPolicy,
    pub animating: bool,
}

/// State for the status bar widget.
#[derive(Default)]
pub struct StatusBar {
    focused: Option<ItemIndex>,
    item_count: usize,
    row: Option<usize>,
    row_count: Option<usize>,
    offset: Offset,
    policy: ScrollPolicy,
    animating: bool,
}

/// Widget for rendering the status bar.
pub struct StatusBarWidget;

impl StatefulWidget for StatusBarWidget {
    type State = StatusBar;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        const KEYBINDINGS: &[(&str, &str)] = &[("?", "help"), ("←↑↓→", "move"), ("q", "quit")];

        let separator = Span::raw(" │ ");

        let key_spans = KEYBINDINGS
            .iter()
            .enumerate()
            .flat_map(|(i, (key, desc))| {
                let prefix = (i > 0).then(|| separator.clone());
                prefix.into_iter().chain([
                    Span::styled(*key, Theme::KEY),
                    Span::raw(format!(": {desc}")),
                ])
            });

        let focus_text = state.focused.map_or_else(
            || "empty".to_string(),
            |index| format!("{index}/{}", state.item_count.saturating_sub(1)),
        );
        let row_span = state.row.map(|row| {
            let text = state
                .row_count
                .map_or_else(|| format!(" row {row}"), |rows| format!(" row {row}/{rows}"));
            Span::styled(text, Theme::DIM)
        });
        let position_spans = [
            separator.clone(),
            Span::raw("item "),
            Span::styled(focus_text, Theme::VALUE),
        ]
        .into_iter()
        .chain(row_span)
        .chain([
            Span::raw("  offset "),
            Span::styled(
                format!("{:.0},{:.0}", state.offset.x, state.offset.y),
                Theme::VALUE,
            ),
            Span::styled(format!(" [{}]", policy_label(state.policy)), Theme::DIM),
        ]);

        let animating = state
            .animating
            .then(|| Span::styled(" scrolling", Theme::ANIMATING));

        let spans: Vec<Span> = key_spans.chain(position_spans).chain(animating).collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl InteractiveStatefulWidget for StatusBarWidget {
    type Input = StatusBarInput;
    type Event = ();

    fn update_state(state: &mut Self::State, input: Self::Input) {
        state.focused = input.focused;
        state.item_count = input.item_count;
        state.row = input.row;
        state.row_count = input.row_count;
        state.offset = input.offset;
        state.policy = input.policy;
        state.animating = input.animating;
    }
}

const fn policy_label(policy: ScrollPolicy) -> &'static str {
    match policy {
        ScrollPolicy::Eager => "eager",
        ScrollPolicy::Step => "step",
    }
}
