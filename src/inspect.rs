//! `flowgrid inspect`: print the computed layout and a navigation trace as JSON.

use std::io::{stdout, Write};

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::{
    config::{positive, GridArgs},
    error::{ConfigError, Result},
    grid::{
        Direction, FrameSlot, GridSession, ItemIndex, ItemRect, ManualClock, Offset, Point,
        RowIndex, ScrollPolicy, Size, ViewportState,
    },
};

/// Simulated frame interval used to drive animations to completion.
const FRAME_MS: f64 = 16.0;

#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Viewport width in layout units
    #[arg(long)]
    pub viewport_width: f64,

    /// Viewport height in layout units
    #[arg(long)]
    pub viewport_height: f64,

    /// Comma-separated moves to replay (left, right, up, down)
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<Direction>,

    /// Content position to resolve to the nearest item, as `x,y` (repeatable)
    #[arg(long = "at", value_parser = parse_point)]
    pub at: Vec<Point>,

    /// Only list the first N item rectangles
    #[arg(long)]
    pub limit: Option<usize>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    viewport: ViewportState,
    policy: ScrollPolicy,
    item_count: usize,
    columns_per_row: usize,
    row_count: Option<usize>,
    items: Vec<ItemReport>,
    hits: Vec<Hit>,
    trace: Vec<TraceStep>,
}

#[derive(Debug, Serialize)]
struct ItemReport {
    index: ItemIndex,
    hue: f64,
    rect: ItemRect,
}

#[derive(Debug, Serialize)]
struct Hit {
    point: Point,
    index: Option<ItemIndex>,
}

#[derive(Debug, Serialize)]
struct TraceStep {
    direction: Direction,
    focused: Option<ItemIndex>,
    rect: Option<ItemRect>,
    offset: Offset,
    frames: usize,
}

fn parse_point(value: &str) -> std::result::Result<Point, ConfigError> {
    let invalid = || ConfigError::InvalidList {
        field: "point",
        value: value.to_string(),
    };
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

pub fn run(args: &InspectArgs) -> Result<()> {
    args.grid.validate()?;
    positive("viewport width", args.viewport_width)?;
    positive("viewport height", args.viewport_height)?;

    let store = args.grid.build_store()?;
    let config = args
        .grid
        .session_config(Size::new(args.viewport_width, args.viewport_height));
    let mut session = GridSession::new(store, config, ManualClock::default(), FrameSlot::default());

    let report = build_report(&mut session, args);
    info!(
        steps = report.trace.len(),
        items = report.item_count,
        "Inspection finished"
    );

    let mut out = stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        serde_json::to_writer(&mut out, &report)?;
    }
    writeln!(out)?;
    Ok(())
}

fn build_report(session: &mut GridSession<ManualClock, FrameSlot>, args: &InspectArgs) -> Report {
    let layout = session.layout();
    let items = layout
        .walk()
        .take(args.limit.unwrap_or(usize::MAX))
        .filter_map(|(index, rect)| {
            let item = session.store().get(index)?;
            Some(ItemReport {
                index,
                hue: item.color.hue,
                rect,
            })
        })
        .collect();
    let hits = args
        .at
        .iter()
        .map(|&point| Hit {
            point,
            index: layout.index_at(point),
        })
        .collect();

    let viewport = *session.viewport();
    let trace = args
        .moves
        .iter()
        .map(|&direction| replay(session, direction))
        .collect();

    Report {
        viewport,
        policy: session.policy(),
        item_count: session.store().len(),
        columns_per_row: session.navigator().columns_per_row(),
        row_count: session.row_index().map(RowIndex::row_count),
        items,
        hits,
        trace,
    }
}

/// Apply one move and run any animation it started until it settles.
fn replay(session: &mut GridSession<ManualClock, FrameSlot>, direction: Direction) -> TraceStep {
    let _ = session.navigate(direction);

    let mut frames = 0;
    while let Some(frame) = session.scheduler_mut().take_due() {
        session.clock_mut().advance(FRAME_MS);
        let _ = session.on_frame(frame);
        frames += 1;
    }

    let focused = session.focused();
    TraceStep {
        direction,
        focused,
        rect: focused.and_then(|index| session.rect_of(index)),
        offset: session.viewport().offset,
        frames,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("10, 20.5"), Ok(Point::new(10.0, 20.5)));
        assert_eq!(
            parse_point("10"),
            Err(ConfigError::InvalidList {
                field: "point",
                value: "10".to_string()
            })
        );
        assert!(parse_point("a,b").is_err());
    }
}
