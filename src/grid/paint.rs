//! Host-independent painting of the visible grid.

use tracing::trace;

use super::{
    geometry::{ItemRect, Point, Rect2},
    item::ItemColor,
    layout::FlowLayout,
    scroll::ViewportState,
};

/// Outline kinds the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    ItemOutline,
    Focus,
}

/// Drawing primitives offered by the host, in surface coordinates.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect2, color: ItemColor);
    fn stroke_rect(&mut self, rect: Rect2, style: StrokeStyle);
    fn fill_text_centered(&mut self, text: &str, center: Point);
}

/// Paint the visible items back to front, then the focus outline on top.
///
/// Returns the number of items painted.
pub fn paint_grid(
    surface: &mut impl Surface,
    layout: &FlowLayout<'_>,
    viewport: &ViewportState,
    focus: Option<ItemRect>,
) -> usize {
    surface.clear();

    let items = layout.store().items();
    let mut painted = 0;
    for (index, rect) in layout.visible_items(viewport) {
        let area = rect.to_surface(viewport.offset);
        surface.fill_rect(area, items[index].color);
        surface.stroke_rect(area, StrokeStyle::ItemOutline);
        surface.fill_text_centered(&index.to_string(), area.center());
        painted += 1;
    }

    if let Some(rect) = focus {
        surface.stroke_rect(rect.to_surface(viewport.offset), StrokeStyle::Focus);
    }

    trace!(painted, offset = ?viewport.offset, "Painted grid");
    painted
}


#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::{testing::*, *};
    use crate::grid::{
        geometry::{Offset, Size},
        item::ItemStore,
        layout::LayoutParams,
    };

    const PARAMS: LayoutParams = LayoutParams {
        viewport_width: 1000.0,
        item_height: 100.0,
    };

    #[test]
    fn test_paint_order_and_focus_last() {
        let store = ItemStore::from_widths(&[400.0, 400.0, 400.0], Some(0)).unwrap();
        let layout = FlowLayout::new(&store, PARAMS);
        let viewport = ViewportState::new(Size::new(1000.0, 500.0));
        let focus = layout.rect_of(1);

        let mut surface = RecordingSurface::default();
        let painted = paint_grid(&mut surface, &layout, &viewport, focus);

        assert_eq!(painted, 3);
        assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
        assert_eq!(
            surface.calls.last(),
            Some(&DrawCall::Stroke(
                Rect2::new(400.0, 0.0, 400.0, 100.0),
                StrokeStyle::Focus
            ))
        );
        assert_eq!(surface.texts(), vec!["0", "1", "2"]);
        assert_eq!(
            surface.calls[3],
            DrawCall::Text("0".to_string(), Point::new(200.0, 50.0))
        );
    }

    #[test]
    fn test_paint_translates_by_offset() {
        let store = ItemStore::from_widths(&[500.0; 10], Some(0)).unwrap();
        let layout = FlowLayout::new(&store, PARAMS);
        let viewport = ViewportState {
            offset: Offset::new(0.0, 200.0),
            size: Size::new(1000.0, 100.0),
        };

        let mut surface = RecordingSurface::default();
        paint_grid(&mut surface, &layout, &viewport, None);

        assert_eq!(surface.texts(), vec!["4", "5"]);
        assert!(surface
            .calls
            .contains(&DrawCall::Fill(Rect2::new(500.0, 0.0, 500.0, 100.0))));
    }

    #[test]
    fn test_paint_empty_store_only_clears() {
        let store = ItemStore::default();
        let layout = FlowLayout::new(&store, PARAMS);
        let viewport = ViewportState::new(Size::new(1000.0, 500.0));

        let mut surface = RecordingSurface::default();
        let painted = paint_grid(&mut surface, &layout, &viewport, None);

        assert_eq!(painted, 0);
        assert_eq!(surface.calls, vec![DrawCall::Clear]);
    }
}
