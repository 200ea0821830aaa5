//! Flow layout: items are packed left to right and wrap once a row is full.
//!
//! Positions are never stored per item. Every query re-walks the sequence from
//! index 0, because row-jump navigation can land on any index and item widths
//! vary.

use std::{iter::Enumerate, slice::Iter};

use super::{
    geometry::{ItemRect, Point},
    item::{Item, ItemIndex, ItemStore},
    scroll::ViewportState,
};

/// Inputs the layout depends on besides the items themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub viewport_width: f64,
    pub item_height: f64,
}

/// Row-flow layout over a borrowed item store.
#[derive(Debug, Clone, Copy)]
pub struct FlowLayout<'a> {
    store: &'a ItemStore,
    params: LayoutParams,
}

impl<'a> FlowLayout<'a> {
    pub const fn new(store: &'a ItemStore, params: LayoutParams) -> Self {
        Self { store, params }
    }

    pub const fn store(&self) -> &'a ItemStore {
        self.store
    }

    /// Walk every item in order together with its placement.
    pub fn walk(&self) -> FlowWalk<'a> {
        FlowWalk {
            items: self.store.items().iter().enumerate(),
            x: 0.0,
            row: 0,
            params: self.params,
        }
    }

    /// Placement of the item at `index`. O(index).
    pub fn rect_of(&self, index: ItemIndex) -> Option<ItemRect> {
        self.walk().nth(index).map(|(_, rect)| rect)
    }

    /// Items overlapping the viewport window, in paint order.
    ///
    /// Stops as soon as a row starts below the visible bottom edge.
    pub fn visible_items(
        &self,
        viewport: &ViewportState,
    ) -> impl Iterator<Item = (ItemIndex, ItemRect)> + 'a {
        let offset = viewport.offset;
        let size = viewport.size;
        self.walk()
            .take_while(move |(_, rect)| rect.y - offset.y <= size.height)
            .filter(move |(_, rect)| rect.intersects(offset, size))
    }

    /// Nearest item to a content position.
    ///
    /// Points before a row's first item snap to it, points past its last item
    /// snap to that one, and points below the content snap to the last item.
    #[allow(clippy::cast_sign_loss)]
    pub fn index_at(&self, point: Point) -> Option<ItemIndex> {
        let target_row = if point.y > 0.0 {
            (point.y / self.params.item_height).floor() as usize
        } else {
            0
        };

        let mut last = None;
        for (index, rect) in self.walk() {
            if rect.row > target_row {
                break;
            }
            last = Some(index);
            if rect.row == target_row && point.x < rect.right() {
                return Some(index);
            }
        }
        last
    }
}

/// Iterator produced by [`FlowLayout::walk`].
#[derive(Debug, Clone)]
pub struct FlowWalk<'a> {
    items: Enumerate<Iter<'a, Item>>,
    x: f64,
    row: usize,
    params: LayoutParams,
}

impl Iterator for FlowWalk<'_> {
    type Item = (ItemIndex, ItemRect);

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Self::Item> {
        let (index, item) = self.items.next()?;
        let rect = ItemRect {
            row: self.row,
            x: self.x,
            y: self.row as f64 * self.params.item_height,
            width: item.width,
            height: self.params.item_height,
        };

        // Wrap only after the cursor has reached the edge, so an item that
        // overflows stays on the row it started in.
        self.x += item.width;
        if self.x >= self.params.viewport_width {
            self.x = 0.0;
            self.row += 1;
        }
        Some((index, rect))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// First index of every row, built in one pass.
///
/// Lookups binary-search the row and only sum widths inside it, giving the
/// same rectangles as [`FlowLayout::rect_of`] without the O(index) scan.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    row_starts: Vec<ItemIndex>,
}

impl RowIndex {
    pub fn build(layout: &FlowLayout<'_>) -> Self {
        let mut row_starts = Vec::new();
        for (index, rect) in layout.walk() {
            if rect.row == row_starts.len() {
                row_starts.push(index);
            }
        }
        Self { row_starts }
    }

    pub fn row_count(&self) -> usize {
        self.row_starts.len()
    }

    /// Row containing `index`, if `index` is inside the indexed store.
    pub fn row_of(&self, index: ItemIndex) -> Option<usize> {
        if self.row_starts.is_empty() {
            return None;
        }
        Some(self.row_starts.partition_point(|&start| start <= index) - 1)
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn rect_of(&self, layout: &FlowLayout<'_>, index: ItemIndex) -> Option<ItemRect> {
        let items = layout.store.items();
        let item = items.get(index)?;
        let row = self.row_of(index)?;
        let start = self.row_starts[row];
        let x = items[start..index].iter().fold(0.0, |x, it| x + it.width);
        let params = layout.params;
        Some(ItemRect {
            row,
            x,
            y: row as f64 * params.item_height,
            width: item.width,
            height: params.item_height,
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::grid::geometry::{Offset, Size};

    fn store(widths: &[f64]) -> ItemStore {
        ItemStore::from_widths(widths, Some(0)).unwrap()
    }

    const PARAMS: LayoutParams = LayoutParams {
        viewport_width: 1000.0,
        item_height: 100.0,
    };

    #[test]
    fn test_three_items_fill_first_row() {
        let store = store(&[400.0, 400.0, 400.0]);
        let layout = FlowLayout::new(&store, PARAMS);

        let xs: Vec<_> = (0..3)
            .map(|i| layout.rect_of(i).map(|r| (r.x, r.y)))
            .collect();
        assert_eq!(
            xs,
            vec![Some((0.0, 0.0)), Some((400.0, 0.0)), Some((800.0, 0.0))]
        );
        assert_eq!(layout.rect_of(3), None);
    }

    #[test]
    fn test_wrap_happens_after_overflowing_item() {
        let store = store(&[400.0, 400.0, 400.0, 100.0]);
        let layout = FlowLayout::new(&store, PARAMS);

        let fourth = layout.rect_of(3).unwrap();
        assert_eq!(fourth.row, 1);
        assert_eq!((fourth.x, fourth.y), (0.0, 100.0));
    }

    #[test]
    fn test_exact_fit_wraps() {
        let store = store(&[500.0, 500.0, 10.0]);
        let layout = FlowLayout::new(&store, PARAMS);
        assert_eq!(layout.rect_of(2).unwrap().row, 1);
    }

    #[test]
    fn test_item_wider_than_viewport_starts_its_own_row() {
        let store = store(&[300.0, 700.0, 1500.0, 50.0]);
        let layout = FlowLayout::new(&store, PARAMS);

        let wide = layout.rect_of(2).unwrap();
        assert_eq!((wide.row, wide.x, wide.width), (1, 0.0, 1500.0));
        let after = layout.rect_of(3).unwrap();
        assert_eq!((after.row, after.x), (2, 0.0));
    }

    #[test]
    fn test_visible_items_skips_offscreen_and_stops_below() {
        // Rows of two 500-wide items.
        let store = store(&[500.0; 20]);
        let layout = FlowLayout::new(&store, PARAMS);
        let viewport = ViewportState {
            offset: Offset::new(600.0, 150.0),
            size: Size::new(1000.0, 200.0),
        };

        let visible: Vec<_> = layout.visible_items(&viewport).map(|(i, _)| i).collect();
        // Rows 1..=3 intersect vertically; only the right column overlaps x >= 600.
        assert_eq!(visible, vec![3, 5, 7]);
    }

    #[test]
    fn test_visible_items_includes_partially_visible_rows() {
        let store = store(&[250.0; 12]);
        let layout = FlowLayout::new(&store, PARAMS);
        let viewport = ViewportState {
            offset: Offset::new(0.0, 50.0),
            size: Size::new(1000.0, 100.0),
        };

        let visible: Vec<_> = layout.visible_items(&viewport).map(|(i, _)| i).collect();
        assert_eq!(visible, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_index_at() {
        let store = store(&[400.0, 400.0, 400.0, 100.0, 200.0]);
        let layout = FlowLayout::new(&store, PARAMS);

        assert_eq!(layout.index_at(Point::new(0.0, 0.0)), Some(0));
        assert_eq!(layout.index_at(Point::new(450.0, 99.0)), Some(1));
        assert_eq!(layout.index_at(Point::new(1150.0, 10.0)), Some(2));
        assert_eq!(layout.index_at(Point::new(-20.0, 120.0)), Some(3));
        assert_eq!(layout.index_at(Point::new(900.0, 120.0)), Some(4));
        assert_eq!(layout.index_at(Point::new(0.0, 5000.0)), Some(4));
        assert_eq!(layout.index_at(Point::new(10.0, -5.0)), Some(0));
    }

    #[test]
    fn test_index_at_empty_store() {
        let store = ItemStore::default();
        let layout = FlowLayout::new(&store, PARAMS);
        assert_eq!(layout.index_at(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_row_index_rows() {
        let store = store(&[400.0, 400.0, 400.0, 100.0, 1200.0, 10.0]);
        let layout = FlowLayout::new(&store, PARAMS);
        let index = RowIndex::build(&layout);

        assert_eq!(index.row_count(), 3);
        assert_eq!(index.row_of(2), Some(0));
        assert_eq!(index.row_of(4), Some(1));
        assert_eq!(index.row_of(5), Some(2));
        assert_eq!(index.rect_of(&layout, 6), None);
    }

    proptest! {
        #[test]
        fn prop_items_start_inside_row_and_rows_never_go_back(
            widths in prop::collection::vec(1.0f64..600.0, 1..200),
            viewport_width in 1.0f64..1500.0,
        ) {
            let store = store(&widths);
            let params = LayoutParams { viewport_width, item_height: 10.0 };
            let layout = FlowLayout::new(&store, params);

            let mut last_y = 0.0;
            for (index, rect) in layout.walk() {
                prop_assert!(rect.x >= 0.0);
                prop_assert!(rect.x < viewport_width);
                prop_assert!(rect.y >= last_y);
                prop_assert_eq!(rect.width, widths[index]);
                last_y = rect.y;
            }
        }

        #[test]
        fn prop_row_index_matches_scan(
            widths in prop::collection::vec(1.0f64..600.0, 1..200),
            viewport_width in 1.0f64..1500.0,
        ) {
            let store = store(&widths);
            let params = LayoutParams { viewport_width, item_height: 7.0 };
            let layout = FlowLayout::new(&store, params);
            let index = RowIndex::build(&layout);

            for i in 0..widths.len() {
                prop_assert_eq!(index.rect_of(&layout, i), layout.rect_of(i));
            }
        }

        #[test]
        fn prop_index_at_inverts_rect_of(
            widths in prop::collection::vec(1.0f64..300.0, 1..100),
            pick in 0usize..100,
        ) {
            let store = store(&widths);
            let layout = FlowLayout::new(&store, PARAMS);
            let i = pick % widths.len();
            let rect = layout.rect_of(i).unwrap();

            prop_assert_eq!(layout.index_at(Point::new(rect.x, rect.y)), Some(i));
        }
    }
}
