//! Template boundary outlines
//!
//! A template's outline is every side of a member cell whose neighbour in that
//! direction is not a member of the same template. Shared internal edges are
//! never emitted.

use crate::{PixelPos, Template, TileCoord};

/// Which side of a cell an edge lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

impl Side {
    /// All sides, in the order edges are emitted for a cell
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

    /// Offset to the neighbouring cell across this side
    pub fn offset(self) -> TileCoord {
        match self {
            Side::Left => TileCoord::LEFT,
            Side::Right => TileCoord::RIGHT,
            Side::Bottom => TileCoord::DOWN,
            Side::Top => TileCoord::UP,
        }
    }
}

/// One boundary segment of a template outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineEdge {
    pub cell: TileCoord,
    pub side: Side,
    pub from: PixelPos,
    pub to: PixelPos,
}

impl OutlineEdge {
    /// Build the pixel segment for one side of a cell
    pub fn new(cell: TileCoord, side: Side, tile_size: u32) -> Self {
        let (a, b) = match side {
            Side::Left => (cell, cell + TileCoord::DOWN),
            Side::Right => (cell + TileCoord::RIGHT, cell + TileCoord::new(1, 1)),
            Side::Bottom => (cell + TileCoord::DOWN, cell + TileCoord::new(1, 1)),
            Side::Top => (cell, cell + TileCoord::RIGHT),
        };
        Self {
            cell,
            side,
            from: a.to_pixel(tile_size),
            to: b.to_pixel(tile_size),
        }
    }
}

/// Edges of a single cell that face a non-member neighbour
pub fn cell_outline(
    template: &Template,
    cell: TileCoord,
    tile_size: u32,
) -> impl Iterator<Item = OutlineEdge> + '_ {
    Side::ALL
        .into_iter()
        .filter(move |side| !template.contains(cell + side.offset()))
        .map(move |side| OutlineEdge::new(cell, side, tile_size))
}

/// Compute the full outline of a template
pub fn template_outline(template: &Template, tile_size: u32) -> Vec<OutlineEdge> {
    template
        .sorted_cells()
        .into_iter()
        .flat_map(|cell| cell_outline(template, cell, tile_size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_has_four_edges() {
        let template = Template::new("One", TileCoord::new(3, 2));
        let edges = template_outline(&template, 24);

        assert_eq!(edges.len(), 4);
        let sides: Vec<Side> = edges.iter().map(|e| e.side).collect();
        assert_eq!(sides, Side::ALL.to_vec());
    }

    #[test]
    fn test_horizontal_pair_suppresses_shared_edge() {
        let template =
            Template::from_cells("Pair", [TileCoord::new(1, 1), TileCoord::new(2, 1)]);
        let edges = template_outline(&template, 24);

        assert_eq!(edges.len(), 6);
        assert!(!edges
            .iter()
            .any(|e| e.cell == TileCoord::new(1, 1) && e.side == Side::Right));
        assert!(!edges
            .iter()
            .any(|e| e.cell == TileCoord::new(2, 1) && e.side == Side::Left));
    }

    #[test]
    fn test_square_block_outline() {
        let template = Template::from_cells(
            "Block",
            [
                TileCoord::new(0, 0),
                TileCoord::new(1, 0),
                TileCoord::new(0, 1),
                TileCoord::new(1, 1),
            ],
        );
        assert_eq!(template_outline(&template, 16).len(), 8);
    }

    #[test]
    fn test_disjoint_cells_are_outlined_separately() {
        let template =
            Template::from_cells("Split", [TileCoord::new(0, 0), TileCoord::new(5, 5)]);
        assert_eq!(template_outline(&template, 16).len(), 8);
    }

    #[test]
    fn test_edge_pixel_positions() {
        let cell = TileCoord::new(2, 3);
        let ts = 10;

        let left = OutlineEdge::new(cell, Side::Left, ts);
        assert_eq!((left.from, left.to), (PixelPos::new(20, 30), PixelPos::new(20, 40)));

        let right = OutlineEdge::new(cell, Side::Right, ts);
        assert_eq!((right.from, right.to), (PixelPos::new(30, 30), PixelPos::new(30, 40)));

        let bottom = OutlineEdge::new(cell, Side::Bottom, ts);
        assert_eq!(
            (bottom.from, bottom.to),
            (PixelPos::new(20, 40), PixelPos::new(30, 40))
        );

        let top = OutlineEdge::new(cell, Side::Top, ts);
        assert_eq!((top.from, top.to), (PixelPos::new(20, 30), PixelPos::new(30, 30)));
    }
}
