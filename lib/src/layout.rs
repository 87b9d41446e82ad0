use image::math::Rect;
use log::{debug, warn};

/// Number of card rows on the sheet
pub const ROWS: u32 = 2;
/// Number of card columns on the sheet
pub const COLS: u32 = 7;
/// Number of cards on the sheet
pub const CARD_COUNT: usize = (ROWS * COLS) as usize;

/// Represents the grid layout of a card sheet.
///
/// The sheet is divided into a uniform `ROWS` x `COLS` grid. Card dimensions are found by
/// floor division, so when the sheet size is not a multiple of the grid the remainder strip
/// at the right and bottom edge is not part of any card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// The sheet area (the entire source image)
    pub screen: Rect,
    /// Width of a single card in pixels
    pub card_width: u32,
    /// Height of a single card in pixels
    pub card_height: u32,
}

/// A single cell of the card grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    /// Row index, starting at 0
    pub row: u32,
    /// Column index, starting at 0
    pub col: u32,
    /// Pixel area of the card in the sheet
    pub rect: Rect,
}

impl Card {
    /// The file name of the card: `card_{row}_{col}.png`, with 1-based row and column.
    pub fn file_name(&self) -> String {
        format!("card_{}_{}.png", self.row + 1, self.col + 1)
    }

    /// Returns the `(left, upper, right, lower)` box of the card. `right` and `lower` are exclusive.
    pub fn bounding_box(&self) -> (u32, u32, u32, u32) {
        let r = self.rect;
        (r.x, r.y, r.x + r.width, r.y + r.height)
    }

    /// True if the card has no pixels, which happens for sheets smaller than the grid.
    pub fn is_empty(&self) -> bool {
        self.rect.width == 0 || self.rect.height == 0
    }
}

impl Layout {
    /// Return the layout for a sheet of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Layout {
        let screen = Rect {
            x: 0,
            y: 0,
            width,
            height,
        };
        let layout = Layout {
            screen,
            card_width: width / COLS,
            card_height: height / ROWS,
        };
        debug!(
            "sheet {}x{}, card {}x{}",
            width, height, layout.card_width, layout.card_height
        );
        let (right, bottom) = layout.discarded();
        if right > 0 || bottom > 0 {
            warn!(
                "sheet {}x{} is not a multiple of {}x{}: discarding {} px right, {} px bottom",
                width, height, COLS, ROWS, right, bottom
            );
        }
        layout
    }

    /// The area covered by all cards together.
    pub fn covered(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.card_width * COLS,
            height: self.card_height * ROWS,
        }
    }

    /// Width of the right strip and height of the bottom strip that belong to no card.
    pub fn discarded(&self) -> (u32, u32) {
        (self.screen.width % COLS, self.screen.height % ROWS)
    }

    /// Create the card cells in row-major order.
    ///
    /// All cells have the same width and height.
    pub fn get_cells(&self) -> Vec<Card> {
        let mut cells = Vec::with_capacity(CARD_COUNT);
        for row in 0..ROWS {
            for col in 0..COLS {
                let rect = Rect {
                    x: col * self.card_width,
                    y: row * self.card_height,
                    width: self.card_width,
                    height: self.card_height,
                };
                cells.push(Card { row, col, rect });
            }
        }
        cells
    }
}
