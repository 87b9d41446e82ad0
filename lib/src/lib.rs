//! A library that slices a sheet of playing cards into single card images
//!
//! The sheet holds a grid of 2 rows and 7 columns. Every card gets the same size, found by
//! dividing the sheet size by the grid size. Pixels beyond the last full card on the right and
//! bottom edge are dropped.
//!
//! # Basic usage
//! ```no_run
//! # use card_splitter::{CardSplitter, Error};
//! let splitter = CardSplitter::new("static/cards.png", "split_cards");
//! let report = splitter.run()?;
//! println!("{}", report);
//! # Ok::<(), Error>(())
//! ```
//! This writes `card_1_1.png` up to `card_2_7.png` and shows:
//!
//! ```text
//! 14 cards have been saved in the 'split_cards' folder.
//! ```

mod error;
mod layout;
mod splitter;
mod utils;

pub use error::Error;
pub use layout::{Card, Layout, CARD_COUNT, COLS, ROWS};
pub use splitter::{CardSplitter, SplitReport, OUTPUT_DIR, SOURCE_PATH};
pub use utils::collage;
