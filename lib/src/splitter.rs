use crate::layout::{Card, Layout};
use crate::Error;
use image::error::ImageError;
use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageFormat};
use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Location of the card sheet, relative to the working directory
pub const SOURCE_PATH: &str = "./static/cards.png";
/// Directory the cards are written to, relative to the working directory
pub const OUTPUT_DIR: &str = "split_cards";

/// Splits a card sheet into single card images.
#[derive(Debug, Clone)]
pub struct CardSplitter {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

/// The outcome of a successful split.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Directory the cards were written to
    pub output_dir: PathBuf,
    /// Grid layout of the source sheet
    pub layout: Layout,
    /// Paths of the written cards, in row-major order
    pub written: Vec<PathBuf>,
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} cards have been saved in the '{}' folder.",
            self.written.len(),
            self.output_dir.display()
        )
    }
}

impl Default for CardSplitter {
    fn default() -> Self {
        CardSplitter::new(SOURCE_PATH, OUTPUT_DIR)
    }
}

impl CardSplitter {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(source: P, output_dir: Q) -> CardSplitter {
        CardSplitter {
            source: source.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Load and decode the source sheet.
    ///
    /// The format is guessed from the file content, with the extension as fallback.
    /// # Errors
    /// [Error::InputNotFound] if the file does not exist, [Error::DecodeError] if it is not
    /// a supported image.
    pub fn load(&self) -> Result<DynamicImage, Error> {
        let path = &self.source;
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => Error::InputNotFound { path: path.clone() },
                _ => Error::InputUnreadable {
                    path: path.clone(),
                    source: err,
                },
            })?;
        let img = reader.decode().map_err(|source| Error::DecodeError {
            path: path.clone(),
            source,
        })?;
        info!(
            "read {}x{} image from {}",
            img.width(),
            img.height(),
            path.display()
        );
        Ok(img)
    }

    /// Create the output directory and any missing parents. Does nothing if it already exists.
    pub fn prepare_output_dir(&self) -> Result<(), Error> {
        fs::create_dir_all(&self.output_dir).map_err(|source| Error::OutputDirError {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Crop every card from `img` and write it to the output directory.
    ///
    /// Existing files with the same name are overwritten. The first failing write aborts the
    /// split, cards written before it stay on disk.
    pub fn split(&self, img: &DynamicImage) -> Result<SplitReport, Error> {
        let (width, height) = img.dimensions();
        let layout = Layout::new(width, height);
        let cells = layout.get_cells();
        if cells.iter().any(Card::is_empty) {
            warn!(
                "sheet {}x{} is smaller than the grid, cards are empty",
                width, height
            );
        }
        let mut written = Vec::with_capacity(cells.len());
        for card in cells.iter() {
            let path = self.output_dir.join(card.file_name());
            debug!("card {:?} -> {}", card.bounding_box(), path.display());
            save_card(img, card, &path).map_err(|source| Error::WriteError {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }
        let report = SplitReport {
            output_dir: self.output_dir.clone(),
            layout,
            written,
        };
        info!("{}", report);
        Ok(report)
    }

    /// Run the whole pipeline: load the sheet, prepare the output directory and split.
    pub fn run(&self) -> Result<SplitReport, Error> {
        let img = self.load()?;
        self.prepare_output_dir()?;
        self.split(&img)
    }
}

/// Write a single card as PNG.
///
/// PNG can not encode an image without pixels, so an empty card becomes an empty file.
fn save_card(img: &DynamicImage, card: &Card, path: &Path) -> Result<(), ImageError> {
    if card.is_empty() {
        return fs::write(path, b"").map_err(ImageError::IoError);
    }
    let r = card.rect;
    img.crop_imm(r.x, r.y, r.width, r.height)
        .save_with_format(path, ImageFormat::Png)
}
