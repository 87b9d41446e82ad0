#![allow(dead_code)]

use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// A fresh, empty directory for a single test.
pub fn scratch_dir(name: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!(
        "card-splitter-{}-{}",
        name,
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// A sheet where every pixel encodes its own position.
pub fn sheet(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, (x / 256 + y / 256 * 16) as u8, 255])
    })
}

/// Write a generated sheet to `<dir>/static/cards.png` and return its path.
pub fn write_sheet(dir: &Path, width: u32, height: u32) -> Result<PathBuf> {
    let path = dir.join("static").join("cards.png");
    fs::create_dir_all(path.parent().unwrap())?;
    sheet(width, height).save(&path)?;
    Ok(path)
}

/// Sorted file names in `dir`.
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

pub fn expected_names() -> Vec<String> {
    let mut names: Vec<_> = (1..=2)
        .flat_map(|r| (1..=7).map(move |c| format!("card_{}_{}.png", r, c)))
        .collect();
    names.sort();
    names
}
