//! Catalog loading, palette resolution, and export round trips

use std::io::Write;

use image::{Rgba, RgbaImage};
use tempfile::tempdir;

use brickmosaic::PlanError;
use brickmosaic::catalog::load_catalog;
use brickmosaic::io::image::{load_rgba, resolve_board, save_png};
use brickmosaic::io::render::render_placements;
use brickmosaic::io::report::PartsList;
use brickmosaic::solver::{GreedySolver, RankStrategy, is_solved};
use brickmosaic::spatial::{NO_COLOR, Point};

const CATALOG_TEXT: &str = "\
3
black 0 0 0
white 255 255 255
red 255 0 0
3
1 1 10
2 1 15
2 2 35
";

fn write_temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn catalog_file_loads_with_rotation_variants() {
    let dir = tempdir().unwrap();
    let path = write_temp_file(&dir, "parts.txt", CATALOG_TEXT);

    let file = load_catalog(&path).unwrap();

    assert_eq!(file.palette.len(), 3);
    assert_eq!(file.palette.name(2), Some("red"));
    // 1x1 and 2x2 are square; only 2x1 gains a rotated twin
    assert_eq!(file.catalog.len(), 4);

    let rotated = file.catalog.get(3).copied().unwrap();
    assert_eq!((rotated.width, rotated.height, rotated.cost), (1, 2, 15));
}

#[test]
fn missing_catalog_file_reports_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = load_catalog(&path).unwrap_err();

    assert!(matches!(err, PlanError::CatalogRead { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn malformed_catalog_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_temp_file(&dir, "broken.txt", "1\nblack 0 0 zero\n1\n1 1 10\n");

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, PlanError::CatalogParse { .. }));
}

#[test]
fn png_round_trips_through_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("out.png");

    let mut image = RgbaImage::new(2, 2);
    image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    image.put_pixel(1, 1, Rgba([0, 0, 255, 255]));

    save_png(&image, &path).unwrap();
    let loaded = load_rgba(&path).unwrap();

    assert_eq!(loaded.dimensions(), (2, 2));
    assert_eq!(loaded.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(loaded.get_pixel(1, 1).0, [0, 0, 255, 255]);
}

#[test]
fn unreadable_image_reports_image_load() {
    let dir = tempdir().unwrap();
    let path = write_temp_file(&dir, "not_an_image.png", "plain text");

    let err = load_rgba(&path).unwrap_err();
    assert!(matches!(err, PlanError::ImageLoad { .. }));
}

#[test]
fn pipeline_plans_a_two_color_image() {
    let dir = tempdir().unwrap();
    let catalog_path = write_temp_file(&dir, "parts.txt", CATALOG_TEXT);
    let file = load_catalog(&catalog_path).unwrap();

    // Left half white, right half red, one transparent corner
    let mut image = RgbaImage::new(4, 2);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = if x < 2 {
            Rgba([250, 250, 250, 255])
        } else {
            Rgba([250, 5, 5, 255])
        };
        if (x, y) == (3, 1) {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    let board = resolve_board(&image, &file.palette, false);
    assert_eq!(board.color_index(Point::new(0, 0)), 1);
    assert_eq!(board.color_index(Point::new(2, 0)), 2);
    assert_eq!(board.color_index(Point::new(3, 1)), NO_COLOR);
    assert_eq!(board.colorable_count(), 7);

    let solution = GreedySolver::new(&board, &file.catalog, RankStrategy::CostPerPeg, false)
        .run()
        .unwrap();
    assert!(is_solved(&solution, &board));

    let plan = render_placements(&solution, &file.catalog, &file.palette, 8);
    assert_eq!(plan.dimensions(), (32, 16));
    // The uncovered corner stays transparent in the plan
    assert_eq!(plan.get_pixel(31, 15).0[3], 0);

    let parts = PartsList::tally(&solution, &file.catalog, &file.palette);
    let mut rendered = Vec::new();
    parts.write(&file.catalog, &file.palette, &mut rendered).unwrap();
    let report = String::from_utf8(rendered).unwrap();

    assert!(report.contains("Color \"black\" is unused"));
    assert!(report.contains("Color \"white\" has"));
    assert!(report.contains("> Total bricks:"));
}
