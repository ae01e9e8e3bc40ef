//! Convert an image into an `r,g,b` dataset
//!
//! Writes one row per pixel so the result can be fed to `dominant-colors`.

use dominant_colors::{dataset::save_dataset, image_loader::load_image_samples};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <image_path> [output.csv]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} photo.jpg data.csv", args[0]);
        process::exit(1);
    }

    let image_path = Path::new(&args[1]);
    let output_path = Path::new(args.get(2).map(String::as_str).unwrap_or("data.csv"));

    let dataset = match load_image_samples(image_path) {
        Ok(dataset) => dataset,
        Err(error) => {
            eprintln!("Error loading image: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    match save_dataset(&dataset, output_path) {
        Ok(()) => {
            eprintln!(
                "Wrote {} samples from {} to {}",
                dataset.len(),
                image_path.display(),
                output_path.display()
            );
        }
        Err(error) => {
            eprintln!("Error saving dataset: {}", error);
            process::exit(1);
        }
    }
}
