//! Measure a single photograph
//!
//! Prints area and height as JSON and optionally saves the cleaned mask.

use plant_growth::image_loader::load_image;
use plant_growth::{PlantMetrics, PlantSegmenter};
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();

    let mut image_path: Option<PathBuf> = None;
    let mut mask_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mask" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --mask requires an output path");
                    process::exit(1);
                }
                mask_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path.is_none() {
                    image_path = Some(PathBuf::from(arg));
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path = match image_path {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image = match load_image(&image_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }
    };

    let mask = PlantSegmenter::new().segment(&image);
    let metrics = PlantMetrics::from_mask(&mask);

    if let Some(path) = mask_path {
        match mask.to_gray_image().save(&path) {
            Ok(()) => eprintln!("Mask saved to {}", path.display()),
            Err(e) => {
                eprintln!("Error saving mask: {}", e);
                process::exit(1);
            }
        }
    }

    match serde_json::to_string_pretty(&metrics) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    eprintln!("Usage: {} <image> [--mask OUT.png]", program);
    eprintln!();
    eprintln!("Segment one image with the default green band and print its metrics.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --mask FILE    Save the cleaned binary mask");
    eprintln!("  -h, --help     Show this help");
}
