//! Generate a default growth analysis configuration file
//!
//! Creates a JSON config with all default parameters

use plant_growth::GrowthConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} configs/growth.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = GrowthConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            let seg = &config.segmentation;
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Dataset: {}", config.dataset_path.display());
            eprintln!("  Results: {}", config.results_path.display());
            eprintln!(
                "  Green band: H {}-{}, S {}-{}, V {}-{}",
                seg.hue_min, seg.hue_max, seg.saturation_min, seg.saturation_max, seg.value_min,
                seg.value_max
            );
            eprintln!("  Kernel: {:?} {}x{}", seg.kernel_shape, seg.kernel_size, seg.kernel_size);
            eprintln!(
                "  Resize: {} ({}x{})",
                if config.preprocessing.enabled { "on" } else { "off" },
                config.preprocessing.target_width,
                config.preprocessing.target_height
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
