//! Generate a default clustering configuration file
//!
//! Creates a JSON config with all default parameters

use dominant_colors::ClusterConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/clusters.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = ClusterConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Input:      {}", config.input_path.display());
            eprintln!("  Clusters:   {}", config.cluster_count);
            eprintln!(
                "  k-means:    {} run(s), {} iterations max, convergence {}",
                config.runs,
                config.max_iterations,
                config.convergence()
            );
            eprintln!("  Space:      {:?}", config.space);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
