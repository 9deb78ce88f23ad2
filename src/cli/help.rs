//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::config::Config;

/// Print help message based on configuration state.
pub fn print_smart_help(config: &Config) {
    if config.model.path.is_none() {
        print_first_time_help();
    } else {
        print_configured_help();
    }
}

/// Print detailed setup guide for first-time users.
pub fn print_first_time_help() {
    println!("Identify a snake from a photo:");
    println!();
    println!("  sarpa photo.jpg                 (online, via the identification server)");
    println!("  sarpa photo.jpg --offline       (on-device, no network needed)");
    println!();
    println!("Online mode posts the photo to an identification server; set the address");
    println!("with --endpoint or in the config file.");
    println!();
    println!("Offline mode needs a local model. Set it up once:");
    println!();
    println!("1. Initialize configuration:");
    println!("   sarpa config init");
    println!();
    println!("2. Point the [model] section of the config file at your classifier:");
    println!("   path = \"/path/to/snake_model.onnx\"");
    println!("   labels = \"/path/to/labels.txt\"");
    println!();
    println!("The bundled species database covers the snakes of Sri Lanka; browse it");
    println!("with 'sarpa db list'.");
    println!();
    println!("Run 'sarpa -h' for all options.");
}

/// Print brief usage reminder for configured users.
pub fn print_configured_help() {
    println!("Usage: sarpa <IMAGE> [OPTIONS]");
    println!();
    println!("Example: sarpa photo.jpg --offline");
    println!();
    println!("Run 'sarpa -h' for all options or 'sarpa db list' to browse the species database.");
}
