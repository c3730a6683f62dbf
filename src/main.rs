#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use std::process::exit;
use tv_remote::{Args, PROGRAM_TITLE};

// Application Entry Point
fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    log::info!("Starting {}", PROGRAM_TITLE);

    // A failed startup is reported, not a crash
    if let Err(e) = tv_remote::run(args) {
        log::error!("{}", e);
        eprintln!("Error running program: {}", e);
        exit(0);
    }
}
