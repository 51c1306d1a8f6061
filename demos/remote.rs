//! Remote Control Walkthrough
//!
//! Drives a television through a remote, printing the screen after each
//! button press.
//!
//! Key concepts:
//! - Buttons other than power are ignored while the set is off
//! - Channels wrap around, volume clamps
//! - Adjusting the volume clears mute
//!
//! Run with: RUST_LOG=debug cargo run --example remote

use television::core::Control;
use television::remote::{Press, Remote};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Television Remote ===\n");

    let mut remote = Remote::default();
    let sequence = [
        "volume_up",
        "power",
        "channel_up",
        "channel_up",
        "channel_up",
        "channel_up",
        "volume_up",
        "volume_up",
        "volume_up",
        "mute",
        "volume_down",
    ];

    for name in sequence {
        let control: Control = match name.parse() {
            Ok(control) => control,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let marker = match remote.press(control) {
            Press::Applied { .. } => " ",
            Press::Ignored(_) => "x",
        };
        println!("[{marker}] {control:<12} {}", remote.television());
    }

    println!("\nApplied presses: {}", remote.history().len());
    println!("\n=== Example Complete ===");
}
