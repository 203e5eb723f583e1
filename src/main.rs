//! # Voxel Sandbox Entry Point
//!
//! Calls into the library's `run()` function, which generates a world and
//! exercises one edit cycle.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info VOXEL_CONFIG=world.json cargo run --release
//! ```

fn main() {
    voxel_sandbox::run();
}
