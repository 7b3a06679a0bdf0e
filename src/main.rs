//! # Voxel Chunk Demo Entry Point
//!
//! Calls into the library's `run()` function, which logs the visible set of a
//! demo chunk and of a small generated world.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    if let Err(err) = voxel_chunk::run() {
        eprintln!("voxel-chunk demo failed: {err}");
        std::process::exit(1);
    }
}
