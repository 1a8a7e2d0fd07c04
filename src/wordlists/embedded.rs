//! Embedded puzzle data
//!
//! Board letters and word list compiled into the binary at build time.

// Include generated puzzle data from build script
include!(concat!(env!("OUT_DIR"), "/letters.rs"));
include!(concat!(env!("OUT_DIR"), "/words.rs"));
