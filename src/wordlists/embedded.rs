//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words_5.rs"));
include!(concat!(env!("OUT_DIR"), "/words_6.rs"));
include!(concat!(env!("OUT_DIR"), "/words_7.rs"));
