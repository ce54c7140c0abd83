//! Embedded word lists
//!
//! Root words and dictionary compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/start_words.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
