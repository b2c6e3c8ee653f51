//! Lookup tables generated by the build script.

include!(concat!(env!("OUT_DIR"), "/lut.rs"));
