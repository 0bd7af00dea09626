// ── WiFi QR payload codec ──
//
// Pure functions: no I/O, no shared state. Safe to call from any thread.

pub mod escape;
pub mod payload;

pub use escape::{SPECIAL_CHARS, escape, unescape};
pub use payload::{
    DecodeError, DecodeOptions, PREFIX, SplitMode, decode, decode_with, encode, encode_fields,
    is_wifi_payload,
};
