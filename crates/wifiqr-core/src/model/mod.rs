// ── Domain model ──
//
// Credential and security types shared by the codec, history, join planner
// and the CLI.

pub mod credential;
pub mod entry;
pub mod security;

pub use credential::WifiCredential;
pub use entry::{CredentialForm, EntryError, MAX_SSID_LEN};
pub use security::Security;
