//! URL encoding for serverclass and application names in API paths.
//!
//! Names come from the inventory or the command line and are interpolated
//! into paths such as `/services/deployment/server/serverclasses/<name>`.
//! Without encoding, a `/` would create a nested path and `?` or `#` would
//! truncate it.
//!
//! # Example
//!
//! ```
//! use splunk_ds_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Splunk_TA_nix"), "Splunk_TA_nix");
//! assert_eq!(encode_path_segment("team/app"), "team%2Fapp");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
