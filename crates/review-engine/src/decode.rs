//! Lossy decoding of uploaded revision bytes

use tracing::debug;

/// Decode UTF-8, dropping every invalid byte sequence
pub fn decode_revision(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut rest = bytes;
    let mut dropped = 0usize;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, invalid) = rest.split_at(err.valid_up_to());
                text.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match err.error_len() {
                    Some(len) => {
                        dropped += len;
                        rest = &invalid[len..];
                    }
                    // Truncated sequence at the end of input
                    None => {
                        dropped += invalid.len();
                        break;
                    }
                }
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, "Dropped undecodable bytes from revision");
    }

    text
}
