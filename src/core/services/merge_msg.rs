//! Merge message parsing
//!
//! git records conflicted paths in `MERGE_MSG` under a `Conflicts:` header,
//! one tab-indented path per line. Current versions comment the block out:
//!
//! ```text
//! Merge branch 'foo' into bar
//!
//! # Conflicts:
//! #	conflict_file
//! ```
//!
//! The block runs until a blank line, a line that is not tab-indented, or the
//! end of the message.

/// Paths listed in every `Conflicts:` block of `msg`
///
/// A message without such a block yields an empty list.
#[must_use]
pub fn parse_merge_msg_for_conflicts(msg: &[u8]) -> Vec<String> {
    let mut conflicts = Vec::new();
    let mut in_block = false;

    for line in msg.split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if !in_block {
            in_block = is_conflicts_header(line);
            continue;
        }

        let body = line.strip_prefix(b"#").unwrap_or(line);
        match body.strip_prefix(b"\t") {
            Some(path) if !path.is_empty() => {
                conflicts.push(String::from_utf8_lossy(path).into_owned());
            },
            _ => in_block = false,
        }
    }

    conflicts
}

fn is_conflicts_header(line: &[u8]) -> bool {
    let line = line.strip_prefix(b"# ").unwrap_or(line);
    line == b"Conflicts:"
}
