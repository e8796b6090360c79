//! Name extraction for `emoji-test.txt` comments
//!
//! A test-file comment looks like `😀 E1.0 grinning face`: the rendered
//! emoji, the version that introduced it, then the name. The name is whatever
//! follows the first version token (`E` or `V`, digits, `.`, digits, then
//! whitespace). Comments without a recognizable version token fall back to
//! dropping the first two whitespace-separated tokens.

use memchr::memchr2_iter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VersionState {
    Major { digits: usize },
    Minor { digits: usize },
    Gap,
}

/// Extract the display name from a test-file comment
///
/// ```
/// use emoji_catalog::catalog::name::extract_test_name;
///
/// assert_eq!(extract_test_name("😀 E1.0 grinning face"), "grinning face");
/// assert_eq!(extract_test_name("😀 ?? grinning face"), "grinning face");
/// ```
pub fn extract_test_name(comment: &str) -> String {
    match name_start(comment) {
        Some(start) => comment[start..].trim().to_string(),
        None => fallback_name(comment),
    }
}

/// Byte offset where the name begins, if the comment has a version token
pub fn name_start(comment: &str) -> Option<usize> {
    let bytes = comment.as_bytes();
    memchr2_iter(b'E', b'V', bytes).find_map(|pos| scan_version(bytes, pos + 1))
}

/// Drop the first two whitespace-separated tokens and join the rest
pub fn fallback_name(comment: &str) -> String {
    comment.split_whitespace().skip(2).collect::<Vec<_>>().join(" ")
}

/// Run the version-token state machine starting just after the `E`/`V`
fn scan_version(bytes: &[u8], from: usize) -> Option<usize> {
    let mut state = VersionState::Major { digits: 0 };

    for (i, &b) in bytes.iter().enumerate().skip(from) {
        state = match (state, b) {
            (VersionState::Major { digits }, b'0'..=b'9') => {
                VersionState::Major { digits: digits + 1 }
            }
            (VersionState::Major { digits }, b'.') if digits > 0 => {
                VersionState::Minor { digits: 0 }
            }
            (VersionState::Minor { digits }, b'0'..=b'9') => {
                VersionState::Minor { digits: digits + 1 }
            }
            (VersionState::Minor { digits }, b) if digits > 0 && b.is_ascii_whitespace() => {
                VersionState::Gap
            }
            (VersionState::Gap, b) if b.is_ascii_whitespace() => VersionState::Gap,
            (VersionState::Gap, _) => return Some(i),
            _ => return None,
        };
    }

    None
}
