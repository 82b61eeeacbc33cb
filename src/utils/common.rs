//! Common utility functions used across the application

use std::path::Path;

/// Characters that are illegal in filenames on at least one supported
/// platform.
const ILLEGAL_FILENAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Replace filesystem-illegal characters with underscores. Everything
/// else, including case and spaces, is preserved, so the output length
/// always equals the input length.
pub fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Check if a file exists and has valid content (non-zero size).
pub async fn check_file_exists_and_valid(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata.is_file() && metadata.len() > 0,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Sample: Title?"), "Sample_ Title_");
        assert_eq!(sanitize_filename("a/b\\c:d*e?f\"g<h>i|j"), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_filename("Plain Title 123"), "Plain Title 123");
        assert_eq!(sanitize_filename("MiXeD CaSe"), "MiXeD CaSe");
    }

    #[test]
    fn sanitize_preserves_length() {
        let input = "A:B/C?D";
        assert_eq!(sanitize_filename(input).chars().count(), input.chars().count());
    }

    #[tokio::test]
    async fn empty_file_is_not_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.mp4");
        tokio::fs::write(&path, b"").await.unwrap();
        assert!(!check_file_exists_and_valid(&path).await);

        tokio::fs::write(&path, b"data").await.unwrap();
        assert!(check_file_exists_and_valid(&path).await);

        assert!(!check_file_exists_and_valid(&dir.path().join("missing")).await);
    }
}
