//! Version extraction from interpreter output.

/// Extract a version from version-query output.
///
/// Handles "Python 3.12.1", bare "3.12.1", and two-component forms.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"[Pp]ython\s+(\d+\.\d+)", r"(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

/// Numeric components of a dotted version string (at most three).
pub fn version_components(version: &str) -> Vec<u32> {
    version
        .split('.')
        .take(3)
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Whether a version string reports a Python 3 interpreter.
pub fn is_python3(version: &str) -> bool {
    version_components(version).first() == Some(&3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_version_from_python3_banner() {
        let version = extract_version("Python 3.12.1");
        assert_eq!(version, Some("3.12.1".to_string()));
    }

    #[test]
    fn extract_version_from_python2_banner() {
        // Python 2 writes this to stderr
        let version = extract_version("Python 2.7.18");
        assert_eq!(version, Some("2.7.18".to_string()));
    }

    #[test]
    fn extract_version_two_components() {
        let version = extract_version("Python 3.9");
        assert_eq!(version, Some("3.9".to_string()));
    }

    #[test]
    fn extract_version_none_for_garbage() {
        assert_eq!(extract_version("command not found"), None);
        assert_eq!(extract_version(""), None);
    }

    #[test]
    fn version_components_parses_three() {
        assert_eq!(version_components("3.12.1"), vec![3, 12, 1]);
        assert_eq!(version_components("3.9"), vec![3, 9]);
    }

    #[test]
    fn is_python3_accepts_major_three() {
        assert!(is_python3("3.8.10"));
        assert!(is_python3("3.12"));
    }

    #[test]
    fn is_python3_rejects_other_majors() {
        assert!(!is_python3("2.7.18"));
        assert!(!is_python3(""));
    }
}
