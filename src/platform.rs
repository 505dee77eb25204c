use std::fmt;

/// Platform profile for path-string handling.
///
/// All discovery logic is lexical: it scans and truncates path strings and
/// only touches the filesystem through the [`crate::fs::FileSystem`] trait.
/// The profile decides the separator character, whether component comparison
/// is case-sensitive, and which roots terminate an upward walk (drive
/// letters and UNC share roots exist only on Windows).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathStyle {
    /// Backslash separator, ASCII case-insensitive, drive letters, UNC roots.
    Windows,
    /// Forward slash separator, case-sensitive.
    Posix,
}

impl PathStyle {
    /// The profile matching the compilation target.
    pub fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    pub fn separator(self) -> char {
        match self {
            PathStyle::Windows => '\\',
            PathStyle::Posix => '/',
        }
    }

    fn separator_byte(self) -> u8 {
        self.separator() as u8
    }

    fn component_eq(self, a: &[u8], b: &[u8]) -> bool {
        match self {
            PathStyle::Windows => a.eq_ignore_ascii_case(b),
            PathStyle::Posix => a == b,
        }
    }

    /// True if `path` contains `name` as a full path component, i.e. preceded
    /// by a separator and followed by a separator or the end of the string.
    ///
    /// `repo\.git` and `repo\.git\objects` match; `repo\.gitignore` and
    /// `repo\.gitted` do not. A bare leading `name` with no preceding
    /// separator does not match, mirroring the original scan.
    pub fn has_admin_dir_component(self, path: &str, name: &str) -> bool {
        let sep = self.separator_byte();
        let bytes = path.as_bytes();
        let needle = name.as_bytes();
        let n = needle.len();
        let mut i = 0;
        while i + 1 + n <= bytes.len() {
            if bytes[i] == sep && self.component_eq(&bytes[i + 1..i + 1 + n], needle) {
                let next = i + 1 + n;
                if next == bytes.len() || bytes[next] == sep {
                    return true;
                }
            }
            i += 1;
        }
        false
    }

    /// True for a bare UNC share root such as `\\host`: two leading
    /// separators and no further separator. Such roots must never be probed
    /// for admin directories (`\\host\.git` is meaningless).
    pub fn is_unc_share_root(self, path: &str) -> bool {
        if self != PathStyle::Windows {
            return false;
        }
        let bytes = path.as_bytes();
        bytes.len() >= 2
            && bytes[0] == b'\\'
            && bytes[1] == b'\\'
            && !path[2..].contains('\\')
    }

    /// True for a drive root (`C:` or `C:\`) on Windows, or `/` on Posix.
    /// Drive roots are walk-termination points.
    pub fn is_drive_root(self, path: &str) -> bool {
        match self {
            PathStyle::Windows => {
                let bytes = path.as_bytes();
                match bytes.len() {
                    2 => bytes[0].is_ascii_alphabetic() && bytes[1] == b':',
                    3 => {
                        bytes[0].is_ascii_alphabetic()
                            && bytes[1] == b':'
                            && bytes[2] == b'\\'
                    }
                    _ => false,
                }
            }
            PathStyle::Posix => path == "/",
        }
    }

    /// Byte index of the last separator, if any.
    pub fn last_separator(self, path: &str) -> Option<usize> {
        path.rfind(self.separator())
    }

    /// Strip any number of trailing separators.
    pub fn strip_trailing_separators(self, path: &str) -> &str {
        path.trim_end_matches(self.separator())
    }

    /// Normalize to exactly one trailing separator.
    pub fn ensure_trailing_separator(self, path: &str) -> String {
        let sep = self.separator();
        format!("{}{}", path.trim_end_matches(sep), sep)
    }

    /// Concatenate `base` and `child` with a single separator between them.
    pub fn join(self, base: &str, child: &str) -> String {
        if base.is_empty() {
            return child.to_string();
        }
        let sep = self.separator();
        if base.ends_with(sep) {
            format!("{base}{child}")
        } else {
            format!("{base}{sep}{child}")
        }
    }

    /// Convert forward slashes to the profile separator. Gitlink files always
    /// use `/` regardless of platform.
    pub fn convert_slashes(self, path: &str) -> String {
        match self {
            PathStyle::Windows => path.replace('/', "\\"),
            PathStyle::Posix => path.to_string(),
        }
    }

    /// Resolve `.` and `..` components lexically, without touching the
    /// filesystem. `..` never climbs above an absolute root; for relative
    /// paths leading `..` components are kept.
    pub fn lexical_canonicalize(self, path: &str) -> String {
        let sep = self.separator();
        let (prefix, rest) = self.split_root(path);
        let absolute = !prefix.is_empty();

        let mut stack: Vec<&str> = Vec::new();
        for component in rest.split(sep) {
            match component {
                "" | "." => {}
                ".." => {
                    if stack.pop().is_none() && !absolute {
                        stack.push("..");
                    }
                }
                other => stack.push(other),
            }
        }

        let body = stack.join(&sep.to_string());
        if prefix.is_empty() {
            if body.is_empty() {
                ".".to_string()
            } else {
                body
            }
        } else if prefix.ends_with(sep) {
            format!("{prefix}{body}")
        } else if body.is_empty() {
            prefix.to_string()
        } else {
            format!("{prefix}{sep}{body}")
        }
    }

    /// Split off the root prefix: `C:`, `\\host`, a single leading separator,
    /// or nothing for relative paths.
    fn split_root(self, path: &str) -> (&str, &str) {
        let bytes = path.as_bytes();
        match self {
            PathStyle::Windows => {
                if bytes.len() >= 2 && bytes[0] == b'\\' && bytes[1] == b'\\' {
                    // UNC: prefix covers \\host
                    match path[2..].find('\\') {
                        Some(i) => path.split_at(2 + i),
                        None => (path, ""),
                    }
                } else if bytes.len() >= 2 && bytes[1] == b':' {
                    path.split_at(2)
                } else if bytes.first() == Some(&b'\\') {
                    path.split_at(1)
                } else {
                    ("", path)
                }
            }
            PathStyle::Posix => {
                if bytes.first() == Some(&b'/') {
                    path.split_at(1)
                } else {
                    ("", path)
                }
            }
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStyle::Windows => write!(f, "windows"),
            PathStyle::Posix => write!(f, "posix"),
        }
    }
}
