//! Removal of import-like and blank lines.

/// Line prefixes that mark a line as an import or package declaration.
pub const DEFAULT_IMPORT_PREFIXES: [&str; 3] = ["import ", "from ", "package "];

/// Returns `true` if the trimmed line starts with any of `prefixes`.
pub fn is_import_line<S: AsRef<str>>(line: &str, prefixes: &[S]) -> bool {
    let trimmed = line.trim();
    prefixes.iter().any(|prefix| trimmed.starts_with(prefix.as_ref()))
}

/// Keeps the lines that are neither blank nor import-like.
pub fn retain_code_lines<L, S>(lines: L, prefixes: &[S]) -> Vec<L::Item>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| {
            let line = line.as_ref();
            !line.trim().is_empty() && !is_import_line(line, prefixes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_default_prefix() {
        assert!(is_import_line("import os\n", &DEFAULT_IMPORT_PREFIXES));
        assert!(is_import_line("  from x import y\n", &DEFAULT_IMPORT_PREFIXES));
        assert!(is_import_line("package main\n", &DEFAULT_IMPORT_PREFIXES));
    }

    #[test]
    fn prefix_needs_trailing_space() {
        assert!(!is_import_line("important = 1\n", &DEFAULT_IMPORT_PREFIXES));
        assert!(!is_import_line("fromage()\n", &DEFAULT_IMPORT_PREFIXES));
        assert!(!is_import_line("use std::io;\n", &DEFAULT_IMPORT_PREFIXES));
    }

    #[test]
    fn drops_blank_and_import_lines() {
        let lines = vec!["import os\n", "   \n", "x = 1\n", "\tpackage foo\n", "y = 2\n"];
        let kept = retain_code_lines(lines, &DEFAULT_IMPORT_PREFIXES);
        assert_eq!(kept, vec!["x = 1\n", "y = 2\n"]);
    }

    #[test]
    fn custom_prefixes_replace_defaults() {
        let prefixes = vec!["use ".to_string()];
        let kept = retain_code_lines(vec!["use std::io;", "import os", "fn f() {}"], &prefixes);
        assert_eq!(kept, vec!["import os", "fn f() {}"]);
    }
}
