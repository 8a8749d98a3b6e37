//! Client-supplied filename handling: secure-filename stripping and
//! `<base>_<AREA>` suffixing, resolved from the reference implementation's
//! use of Werkzeug's `secure_filename` and its manual suffix-before-save
//! step.

use settle_core::AreaTag;

/// Strip directory components and `..` segments from a client-supplied
/// filename, the Rust-native equivalent of Werkzeug's `secure_filename`.
pub fn secure_filename(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .replace("..", "");
    let trimmed = base.trim();
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Split `name` into `(stem, extension-with-dot)`. An extension is only
/// recognised when the dot isn't the first character.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// The filename stem, with its extension removed.
pub fn original_base(name: &str) -> &str {
    split_extension(name).0
}

/// `<stem>_<AREA><ext>`, the shape the original renames uploads to before
/// saving them.
pub fn suffix_filename(name: &str, area: AreaTag) -> String {
    let (stem, ext) = split_extension(name);
    format!("{stem}_{area}{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_filename_strips_directory_components() {
        assert_eq!(secure_filename("../../etc/passwd"), "passwd");
        assert_eq!(secure_filename("C:\\Users\\x\\file.txt"), "file.txt");
    }

    #[test]
    fn secure_filename_strips_embedded_dotdot() {
        assert_eq!(secure_filename("weird..name.txt"), "weirdname.txt");
    }

    #[test]
    fn suffix_filename_inserts_area_before_extension() {
        assert_eq!(suffix_filename("settlement.txt", AreaTag::Epr), "settlement_EPR.txt");
    }

    #[test]
    fn suffix_filename_handles_missing_extension() {
        assert_eq!(suffix_filename("settlement", AreaTag::Pic), "settlement_PIC");
    }

    #[test]
    fn original_base_strips_extension() {
        assert_eq!(original_base("settlement_EPR.txt"), "settlement_EPR");
    }
}
