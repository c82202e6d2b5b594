//! Visual classification of listing entries by file extension.

use std::collections::HashMap;
use std::sync::LazyLock;
use taskview_types::StartIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileCategory {
    pub icon: &'static str,
    pub hover_text: &'static str,
    pub color: &'static str,
}

impl FileCategory {
    const fn new(icon: &'static str, hover_text: &'static str, color: &'static str) -> Self {
        Self {
            icon,
            hover_text,
            color,
        }
    }

    pub fn start_icon(&self) -> StartIcon {
        StartIcon::new(self.icon, self.hover_text, self.color)
    }
}

pub const ARCHIVE: FileCategory = FileCategory::new("archive", "Archive File", "orange");
pub const DISK_IMAGE: FileCategory = FileCategory::new("diskimage", "Disk Image", "goldenrod");
pub const WORD: FileCategory =
    FileCategory::new("word", "Microsoft Word Document", "cornflowerblue");
pub const EXCEL: FileCategory =
    FileCategory::new("excel", "Microsoft Excel Document", "darkseagreen");
pub const POWERPOINT: FileCategory =
    FileCategory::new("powerpoint", "Microsoft PowerPoint Document", "orangered");
pub const PDF: FileCategory = FileCategory::new("pdf", "Portable Document Format", "indianred");
pub const DATABASE: FileCategory = FileCategory::new("database", "Database File Format", "burlywood");
pub const KEY: FileCategory = FileCategory::new("key", "Key Credential File", "gold");
pub const SOURCE_CODE: FileCategory = FileCategory::new("code", "Source Code", "dodgerblue");
pub const IMAGE: FileCategory = FileCategory::new("image", "Image File", "paleturquoise");
pub const GENERIC_FILE: FileCategory = FileCategory::new("file", "File", "white");
pub const DIRECTORY: FileCategory = FileCategory::new("openfolder", "Directory", "yellow");

// Extension sets must stay disjoint; `test_extension_sets_are_disjoint` guards it.
const CATALOG: &[(FileCategory, &[&str])] = &[
    (
        ARCHIVE,
        &[
            "a", "ar", "cpio", "shar", "lbr", "mar", "sbx", "tar", "bz2", "f", "gz", "lz", "lz4",
            "lzma", "lzo", "rz", "sfark", "sz", "xz", "z", "zst", "7z", "s7z", "ace", "afa",
            "alz", "apk", "arc", "arj", "b1", "b6z", "ba", "bh", "cab", "car", "cfs", "cpt",
            "dar", "dd", "dgc", "ear", "gca", "ha", "hki", "ice", "jar", "kgb", "lzh", "lzx",
            "pak", "parti", "paq6", "pea", "pim", "pit", "qda", "rar", "rk", "sda", "sea", "sen",
            "sfx", "shk", "sit", "sitx", "sqx", "tbz2", "uc", "uca", "uha", "war", "wim", "xar",
            "xp3", "yz1", "zip", "zoo", "zpaq", "zz", "ecc", "ecsbx", "par", "par2", "rev",
        ],
    ),
    (DISK_IMAGE, &["dmg", "iso", "vmdk"]),
    (
        WORD,
        &["doc", "docx", "dotm", "dot", "wbk", "docm", "dotx", "docb"],
    ),
    (
        EXCEL,
        &["csv", "xls", "xlsx", "xlsm", "xltx", "xltm", "xlmx", "xlmt"],
    ),
    (
        POWERPOINT,
        &["ppt", "pptx", "potx", "ppsx", "thmx", "pot", "pps"],
    ),
    (PDF, &["pdf"]),
    (DATABASE, &["db", "sql", "psql", "sqlite3"]),
    (KEY, &["pem", "ppk", "cer", "pvk", "pfx"]),
    (
        SOURCE_CODE,
        &[
            "config", "ps1", "psm1", "psd1", "vbs", "js", "py", "pl", "rb", "go", "xml", "html",
            "css", "sh", "bash", "yaml", "yml", "c", "cpp", "h", "hpp", "cs", "sln", "csproj",
            "toml", "gitignore", "rs",
        ],
    ),
    (
        IMAGE,
        &[
            "2000", "ani", "anim", "apng", "art", "avif", "bmp", "bpg", "bsave", "cal", "cin",
            "cpc", "cur", "dds", "dpx", "ecw", "ep", "exr", "fits", "flic", "flif", "fpx", "gif",
            "hdr", "hdri", "hevc", "icer", "icns", "ico", "ics", "ilbm", "it", "jbig", "jbig2",
            "jng", "jpeg", "jpg", "kra", "logluv", "ls", "miff", "mng", "nrrd", "pam", "pbm",
            "pcx", "pgf", "pgm", "pictor", "png", "pnm", "ppm", "psb", "psd", "psp", "qtvr",
            "ras", "rgbe", "sgi", "tga", "tiff", "ufo", "ufp", "wbmp", "webp", "xbm", "xcf", "xl",
            "xpm", "xr", "xs", "xt", "xwd",
        ],
    ),
];

static BY_EXTENSION: LazyLock<HashMap<&'static str, FileCategory>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .flat_map(|(category, extensions)| extensions.iter().map(move |ext| (*ext, *category)))
        .collect()
});

/// Lower-cased text after the last `.` of a file name, if any
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}

pub fn classify_file(name: &str) -> FileCategory {
    extension_of(name)
        .and_then(|ext| BY_EXTENSION.get(ext.as_str()).copied())
        .unwrap_or(GENERIC_FILE)
}

/// Directories are never classified by name
pub fn classify(name: &str, is_file: bool) -> FileCategory {
    if is_file {
        classify_file(name)
    } else {
        DIRECTORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_sets_are_disjoint() {
        let total: usize = CATALOG.iter().map(|(_, exts)| exts.len()).sum();
        assert_eq!(BY_EXTENSION.len(), total);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(classify_file("report.PDF"), PDF);
        assert_eq!(classify_file("Budget.XlSx"), EXCEL);
    }

    #[test]
    fn test_last_extension_only() {
        assert_eq!(classify_file("archive.tar.gz"), ARCHIVE);
        assert_eq!(classify_file("notes.pdf.txt"), GENERIC_FILE);
    }

    #[test]
    fn test_directories_bypass_lookup() {
        assert_eq!(classify("data.zip", false), DIRECTORY);
        assert_eq!(classify("data.zip", true), ARCHIVE);
    }

    #[test]
    fn test_names_without_extension() {
        assert_eq!(classify_file("Makefile"), GENERIC_FILE);
        assert_eq!(classify_file("trailing."), GENERIC_FILE);
        assert_eq!(classify_file(".gitignore"), SOURCE_CODE);
        assert_eq!(extension_of("id_rsa"), None);
    }

    #[test]
    fn test_key_material() {
        assert_eq!(classify_file("server.pem").icon, "key");
        assert_eq!(classify_file("backup.sqlite3").icon, "database");
    }
}
