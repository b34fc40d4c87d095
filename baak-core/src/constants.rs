/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program codes that may appear in a class code. A shape-valid token
/// whose program is not in this list is not a class code at all.
pub const PROGRAM_ALLOW_LIST: &[&str] = &[
    "KA", "KB", "EA", "EB", "EC", "IA", "IB", "IC", "ID", "IE", "TA", "TB", "TC", "PA", "SA",
    "SB", "SC", "HA", "HB", "HC", "DA", "DB", "DC", "DD", "DF",
];

/// Class-code level bounds accepted by the classifier. The wider domain
/// allows levels up to 6, but only 1-4 are classified as class codes.
pub const MIN_CLASS_LEVEL: u8 = 1;
pub const MAX_CLASS_LEVEL: u8 = 4;

/// Section suffix letters a class code may carry.
pub const SUFFIX_RANGE: (char, char) = ('A', 'E');

/// Knowledge-base document keys preferred for the course catalog.
pub const CATALOG_DOC_KEYS: &[&str] = &["daftar_mk_index", "daftar_mk"];

/// Document keys preferred when answering "what is a course schedule".
pub const DEFINITION_DOC_KEYS: &[&str] = &["definisi_jadwal", "waktu_kuliah"];

/// Document keys preferred when answering "how to read a schedule".
pub const READING_GUIDE_DOC_KEYS: &[&str] = &["cara_baca_jadwal", "waktu_kuliah"];

/// Standing query used to gather course-catalog snippets.
pub const CATALOG_QUERY: &str = "daftar mata kuliah";

/// Phrases that reroute a general fallback to the course catalog.
pub const CATALOG_TRIGGER_PHRASES: &[&str] = &["daftar mata kuliah", "list mata kuliah", "daftar mk"];
