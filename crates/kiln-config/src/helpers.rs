use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_product_name() -> String {
    "Tabulator".to_string()
}

pub(crate) fn default_author() -> String {
    "Oliver Folkerd".to_string()
}

pub(crate) fn default_file_prefix() -> String {
    "tabulator".to_string()
}

pub(crate) fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn default_styles_dir() -> PathBuf {
    PathBuf::from("src/scss")
}

pub(crate) fn default_stylesheet_extension() -> String {
    "scss".to_string()
}

pub(crate) fn default_builds_dir() -> PathBuf {
    PathBuf::from("src/js/builds")
}

pub(crate) fn default_esm_entry() -> String {
    "esm.js".to_string()
}

pub(crate) fn default_umd_entry() -> String {
    "usd.js".to_string()
}

pub(crate) fn default_wrappers() -> Vec<String> {
    vec!["jquery_wrapper.js".to_string()]
}

pub(crate) fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_css_subdir() -> String {
    "css".to_string()
}

pub(crate) fn default_js_subdir() -> String {
    "js".to_string()
}
