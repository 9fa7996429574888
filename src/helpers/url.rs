//! URL helper functions

/// Build the site-relative path for a document: `/{base_path}/{slug}/`
///
/// The base path may be given with or without surrounding slashes; an
/// empty or "/" base path yields `/{slug}/`.
pub fn path_for(base_path: &str, slug: &str) -> String {
    let base = base_path.trim_matches('/');
    if base.is_empty() {
        format!("/{}/", slug)
    } else {
        format!("/{}/{}/", base, slug)
    }
}

/// Strip the leading slash so a path can be joined under an output directory
pub fn as_output_path(path: &str) -> &str {
    path.trim_start_matches('/')
}
