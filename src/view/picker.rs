//! File selection capability used to attach employee photos.

use std::path::PathBuf;

/// Named group of file extensions offered by an open-file prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

pub const IMAGE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Image files",
        extensions: &["png", "jpg"],
    },
    FileFilter {
        name: "All files",
        extensions: &["*"],
    },
];

pub trait FilePicker {
    /// Prompts for one file; `None` when the prompt was cancelled.
    fn pick_file(&self, filters: &[FileFilter]) -> Option<PathBuf>;
}

impl<F> FilePicker for F
where
    F: Fn(&[FileFilter]) -> Option<PathBuf>,
{
    fn pick_file(&self, filters: &[FileFilter]) -> Option<PathBuf> {
        self(filters)
    }
}

/// Native open-file dialog.
#[cfg(feature = "dialog")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DialogFilePicker;

#[cfg(feature = "dialog")]
impl FilePicker for DialogFilePicker {
    fn pick_file(&self, filters: &[FileFilter]) -> Option<PathBuf> {
        filters
            .iter()
            .fold(rfd::FileDialog::new(), |dialog, filter| {
                dialog.add_filter(filter.name, filter.extensions)
            })
            .pick_file()
    }
}

/// Whether the path ends with one of the extensions of `filters`.
pub fn matches_filters(path: &std::path::Path, filters: &[FileFilter]) -> bool {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return filters.iter().any(|f| f.extensions.contains(&"*"));
    };
    filters.iter().any(|filter| {
        filter
            .extensions
            .iter()
            .any(|allowed| *allowed == "*" || allowed.eq_ignore_ascii_case(extension))
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn image_filter_accepts_png_and_jpg() {
        let images = &IMAGE_FILTERS[..1];
        assert!(matches_filters(Path::new("photo.PNG"), images));
        assert!(matches_filters(Path::new("photo.jpg"), images));
        assert!(!matches_filters(Path::new("photo.gif"), images));
        assert!(!matches_filters(Path::new("photo"), images));
    }

    #[test]
    fn closures_act_as_pickers() {
        let picker = |_: &[FileFilter]| Some(PathBuf::from("/tmp/face.png"));
        assert_eq!(
            picker.pick_file(IMAGE_FILTERS),
            Some(PathBuf::from("/tmp/face.png"))
        );
    }
}
