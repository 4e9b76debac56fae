use derive_more::{AsRef, Deref, Display, From, Into};
use freedesktop_icons::lookup;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Reference to an item icon. Either an absolute image path or a
/// freedesktop icon theme name; the host surface decides how to load it.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconName(String);

crate::impl_string_newtype!(IconName);

/// What an [`IconName`] refers to, before touching the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource<'a> {
    File(&'a Path),
    Themed(&'a str),
}

impl IconName {
    /// `None` for a blank name. Relative paths are treated as theme names.
    pub fn source(&self) -> Option<IconSource<'_>> {
        let name = self.as_str().trim();
        if name.is_empty() {
            return None;
        }
        let path = Path::new(name);
        Some(if path.is_absolute() {
            IconSource::File(path)
        } else {
            IconSource::Themed(name)
        })
    }

    /// Finds an image file for this icon, preferring theme entries close to
    /// `size` pixels.
    pub fn resolve(&self, size: u16) -> Option<PathBuf> {
        match self.source()? {
            IconSource::File(path) => path.is_file().then(|| path.to_path_buf()),
            IconSource::Themed(name) => lookup(name).with_size(size).with_cache().find(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_classification() {
        assert_eq!(IconName::new("").source(), None);
        assert_eq!(IconName::new("   ").source(), None);
        assert_eq!(
            IconName::new("mail-send").source(),
            Some(IconSource::Themed("mail-send"))
        );
        assert_eq!(
            IconName::new("icons/chat.png").source(),
            Some(IconSource::Themed("icons/chat.png"))
        );
        assert_eq!(
            IconName::new("/usr/share/pixmaps/chat.png").source(),
            Some(IconSource::File(Path::new("/usr/share/pixmaps/chat.png")))
        );
    }

    #[test]
    fn test_missing_file_resolves_to_nothing() {
        let name = IconName::from("/definitely/not/here/bloom-icon.png");
        assert_eq!(name.resolve(64), None);
        assert_eq!(IconName::new("").resolve(64), None);
    }
}
