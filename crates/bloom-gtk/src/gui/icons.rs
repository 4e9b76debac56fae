use bloom::IconName;
use bloom::Item;
use gdk_pixbuf::Pixbuf;
use std::collections::HashMap;

pub const ICON_SIZE: u16 = 256;

/// Pixbufs for the icons referenced by the current items, loaded once per
/// configuration.
#[derive(Default)]
pub struct IconCache {
    pixbufs: HashMap<IconName, Pixbuf>,
}

impl IconCache {
    pub fn load(items: &[Item]) -> Self {
        let pixbufs = items
            .iter()
            .filter_map(|item| item.icon.as_ref())
            .filter_map(|name| Self::load_icon(name).map(|pixbuf| (name.clone(), pixbuf)))
            .collect();
        Self { pixbufs }
    }

    fn load_icon(name: &IconName) -> Option<Pixbuf> {
        let Some(path) = name.resolve(ICON_SIZE) else {
            log::warn!("Icon '{}' not found", name);
            return None;
        };
        let size = i32::from(ICON_SIZE);
        Pixbuf::from_file_at_scale(&path, size, size, true)
            .map_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
            .ok()
    }

    pub fn get(&self, name: &IconName) -> Option<&Pixbuf> {
        self.pixbufs.get(name)
    }
}
