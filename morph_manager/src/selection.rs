//! The morph picker's model: morphs grouped into categories.
//!
//! This is a read-only view over [`MorphManager::all_morphs`], rebuilt each
//! time the picker opens. Drawing and input handling belong to the host UI.

use morph_api::Morph;
use tracing::debug;

use crate::localization::Localizer;
use crate::registry::MorphManager;

/// Prefix of category title localization keys.
pub const CATEGORY_KEY: &str = "morph.category.";

/// Localized title for a category tag.
///
/// An empty tag uses `morph.category.unknown`; a tag without a translation
/// uses `morph.category.modded` with the tag as its argument.
pub fn category_title(tag: &str, localizer: &dyn Localizer) -> String {
    if tag.is_empty() {
        return localizer.translate(&format!("{CATEGORY_KEY}unknown"), &[]);
    }

    let key = format!("{CATEGORY_KEY}{tag}");
    let result = localizer.translate(&key, &[]);

    if result == key {
        localizer.translate(&format!("{CATEGORY_KEY}modded"), &[tag])
    } else {
        result
    }
}

/// One selectable morph.
#[derive(Debug)]
pub struct MorphCell {
    pub name: String,
    pub morph: Box<dyn Morph>,
    pub index: usize,
}

/// Morphs sharing a category tag.
#[derive(Debug)]
pub struct MorphCategory {
    pub key: String,
    pub title: String,
    pub cells: Vec<MorphCell>,
}

impl MorphCategory {
    pub fn new(key: impl Into<String>, localizer: &dyn Localizer) -> Self {
        let key = key.into();
        Self {
            title: category_title(&key, localizer),
            key,
            cells: Vec::new(),
        }
    }

    fn push(&mut self, morph: Box<dyn Morph>) {
        let index = self.cells.len();
        self.cells.push(MorphCell {
            name: morph.name().to_owned(),
            morph,
            index,
        });
    }

    /// Rows needed to lay the cells out `per_row` at a time.
    pub fn rows(&self, per_row: usize) -> usize {
        self.cells.len().div_ceil(per_row.max(1))
    }
}

/// Categories in first-seen order plus the current selection.
#[derive(Debug, Default)]
pub struct MorphSelection {
    categories: Vec<MorphCategory>,
    selected: Option<(usize, usize)>,
}

impl MorphSelection {
    /// Group morphs by category, keeping the order they arrive in.
    pub fn new(morphs: Vec<Box<dyn Morph>>, localizer: &dyn Localizer) -> Self {
        let mut categories: Vec<MorphCategory> = Vec::new();

        for morph in morphs {
            let position = categories
                .iter()
                .position(|category| category.key == morph.category());

            let category = match position {
                Some(position) => &mut categories[position],
                None => {
                    categories.push(MorphCategory::new(morph.category(), localizer));
                    let last = categories.len() - 1;
                    &mut categories[last]
                }
            };

            category.push(morph);
        }

        debug!(categories = categories.len(), "built morph selection");

        Self {
            categories,
            selected: None,
        }
    }

    /// Build from every morph the manager offers.
    pub fn from_manager(manager: &MorphManager, localizer: &dyn Localizer) -> Self {
        Self::new(manager.all_morphs(), localizer)
    }

    pub fn categories(&self) -> &[MorphCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.cells.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select a cell; out-of-range positions clear the selection.
    pub fn select(&mut self, category: usize, cell: usize) -> bool {
        let valid = self
            .categories
            .get(category)
            .is_some_and(|c| cell < c.cells.len());

        self.selected = valid.then_some((category, cell));
        valid
    }

    /// Select the first morph with the given name.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        let found = self.categories.iter().enumerate().find_map(|(c, category)| {
            category
                .cells
                .iter()
                .position(|cell| cell.name == name)
                .map(|cell| (c, cell))
        });

        self.selected = found;
        found.is_some()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&dyn Morph> {
        let (category, cell) = self.selected?;
        self.categories
            .get(category)?
            .cells
            .get(cell)
            .map(|cell| cell.morph.as_ref())
    }

    /// A private copy of the selection, ready to hand to an actor.
    pub fn take_selected(&self, is_remote: bool) -> Option<Box<dyn Morph>> {
        self.selected().map(|morph| morph.clone_morph(is_remote))
    }
}
