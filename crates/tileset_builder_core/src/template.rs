//! Templates - user-defined groups of tiles

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::TileCoord;

/// A named group of tiles placed downstream as one unit.
///
/// Cells are not required to be contiguous, and nothing stops two templates
/// from sharing a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    /// Member cells. The flag is always `true`; only presence matters.
    #[serde(with = "cell_list")]
    pub cells: HashMap<TileCoord, bool>,
}

/// Stores the cell map as a sorted list, since JSON object keys must be strings
mod cell_list {
    use super::TileCoord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S: Serializer>(
        cells: &HashMap<TileCoord, bool>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut list: Vec<TileCoord> = cells.keys().copied().collect();
        list.sort_by_key(|c| (c.y, c.x));
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<TileCoord, bool>, D::Error> {
        let list = Vec::<TileCoord>::deserialize(deserializer)?;
        Ok(list.into_iter().map(|c| (c, true)).collect())
    }
}

impl Template {
    /// Create a template with a single cell
    pub fn new(name: impl Into<String>, cell: TileCoord) -> Self {
        let mut cells = HashMap::new();
        cells.insert(cell, true);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cells,
        }
    }

    /// Create a template from a set of cells
    pub fn from_cells(name: impl Into<String>, cells: impl IntoIterator<Item = TileCoord>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cells: cells.into_iter().map(|c| (c, true)).collect(),
        }
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Add a cell. Returns true if it was not already a member.
    pub fn insert(&mut self, coord: TileCoord) -> bool {
        if self.cells.contains_key(&coord) {
            return false;
        }
        self.cells.insert(coord, true);
        true
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Member cells in row-major order
    pub fn sorted_cells(&self) -> Vec<TileCoord> {
        let mut cells: Vec<TileCoord> = self.cells.keys().copied().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }
}

/// Insertion-ordered list of templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateList {
    templates: Vec<Template>,
}

impl TemplateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Template> {
        self.templates.get_mut(index)
    }

    /// Append a template and return its index
    pub fn push(&mut self, template: Template) -> usize {
        self.templates.push(template);
        self.templates.len() - 1
    }

    /// Index of the first template containing a coordinate
    pub fn find_containing(&self, coord: TileCoord) -> Option<usize> {
        self.templates.iter().position(|t| t.contains(coord))
    }

    /// Remove every template containing a coordinate, returning how many were removed
    pub fn remove_containing(&mut self, coord: TileCoord) -> usize {
        let before = self.templates.len();
        self.templates.retain(|t| !t.contains(coord));
        before - self.templates.len()
    }
}

impl From<Vec<Template>> for TemplateList {
    fn from(templates: Vec<Template>) -> Self {
        Self { templates }
    }
}

impl<'a> IntoIterator for &'a TemplateList {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
