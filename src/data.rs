//! Item catalog loading for the advisor.
//!
//! Item definitions live in CSV files under `data/`, one file per category.
//! The same files are embedded into the binary so the library (and the wasm
//! build) work without touching the filesystem; [`load_catalog`] reads an
//! edited copy from disk instead.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{AdvisorError, Result};
use crate::models::{CostRule, GrowthFactor, ItemDef, ItemGroup, ItemId, ItemRow, ResourceVector, RuleKind};

const CATALOG_FILES: [&str; 4] = ["buildings.csv", "research.csv", "ships.csv", "defense.csv"];

const EMBEDDED: [&str; 4] = [
    include_str!("../data/buildings.csv"),
    include_str!("../data/research.csv"),
    include_str!("../data/ships.csv"),
    include_str!("../data/defense.csv"),
];

fn growth_of(row: &ItemRow) -> Result<GrowthFactor> {
    let value = row
        .growth
        .ok_or(AdvisorError::MissingGrowthFactor { item: row.id })?;
    GrowthFactor::new(value)
}

impl TryFrom<ItemRow> for ItemDef {
    type Error = AdvisorError;

    fn try_from(row: ItemRow) -> Result<Self> {
        let rule = match row.rule {
            RuleKind::Geometric => CostRule::Geometric(growth_of(&row)?),
            RuleKind::Rounded => CostRule::Rounded(growth_of(&row)?),
            RuleKind::Doubling => CostRule::Doubling,
            RuleKind::EnergyOnly => CostRule::EnergyOnly,
            RuleKind::Unit => CostRule::Unit,
        };
        Ok(ItemDef {
            id: row.id,
            name: row.name,
            group: row.group,
            base_cost: ResourceVector::with_energy(row.metal, row.crystal, row.deuterium, row.energy),
            rule,
        })
    }
}

/// Parses catalog rows from any CSV source.
///
/// # CSV Format
///
/// Expected columns: `id, name, group, metal, crystal, deuterium, energy, rule, growth`
///
/// `growth` may be empty for rules that do not use it.
///
/// # Errors
///
/// Fails on malformed CSV, unknown ids, and rows whose growth factor is
/// missing or unsupported.
pub fn load_items<R: Read>(reader: R) -> Result<Vec<ItemDef>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut items = Vec::new();
    for result in rdr.deserialize() {
        let row: ItemRow = result?;
        items.push(ItemDef::try_from(row)?);
    }
    Ok(items)
}

/// Every known item definition, keyed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: BTreeMap<ItemId, ItemDef>,
}

impl Catalog {
    /// Builds a catalog from definitions. Later duplicates replace earlier
    /// ones.
    pub fn from_items(items: impl IntoIterator<Item = ItemDef>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// The catalog compiled into the crate.
    ///
    /// # Example
    ///
    /// ```
    /// use oadvisor::data::Catalog;
    /// use oadvisor::models::ItemId;
    ///
    /// let catalog = Catalog::embedded().unwrap();
    /// assert_eq!(catalog.get(ItemId::MetalMine).unwrap().name, "Metal Mine");
    /// ```
    pub fn embedded() -> Result<Self> {
        let mut items = Vec::new();
        for source in EMBEDDED {
            items.extend(load_items(source.as_bytes())?);
        }
        debug!(items = items.len(), "Loaded embedded catalog");
        Ok(Self::from_items(items))
    }

    /// Looks up an item definition.
    ///
    /// # Errors
    ///
    /// [`AdvisorError::UnknownItem`] if the catalog does not define `id`.
    pub fn get(&self, id: ItemId) -> Result<&ItemDef> {
        self.items.get(&id).ok_or(AdvisorError::UnknownItem(id))
    }

    /// All definitions in id order.
    pub fn items(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.values()
    }

    /// All definitions of one scoring group.
    pub fn group(&self, group: ItemGroup) -> impl Iterator<Item = &ItemDef> {
        self.items().filter(move |item| item.group == group)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Loads the catalog from a directory holding the four CSV files.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use oadvisor::data::load_catalog;
///
/// let catalog = load_catalog(Path::new("data")).unwrap();
/// println!("Loaded {} items", catalog.len());
/// ```
pub fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    let mut items = Vec::new();
    for name in CATALOG_FILES {
        let file = File::open(data_dir.join(name))?;
        items.extend(load_items(file)?);
    }
    debug!(items = items.len(), dir = %data_dir.display(), "Loaded catalog");
    Ok(Catalog::from_items(items))
}
