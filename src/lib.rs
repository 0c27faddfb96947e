#![crate_name = "rspops"]
use derive_new::new;
use getset::{CopyGetters, Getters};
use log::debug;
use ndarray;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

pub mod errors;
pub mod prelude;
pub mod report;

pub use errors::{Error, Result};

pub type Count = u16;
pub type Row = Vec<Count>;
pub type Rows = Vec<Row>;
pub type Populations = BTreeMap<String, PopulationTable>;
/// A (p-value, p_n-value) pair
pub type Scores = (f32, f32);

/// Contingency table of a single population
///
/// Row 0 holds the SNP counts, row 1 the REF counts. Each row usually
/// has two columns (carriers and total N) but this is not enforced.
#[derive(new, Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct PopulationTable {
    #[getset(get = "pub")]
    rows: Rows,
    #[getset(get_copy = "pub")]
    p_value: f32,
    #[getset(get_copy = "pub")]
    pn_value: f32,
}

impl PopulationTable {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns of the widest row
    pub fn n_columns(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Copies the counts into a dense matrix.
    ///
    /// Fails with `Error::RaggedTable` if the rows differ in length.
    pub fn to_array(&self) -> Result<ndarray::Array2<Count>> {
        let columns = self.rows.first().map_or(0, |row| row.len());
        if let Some((row, found)) = self
            .rows
            .iter()
            .map(|row| row.len())
            .enumerate()
            .find(|(_, len)| *len != columns)
        {
            return Err(Error::RaggedTable {
                row,
                expected: columns,
                found,
            });
        }

        let data: Vec<Count> = self.rows.iter().flatten().copied().collect();
        Ok(ndarray::Array2::from_shape_vec(
            (self.rows.len(), columns),
            data,
        )?)
    }
}

/// A SNP with its global (GLN) scores and one table per population
///
/// Plain value without interior mutability: share it across threads
/// behind a lock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantRecord {
    id: String,
    p_value: Option<f32>,
    pn_value: Option<f32>,
    populations: Populations,
    reference: Option<String>,
}

impl VariantRecord {
    /// Constructs a record holding the table of one population.
    ///
    /// `p_value` and `pn_value` are the scores of that population. The
    /// global scores of the record stay unset until `set_p_value()` and
    /// `set_pn_value()` are called.
    pub fn new(id: &str, p_value: f32, pn_value: f32, table: Rows, population: &str) -> Self {
        let mut record = Self::empty(id);
        record.insert_table(population, PopulationTable::new(table, p_value, pn_value));
        record
    }

    /// Constructs a record without any population.
    ///
    /// `add_population()` fails until a table is supplied with `insert_table()`.
    pub fn empty(id: &str) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn p_value(&self) -> Option<f32> {
        self.p_value
    }

    pub fn pn_value(&self) -> Option<f32> {
        self.pn_value
    }

    pub fn set_p_value(&mut self, p_value: f32) {
        self.p_value = Some(p_value);
    }

    pub fn set_pn_value(&mut self, pn_value: f32) {
        self.pn_value = Some(pn_value);
    }

    pub fn clear_p_value(&mut self) {
        self.p_value = None;
    }

    pub fn clear_pn_value(&mut self) {
        self.pn_value = None;
    }

    /// Name of the population whose first column seeds `add_population()`
    ///
    /// This is the first population inserted into the record.
    pub fn reference_population(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Inserts a complete table unless the population is already present.
    ///
    /// Returns whether the table was inserted. The first table inserted
    /// becomes the reference population.
    pub fn insert_table(&mut self, population: &str, table: PopulationTable) -> bool {
        match self.populations.entry(population.into()) {
            Entry::Occupied(_) => {
                debug!("{}: population {} already present, ignored", self.id, population);
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(table);
                if self.reference.is_none() {
                    self.reference = Some(population.into());
                }
                true
            }
        }
    }

    /// Adds a population derived from the reference table.
    ///
    /// Row `i` of the new table is the first column of row `i` of the
    /// reference table followed by `counts[i]`. The shorter of the two
    /// determines the number of rows. An existing population is left
    /// untouched and `Ok(false)` is returned.
    pub fn add_population(&mut self, population: &str, scores: Scores, counts: &[Count]) -> Result<bool> {
        let reference_name = self
            .reference
            .as_ref()
            .ok_or(Error::MissingReferencePopulation)?;
        let reference = self
            .populations
            .get(reference_name)
            .ok_or(Error::MissingReferencePopulation)?;

        if self.populations.contains_key(population) {
            debug!("{}: population {} already present, ignored", self.id, population);
            return Ok(false);
        }

        if reference.n_rows() != counts.len() {
            debug!(
                "{}: truncating {} to {} rows ({} reference rows, {} counts)",
                self.id,
                population,
                reference.n_rows().min(counts.len()),
                reference.n_rows(),
                counts.len()
            );
        }

        let rows = reference
            .rows
            .iter()
            .zip(counts)
            .enumerate()
            .map(|(i, (row, count))| {
                row.first()
                    .map(|first| vec![*first, *count])
                    .ok_or_else(|| Error::EmptyReferenceRow {
                        population: reference_name.clone(),
                        row: i,
                    })
            })
            .collect::<Result<Rows>>()?;

        debug!("{}: adding population {} with {} rows", self.id, population, rows.len());
        self.populations.insert(
            population.into(),
            PopulationTable::new(rows, scores.0, scores.1),
        );
        Ok(true)
    }

    pub fn table(&self, population: &str) -> Option<&PopulationTable> {
        self.populations.get(population)
    }

    /// Returns a copy of the counts of a population, `None` if it is unknown.
    pub fn get_table(&self, population: &str) -> Option<Rows> {
        self.populations.get(population).map(|table| table.rows.clone())
    }

    /// Names of all populations in ascending order
    pub fn population_names(&self) -> Vec<&String> {
        self.populations.keys().collect()
    }
}
