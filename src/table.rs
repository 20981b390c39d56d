//! A small columnar table with explicit missing values.
//!
//! Every cell is `Option<f64>`: categorical codes, counts and grades all
//! travel as numbers, and a missing cell is `None` rather than a NaN
//! sentinel. Columns are named; all columns have the same length.

/// Column-major table. `data[i]` holds the values of `columns[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    data: Vec<Vec<Option<f64>>>,
    n_rows: usize,
}

impl Table {
    /// An empty table with the given row count and no columns yet.
    pub fn new(n_rows: usize) -> Self {
        Table {
            columns: Vec::new(),
            data: Vec::new(),
            n_rows,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// The values of a column, `None` if the column does not exist.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.data[i].as_slice())
    }

    /// A single cell; `None` for a missing cell or an absent column.
    pub fn get(&self, name: &str, row: usize) -> Option<f64> {
        self.column(name).and_then(|col| col.get(row).copied().flatten())
    }

    /// Add a column, replacing an existing column of the same name in
    /// place (engineered columns overwrite any uploaded ones). The
    /// caller must supply exactly `n_rows` values.
    pub fn set_column(&mut self, name: &str, values: Vec<Option<f64>>) {
        debug_assert_eq!(values.len(), self.n_rows);
        match self.columns.iter().position(|c| c == name) {
            Some(i) => self.data[i] = values,
            None => {
                self.columns.push(name.to_string());
                self.data.push(values);
            }
        }
    }

    /// Project onto `names`, in that order. Extra columns are dropped.
    /// Returns the full list of absent columns on failure so the caller
    /// can report them all at once.
    pub fn select(&self, names: &[&str]) -> std::result::Result<Table, Vec<String>> {
        let mut missing = Vec::new();
        let mut indices = Vec::with_capacity(names.len());
        for &name in names {
            match self.columns.iter().position(|c| c == name) {
                Some(i) => indices.push(i),
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(missing);
        }
        Ok(Table {
            columns: names.iter().map(|&n| n.to_string()).collect(),
            data: indices.iter().map(|&i| self.data[i].clone()).collect(),
            n_rows: self.n_rows,
        })
    }

    /// One row in column order.
    pub fn row(&self, row: usize) -> Vec<Option<f64>> {
        self.data.iter().map(|col| col[row]).collect()
    }
}
