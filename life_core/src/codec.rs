// codec.rs - Grids to storable pattern records and back
//
// A record is {"id": 1, "pattern": [[0, 1, 0], ...]}; a store holds a JSON
// array of them.

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// A saved grid snapshot with its sequential identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub id: u32,
    pub pattern: Vec<Vec<u8>>,
}

impl PatternRecord {
    pub fn from_grid(id: u32, grid: &Grid) -> Self {
        let pattern = grid
            .rows()
            .map(|row| row.iter().map(|&alive| u8::from(alive)).collect())
            .collect();
        Self { id, pattern }
    }

    /// Rebuilds the grid. Non-square matrices and values other than 0/1 are
    /// reported as a corrupt store.
    pub fn to_grid(&self) -> Result<Grid> {
        let size = self.pattern.len();
        if size == 0 {
            return Err(corrupt(self.id, "empty pattern"));
        }

        let mut rows = Vec::with_capacity(size);
        for (y, row) in self.pattern.iter().enumerate() {
            if row.len() != size {
                return Err(corrupt(self.id, &format!("row {y} has {} cells, expected {size}", row.len())));
            }
            let cells = row
                .iter()
                .map(|&value| match value {
                    0 => Ok(false),
                    1 => Ok(true),
                    other => Err(corrupt(self.id, &format!("cell value {other} in row {y}"))),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(cells);
        }
        Grid::from_rows(&rows)
    }

    pub fn size(&self) -> usize {
        self.pattern.len()
    }
}

pub fn encode_records(records: &[PatternRecord]) -> Result<Vec<u8>> {
    serde_json::to_vec(records).map_err(|e| LifeError::StoreCorrupt(e.to_string()))
}

pub fn decode_records(bytes: &[u8]) -> Result<Vec<PatternRecord>> {
    serde_json::from_slice(bytes).map_err(|e| LifeError::StoreCorrupt(e.to_string()))
}

fn corrupt(id: u32, detail: &str) -> LifeError {
    LifeError::StoreCorrupt(format!("pattern {id}: {detail}"))
}
