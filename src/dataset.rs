//! Tabular dataset wrapper
//!
//! Wraps a Polars DataFrame and designates one column as the shared
//! ordinal/time index the value columns are plotted against. All numeric
//! extraction casts through Float64 so integer and date-like columns plot
//! the same way.

use crate::error::{ChartError, Result};
use polars::prelude::*;

/// A table of numeric observations with a designated index column
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
    index: String,
}

impl Dataset {
    /// Wrap a DataFrame, designating `index` as the x-axis column
    pub fn new(df: DataFrame, index: &str) -> Result<Self> {
        if df.column(index).is_err() {
            return Err(ChartError::UnknownColumn(index.to_string()));
        }
        Ok(Dataset {
            df,
            index: index.to_string(),
        })
    }

    /// Name of the index column
    pub fn index_name(&self) -> &str {
        &self.index
    }

    /// Names of the value columns (everything except the index), in frame order
    pub fn value_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .map(|c| c.name().to_string())
            .filter(|name| name != &self.index)
            .collect()
    }

    /// Number of value columns
    pub fn n_value_columns(&self) -> usize {
        self.value_columns().len()
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.df.height()
    }

    /// (index, value) pairs for one column, skipping rows where either side is null
    pub fn column_points(&self, name: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let index = self.column_f64_opts(&self.index)?;
        let values = self.column_f64_opts(name)?;

        let mut xs = Vec::with_capacity(values.len());
        let mut ys = Vec::with_capacity(values.len());
        for (x, y) in index.into_iter().zip(values) {
            if let (Some(x), Some(y)) = (x, y) {
                xs.push(x);
                ys.push(y);
            }
        }
        Ok((xs, ys))
    }

    /// Non-null values of one column
    pub fn column_values(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.column_f64_opts(name)?.into_iter().flatten().collect())
    }

    /// New dataset with every row containing a null dropped
    pub fn drop_nulls(&self) -> Result<Dataset> {
        let mut mask: Option<BooleanChunked> = None;
        for col in self.df.get_columns() {
            let not_null = col.as_materialized_series().is_not_null();
            mask = Some(match mask {
                Some(m) => m & not_null,
                None => not_null,
            });
        }

        let df = match mask {
            Some(mask) => self.df.filter(&mask)?,
            None => self.df.clone(),
        };
        Ok(Dataset {
            df,
            index: self.index.clone(),
        })
    }

    fn column_f64_opts(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let col = self
            .df
            .column(name)
            .map_err(|_| ChartError::UnknownColumn(name.to_string()))?;
        let series = col.as_materialized_series().cast(&DataType::Float64)?;
        Ok(series.f64()?.into_iter().collect())
    }
}
