//! Assembled dataset
//!
//! The timestamp column plus one aligned value column per entity. Assembled
//! once after all trajectories complete and read-only from then on; this is
//! the sole artifact handed to the export and render collaborators. The
//! Arrow [`RecordBatch`] view (Date32 + Float64 columns) is the columnar
//! form those collaborators consume.

use crate::axis::SampleAxis;
use crate::trajectory::EntityTrajectory;
use crate::{Error, Result};
use arrow::array::{ArrayRef, Date32Array, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use std::sync::Arc;

/// Timestamp column plus one named trajectory column per entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    axis: SampleAxis,
    columns: Vec<(String, EntityTrajectory)>,
}

impl Dataset {
    /// Assemble a dataset, validating that every column is aligned to the
    /// axis by position.
    ///
    /// # Errors
    ///
    /// [`Error::ColumnMismatch`] if any trajectory's length differs from
    /// the axis length.
    pub fn assemble(axis: SampleAxis, columns: Vec<(String, EntityTrajectory)>) -> Result<Self> {
        for (entity, trajectory) in &columns {
            if trajectory.len() != axis.len() {
                return Err(Error::ColumnMismatch {
                    entity: entity.clone(),
                    expected: axis.len(),
                    actual: trajectory.len(),
                });
            }
        }
        Ok(Self { axis, columns })
    }

    /// The shared sample axis.
    #[must_use]
    pub fn axis(&self) -> &SampleAxis {
        &self.axis
    }

    /// Entity columns in generation order.
    #[must_use]
    pub fn columns(&self) -> &[(String, EntityTrajectory)] {
        &self.columns
    }

    /// Number of rows (axis length).
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.axis.len()
    }

    /// Number of entity columns.
    #[must_use]
    pub fn num_entities(&self) -> usize {
        self.columns.len()
    }

    /// Build the Arrow view: a `date` Date32 column followed by one
    /// Float64 column per entity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arrow`] if batch construction fails.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let mut fields = vec![Field::new("date", DataType::Date32, false)];
        let epoch = NaiveDate::default(); // 1970-01-01
        #[allow(clippy::cast_possible_truncation)]
        let days: Vec<i32> = self
            .axis
            .iter()
            .map(|d| (*d - epoch).num_days() as i32)
            .collect();
        let mut arrays: Vec<ArrayRef> = vec![Arc::new(Date32Array::from(days))];

        for (entity, trajectory) in &self.columns {
            fields.push(Field::new(entity, DataType::Float64, false));
            arrays.push(Arc::new(Float64Array::from(trajectory.values().to_vec())));
        }

        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regime::{BaseValue, Regime, RegimeTable};
    use crate::trajectory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn constant_trajectory(axis: &SampleAxis, level: f64) -> EntityTrajectory {
        let table = RegimeTable::new(vec![Regime::new(
            None,
            None,
            BaseValue::Constant { level },
            0.0,
        )]);
        let mut rng = StdRng::seed_from_u64(0);
        trajectory::generate("test", axis, &table, &mut rng).unwrap()
    }

    #[test]
    fn test_assemble_validates_alignment() {
        let axis = SampleAxis::build(date(2023, 1, 1), date(2023, 3, 26), 7).unwrap();
        let short_axis = SampleAxis::build(date(2023, 1, 1), date(2023, 1, 15), 7).unwrap();
        let short = constant_trajectory(&short_axis, 5.0);

        let result = Dataset::assemble(axis, vec![("short".to_string(), short)]);
        assert!(matches!(result, Err(Error::ColumnMismatch { .. })));
    }

    #[test]
    fn test_record_batch_shape() {
        let axis = SampleAxis::build(date(2023, 1, 1), date(2023, 3, 26), 7).unwrap();
        let a = constant_trajectory(&axis, 5.0);
        let b = constant_trajectory(&axis, 10.0);
        let rows = axis.len();

        let dataset = Dataset::assemble(
            axis,
            vec![("alpha".to_string(), a), ("beta".to_string(), b)],
        )
        .unwrap();
        let batch = dataset.to_record_batch().unwrap();

        assert_eq!(batch.num_rows(), rows);
        assert_eq!(batch.num_columns(), 3);
        assert_eq!(batch.schema().field(0).name(), "date");
        assert_eq!(batch.schema().field(1).name(), "alpha");
        assert_eq!(batch.schema().field(2).name(), "beta");
        assert_eq!(batch.schema().field(0).data_type(), &DataType::Date32);
        assert_eq!(batch.schema().field(1).data_type(), &DataType::Float64);
    }

    #[test]
    fn test_date32_epoch_offset() {
        let axis = SampleAxis::build(date(1970, 1, 1), date(1970, 1, 8), 7).unwrap();
        let t = constant_trajectory(&axis, 1.0);
        let dataset = Dataset::assemble(axis, vec![("e".to_string(), t)]).unwrap();
        let batch = dataset.to_record_batch().unwrap();

        let dates = batch
            .column(0)
            .as_any()
            .downcast_ref::<Date32Array>()
            .expect("date column is Date32");
        assert_eq!(dates.value(0), 0);
        assert_eq!(dates.value(1), 7);
    }
}
