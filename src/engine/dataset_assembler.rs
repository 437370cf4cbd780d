use chrono::NaiveDateTime;
use rand::Rng;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::factory::RecordFactory;
use crate::models::GeneratedRecord;

const PROGRESS_INTERVAL: usize = 10_000;

/// The ordered output of one run: `generated` records followed by `duplicates` copies.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<GeneratedRecord>,
    pub generated: usize,
    pub duplicates: usize,
    pub base_moment: NaiveDateTime
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Drives the linear generation pipeline: N records, then the duplicate sample.
pub struct DatasetAssembler<'a> {
    config: &'a GeneratorConfig,
    factory: RecordFactory<'a>
}

impl<'a> DatasetAssembler<'a> {
    /// Creates an assembler over `config`, which should have passed `GeneratorConfig::validate`.
    ///
    /// # Panics
    /// `assemble` panics on a config that fails validation, e.g. a
    /// `fault_probability` outside [0, 1] or an empty enumeration.
    pub fn new(config: &'a GeneratorConfig, base_moment: NaiveDateTime) -> Self {
        Self {
            config,
            factory: RecordFactory::new(config, base_moment)
        }
    }

    /// Number of duplicates appended after `num_records` records: `floor(N * rate)`.
    pub fn duplicate_count(&self) -> usize {
        (self.config.num_records as f64 * self.config.duplicate_rate).floor() as usize
    }

    /// Generates the full dataset in memory.
    ///
    /// Records 1..=N keep generation order. Each duplicate copies a record drawn
    /// uniformly, with replacement, from the sequence as it stands at that draw.
    pub fn assemble<R: Rng>(&self, rng: &mut R) -> Dataset {
        let num_records = self.config.num_records;
        let num_duplicates = self.duplicate_count();
        let mut records = Vec::with_capacity(num_records + num_duplicates);

        info!("Generating {num_records} transactions from base moment {}", self.factory.base_moment());

        for index in 1..=num_records {
            records.push(self.factory.generate(index, rng));

            if index % PROGRESS_INTERVAL == 0 {
                debug!("Generated {index} transactions");
            }
        }

        if !records.is_empty() {
            for _ in 0..num_duplicates {
                let source_index = rng.gen_range(0..records.len());
                let duplicate = GeneratedRecord::duplicate_of(&records[source_index], source_index);
                records.push(duplicate);
            }
        }

        let duplicates = records.len() - num_records;

        info!("Total transactions including {duplicates} duplicates: {}", records.len());

        Dataset {
            records,
            generated: num_records,
            duplicates,
            base_moment: self.factory.base_moment()
        }
    }
}
