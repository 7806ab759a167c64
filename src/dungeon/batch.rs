// src/dungeon/batch.rs
//! Generates several maps at once, e.g. the floors of a campaign dungeon.

use super::config::GeneratorConfig;
use super::error::Result;
use super::generator::{DungeonGenerator, GeneratedDungeon};
use crate::utils::{IdSource, UuidIds};
use log::info;
use rayon::prelude::*;

/// `count` consecutive seeds starting at `base`.
pub fn campaign_seeds(base: u64, count: usize) -> Vec<u64> {
    (0..count as u64).map(|i| base.wrapping_add(i)).collect()
}

/// One dungeon per seed, generated in parallel. Every map gets its own
/// generator and random source, so results match sequential runs with the
/// same seeds. Output order follows `seeds`.
pub fn generate_batch(config: &GeneratorConfig, seeds: &[u64]) -> Result<Vec<GeneratedDungeon>> {
    generate_batch_with_ids(config, seeds, || Box::new(UuidIds))
}

/// Like [`generate_batch`], with an ID source built per map.
pub fn generate_batch_with_ids<F>(
    config: &GeneratorConfig,
    seeds: &[u64],
    make_ids: F,
) -> Result<Vec<GeneratedDungeon>>
where
    F: Fn() -> Box<dyn IdSource> + Sync,
{
    config.validate()?;
    info!("generating {} maps in parallel", seeds.len());

    seeds
        .par_iter()
        .map(|&seed| -> Result<GeneratedDungeon> {
            let mut generator =
                DungeonGenerator::with_id_source(config.clone().with_seed(seed), make_ids())?;
            Ok(generator.generate())
        })
        .collect()
}
