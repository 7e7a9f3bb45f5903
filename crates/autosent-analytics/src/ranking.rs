//! Per-model top feature rankings by mean critical ranking.

use std::collections::HashMap;

use autosent_core::{FeedbackRecord, Polarity};

use crate::aggregate::UNKNOWN;
use crate::normalize::is_noise_model;
use crate::types::{FeatureRanking, ModelFeatureRanking};

/// Features kept per sign bucket.
pub const TOP_N: usize = 3;

#[derive(Default)]
struct Accumulator {
    count: u64,
    sum: f64,
}

/// Features of one model and polarity in first-seen order.
#[derive(Default)]
struct Bucket {
    order: Vec<String>,
    totals: HashMap<String, Accumulator>,
}

impl Bucket {
    fn add(&mut self, feature: &str, ranking: f64) {
        let acc = self.totals.entry(feature.to_string()).or_insert_with(|| {
            self.order.push(feature.to_string());
            Accumulator::default()
        });
        acc.count += 1;
        acc.sum += ranking;
    }

    /// Averages in first-seen order, stably sorted and truncated.
    fn top(self, polarity: Polarity) -> Vec<FeatureRanking> {
        let Bucket { order, mut totals } = self;
        let mut rankings: Vec<FeatureRanking> = order
            .into_iter()
            .filter_map(|feature| {
                let acc = totals.remove(&feature)?;
                #[allow(clippy::cast_precision_loss)]
                let average_ranking = acc.sum / acc.count as f64;
                Some(FeatureRanking {
                    feature,
                    count: acc.count,
                    average_ranking,
                })
            })
            .collect();

        match polarity {
            Polarity::Positive => {
                rankings.sort_by(|a, b| b.average_ranking.total_cmp(&a.average_ranking));
            }
            Polarity::Negative => {
                rankings.sort_by(|a, b| a.average_ranking.total_cmp(&b.average_ranking));
            }
        }
        rankings.truncate(TOP_N);
        rankings
    }
}

#[derive(Default)]
struct ModelBuckets {
    positive: Bucket,
    negative: Bucket,
}

/// Top positive and negative features per model.
///
/// Only records with a numeric critical ranking and a real model name
/// contribute; a ranking of exactly zero counts as positive. Models appear
/// in the order they are first seen.
pub fn rank_features<'a, I>(records: I) -> Vec<ModelFeatureRanking>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let mut order: Vec<String> = Vec::new();
    let mut models: HashMap<String, ModelBuckets> = HashMap::new();

    for record in records {
        let (Some(model), Some(ranking)) = (record.model.as_deref(), record.critical_ranking)
        else {
            continue;
        };
        if is_noise_model(model) {
            continue;
        }
        let buckets = models.entry(model.to_string()).or_insert_with(|| {
            order.push(model.to_string());
            ModelBuckets::default()
        });
        let feature = record.feature.as_deref().unwrap_or(UNKNOWN);
        match Polarity::of(ranking) {
            Polarity::Positive => buckets.positive.add(feature, ranking),
            Polarity::Negative => buckets.negative.add(feature, ranking),
        }
    }

    order
        .into_iter()
        .filter_map(|model| {
            let buckets = models.remove(&model)?;
            Some(ModelFeatureRanking {
                positive_features: buckets.positive.top(Polarity::Positive),
                negative_features: buckets.negative.top(Polarity::Negative),
                model,
            })
        })
        .collect()
}
