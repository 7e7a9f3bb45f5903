//! Trailing moving average over the per-category time series.

use std::collections::{HashMap, VecDeque};

use autosent_core::SentimentCategory;

use crate::types::{DateCategoryRow, MovingAveragePoint, SentimentAverages, SentimentCounts};

/// Window used when none is configured.
pub const DEFAULT_WINDOW: usize = 7;

/// Smooths `series` with a trailing window of `window` points.
///
/// The window only spans points with the same `category`, including the
/// current one. Early points divide by however many points are available.
/// Output is sorted ascending by date; a window of `0` behaves as `1`.
#[must_use]
pub fn moving_average(series: &[DateCategoryRow], window: usize) -> Vec<MovingAveragePoint> {
    let window = window.max(1);
    let mut sorted: Vec<&DateCategoryRow> = series.iter().collect();
    sorted.sort_by_key(|row| row.date);

    let mut trailing: HashMap<&str, VecDeque<SentimentCounts>> = HashMap::new();
    sorted
        .into_iter()
        .map(|row| {
            let points = trailing.entry(row.category.as_str()).or_default();
            points.push_back(row.counts);
            if points.len() > window {
                points.pop_front();
            }
            MovingAveragePoint {
                date: row.date,
                category: row.category.clone(),
                averages: mean(points),
            }
        })
        .collect()
}

fn mean(points: &VecDeque<SentimentCounts>) -> SentimentAverages {
    #[allow(clippy::cast_precision_loss)]
    let n = points.len().max(1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let avg = |category: SentimentCategory| {
        points.iter().map(|c| c.get(category) as f64).sum::<f64>() / n
    };
    SentimentAverages {
        very_positive: avg(SentimentCategory::VeryPositive),
        positive: avg(SentimentCategory::Positive),
        neutral: avg(SentimentCategory::Neutral),
        negative: avg(SentimentCategory::Negative),
        very_negative: avg(SentimentCategory::VeryNegative),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(day: u32, category: &str, positive: u64) -> DateCategoryRow {
        let counts = SentimentCounts {
            positive,
            ..SentimentCounts::default()
        };
        DateCategoryRow {
            date: NaiveDate::from_ymd_opt(2024, 1, day).expect("date"),
            category: category.to_string(),
            total: counts.total(),
            counts,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn short_series_divides_by_available_points() {
        let series = vec![row(1, "Price", 3), row(2, "Price", 6), row(3, "Price", 9)];
        let points = moving_average(&series, DEFAULT_WINDOW);
        assert_eq!(points.len(), 3);
        assert!(approx(points[0].averages.positive, 3.0));
        assert!(approx(points[1].averages.positive, 4.5));
        assert!(approx(points[2].averages.positive, 6.0));
    }

    #[test]
    fn window_drops_older_points() {
        let series = vec![row(1, "Price", 2), row(2, "Price", 4), row(3, "Price", 8)];
        let points = moving_average(&series, 2);
        assert!(approx(points[2].averages.positive, 6.0));
    }

    #[test]
    fn window_only_spans_same_category() {
        let series = vec![
            row(1, "Price", 10),
            row(2, "Segment", 0),
            row(3, "Price", 20),
        ];
        let points = moving_average(&series, 2);
        assert_eq!(points[1].category, "Segment");
        assert!(approx(points[1].averages.positive, 0.0));
        assert!(approx(points[2].averages.positive, 15.0));
    }

    #[test]
    fn output_is_sorted_by_date() {
        let series = vec![row(5, "Price", 1), row(2, "Price", 1)];
        let points = moving_average(&series, 3);
        assert!(points[0].date < points[1].date);
    }

    #[test]
    fn zero_window_behaves_as_one() {
        let series = vec![row(1, "Price", 2), row(2, "Price", 4)];
        let points = moving_average(&series, 0);
        assert!(approx(points[1].averages.positive, 4.0));
    }

    #[test]
    fn empty_series_is_empty() {
        assert!(moving_average(&[], DEFAULT_WINDOW).is_empty());
    }
}
