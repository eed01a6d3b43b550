use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Daily closes with strictly ascending, unique dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Sorts by date and keeps the last close seen for a repeated date.
    pub fn from_points(points: impl IntoIterator<Item = PricePoint>) -> Self {
        let mut points: Vec<PricePoint> = points.into_iter().collect();
        // stable sort keeps input order among equal dates
        points.sort_by_key(|p| p.date);
        let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }
        Self { points: deduped }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
