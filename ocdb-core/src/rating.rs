use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self, _: &[Review]) -> AvgRating;
}

impl Rated for Event {
    fn avg_rating(&self, reviews: &[Review]) -> AvgRating {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.event_id == self.id).count()
        );
        if reviews.is_empty() {
            return AvgRating::default();
        }
        let sum: i64 = reviews
            .iter()
            .map(|r| i64::from(RatingValuePrimitive::from(r.rating)))
            .sum();
        AvgRating::from(sum as f64 / reviews.len() as f64)
    }
}
