use super::prelude::*;
use crate::rating::Rated;

#[derive(Debug, Clone, Default)]
pub struct NewReview {
    pub event_id: String,
    pub user_id: String,
    pub rating: RatingValuePrimitive,
    pub body: Option<String>,
}

pub fn create_review<R>(repo: &R, r: NewReview) -> Result<Review>
where
    R: EventRepo + UserRepo + ReviewRepo,
{
    let NewReview {
        event_id,
        user_id,
        rating,
        body,
    } = r;
    let event = repo.get_event(&event_id)?;
    let user = repo.get_user(&user_id)?;
    let rating = RatingValue::try_from(rating)?;
    let review = Review {
        id: Id::new(),
        event_id: event.id,
        user_id: user.id,
        rating,
        body: body.filter(|b| !b.trim().is_empty()),
        created_at: Timestamp::now(),
    };
    log::debug!("Storing newly created review {}", review.id);
    repo.create_review(review.clone())?;
    Ok(review)
}

/// The reviews of an event together with the aggregate rating.
#[derive(Debug, Clone, PartialEq)]
pub struct EventReviews {
    pub reviews: Vec<Review>,
    pub avg_rating: AvgRating,
}

pub fn event_reviews<R>(repo: &R, event_id: &str) -> Result<EventReviews>
where
    R: EventRepo + ReviewRepo,
{
    let event = repo.get_event(event_id)?;
    let reviews = repo.reviews_of_event(event_id)?;
    let avg_rating = event.avg_rating(&reviews);
    Ok(EventReviews {
        reviews,
        avg_rating,
    })
}
