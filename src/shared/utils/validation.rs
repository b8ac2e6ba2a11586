use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_book_title(title: &str) -> Result<(), AppError> {
        if title.is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    /// Ratings are whole stars in [1, 5]. Checked before any store access.
    pub fn validate_rating(rating: i32) -> Result<(), AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::ValidationError(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_category_name(name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Category name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "Category name too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(Validator::validate_rating(1).is_ok());
        assert!(Validator::validate_rating(5).is_ok());
        assert!(Validator::validate_rating(0).is_err());
        assert!(Validator::validate_rating(6).is_err());
    }

    #[test]
    fn empty_title_is_rejected() {
        assert!(Validator::validate_book_title("").is_err());
        assert!(Validator::validate_book_title("Dune").is_ok());
    }
}
