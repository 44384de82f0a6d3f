//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls connecting them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod service {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::crafts::CraftFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::TypeConstraint(val.to_string())
        }
    }

    impl From<CraftFormError> for ServiceError {
        fn from(val: CraftFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
