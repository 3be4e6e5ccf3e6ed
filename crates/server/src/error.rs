use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;
use gtl_core::QuestionId;
use gtl_dto::ApiFailure;
use gtl_gameplay::NormalizeError;
use gtl_grading::GradeError;
use gtl_scenarios::Mode;
use gtl_scenarios::StoreError;

/// Every way a request to the judging API can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    NotFound(QuestionId),
    EmptyPool(Mode),
    InvalidSize(Option<String>),
    UnsupportedAction(String),
    NoReferenceSolution,
    UnknownMode(String),
}

impl ApiError {
    /// Machine-readable kind, the `error` field of the response body.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NotFound",
            Self::EmptyPool(_) => "EmptyPool",
            Self::InvalidSize(_) => "InvalidSize",
            Self::UnsupportedAction(_) => "UnsupportedAction",
            Self::NoReferenceSolution => "NoReferenceSolution",
            Self::UnknownMode(_) => "UnknownMode",
        }
    }
    /// Whether the request, rather than the deck or the server, is at fault.
    pub const fn is_client_fault(&self) -> bool {
        !matches!(self, Self::NoReferenceSolution)
    }
    pub fn log(&self) {
        match self.is_client_fault() {
            true => log::debug!("rejected request: {}", self),
            false => log::error!("failed request: {}", self),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::EmptyPool(mode) => Self::EmptyPool(mode),
        }
    }
}

impl From<NormalizeError> for ApiError {
    fn from(e: NormalizeError) -> Self {
        match e {
            NormalizeError::InvalidSize(size) => Self::InvalidSize(size),
            NormalizeError::UnsupportedAction(kind) => Self::UnsupportedAction(kind),
        }
    }
}

impl From<GradeError> for ApiError {
    fn from(e: GradeError) -> Self {
        match e {
            GradeError::NoReferenceSolution => Self::NoReferenceSolution,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "no question with id {}", id),
            Self::EmptyPool(mode) => write!(f, "no questions available in {} mode", mode),
            Self::InvalidSize(None) => write!(f, "raise requires a size of 1/3, 1/2, 2/3, or 1"),
            Self::InvalidSize(Some(size)) => {
                write!(f, "unsupported raise size {:?}; use 1/3, 1/2, 2/3, or 1", size)
            }
            Self::UnsupportedAction(kind) => {
                write!(f, "unsupported action {:?}; use call, raise, or fold", kind)
            }
            Self::NoReferenceSolution => write!(f, "question has no reference solution"),
            Self::UnknownMode(mode) => {
                write!(f, "unknown mode {:?}; use comprehensive, value, or bluff", mode)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::EmptyPool(_) => StatusCode::NOT_FOUND,
            Self::InvalidSize(_) | Self::UnsupportedAction(_) | Self::UnknownMode(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NoReferenceSolution => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiFailure {
            error: self.kind().to_string(),
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(ApiError::NotFound(1).status_code() == StatusCode::NOT_FOUND);
        assert!(ApiError::EmptyPool(Mode::Bluff).status_code() == StatusCode::NOT_FOUND);
        assert!(ApiError::InvalidSize(None).status_code() == StatusCode::BAD_REQUEST);
        assert!(ApiError::UnsupportedAction("check".into()).status_code() == StatusCode::BAD_REQUEST);
        assert!(ApiError::UnknownMode("mtt".into()).status_code() == StatusCode::BAD_REQUEST);
        assert!(ApiError::NoReferenceSolution.status_code() == StatusCode::INTERNAL_SERVER_ERROR);
    }
    #[test]
    fn only_missing_solutions_are_server_faults() {
        assert!(!ApiError::NoReferenceSolution.is_client_fault());
        assert!(ApiError::NotFound(7).is_client_fault());
        assert!(ApiError::InvalidSize(Some("3/4".into())).is_client_fault());
    }
    #[test]
    fn converts_component_errors() {
        assert!(ApiError::from(StoreError::NotFound(999)) == ApiError::NotFound(999));
        assert!(ApiError::from(NormalizeError::InvalidSize(None)) == ApiError::InvalidSize(None));
        assert!(ApiError::from(GradeError::NoReferenceSolution) == ApiError::NoReferenceSolution);
    }
}
