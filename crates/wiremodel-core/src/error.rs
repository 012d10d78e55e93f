use thiserror::Error as ThisError;

///
/// Error
///
/// Construction-time faults only. Unknown payload keys are never an
/// error; they are dropped during admission.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] wiremodel_schema::Error),

    #[error("payload must be a JSON object, got {kind}")]
    PayloadNotObject { kind: &'static str },
}
