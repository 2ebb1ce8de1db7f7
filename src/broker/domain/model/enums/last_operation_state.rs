#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LastOperationState {
    InProgress,
    Succeeded,
    Failed,
}

impl LastOperationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
