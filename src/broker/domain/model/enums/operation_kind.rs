use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Provision,
    Update,
    Deprovision,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provision => "provision",
            Self::Update => "update",
            Self::Deprovision => "deprovision",
        }
    }
}

impl FromStr for OperationKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "provision" => Ok(Self::Provision),
            "update" => Ok(Self::Update),
            "deprovision" => Ok(Self::Deprovision),
            _ => Err(()),
        }
    }
}
