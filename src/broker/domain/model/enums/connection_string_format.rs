use serde::Deserialize;

/// Which of the two cluster addresses a connection string is built from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum ConnectionStringFormat {
    /// `mongoURIWithOptions`: explicit seed list and options.
    Standard,
    /// `srvAddress`: the abbreviated DNS seed list form.
    #[default]
    Srv,
}

impl From<String> for ConnectionStringFormat {
    fn from(value: String) -> Self {
        if value == "standard" {
            Self::Standard
        } else {
            Self::Srv
        }
    }
}
