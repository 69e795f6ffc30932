/// URL scheme types that carry a well-known default port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    Other,
}

impl SchemeType {
    /// Get the default port for this scheme, as it is written in a host
    pub fn default_port(self) -> Option<&'static str> {
        match self {
            Self::Http | Self::Ws => Some("80"),
            Self::Https | Self::Wss => Some("443"),
            Self::Ftp => Some("21"),
            Self::Other => None,
        }
    }
}
