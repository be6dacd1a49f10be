use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input is neither dotted-decimal IPv4 nor colon-hex IPv6.
    #[error("Invalid IP address.")]
    Invalid { input: String },
}
