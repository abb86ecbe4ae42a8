//! Authentication: token issuance and the bearer-token gate

pub mod token;
