// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidDate(&'static str),
    InvalidValue(&'static str, &'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "{name} is required"),
            Self::InvalidDate(name) => write!(f, "{name} must be a YYYY-MM-DD date"),
            Self::InvalidValue(name, reason) => write!(f, "{name} {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}
