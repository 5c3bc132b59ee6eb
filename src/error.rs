use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invalid color schema, session file or color value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSchemaErr(pub String);

impl Display for LoadSchemaErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "load color schema failed: {}", self.0)
    }
}

impl Error for LoadSchemaErr {}
