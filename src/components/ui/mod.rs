mod alert;
mod search_input;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use search_input::SearchInput;
pub(crate) use spinner::Spinner;
