//! Contact-form submission: field validation, the submit state machine, and
//! the templated-email relay payload. The view layer lives in `app::contact`.

pub mod form;
pub mod relay;
