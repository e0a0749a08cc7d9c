// Interactive accomplishment picker: build a form from the profile, run it, collect the selection.

pub mod builder;
pub mod session;
pub mod terminal;

pub use builder::build_form;
pub use session::{FormDriver, FormSession};
pub use terminal::driver_for;
