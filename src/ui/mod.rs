//! Element kinds.
//!
//! - **label**: one line of text
//! - **progress**: fixed-width progress bar
//! - **input**: text field with an insertion point (interactive)
//! - **select**: single/multi-select list (interactive)
//! - **table**: rows with aligned columns, height grows with rows
//!
//! Every kind implements `Element`; the interactive ones also implement
//! `Interactive` and are driven by `Session::read`.

pub mod input;
pub mod label;
pub mod progress;
pub mod select;
pub mod table;

pub use input::{InputStyle, TextInput};
pub use label::TextLabel;
pub use progress::{ProgressBar, ProgressStyle};
pub use select::{Select, SelectStyle};
pub use table::Table;
