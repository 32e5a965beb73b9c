pub mod code;
pub mod error;
pub mod flags;
pub mod html;
pub mod loader;
pub mod report;

pub use code::{ArgRepr, CodeUnit, Instruction, Value};
pub use error::ReportError;
pub use loader::load_code_unit;
pub use report::{STYLESHEET, generate_report, generate_report_with};
