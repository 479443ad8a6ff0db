pub mod subtract;
mod registry;

pub use registry::{json_schema_number, json_schema_object, Tool, ToolError, ToolRegistry};
pub use subtract::SubtractTool;
