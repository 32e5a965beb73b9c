use serde::Deserialize;

use crate::flags;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CodeUnit {
    pub name: String,
    pub filepath: String,
    #[serde(default, deserialize_with = "flags::packed")]
    pub flags: Vec<String>,
    pub stack_size: u32,
    #[serde(default)]
    pub consts: Vec<Value>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub varnames: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Value {
    Code(CodeUnit),
    Scalar { type_name: String, repr: String },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Instruction {
    pub offset: u32,
    pub op_name: String,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub is_jump_target: bool,
    #[serde(default)]
    pub arg: Option<u32>,
    #[serde(default)]
    pub arg_repr: Option<ArgRepr>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ArgRepr {
    Jump { text: String, target: u32 },
    Plain(String),
}
