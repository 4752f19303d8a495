use std::fmt::Display;

/// Type tag attached to variable declarations and parameters.
///
/// These tag declarations, not runtime values; checking that an initializer
/// actually matches its declared type is a later phase's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Int,
    Float,
    Bool,
    String,
}

impl VarType {
    pub fn from_name(name: &str) -> Option<VarType> {
        match name {
            "int" => Some(VarType::Int),
            "float" => Some(VarType::Float),
            "bool" => Some(VarType::Bool),
            "string" => Some(VarType::String),
            _ => None,
        }
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarType::Int => write!(f, "int"),
            VarType::Float => write!(f, "float"),
            VarType::Bool => write!(f, "bool"),
            VarType::String => write!(f, "string"),
        }
    }
}

/// Return type tag of a function declaration: any [`VarType`] or `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuncType {
    Void,
    Int,
    Float,
    Bool,
    String,
}

impl FuncType {
    pub fn from_name(name: &str) -> Option<FuncType> {
        match name {
            "void" => Some(FuncType::Void),
            "int" => Some(FuncType::Int),
            "float" => Some(FuncType::Float),
            "bool" => Some(FuncType::Bool),
            "string" => Some(FuncType::String),
            _ => None,
        }
    }
}

impl Display for FuncType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuncType::Void => write!(f, "void"),
            FuncType::Int => write!(f, "int"),
            FuncType::Float => write!(f, "float"),
            FuncType::Bool => write!(f, "bool"),
            FuncType::String => write!(f, "string"),
        }
    }
}
