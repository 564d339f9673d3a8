//! Operator token → Logic `op` operation.

use super::GenerateError;

/// Translate a binary operator token.
pub(crate) fn binary_opcode(op: &str) -> Result<&'static str, GenerateError> {
    let code = match op {
        "+" => "add",
        "-" => "sub",
        "*" => "mul",
        "/" => "div",
        "==" => "equal",
        "!=" => "notEqual",
        "<" => "lessThan",
        "<=" => "lessThanEq",
        ">=" => "greaterThanEq",
        ">" => "greaterThan",
        "===" => "strictEqual",
        "**" => "pow",
        "||" | "or" => "or",
        // logical and; Logic's `and` is bitwise
        "&&" | "and" => "land",
        _ => {
            return Err(GenerateError::new(format!(
                "unsupported binary operator \"{}\"",
                op
            )))
        }
    };
    Ok(code)
}

/// Translate a unary operator token.
pub(crate) fn unary_opcode(op: &str) -> Result<&'static str, GenerateError> {
    match op {
        "not" | "!" => Ok("not"),
        _ => Err(GenerateError::new(format!(
            "unsupported unary operator \"{}\"",
            op
        ))),
    }
}
