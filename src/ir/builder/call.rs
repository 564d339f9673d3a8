//! Intrinsic calls: the closed set of built-in functions, each expanded
//! into fixed-arity Logic instructions.
//!
//! Mindcode has no user-defined functions, so every call resolves here or
//! fails.

use crate::ast::Node;
use crate::ir::{Instruction, Opcode};

use super::{GenerateError, LogicBuilder, Lowered};

impl LogicBuilder {
    /// Evaluate all arguments left to right, then expand the intrinsic.
    pub(crate) fn build_call(&mut self, name: &str, args: &[Node]) -> Result<Lowered, GenerateError> {
        let mut out = Vec::new();
        let mut params = Vec::with_capacity(args.len());
        for (i, arg) in args.iter().enumerate() {
            let role = format!("argument {} of `{}`", i + 1, name);
            let (value, insts) = self.lower_value(arg, &role)?;
            out.extend(insts);
            params.push(value);
        }

        let value = self.expand_intrinsic(name, &params, &mut out)?;
        Ok(Lowered::value(value, out))
    }

    fn expand_intrinsic(
        &mut self,
        name: &str,
        params: &[String],
        out: &mut Vec<Instruction>,
    ) -> Result<String, GenerateError> {
        let value = match name {
            // ── Text output ──
            "print" => {
                for p in params {
                    out.push(Instruction::new(Opcode::Print, [p.as_str()]));
                }
                params.last().cloned().unwrap_or_else(null)
            }
            "printflush" => {
                for p in params {
                    out.push(Instruction::new(Opcode::PrintFlush, [p.as_str()]));
                }
                null()
            }

            // ── Processor ──
            "rand" => {
                let [range] = take::<1>(name, params)?;
                let tmp = self.fresh_temp();
                out.push(Instruction::new(Opcode::Op, ["rand", tmp.as_str(), range]));
                tmp
            }
            "getlink" => {
                let [index] = take::<1>(name, params)?;
                let tmp = self.fresh_temp();
                out.push(Instruction::new(Opcode::GetLink, [tmp.as_str(), index]));
                tmp
            }

            // ── Unit binding and control ──
            "ubind" => {
                let [unit_type] = take::<1>(name, params)?;
                out.push(Instruction::new(Opcode::UBind, [unit_type]));
                null()
            }
            "move" => {
                let [x, y] = take::<2>(name, params)?;
                out.push(ucontrol("move", &[x, y]));
                null()
            }
            "mine" => {
                let [x, y] = take::<2>(name, params)?;
                out.push(ucontrol("mine", &[x, y]));
                null()
            }
            "itemDrop" => {
                let [to, amount] = take::<2>(name, params)?;
                out.push(ucontrol("itemDrop", &[to, amount]));
                null()
            }
            "itemTake" => {
                let [from, item, amount] = take::<3>(name, params)?;
                out.push(ucontrol("itemTake", &[from, item, amount]));
                null()
            }
            "flag" => {
                let [value] = take::<1>(name, params)?;
                out.push(ucontrol("flag", &[value]));
                value.to_string()
            }
            "approach" => {
                let [x, y, radius] = take::<3>(name, params)?;
                out.push(ucontrol("approach", &[x, y, radius]));
                null()
            }
            "idle" => {
                out.push(ucontrol("idle", &[]));
                null()
            }
            "pathfind" => {
                out.push(ucontrol("pathfind", &[]));
                null()
            }
            "stop" => {
                out.push(ucontrol("stop", &[]));
                null()
            }
            // Spelled `boot` in source; only the second argument is used.
            "boot" => {
                let [_, enable] = take::<2>(name, params)?;
                out.push(ucontrol("boost", &[enable]));
                enable.to_string()
            }
            "target" => {
                let [x, y, shoot] = take::<3>(name, params)?;
                out.push(ucontrol("target", &[x, y, shoot]));
                null()
            }
            "targetp" => {
                let [unit, shoot] = take::<2>(name, params)?;
                out.push(ucontrol("targetp", &[unit, shoot]));
                null()
            }
            "payDrop" => {
                out.push(ucontrol("payDrop", &[]));
                null()
            }
            "payTake" => {
                let [take_units] = take::<1>(name, params)?;
                out.push(ucontrol("payTake", &[take_units]));
                null()
            }
            "build" => {
                let [x, y, block, rotation, config] = take::<5>(name, params)?;
                out.push(ucontrol("build", &[x, y, block, rotation, config]));
                null()
            }
            // TODO: getBlock writes two outputs (type and building); expose
            // both once the AST can bind multiple results.
            "getBlock" => {
                let [x, y, block_type, building] = take::<4>(name, params)?;
                out.push(ucontrol("getBlock", &[x, y, block_type, building]));
                null()
            }
            "within" => {
                let [x, y, radius] = take::<3>(name, params)?;
                let tmp = self.fresh_temp();
                out.push(ucontrol("within", &[x, y, radius, tmp.as_str()]));
                tmp
            }

            _ => {
                return Err(GenerateError::new(format!(
                    "unsupported function call \"{}\"",
                    name
                )))
            }
        };
        Ok(value)
    }
}

fn null() -> String {
    "null".to_string()
}

fn ucontrol(command: &str, args: &[&str]) -> Instruction {
    let mut operands = Vec::with_capacity(args.len() + 1);
    operands.push(command);
    operands.extend_from_slice(args);
    Instruction::new(Opcode::UControl, operands)
}

/// Borrow the first `N` argument references of an intrinsic call.
fn take<'a, const N: usize>(
    name: &str,
    params: &'a [String],
) -> Result<[&'a str; N], GenerateError> {
    if params.len() < N {
        return Err(GenerateError::new(format!(
            "function \"{}\" expects {} argument{}, found {}",
            name,
            N,
            if N == 1 { "" } else { "s" },
            params.len()
        )));
    }
    Ok(std::array::from_fn(|i| params[i].as_str()))
}
