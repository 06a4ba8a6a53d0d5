//! The value printer and its per-call visitation state.

use psml_value::{ObjectId, Value};
use rustc_hash::FxHashSet;

use crate::literal::{format_float, quote_string};
use crate::shape::{classify_object, Shape};

/// Characters a single top-level print may write before composites are
/// elided.
pub const PRINT_BUDGET: usize = 80;

/// Marker written in place of a repeated object or elided output.
pub const ELLIPSIS: &str = "...";

/// Format a value on its own, with fresh visitation state.
pub fn format(value: &Value) -> String {
    let mut printer = Printer::new();
    printer.visit_root(value);
    printer.take_output()
}

/// Format the arguments of a `print` call as one output line.
pub fn print_line(args: &[Value]) -> String {
    let mut printer = Printer::new();
    printer.println(args);
    printer.take_output()
}

/// Output buffer plus the visitation state of the current top-level value.
///
/// The buffer accumulates across calls until taken; the seen set and the
/// size counter are reset by every [`Printer::visit_root`].
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    /// Objects entered during the current root visit. The root borrow keeps
    /// every reachable object alive, so ids stay unique for the whole visit.
    seen: FxHashSet<ObjectId>,
    /// Characters written since the current root visit began.
    size: usize,
}

impl Printer {
    pub fn new() -> Self {
        Printer::default()
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Take the buffered output, leaving the buffer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    /// Characters written since the last root visit began.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Print one top-level value with fresh visitation state.
    pub fn visit_root(&mut self, value: &Value) {
        self.seen.clear();
        self.size = 0;
        self.visit(value);
    }

    /// Write one `print` line: strings verbatim, other values formatted, each
    /// separated by a single space and followed by a newline.
    pub fn println(&mut self, args: &[Value]) {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.push(" ");
            }
            match arg {
                Value::Str(text) => self.push(text),
                other => self.visit_root(other),
            }
        }
        self.push("\n");
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
        self.size += text.chars().count();
    }

    fn over_budget(&self) -> bool {
        self.size > PRINT_BUDGET
    }

    /// Decide how to render `value`, entering it into the seen set if it is
    /// a composite.
    fn classify<'v>(&mut self, value: &'v Value) -> Shape<'v> {
        let Value::Object(object) = value else {
            return Shape::Primitive(value);
        };
        if !self.seen.insert(object.id()) {
            return Shape::Cyclic;
        }
        if self.over_budget() {
            return Shape::BudgetExceeded;
        }
        classify_object(object.snapshot())
    }

    fn visit(&mut self, value: &Value) {
        match self.classify(value) {
            Shape::Primitive(leaf) => self.write_primitive(leaf),
            Shape::Cyclic => {
                tracing::trace!("repeated object elided");
                self.push(ELLIPSIS);
            }
            Shape::BudgetExceeded => {
                tracing::trace!(size = self.size, "print budget exhausted");
                self.push(ELLIPSIS);
            }
            Shape::Tagged { tag, payload } => {
                self.push(&tag);
                // A structured payload brings its own brackets.
                if !payload.is_composite() {
                    self.push(" ");
                }
                self.visit(&payload);
            }
            Shape::Tuple(items) => {
                self.push("(");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    if self.over_budget() {
                        self.push(ELLIPSIS);
                        break;
                    }
                    self.visit(item);
                }
                self.push(")");
            }
            Shape::Record(object) => {
                self.push("{");
                for (i, (name, field)) in object.iter().enumerate() {
                    if i > 0 {
                        self.push("; ");
                    }
                    if self.over_budget() {
                        self.push(ELLIPSIS);
                        break;
                    }
                    self.push(name);
                    self.push("=");
                    self.visit(field);
                }
                self.push("}");
            }
        }
    }

    fn write_primitive(&mut self, value: &Value) {
        match value {
            Value::Bool(b) => self.push(if *b { "true" } else { "false" }),
            Value::Int(n) => self.push(&n.to_string()),
            Value::Str(s) => self.push(&quote_string(s)),
            Value::Float(f) => self.push(&format_float(*f)),
            Value::Function(_) => self.push("<fun>"),
            Value::Symbol(_) => self.push("<sym>"),
            Value::Null => self.push("null"),
            Value::Undefined => self.push("<undefined>"),
            // `classify` routes every object to a composite shape.
            Value::Object(_) => self.push(ELLIPSIS),
        }
    }
}
