use crate::GraphBinaryValue;

/// A single step or source instruction: a name plus its ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub name: String,
    pub args: Vec<GraphBinaryValue>,
}

impl Instruction {
    pub fn new(name: impl Into<String>, args: Vec<GraphBinaryValue>) -> Self {
        Self { name: name.into(), args }
    }
}

/// A serialized traversal program: an ordered sequence of step
/// instructions and an ordered sequence of source (traversal-source
/// configuration) instructions. This crate only carries an already-built
/// `Bytecode` value; it does not provide the fluent DSL that constructs one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bytecode {
    pub steps: Vec<Instruction>,
    pub sources: Vec<Instruction>,
}

impl Bytecode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, args: Vec<GraphBinaryValue>) {
        self.steps.push(Instruction::new(name, args));
    }

    pub fn add_source(&mut self, name: impl Into<String>, args: Vec<GraphBinaryValue>) {
        self.sources.push(Instruction::new(name, args));
    }
}
