/// A recognized command-line operator: its symbol, its precedence rank and
/// a short description for help output.
///
/// Higher rank binds tighter and is reduced first; operators sharing a rank
/// reduce left-to-right. Parentheses sit at rank 0 and are handled
/// structurally by the converter, never compared by rank.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub symbol: &'static str,
    pub precedence: i32,
    pub description: &'static str,
}

/// Rank reported for tokens outside the table. Strictly below every real
/// rank so an operand on the input side can never win a reduction
/// comparison against an operator on the stack.
pub const UNKNOWN_PRECEDENCE: i32 = -1;

pub static OPERATORS: [OperatorDescriptor; 10] = [
    OperatorDescriptor {
        symbol: "(",
        precedence: 0,
        description: "opens a grouped expression",
    },
    OperatorDescriptor {
        symbol: ")",
        precedence: 0,
        description: "closes a grouped expression",
    },
    OperatorDescriptor {
        symbol: "||",
        precedence: 1,
        description: "run the right side only if the left side fails",
    },
    OperatorDescriptor {
        symbol: "&&",
        precedence: 2,
        description: "run the right side only if the left side succeeds",
    },
    OperatorDescriptor {
        symbol: "|",
        precedence: 3,
        description: "pipe standard output into the next command",
    },
    OperatorDescriptor {
        symbol: ";",
        precedence: 4,
        description: "run commands one after another",
    },
    OperatorDescriptor {
        symbol: ">",
        precedence: 5,
        description: "redirect standard output, truncating the target",
    },
    OperatorDescriptor {
        symbol: ">>",
        precedence: 5,
        description: "redirect standard output, appending to the target",
    },
    OperatorDescriptor {
        symbol: "<",
        precedence: 5,
        description: "read standard input from a file",
    },
    OperatorDescriptor {
        symbol: "2>",
        precedence: 5,
        description: "redirect standard error",
    },
];

/// Whether the given text exactly matches a symbol in the operator table.
pub fn is_operator(symbol: &str) -> bool {
    descriptor_of(symbol).is_some()
}

/// The table rank of the given symbol, or [`UNKNOWN_PRECEDENCE`] for
/// anything else.
pub fn precedence_of(symbol: &str) -> i32 {
    match descriptor_of(symbol) {
        Some(descriptor) => descriptor.precedence,
        None => UNKNOWN_PRECEDENCE,
    }
}

pub fn descriptor_of(symbol: &str) -> Option<&'static OperatorDescriptor> {
    OPERATORS
        .iter()
        .find(|descriptor| descriptor.symbol == symbol)
}

/// The longest table symbol starting at the given byte index of `text`,
/// so that `>>` wins over `>` and `2>` is found before the word rule sees
/// the digit.
pub fn longest_operator_at(text: &str, index: usize) -> Option<&'static str> {
    let remaining = &text[index..];
    OPERATORS
        .iter()
        .filter(|descriptor| remaining.starts_with(descriptor.symbol))
        .max_by_key(|descriptor| descriptor.symbol.len())
        .map(|descriptor| descriptor.symbol)
}
