use crate::validator::token::Token;
use std::collections::VecDeque;

/// Reorders an infix token sequence into postfix order using the
/// operator-precedence (shunting-yard) algorithm.
///
/// Operands pass straight through to the output; operators wait on a
/// working stack until an operator of equal or lower rank arrives, which
/// makes operators sharing a rank reduce left-to-right. Balanced
/// parentheses group without appearing in the output.
///
/// The conversion is total: malformed grouping is never an error. An
/// unmatched `)` is dropped once the stack runs out, and unmatched `(`
/// left on the stack at the end are flushed into the output, yielding a
/// vacuous but deterministic result.
///
/// # Arguments
///
/// * `original_tokens`: The tokens to reorder, in infix order.
///
/// returns: The same tokens in postfix order, minus balanced parentheses.
///
/// # Examples
///
/// ```
/// use postfix_trainer::validator::infix_converter::infix_to_postfix;
/// use postfix_trainer::validator::lexer::tokenize;
///
/// let postfix = infix_to_postfix(tokenize("a || b && c"));
/// let texts: Vec<&str> = postfix.iter().map(|token| token.as_str()).collect();
/// assert_eq!(texts, ["a", "b", "c", "&&", "||"]);
/// ```
pub fn infix_to_postfix(original_tokens: Vec<Token>) -> Vec<Token> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];

    while let Some(token) = tokens.pop_front() {
        if token.is_open_parenthesis() {
            operators.push_front(token);
        } else if token.is_close_parenthesis() {
            reduce_group(&mut operators, &mut output);
        } else if token.is_operator() {
            reduce_while_tighter(&mut operators, &mut output, &token);
            operators.push_front(token);
        } else {
            output.push(token);
        }
    }

    transfer_leftover_operators(&mut operators, &mut output);

    output
}

/// Pops operators to the output until the matching open parenthesis,
/// which is discarded. If the stack empties first the closer was
/// unmatched and is dropped.
fn reduce_group(operators: &mut VecDeque<Token>, output: &mut Vec<Token>) {
    while let Some(top_of_operator_stack) = operators.pop_front() {
        if top_of_operator_stack.is_open_parenthesis() {
            // Discard the open parenthesis.
            return;
        }
        output.push(top_of_operator_stack);
    }
}

/// Pops operators whose rank is greater than or equal to the incoming
/// token's to the output. The `>=` comparison is what makes equal ranks
/// reduce left-to-right. An open parenthesis stops the reduction
/// structurally, whatever its rank.
fn reduce_while_tighter(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    token: &Token,
) {
    while let Some(top_of_operator_stack) = operators.front() {
        if top_of_operator_stack.is_open_parenthesis()
            || top_of_operator_stack.precedence() < token.precedence()
        {
            break;
        }
        match operators.pop_front() {
            Some(operator) => output.push(operator),
            None => break,
        }
    }
}

/// Moves whatever remains on the working stack to the output, in pop
/// order. Unmatched open parentheses are flushed along with the rest.
fn transfer_leftover_operators(operators: &mut VecDeque<Token>, output: &mut Vec<Token>) {
    while let Some(operator) = operators.pop_front() {
        output.push(operator);
    }
}
