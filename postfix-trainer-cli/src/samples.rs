/// A canned practice pair: a command line, its postfix form and a note on
/// what the pair demonstrates.
pub struct Sample {
    pub command: &'static str,
    pub postfix: &'static str,
    pub note: &'static str,
}

pub static SAMPLES: [Sample; 5] = [
    Sample {
        command: "cmd1 && cmd2 || cmd3",
        postfix: "cmd1 cmd2 && cmd3 ||",
        note: "&& outranks ||, so it reduces first",
    },
    Sample {
        command: "a && b && c",
        postfix: "a b && c &&",
        note: "operators of equal rank reduce left-to-right",
    },
    Sample {
        command: "(a || b) && c",
        postfix: "a b || c &&",
        note: "parentheses group without appearing in the output",
    },
    Sample {
        command: "grep \"hello world\" file.txt && echo ok",
        postfix: "grep \"hello world\" file.txt echo ok &&",
        note: "a quoted span stays one token, quotes included",
    },
    Sample {
        command: "make 2> errors.txt && cat < in | sort >> sorted",
        postfix: "make errors.txt 2> cat in < sort sorted >> | &&",
        note: "redirects share the tightest rank",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use postfix_trainer::validator::validate;

    #[test]
    fn every_sample_pair_validates() {
        for sample in &SAMPLES {
            let result = validate(sample.command, sample.postfix);
            assert!(
                result.is_valid,
                "sample {:?} does not validate",
                sample.command
            )
        }
    }
}
