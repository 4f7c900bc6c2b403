use std::{
    fs,
    io::{self, Write},
    iter,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tacgen::{
    error::PositionalError,
    generate, generation::strip_whitespace, lexer, parser, EvaluationMode, Generation,
};

use crate::commandline::{Operation, Options};

mod commandline;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.verbose)
        .init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match options.operation {
        Operation::Generate { expression, mode } => {
            if !run(&expression, mode.mode(), &mut out)? {
                bail!("Could not generate code for '{}'", expression);
            }
        }
        Operation::Batch { file, mode } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Unable to read expressions from '{}'", file))?;

            let failed = run_batch(&content, mode.mode(), &mut out)?;
            if failed > 0 {
                bail!("{} expression(s) in '{}' could not be generated", failed, file);
            }
        }
        Operation::Inspect { expression } => inspect(&expression, &mut out)?,
    }

    Ok(())
}

/// Runs every non-blank line of `content`, returning how many of them failed.
fn run_batch<W: Write>(content: &str, mode: EvaluationMode, out: &mut W) -> io::Result<usize> {
    let mut failed = 0;
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        writeln!(out, "==> {}\n", line.trim())?;
        if !run(line, mode, out)? {
            failed += 1;
        }
        writeln!(out)?;
    }
    Ok(failed)
}

/// Prints the tables for `expression`, or the reason it was rejected. Returns whether generation
/// succeeded.
fn run<W: Write>(expression: &str, mode: EvaluationMode, out: &mut W) -> io::Result<bool> {
    match generate(expression, mode) {
        Ok(generation) => {
            print_generation(&generation, out)?;
            Ok(true)
        }
        Err(err) => {
            writeln!(out, "Invalid expression format")?;
            describe_error(&err, &strip_whitespace(expression), out)?;
            Ok(false)
        }
    }
}

fn print_generation<W: Write>(generation: &Generation, out: &mut W) -> io::Result<()> {
    writeln!(out, "Three Address Code (TAC)")?;
    writeln!(out, "{:<6}| Expression", "Step")?;
    for (position, instr) in generation.tac.iter_lines() {
        writeln!(out, "{:<6}| {}", position.step(), instr)?;
    }

    writeln!(out, "\nQuadruple Representation")?;
    writeln!(out, "{:<4}| {:<8}| {:<8}| Result", "Op", "Arg1", "Arg2")?;
    for quad in generation.quads.iter_instructions() {
        writeln!(
            out,
            "{:<4}| {:<8}| {:<8}| {}",
            quad.op.to_string(),
            quad.arg1,
            quad.arg2,
            quad.dest
        )?;
    }

    writeln!(out, "\nFinal Result: {}", generation.summary)
}

fn inspect<W: Write>(expression: &str, out: &mut W) -> io::Result<()> {
    let expression = strip_whitespace(expression);

    match lexer::lex(&expression) {
        Ok(tokens) => {
            writeln!(out, "Tokens:")?;
            for token in tokens.iter() {
                writeln!(out, "  {:<8}{}", format!("{:?}", token.source), token)?;
            }

            let postfix: Vec<_> = parser::to_postfix(tokens)
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(out, "Postfix: {}", postfix.join(" "))
        }
        Err(err) => describe_error(&err, &expression, out),
    }
}

fn describe_error<E: PositionalError, W: Write>(
    err: &E,
    expression: &str,
    out: &mut W,
) -> io::Result<()> {
    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let range = err.range();
    let padding = expression[..usize::from(range.start())].chars().count();
    let width = range.lookup(expression).chars().count().max(1);

    writeln!(out, "  {}", expression)?;
    writeln!(
        out,
        "  {}{}--- {}",
        pad_char(' ', padding),
        pad_char('^', width),
        err.describe()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const A_PLUS_B_TIMES_C: &str = "\
Three Address Code (TAC)
Step  | Expression
1     | t1 = b * c
2     | t2 = a + t1
3     | result = t2

Quadruple Representation
Op  | Arg1    | Arg2    | Result
*   | b       | c       | t1
+   | a       | t1      | t2
=   | t2      |         | result

Final Result: Evaluation depends on variable values.
";

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = vec![];
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn valid_expression_prints_both_tables() {
        let mut succeeded = false;
        let output = output_of(|out| {
            succeeded = run("a + b * c", EvaluationMode::Basic, out)?;
            Ok(())
        });

        assert!(succeeded);
        assert_eq!(A_PLUS_B_TIMES_C, output);
    }

    #[test]
    fn caret_points_at_unexpected_quadratic_operator() {
        let mut succeeded = true;
        let output = output_of(|out| {
            succeeded = run("2x^2*3x-5", EvaluationMode::Quadratic, out)?;
            Ok(())
        });

        assert!(!succeeded);
        assert_eq!(
            "Invalid expression format\n  2x^2*3x-5\n      ^--- expected '+' or '-'\n",
            output
        );
    }

    #[test]
    fn batch_continues_after_invalid_line() {
        let mut failed = 0;
        let output = output_of(|out| {
            failed = run_batch("a+b*c\n\n+a\n(a+b)*c\n", EvaluationMode::Basic, out)?;
            Ok(())
        });

        let expected = format!(
            "==> a+b*c\n\n{}\n\
             ==> +a\n\n\
             Invalid expression format\n  +a\n  ^--- operator '+' is missing an operand\n\n\
             ==> (a+b)*c\n\n\
             Three Address Code (TAC)\n\
             Step  | Expression\n\
             1     | t1 = a + b\n\
             2     | t2 = t1 * c\n\
             3     | result = t2\n\
             \n\
             Quadruple Representation\n\
             Op  | Arg1    | Arg2    | Result\n\
             +   | a       | b       | t1\n\
             *   | t1      | c       | t2\n\
             =   | t2      |         | result\n\
             \n\
             Final Result: Evaluation depends on variable values.\n\n",
            A_PLUS_B_TIMES_C
        );
        assert_eq!(1, failed);
        assert_eq!(expected, output);
    }

    #[test]
    fn inspect_lists_tokens_and_postfix() {
        let output = output_of(|out| inspect("a+b", out));

        assert!(output.starts_with("Tokens:\n  0..1    a\n"));
        assert!(output.ends_with("Postfix: a b +\n"));
    }
}
