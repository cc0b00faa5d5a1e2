//! Command-line driver for the MrXL interpreter.
//!
//! Reads a program and a JSON data file, runs the program, and prints
//! the output mapping as pretty-printed JSON with sorted keys.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use mrxl_interp::{DataMap, Interpreter};
use mrxl_lexer::Lexer;
use mrxl_types::SourceFile;

/// MrXL is a minimal data-parallel language: named inputs and outputs
/// transformed by `map` and `reduce` statements over array data.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the MrXL program.
    program: PathBuf,

    /// Path to a JSON file holding the input data.
    data: PathBuf,

    /// Evaluate map slices across a thread pool.
    #[arg(long)]
    parallel: bool,
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(json) => println!("{json}"),
        Err(failure) => {
            eprint!("{failure}");
            std::process::exit(1);
        }
    }
}

/// Run the full pipeline. The error string is the complete stderr
/// text, newline-terminated.
fn run(args: &Args) -> Result<String, String> {
    let source = fs::read_to_string(&args.program)
        .map_err(|e| format!("failed to read `{}`: {e}\n", args.program.display()))?;
    let sf = SourceFile::new(&args.program.display().to_string(), &source);

    let lex = Lexer::new(&sf).lex();
    let result = mrxl_parser::Parser::new(lex.tokens, &sf).parse();
    let mut errors = lex.errors;
    errors.extend(result.errors);
    if errors.has_errors() {
        return Err(render_syntax_errors(&errors));
    }
    let prog = result
        .program
        .ok_or_else(|| "no program produced\n".to_string())?;

    let text = fs::read_to_string(&args.data)
        .map_err(|e| format!("failed to read `{}`: {e}\n", args.data.display()))?;
    let data: DataMap = serde_json::from_str(&text)
        .map_err(|e| format!("invalid data file `{}`: {e}\n", args.data.display()))?;

    let interpreter = if args.parallel {
        Interpreter::with_parallel_maps()
    } else {
        Interpreter::new()
    };
    let out = interpreter.run(&prog, &data).map_err(|e| format!("{e}\n"))?;

    serde_json::to_string_pretty(&out).map_err(|e| format!("failed to serialize output: {e}\n"))
}

/// Render each syntax error with its offending source line, plus a
/// count of any errors dropped past the collection limit.
fn render_syntax_errors(errors: &mrxl_types::SyntaxErrors) -> String {
    let mut out = String::new();
    for e in &errors.errors {
        out.push_str(&format!("{e}\n"));
        if !e.source_line.is_empty() {
            out.push_str(&format!("  {}\n", e.source_line));
        }
    }
    let dropped = errors.total_errors.saturating_sub(errors.errors.len());
    if dropped > 0 {
        out.push_str(&format!("{dropped} more syntax errors not shown\n"));
    }
    out
}
