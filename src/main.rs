use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use regline::error::RegError;
use regline::subject::Subject;

const USAGE: &str = "usage: regline \"/<pattern>/\" <replacement> <subject>";
const EXAMPLE: &str = r#"example: cat list.txt | regline '/\s*"(.+?)"/' 'func ()\s{\n\th.\1\n}' -"#;

/// regline — match a regex once over the whole input, then render the
/// replacement template once per non-blank line, feeding the n-th
/// backreference from capture group n of the line's match.
#[derive(Parser)]
#[command(
    name = "regline",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("REGLINE_BUILD_COMMIT"), ")"),
    about
)]
struct Cli {
    /// Regular expression, bare or delimited with flags (e.g. "/(\w+)-(\d+)/i").
    #[arg(allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Replacement template. `\n`, `\t` (four spaces) and `\s` are expanded; `\1`, `\2`… are backreferences.
    #[arg(allow_hyphen_values = true)]
    template: Option<String>,

    /// Subject text, or "-" to read standard input.
    #[arg(allow_hyphen_values = true)]
    subject: Option<String>,

    /// Anything after the subject is accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    _extra: Vec<String>,

    /// Machine-readable JSON output.
    #[arg(long)]
    json: bool,

    /// Print the collected matches as JSON instead of rendering.
    #[arg(long)]
    dump_matches: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "regline", &mut io::stdout());
        return;
    }

    let (Some(pattern), Some(template), Some(subject)) = (cli.pattern, cli.template, cli.subject)
    else {
        println!("{USAGE}");
        println!("{EXAMPLE}");
        process::exit(1);
    };

    if let Err(e) = run(&pattern, &template, &subject, cli.json, cli.dump_matches) {
        eprintln!("regline: {e}");
        process::exit(e.exit_code());
    }
}

fn run(
    pattern: &str,
    template: &str,
    subject: &str,
    json: bool,
    dump_matches: bool,
) -> Result<(), RegError> {
    let subject = Subject::resolve(subject, io::stdin().lock())?;
    let mut out = io::stdout().lock();

    if dump_matches {
        let prepared = regline::prepare(pattern, template, &subject)?;
        let text = serde_json::to_string_pretty(&prepared.matches)
            .expect("MatchSet is always serializable");
        return regline::emit(&[text], &mut out);
    }

    let lines = regline::run(pattern, template, &subject)?;

    if json {
        let value = serde_json::json!({
            "pattern": pattern,
            "template": template,
            "lines": lines,
        });
        let text =
            serde_json::to_string_pretty(&value).expect("serde_json::Value is always serializable");
        regline::emit(&[text], &mut out)
    } else {
        regline::emit(&lines, &mut out)
    }
}
