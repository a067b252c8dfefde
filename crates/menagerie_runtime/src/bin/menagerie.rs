//! Menagerie CLI entry point.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use menagerie_debug::{Tracer, TracerConfig};
use menagerie_runtime::{Repl, STDIN_SOURCE, Session, WriterSink, render_world, run_batch};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    interactive: bool,
    show_help: bool,
    show_version: bool,
    trace: bool,
    trace_filter: Vec<String>,
    dump_world: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-i" | "--interactive" => config.interactive = true,
            "--trace" => config.trace = true,
            "--dump-world" => config.dump_world = true,
            "--trace-filter" => {
                let value = args.next().ok_or("--trace-filter requires a value")?;
                config.trace_filter = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => {
                if config.file.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("menagerie {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut tracer_config = TracerConfig::new().filter_events(config.trace_filter.clone());
    if config.trace || !config.trace_filter.is_empty() {
        tracer_config = tracer_config.enabled().to_stderr();
    }
    let session = Session::new().with_tracer(Tracer::new(tracer_config));
    let mut sink = WriterSink::stdout();

    let session = if config.interactive {
        let mut repl = Repl::new()?.with_session(session);
        repl.run(&mut sink)?;
        repl.into_session()
    } else {
        let mut session = session;
        match config.file.as_deref().filter(|p| p.as_os_str() != "-") {
            Some(path) => {
                let file = File::open(path)
                    .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
                let source = path.display().to_string();
                run_batch(&mut session, BufReader::new(file), &source, &mut sink)?;
            }
            None => {
                run_batch(&mut session, io::stdin().lock(), STDIN_SOURCE, &mut sink)?;
            }
        }
        session
    };
    sink.flush()?;

    if config.dump_world {
        eprint!("{}", render_world(session.world()));
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mMenagerie\x1b[0m - Animals, containers, and substances

\x1b[1mUSAGE:\x1b[0m
    menagerie [OPTIONS] [FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]    Batch input (a command count, then commands). Reads stdin
              when omitted or '-'

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -i, --interactive   Start the REPL instead of reading a batch

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace             Trace every event to stderr
    --trace-filter A,B  Trace only these event types (implies --trace)
    --dump-world        Print every container to stderr when done

\x1b[1mEXAMPLES:\x1b[0m
    menagerie commands.txt            Run a batch file
    menagerie < commands.txt          Run a batch from stdin
    menagerie -i                      Start the REPL
    menagerie --trace-filter died,fused commands.txt

\x1b[1mCOMMANDS:\x1b[0m
    CREATE <code> <name> IN <container> <days>
    APPLY_SUBSTANCE <container> [<code>] <position>
    REMOVE_SUBSTANCE <container> [<code>] <position>
    ATTACK <container> [<code>] <position> <position>
    TALK <container> [<code>] <position>
    PERIOD

    Containers: Cage, Aquarium, Freedom (Freedom takes no code)
    Codes:      F, BF, B, BB, M, BM"
    );
}
